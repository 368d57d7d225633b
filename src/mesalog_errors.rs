use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MesaLogError {
    #[error("MESA log not found at: {0} (no gzip variant either)")]
    LogNotFound(Utf8PathBuf),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Log ends before line {0}")]
    MissingLine(usize),

    #[error("Header layout mismatch: {names} field names for {values} values")]
    HeaderCountMismatch { names: usize, values: usize },

    #[error("Line {line}: expected {expected} values, found {found}")]
    RowWidthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: invalid numeric value: {token}")]
    InvalidNumber { line: usize, token: String },

    #[error("History log has no model_number column")]
    MissingModelNumber,

    #[error("Unknown header field: {0}")]
    UnknownHeaderField(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Header field {name} is not numeric: {value}")]
    NonNumericHeaderField { name: String, value: String },
}

impl PartialEq for MesaLogError {
    fn eq(&self, other: &Self) -> bool {
        use MesaLogError::*;
        match (self, other) {
            (LogNotFound(a), LogNotFound(b)) => a == b,

            // IO errors are not comparable: equal if same variant
            (IoError(_), IoError(_)) => true,

            (MissingLine(a), MissingLine(b)) => a == b,
            (
                HeaderCountMismatch {
                    names: a,
                    values: b,
                },
                HeaderCountMismatch {
                    names: c,
                    values: d,
                },
            ) => a == c && b == d,
            (
                RowWidthMismatch {
                    line: a,
                    expected: b,
                    found: c,
                },
                RowWidthMismatch {
                    line: d,
                    expected: e,
                    found: f,
                },
            ) => a == d && b == e && c == f,
            (
                InvalidNumber { line: a, token: b },
                InvalidNumber { line: c, token: d },
            ) => a == c && b == d,
            (UnknownHeaderField(a), UnknownHeaderField(b)) => a == b,
            (UnknownColumn(a), UnknownColumn(b)) => a == b,
            (
                NonNumericHeaderField { name: a, value: b },
                NonNumericHeaderField { name: c, value: d },
            ) => a == c && b == d,

            // Unit variants
            (MissingModelNumber, MissingModelNumber) => true,

            _ => false,
        }
    }
}
