//! # Fixed-offset header decoding
//!
//! The first five lines of every MESA log form a fixed preamble: a banner, the header
//! field names, the header field values, a blank separator, and a second banner. Names
//! and values are whitespace-delimited and zipped positionally into a [`Header`].
//!
//! Header values are heterogeneous (numeric, string, quoted tokens), so they are stored
//! as **raw strings**; numeric interpretation is pushed to the caller through the typed
//! accessors [`Header::as_f64`] and [`Header::as_i64`].

use std::collections::HashMap;

use itertools::Itertools;

use crate::constants::{HEADER_NAMES_LINE, HEADER_VALUES_LINE};
use crate::mesalog_errors::MesaLogError;

/// Scalar metadata block of a MESA log: an ordered name → raw-value mapping.
///
/// Built once by the header decoder and never mutated afterwards. The field order of the
/// file is preserved in [`Header::names`]; lookups go through the `ahash`-hashed map.
#[derive(Debug, Clone)]
pub struct Header {
    names: Vec<String>,
    values: HashMap<String, String, ahash::RandomState>,
}

impl Header {
    /// Look up the raw string value of a header field.
    ///
    /// Return
    /// ----------
    /// * The unconverted value token, or `MesaLogError::UnknownHeaderField` if the field
    ///   is absent.
    pub fn get(&self, name: &str) -> Result<&str, MesaLogError> {
        self.values
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| MesaLogError::UnknownHeaderField(name.to_string()))
    }

    /// Look up a header field and parse it as `f64`.
    ///
    /// Fails with `MesaLogError::NonNumericHeaderField` when the raw token does not parse
    /// (MESA quotes some values, e.g. `"15140"`; those are rejected here and must be read
    /// through [`Header::get`]).
    pub fn as_f64(&self, name: &str) -> Result<f64, MesaLogError> {
        let value = self.get(name)?;
        value
            .parse()
            .map_err(|_| MesaLogError::NonNumericHeaderField {
                name: name.to_string(),
                value: value.to_string(),
            })
    }

    /// Look up a header field and parse it as `i64`.
    pub fn as_i64(&self, name: &str) -> Result<i64, MesaLogError> {
        let value = self.get(name)?;
        value
            .parse()
            .map_err(|_| MesaLogError::NonNumericHeaderField {
                name: name.to_string(),
                value: value.to_string(),
            })
    }

    /// Header field names in file order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether a header field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of header fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Decode the [`Header`] from the fixed preamble lines of a log.
///
/// Arguments
/// -----------------
/// * `lines` – All lines of the log, in file order.
///
/// Return
/// ----------
/// * The decoded [`Header`].
/// * `Err(MesaLogError::MissingLine)` when the file ends before the value line.
/// * `Err(MesaLogError::HeaderCountMismatch)` when the name and value lines hold a
///   different number of tokens.
pub(crate) fn read_header(lines: &[&str]) -> Result<Header, MesaLogError> {
    let names_line = fetch_line(lines, HEADER_NAMES_LINE)?;
    let values_line = fetch_line(lines, HEADER_VALUES_LINE)?;

    let names: Vec<String> = names_line.split_whitespace().map(str::to_string).collect();
    let raw_values: Vec<&str> = values_line.split_whitespace().collect();

    if names.len() != raw_values.len() {
        return Err(MesaLogError::HeaderCountMismatch {
            names: names.len(),
            values: raw_values.len(),
        });
    }

    // Counts validated above; a later duplicate name overwrites the earlier entry.
    let values = names
        .iter()
        .cloned()
        .zip_eq(raw_values.iter().map(|value| value.to_string()))
        .collect();

    Ok(Header { names, values })
}

/// Fetch line `index` (0-based), reporting the 1-based file position when absent.
pub(crate) fn fetch_line<'a>(lines: &[&'a str], index: usize) -> Result<&'a str, MesaLogError> {
    lines
        .get(index)
        .copied()
        .ok_or(MesaLogError::MissingLine(index + 1))
}
