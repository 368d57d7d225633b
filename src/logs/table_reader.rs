//! # Column schema decoding and numeric table loading
//!
//! Line 5 (0-based) of a MESA log holds the whitespace-delimited column names, fixing
//! both the number and the positional order of columns. Every later non-blank line is
//! one data row and must hold exactly one numeric token per column; values are collected
//! **column-major** into one contiguous `f64` sequence per column.
//!
//! Blank lines in the data region are skipped (MESA terminates its logs with a trailing
//! newline). Anything else that disagrees with the schema is fatal: a malformed row
//! signals a corrupted or truncated log, and no partial table is returned.

use std::collections::HashMap;

use itertools::Itertools;

use crate::constants::{Column, COLUMN_NAMES_LINE, FIRST_DATA_LINE};
use crate::logs::header_reader::fetch_line;
use crate::mesalog_errors::MesaLogError;

/// Numeric payload of a MESA log: ordered column names and one equal-length `f64`
/// sequence per column.
///
/// Every column holds exactly [`ColumnTable::row_count`] values. Immutable through the
/// public API; the restart pruning pass rewrites it in a crate-private step before the
/// owning [`LogFile`](crate::logs::log_file::LogFile) is handed out.
#[derive(Debug, Clone)]
pub struct ColumnTable {
    names: Vec<String>,
    columns: HashMap<String, Column, ahash::RandomState>,
    row_count: usize,
}

impl ColumnTable {
    /// Look up a column by name.
    ///
    /// Return
    /// ----------
    /// * The column values in row order, or `MesaLogError::UnknownColumn` if absent.
    pub fn column(&self, name: &str) -> Result<&[f64], MesaLogError> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| MesaLogError::UnknownColumn(name.to_string()))
    }

    /// Column names in file order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether a column is present.
    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Number of rows shared by every column.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.names.len()
    }

    /// Drop the rows flagged `true` in `discard` from every column, preserving the
    /// relative order of kept rows. The mask length must equal the row count.
    pub(crate) fn discard_rows(&mut self, discard: &[bool]) {
        for column in self.columns.values_mut() {
            *column = column
                .iter()
                .zip_eq(discard)
                .filter(|(_, &dropped)| !dropped)
                .map(|(value, _)| *value)
                .collect();
        }
        self.row_count = discard.iter().filter(|&&dropped| !dropped).count();
    }
}

/// Decode the column schema and load the full numeric table of a log.
///
/// Arguments
/// -----------------
/// * `lines` – All lines of the log, in file order.
///
/// Return
/// ----------
/// * The loaded [`ColumnTable`].
/// * `Err(MesaLogError::MissingLine)` when the file ends before the column-name line.
/// * `Err(MesaLogError::RowWidthMismatch)` when a row's token count disagrees with the
///   schema, naming the 1-based file line.
/// * `Err(MesaLogError::InvalidNumber)` on a token that does not parse as `f64`, naming
///   the line and the token.
pub(crate) fn read_table(lines: &[&str]) -> Result<ColumnTable, MesaLogError> {
    let names: Vec<String> = fetch_line(lines, COLUMN_NAMES_LINE)?
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let mut values: Vec<Column> = vec![Vec::new(); names.len()];
    let mut row_count = 0;

    for (index, row) in lines.iter().enumerate().skip(FIRST_DATA_LINE) {
        if row.trim().is_empty() {
            continue;
        }

        let tokens: Vec<&str> = row.split_whitespace().collect();
        if tokens.len() != names.len() {
            return Err(MesaLogError::RowWidthMismatch {
                line: index + 1,
                expected: names.len(),
                found: tokens.len(),
            });
        }

        for (column, token) in values.iter_mut().zip_eq(&tokens) {
            let value: f64 = token.parse().map_err(|_| MesaLogError::InvalidNumber {
                line: index + 1,
                token: token.to_string(),
            })?;
            column.push(value);
        }
        row_count += 1;
    }

    // Row widths validated above; a later duplicate name overwrites the earlier entry.
    let columns = names.iter().cloned().zip_eq(values).collect();

    Ok(ColumnTable {
        names,
        columns,
        row_count,
    })
}
