//! # MESA log ingestion: location, decoding, and restart pruning
//!
//! Facilities to **locate**, **decode**, and **clean** the text logs written by the MESA
//! stellar-evolution code. The central type is [`LogFile`](crate::logs::log_file::LogFile),
//! an immutable aggregate of one [`Header`](crate::logs::header_reader::Header) (scalar
//! metadata) and one [`ColumnTable`](crate::logs::table_reader::ColumnTable) (named numeric
//! columns), built in a single pass over the file.
//!
//! Modules
//! -----------------
//! * [`log_file`](crate::logs::log_file) – **Public** [`LogFile`](crate::logs::log_file::LogFile)
//!   aggregate with the `open` / `open_unpruned` entry points and read-only accessors.
//! * [`header_reader`](crate::logs::header_reader) – Fixed-offset header decoder and the
//!   [`Header`](crate::logs::header_reader::Header) name → value map.
//! * [`table_reader`](crate::logs::table_reader) – Column schema decoder and numeric table
//!   loader producing a [`ColumnTable`](crate::logs::table_reader::ColumnTable).
//! * *(crate-private)* `locate` – Resolves a logical path to a plain or gzip-compressed file.
//! * *(crate-private)* `line_source` – Whole-file text reader, gzip-transparent.
//! * *(crate-private)* `prune` – Restart deduplication over the `model_number` column.
//!
//! File Layout
//! -----------------
//! Both log kinds share one fixed preamble (offsets in
//! [`constants`](crate::constants)): a banner line, header names, header values, a blank
//! line, a second banner, the column names, then one whitespace-delimited numeric row per
//! line. Header values stay **raw strings**; data tokens are parsed as `f64`.
//!
//! History vs. Profile
//! -----------------
//! A file whose name contains `history` is a per-time-step log: after a simulator restart
//! its tail re-logs model steps already present earlier in the file, and the superseded
//! rows are dropped so `model_number` increases strictly. Any other file is a single
//! snapshot (`profile`) and is returned as stored.
//!
//! Error Handling
//! -----------------
//! All failures surface as [`MesaLogError`](crate::mesalog_errors::MesaLogError): missing
//! files, layout violations, and non-numeric tokens, each carrying the offending line or
//! token. Loads are deterministic and never return a partial table.

use std::fmt;

use camino::Utf8Path;

use crate::constants::HISTORY_MARKER;

pub mod header_reader;
pub(crate) mod line_source;
pub(crate) mod locate;
pub mod log_file;
pub(crate) mod prune;
pub mod table_reader;

/// Classification of a MESA log file, derived from its file name.
///
/// `History` logs are per-time-step outputs subject to restart-induced duplicate rows;
/// `Profile` logs are single snapshots with no deduplication concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    History,
    Profile,
}

impl LogKind {
    /// Classify a resolved log path by its file name.
    ///
    /// A file name containing the substring `history` is a [`LogKind::History`] log;
    /// anything else is a [`LogKind::Profile`]. Only the final path component is
    /// inspected, so a profile stored under a `history/` directory stays a profile.
    pub fn from_file_name(path: &Utf8Path) -> Self {
        match path.file_name() {
            Some(name) if name.contains(HISTORY_MARKER) => LogKind::History,
            _ => LogKind::Profile,
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogKind::History => write!(f, "history"),
            LogKind::Profile => write!(f, "profile"),
        }
    }
}
