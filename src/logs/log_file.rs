//! # The `LogFile` aggregate
//!
//! [`LogFile`] is the public entry point of the crate: it resolves a logical path to the
//! plain or gzip-compressed file on disk, decodes the fixed preamble into a [`Header`],
//! loads the numeric matrix into a [`ColumnTable`], and — for history logs — prunes the
//! rows a simulation restart superseded.
//!
//! A `LogFile` is immutable once constructed: only read accessors are exposed, and
//! callers needing concurrent loads use independent instances.

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;

use crate::logs::header_reader::{read_header, Header};
use crate::logs::line_source::read_log_text;
use crate::logs::locate::resolve_log_path;
use crate::logs::prune::prune_restarts;
use crate::logs::table_reader::{read_table, ColumnTable};
use crate::logs::LogKind;
use crate::mesalog_errors::MesaLogError;

/// A fully loaded MESA log: resolved identity plus one [`Header`] and one [`ColumnTable`].
///
/// Construction
/// -----------------
/// * [`LogFile::open`] – Full pipeline; history logs are pruned of restart-superseded rows.
/// * [`LogFile::open_unpruned`] – Same load with pruning skipped, for inspecting the raw
///   restart segments of a history log.
///
/// See also
/// ------------
/// * [`Header::get`] / [`Header::as_f64`] – Header field lookup and numeric casts.
/// * [`ColumnTable::column`] – Column lookup by name.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: Utf8PathBuf,
    compressed: bool,
    kind: LogKind,
    header: Header,
    columns: ColumnTable,
}

impl LogFile {
    /// Open a MESA log, pruning restart-superseded rows on history files.
    ///
    /// Arguments
    /// -----------------
    /// * `path` – The logical log path; a `.gz`-suffixed variant is probed when the
    ///   exact path does not exist.
    ///
    /// Return
    /// ----------
    /// * The loaded, immutable [`LogFile`].
    /// * `Err(MesaLogError::LogNotFound)` when neither the plain nor the compressed
    ///   variant exists.
    /// * Any decoding error of the header or table (see
    ///   [`MesaLogError`](crate::mesalog_errors::MesaLogError)).
    pub fn open(path: &Utf8Path) -> Result<Self, MesaLogError> {
        Self::load(path, true)
    }

    /// Open a MESA log without the restart pruning pass.
    ///
    /// History files keep every row as stored on disk, restart segments included;
    /// profile files load identically to [`LogFile::open`].
    pub fn open_unpruned(path: &Utf8Path) -> Result<Self, MesaLogError> {
        Self::load(path, false)
    }

    fn load(path: &Utf8Path, prune: bool) -> Result<Self, MesaLogError> {
        let (resolved, compressed) = resolve_log_path(path)?;
        let kind = LogKind::from_file_name(&resolved);

        let text = read_log_text(&resolved, compressed)?;
        let lines: Vec<&str> = text.lines().collect();

        let header = read_header(&lines)?;
        let mut columns = read_table(&lines)?;

        if prune && kind == LogKind::History {
            prune_restarts(&mut columns)?;
        }

        debug!(
            "loaded {resolved}: {kind} log, {} rows x {} columns",
            columns.row_count(),
            columns.column_count()
        );

        Ok(LogFile {
            path: resolved,
            compressed,
            kind,
            header,
            columns,
        })
    }

    /// The resolved on-disk path (`.gz` suffix included when the compressed variant was
    /// picked).
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Whether the file was read through gzip decoding.
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Log classification derived from the file name.
    pub fn kind(&self) -> LogKind {
        self.kind
    }

    /// The scalar metadata block.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The numeric column table.
    pub fn columns(&self) -> &ColumnTable {
        &self.columns
    }

    /// Look up a column by name (shorthand for [`ColumnTable::column`]).
    pub fn column(&self, name: &str) -> Result<&[f64], MesaLogError> {
        self.columns.column(name)
    }

    /// Number of rows shared by every column.
    pub fn row_count(&self) -> usize {
        self.columns.row_count()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.column_count()
    }
}
