//! Resolution of a logical log path to the file actually present on disk.
//!
//! MESA runs are routinely archived with their logs gzipped in place, so a caller asking
//! for `LOGS/history.data` must transparently get `LOGS/history.data.gz` when only the
//! compressed variant survives. Resolution is a two-step probe with no partial matches
//! and no directory search.

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;

use crate::constants::GZIP_SUFFIX;
use crate::mesalog_errors::MesaLogError;

/// Resolve a logical log path to an existing file.
///
/// Arguments
/// -----------------
/// * `path` – The requested log path, without any compression suffix.
///
/// Return
/// ----------
/// * `Ok((resolved, compressed))` where `resolved` is the path to open and `compressed`
///   tells whether it needs gzip decoding:
///   - the exact `path` if it exists (`compressed = false`),
///   - else `path` with `.gz` appended if that exists (`compressed = true`).
/// * `Err(MesaLogError::LogNotFound)` naming the requested path when neither exists.
pub(crate) fn resolve_log_path(path: &Utf8Path) -> Result<(Utf8PathBuf, bool), MesaLogError> {
    if path.is_file() {
        debug!("resolved {path} as plain text");
        return Ok((path.to_path_buf(), false));
    }

    let gzip_variant = Utf8PathBuf::from(format!("{path}{GZIP_SUFFIX}"));
    if gzip_variant.is_file() {
        debug!("resolved {path} as gzip variant {gzip_variant}");
        return Ok((gzip_variant, true));
    }

    Err(MesaLogError::LogNotFound(path.to_path_buf()))
}
