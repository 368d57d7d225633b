use camino::Utf8Path;

use mesalog::{LogFile, LogKind, MesaLogError};

/// Minimal driver: load one MESA log and print its header and per-column statistics.
/// Usage:
///   print_history <LOG_PATH>
/// Example:
///   print_history LOGS/history.data
fn main() -> Result<(), MesaLogError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "LOGS/history.data".to_string());

    let log = LogFile::open(Utf8Path::new(&path))?;

    println!(
        "{} ({} log{}): {} rows x {} columns",
        log.path(),
        log.kind(),
        if log.is_compressed() { ", gzip" } else { "" },
        log.row_count(),
        log.column_count()
    );

    println!("\nHeader:");
    for name in log.header().names() {
        println!("  {name} = {}", log.header().get(name)?);
    }

    println!("\nColumns (min / max):");
    for name in log.columns().names() {
        let values = log.column(name)?;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        println!("  {name}: {min:.6e} / {max:.6e}");
    }

    if log.kind() == LogKind::History {
        let raw = LogFile::open_unpruned(Utf8Path::new(&path))?;
        println!(
            "\nRestart pruning dropped {} of {} rows",
            raw.row_count() - log.row_count(),
            raw.row_count()
        );
    }

    Ok(())
}
