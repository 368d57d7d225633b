use mesalog::{LogFile, LogKind};

mod common;
use common::{history_text, write_gzip, write_plain};

fn sample_rows() -> Vec<(i64, f64, f64)> {
    vec![
        (1, 1.0e3, 0.50),
        (2, 2.0e3, 0.51),
        (2, 2.1e3, 0.61),
        (3, 3.1e3, 0.62),
    ]
}

#[test]
fn test_gzip_variant_resolves_transparently() {
    let dir = tempfile::tempdir().unwrap();
    // Only `history.data.gz` exists on disk; the caller asks for `history.data`.
    let logical = write_gzip(&dir, "history.data", &history_text(&sample_rows()));

    let log = LogFile::open(&logical).unwrap();

    assert!(log.is_compressed());
    assert_eq!(log.kind(), LogKind::History);
    assert_eq!(log.path().as_str(), format!("{logical}.gz"));
    assert_eq!(log.column("model_number").unwrap(), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_plain_and_gzip_parse_identically() {
    let dir = tempfile::tempdir().unwrap();
    let text = history_text(&sample_rows());
    let plain = write_plain(&dir, "plain_history.data", &text);
    let logical = write_gzip(&dir, "gzip_history.data", &text);

    let from_plain = LogFile::open(&plain).unwrap();
    let from_gzip = LogFile::open(&logical).unwrap();

    assert_eq!(from_plain.header().names(), from_gzip.header().names());
    for name in from_plain.header().names() {
        assert_eq!(
            from_plain.header().get(name).unwrap(),
            from_gzip.header().get(name).unwrap()
        );
    }

    assert_eq!(from_plain.columns().names(), from_gzip.columns().names());
    assert_eq!(from_plain.row_count(), from_gzip.row_count());
    for name in from_plain.columns().names() {
        assert_eq!(
            from_plain.column(name).unwrap(),
            from_gzip.column(name).unwrap()
        );
    }
}

#[test]
fn test_gzip_profile_bypasses_pruning_too() {
    let dir = tempfile::tempdir().unwrap();
    let mut text = history_text(&sample_rows());
    // Same table under a profile name: all four rows must survive.
    text = text.replace("model_number", "zone_number");
    let logical = write_gzip(&dir, "profile3.data", &text);

    let log = LogFile::open(&logical).unwrap();

    assert_eq!(log.kind(), LogKind::Profile);
    assert_eq!(log.row_count(), 4);
}
