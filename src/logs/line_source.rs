//! Whole-file text reading, transparent to the on-disk encoding.
//!
//! Logs are bounded simulation outputs, so the whole file is read into one `String` and
//! later stages slice it with [`str::lines`], which strips `\n` and `\r\n` uniformly.
//! Gzip decoding happens behind a `Box<dyn Read>` so every stage after this one is
//! encoding-agnostic.

use std::fs::File;
use std::io::Read;

use camino::Utf8Path;
use flate2::read::GzDecoder;

use crate::mesalog_errors::MesaLogError;

/// Read the full decoded text of a resolved log file.
///
/// Arguments
/// -----------------
/// * `path` – The resolved on-disk path (including the `.gz` suffix when compressed).
/// * `compressed` – Whether the file content is a gzip stream.
///
/// Return
/// ----------
/// * The decoded file content as UTF-8 text.
/// * `Err(MesaLogError::IoError)` on read failure, gzip stream corruption, or invalid
///   UTF-8 (a corrupted gzip member surfaces as an `InvalidData` IO error from the
///   decoder).
pub(crate) fn read_log_text(path: &Utf8Path, compressed: bool) -> Result<String, MesaLogError> {
    let file = File::open(path)?;
    let mut reader: Box<dyn Read> = if compressed {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod line_source_test {
    use super::*;

    use std::io::Write;

    use camino::Utf8PathBuf;
    use flate2::write::GzEncoder;
    use flate2::Compression;

    #[test]
    fn test_plain_and_gzip_decode_to_identical_text() {
        let dir = tempfile::tempdir().unwrap();
        let base = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let content = "banner\nstar_mass\n1.5\n";

        let plain = base.join("sample.data");
        std::fs::write(&plain, content).unwrap();

        let gzipped = base.join("sample.data.gz");
        let mut encoder = GzEncoder::new(File::create(&gzipped).unwrap(), Compression::default());
        encoder.write_all(content.as_bytes()).unwrap();
        encoder.finish().unwrap();

        assert_eq!(read_log_text(&plain, false).unwrap(), content);
        assert_eq!(read_log_text(&gzipped, true).unwrap(), content);
    }

    #[test]
    fn test_corrupted_gzip_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let base = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let bogus = base.join("sample.data.gz");
        std::fs::write(&bogus, "not a gzip stream").unwrap();

        let err = read_log_text(&bogus, true).unwrap_err();
        assert!(matches!(err, MesaLogError::IoError(_)));
    }
}
