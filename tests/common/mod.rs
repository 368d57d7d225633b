use std::fs::File;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::TempDir;

/// Render a full history log with the standard preamble and the given
/// `(model_number, star_age, log_L)` rows.
pub fn history_text(rows: &[(i64, f64, f64)]) -> String {
    let mut text = String::new();
    text.push_str("                        1                           2\n");
    text.push_str("           version_number                initial_mass\n");
    text.push_str("                 \"15140\"            1.5000000000E+01\n");
    text.push('\n');
    text.push_str("                        1                           2                           3\n");
    text.push_str("             model_number                    star_age                       log_L\n");
    for (model_number, star_age, log_l) in rows {
        text.push_str(&format!(
            "{model_number:>25}{star_age:>28.10E}{log_l:>28.10E}\n"
        ));
    }
    text
}

/// Render a profile log with the same preamble shape and `(zone, mass, radius)` rows.
pub fn profile_text(rows: &[(i64, f64, f64)]) -> String {
    let mut text = String::new();
    text.push_str("                        1                           2\n");
    text.push_str("             model_number                initial_mass\n");
    text.push_str("                      842            1.5000000000E+01\n");
    text.push('\n');
    text.push_str("                        1                           2                           3\n");
    text.push_str("                     zone                        mass                      radius\n");
    for (zone, mass, radius) in rows {
        text.push_str(&format!("{zone:>25}{mass:>28.10E}{radius:>28.10E}\n"));
    }
    text
}

/// Write `text` as a plain file under `dir`, returning its path.
pub fn write_plain(dir: &TempDir, name: &str, text: &str) -> Utf8PathBuf {
    let path = utf8_dir(dir).join(name);
    std::fs::write(&path, text).expect("could not write fixture log");
    path
}

/// Write `text` gzip-compressed as `<name>.gz` under `dir`, returning the **logical**
/// path (without the suffix) that callers hand to the resolver.
pub fn write_gzip(dir: &TempDir, name: &str, text: &str) -> Utf8PathBuf {
    let logical = utf8_dir(dir).join(name);
    let on_disk = format!("{logical}.gz");
    let mut encoder = GzEncoder::new(
        File::create(on_disk).expect("could not create fixture log"),
        Compression::default(),
    );
    encoder
        .write_all(text.as_bytes())
        .expect("could not write gzip fixture");
    encoder.finish().expect("could not finish gzip fixture");
    logical
}

fn utf8_dir(dir: &TempDir) -> &Utf8Path {
    Utf8Path::from_path(dir.path()).expect("temp dir is not UTF-8")
}
