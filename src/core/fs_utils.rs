//! File system utility helpers (BOM-aware log reader)
use std::io;
use std::path::Path;

/// UTF-8 byte order mark
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Read a log file as strict UTF-8 text, skipping a leading UTF-8 BOM if present.
///
/// Errors from opening or reading the file are returned unchanged.
/// Malformed UTF-8 is reported as [`io::ErrorKind::InvalidData`].
/// Empty files are not rejected here.
pub fn read_log_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;

    let (body, had_bom) = strip_utf8_bom(&bytes);
    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        had_bom,
        "Read log file"
    );

    decode_utf8(body)
}

/// Splits off a leading UTF-8 BOM. The flag reports whether one was present.
pub fn strip_utf8_bom(bytes: &[u8]) -> (&[u8], bool) {
    match bytes.strip_prefix(&UTF8_BOM[..]) {
        Some(rest) => (rest, true),
        None => (bytes, false),
    }
}

fn decode_utf8(bytes: &[u8]) -> io::Result<String> {
    encoding_rs::UTF_8
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                "log file is not valid UTF-8",
            )
        })
}
