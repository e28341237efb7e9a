/*!
Test for BOM handling in ESLint log files
*/

use eslint_issues::core::{read_log_file, UTF8_BOM};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_file_reading_with_bom() -> std::io::Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    let mut content = UTF8_BOM.to_vec();
    content.extend_from_slice(br#"{"a":1}"#);
    temp_file.write_all(&content)?;

    let content = read_log_file(temp_file.path())?;

    assert_eq!(content, r#"{"a":1}"#);
    Ok(())
}

#[test]
fn test_file_reading_without_bom() -> std::io::Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    let text = "[{\"filePath\":\"/repo/é.js\",\"messages\":[]}]\r\n";
    temp_file.write_all(text.as_bytes())?;

    let content = read_log_file(temp_file.path())?;

    assert_eq!(content, text);
    Ok(())
}

#[test]
fn test_fixture_matches_manual_decoding() -> std::io::Result<()> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testfiles/jsonFormatWindows.json");
    let bytes = std::fs::read(path)?;
    assert_eq!(&bytes[..3], &UTF8_BOM[..], "fixture must start with a UTF-8 BOM");

    let expected = std::str::from_utf8(&bytes[3..]).unwrap();
    let content = read_log_file(path)?;

    assert_eq!(content, expected);
    assert!(content.starts_with('['));
    Ok(())
}
