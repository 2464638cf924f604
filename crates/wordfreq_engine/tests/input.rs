use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use wordfreq_core::count_words;
use wordfreq_engine::{read_text, UnavailableReason};

fn init_logging() {
    wordfreq_logging::initialize_for_tests();
}

#[test]
fn reads_utf8_file() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("input.txt");
    fs::write(&path, "One two\ntwo").unwrap();

    let input = read_text(&path).unwrap();
    assert_eq!(input.text, "One two\ntwo");
    assert_eq!(input.encoding_label, "UTF-8");
    assert_eq!(input.byte_len, 11);
}

#[test]
fn windows_line_endings_read_as_newlines() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("crlf.txt");
    fs::write(&path, "end\r\nstart here\rnow").unwrap();

    let input = read_text(&path).unwrap();
    assert_eq!(input.text, "end\nstart here\nnow");
    assert_eq!(input.byte_len, 19);

    let counts = count_words(&input.text);
    assert_eq!(counts.get("end\nstart"), Some(1));
    assert_eq!(counts.get("here\nnow"), Some(1));
    assert_eq!(counts.len(), 2);
}

#[test]
fn missing_file_is_not_found() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.txt");

    let err = read_text(&path).unwrap_err();
    assert_eq!(err.reason, UnavailableReason::NotFound);
    assert_eq!(err.path, path);
    assert!(err.to_string().contains("file not found"));
}

#[test]
fn directory_is_an_io_failure() {
    init_logging();
    let temp = TempDir::new().unwrap();

    let err = read_text(temp.path()).unwrap_err();
    assert!(matches!(err.reason, UnavailableReason::Io(_)));
}

#[test]
fn malformed_bytes_after_bom_are_undecodable() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.txt");
    fs::write(&path, [0xEF, 0xBB, 0xBF, b'x', 0xFF]).unwrap();

    let err = read_text(&path).unwrap_err();
    assert_eq!(
        err.reason,
        UnavailableReason::Undecodable {
            encoding: "UTF-8".to_string()
        }
    );
}
