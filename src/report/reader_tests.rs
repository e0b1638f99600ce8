use super::*;
use std::future::{pending, ready};
use tempfile::TempDir;
use tokio::io::AsyncWriteExt;

#[tokio::test]
async fn test_read_until_end_of_stream() {
    let input = "<results>\n  <cppcheck/>\n  <errors/>\n</results>";
    let text = read_report(input.as_bytes(), pending()).await.unwrap();
    assert_eq!(text, input);
}

#[tokio::test]
async fn test_read_empty_stream() {
    let text = read_report(&b""[..], pending()).await.unwrap();
    assert!(text.is_empty());
}

#[tokio::test]
async fn test_cancel_before_any_input() {
    let text = read_report(&b"<results/>\n"[..], ready(())).await.unwrap();
    assert!(text.is_empty());
}

#[tokio::test]
async fn test_cancel_keeps_partial_input() {
    let (mut writer, reader) = tokio::io::duplex(64);
    writer.write_all(b"<results>\n").await.unwrap();

    // the writer stays open, so only the cancellation can end the read;
    // it resolves on its second poll, after the first line has been taken
    let text = read_report(reader, tokio::task::yield_now()).await.unwrap();
    assert_eq!(text, "<results>\n");
    drop(writer);
}

#[tokio::test]
async fn test_invalid_utf8_is_an_io_error() {
    let err = read_report(&b"<results>\xff\xfe</results>\n"[..], pending())
        .await
        .unwrap_err();
    assert!(!err.is_malformed_report(), "got {err:?}");
}

#[tokio::test]
async fn test_read_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let report_path = temp_dir.path().join("cppcheck.xml");
    std::fs::write(&report_path, "<results><a/><errors/></results>\n").unwrap();

    let source = InputSource::File(report_path);
    let input = open_input(&source).await.unwrap();
    let text = read_report(input, pending()).await.unwrap();
    assert_eq!(text, "<results><a/><errors/></results>\n");
}

#[tokio::test]
async fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let source = InputSource::File(temp_dir.path().join("missing.xml"));

    let err = match open_input(&source).await {
        Ok(_) => panic!("opening a missing file should fail"),
        Err(e) => e,
    };
    assert!(err.to_string().contains("missing.xml"), "got {err}");
}

#[test]
fn test_input_source_from_arg() {
    assert_eq!(InputSource::from_arg(None), InputSource::Stdin);
    assert_eq!(InputSource::from_arg(Some(PathBuf::from("-"))), InputSource::Stdin);
    assert_eq!(
        InputSource::from_arg(Some(PathBuf::from("report.xml"))),
        InputSource::File(PathBuf::from("report.xml"))
    );
    assert_eq!(InputSource::Stdin.to_string(), "<stdin>");
}
