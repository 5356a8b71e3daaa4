use std::io::Write;

use chrono::{NaiveDate, Timelike};
use social_analyze::error::AnalysisError;
use social_analyze::loader::load_corpus;
use tempfile::NamedTempFile;

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn given_full_dataset_when_loading_then_reads_all_columns() {
    let file = csv_file(
        "Text, Hashtags ,Hour,Timestamp\n\
         \"Loving the sunshine, finally!\",#sun #happy,14,2023-01-15 14:30:00\n\
         Second post,,25,not a date\n",
    );

    let corpus = load_corpus(file.path()).unwrap();

    assert_eq!(corpus.len(), 2);
    assert!(corpus.has_hashtags && corpus.has_hour && corpus.has_timestamp);

    let first = &corpus.documents[0];
    assert_eq!(first.raw_text.as_deref(), Some("Loving the sunshine, finally!"));
    assert_eq!(first.hashtags.as_deref(), Some("#sun #happy"));
    assert_eq!(first.hour, Some(14));
    let timestamp = first.timestamp.unwrap();
    assert_eq!(timestamp.date(), NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
    assert_eq!(timestamp.minute(), 30);

    let second = &corpus.documents[1];
    assert_eq!(second.hashtags, None);
    assert_eq!(second.hour, None);
    assert_eq!(second.timestamp, None);
    assert!(!second.is_processed());
}

#[test]
fn given_text_only_dataset_when_loading_then_optional_columns_are_absent() {
    let file = csv_file("Text\nhello world\n");

    let corpus = load_corpus(file.path()).unwrap();

    assert_eq!(corpus.len(), 1);
    assert!(!corpus.has_hashtags);
    assert!(!corpus.has_hour);
    assert!(!corpus.has_timestamp);
}

#[test]
fn given_ragged_rows_when_loading_then_missing_fields_are_none() {
    let file = csv_file("Text,Hashtags\nonly text\n  ,#empty\n");

    let corpus = load_corpus(file.path()).unwrap();

    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.documents[0].hashtags, None);
    assert_eq!(corpus.documents[1].raw_text, None);
}

#[test]
fn given_iso_timestamp_when_loading_then_it_is_parsed() {
    let file = csv_file("Text,Timestamp\npost,2023-03-01T08:05:00\n");

    let corpus = load_corpus(file.path()).unwrap();

    assert_eq!(corpus.documents[0].timestamp.unwrap().hour(), 8);
}

#[test]
fn given_dataset_without_text_column_when_loading_then_fails_with_missing_column() {
    let file = csv_file("Body,Hour\nhello,3\n");

    let result = load_corpus(file.path());

    assert!(matches!(result, Err(AnalysisError::MissingColumn("Text"))));
}

#[test]
fn given_missing_file_when_loading_then_fails_with_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = load_corpus(dir.path().join("nope.csv"));

    assert!(matches!(result, Err(AnalysisError::Io { .. })));
}
