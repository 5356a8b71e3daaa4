use std::fs::File;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::error::AnalysisError;
use crate::models::{Corpus, Document};

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Reads a CSV of posts. `Text` is required; `Hashtags`, `Hour` and
/// `Timestamp` are picked up when present.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Corpus, AnalysisError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);
    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|header| header.trim() == name);

    let text_col = column("Text").ok_or(AnalysisError::MissingColumn("Text"))?;
    let hashtags_col = column("Hashtags");
    let hour_col = column("Hour");
    let timestamp_col = column("Timestamp");

    let mut documents = Vec::new();
    let mut bad_hours = 0usize;
    let mut bad_timestamps = 0usize;

    for record in reader.records() {
        let record = record?;
        let mut doc = Document {
            raw_text: field(&record, Some(text_col)),
            hashtags: field(&record, hashtags_col),
            ..Default::default()
        };

        if let Some(raw) = field(&record, hour_col) {
            doc.hour = parse_hour(&raw);
            bad_hours += usize::from(doc.hour.is_none());
        }
        if let Some(raw) = field(&record, timestamp_col) {
            doc.timestamp = parse_timestamp(&raw);
            bad_timestamps += usize::from(doc.timestamp.is_none());
        }
        documents.push(doc);
    }

    let corpus = Corpus {
        documents,
        has_hashtags: hashtags_col.is_some(),
        has_hour: hour_col.is_some(),
        has_timestamp: timestamp_col.is_some(),
    };

    info!(
        path = %path.display(),
        rows = corpus.len(),
        hashtags = corpus.has_hashtags,
        hour = corpus.has_hour,
        timestamp = corpus.has_timestamp,
        "Loaded dataset"
    );
    if bad_hours + bad_timestamps > 0 {
        debug!(bad_hours, bad_timestamps, "Ignored unparseable time values");
    }

    Ok(corpus)
}

fn field(record: &StringRecord, index: Option<usize>) -> Option<String> {
    let value = record.get(index?)?.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_hour(raw: &str) -> Option<u8> {
    // "14.0" shows up when the column went through a float conversion
    let hour = raw.parse::<u8>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.fract() == 0.0 && (0.0..24.0).contains(value))
            .map(|value| value as u8)
    })?;
    (hour < 24).then_some(hour)
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
