use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::error::AnalysisError;
use crate::features::{extract_features, FeatureConfig, TextFeatures};
use crate::models::Corpus;
use crate::preprocessor::{Preprocessor, TextResources};
use crate::time_patterns::{extract_time_patterns, TimePatterns};
use crate::topic_modeling::{extract_topics, TopicConfig, TopicOutcome};

pub const REPORT_FILE: &str = "report.json";

#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    pub features: FeatureConfig,
    pub topics: TopicConfig,
    pub parallel: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub document_count: usize,
    pub features: TextFeatures,
    pub topics: TopicOutcome,
    pub time_patterns: TimePatterns,
}

/// Runs preprocessing, then feature, topic and time-pattern extraction.
/// Topic modeling may fail; the rest of the report is still produced.
pub fn analyze_corpus(
    corpus: &mut Corpus,
    config: &AnalysisConfig,
    resources: &TextResources,
) -> AnalysisReport {
    Preprocessor::new(resources).process_corpus(corpus, config.parallel);

    let features = extract_features(corpus, &config.features);

    let result = extract_topics(corpus, &config.topics);
    match &result {
        Ok(extraction) => info!(topics = extraction.topics.len(), "Topic extraction finished"),
        Err(e) => warn!(error = %e, "Topic extraction failed; continuing without topics"),
    }
    let topics = TopicOutcome::from(result);

    let time_patterns = extract_time_patterns(corpus);

    AnalysisReport {
        document_count: corpus.len(),
        features,
        topics,
        time_patterns,
    }
}

impl AnalysisReport {
    /// Writes `report.json` into `dir`, creating it if needed.
    pub fn write_json<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, AnalysisError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| AnalysisError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(REPORT_FILE);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).map_err(|source| AnalysisError::Io {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), "Report written");
        Ok(path)
    }

    pub fn print_summary(&self) {
        println!("=== Social Media Text Analysis ===");
        println!("Documents analyzed: {}", self.document_count);

        println!("\nTop words:");
        for (word, count) in self.features.top_words.entries.iter().take(10) {
            println!("  {:<20} {}", word, count);
        }

        println!("\nTop bigrams:");
        for (bigram, count) in self.features.top_bigrams.entries.iter().take(5) {
            println!("  {:<30} {}", bigram.join(" "), count);
        }

        if let Some(hashtags) = &self.features.top_hashtags {
            println!("\nTop hashtags:");
            for (tag, count) in hashtags.entries.iter().take(10) {
                println!("  #{:<19} {}", tag, count);
            }
        }

        match &self.topics {
            TopicOutcome::Extracted { topics, .. } => {
                println!("\nTopics:");
                for topic in topics {
                    println!("  {}: {}", topic.label, topic.word_list().join(", "));
                }
            }
            TopicOutcome::Unavailable { reason } => {
                println!("\nTopics unavailable: {}", reason);
            }
        }

        if let Some(hour) = self.time_patterns.peak_hour {
            println!("\nPeak posting hour: {:02}:00", hour);
        }
        if let Some(periods) = &self.time_patterns.time_periods {
            for (period, count) in periods {
                println!("  {:?}: {}", period, count);
            }
        }
        if let Some(day) = &self.time_patterns.most_active_day {
            println!("Most active day: {}", day);
        }
    }
}
