use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// Failures of the document-term / topic fitting step. Only this step is
/// allowed to fail; callers downgrade it to "topics unavailable".
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TopicError {
    #[error("empty vocabulary; perhaps the documents only contain stop words")]
    EmptyVocabulary,
    #[error("max_df corresponds to {max_docs:.2} documents, fewer than min_df ({min_df})")]
    InvalidThresholds { max_docs: f64, min_df: usize },
    #[error("after pruning, no terms remain; try a lower min_df or a higher max_df")]
    NoTermsRemain,
    #[error("invalid topic model configuration: {0}")]
    InvalidConfig(String),
    #[error("could not build sampling distribution: {0}")]
    Sampling(String),
}
