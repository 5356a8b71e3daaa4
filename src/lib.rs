pub mod error;
pub mod features;
pub mod lemmatize;
pub mod loader;
pub mod logging;
pub mod models;
pub mod normalize;
pub mod preprocessor;
pub mod report;
pub mod stopwords;
pub mod time_patterns;
pub mod tokenize;
pub mod topic_modeling;
pub mod vectorizer;

pub use error::{AnalysisError, TopicError};
pub use features::{extract_features, FeatureConfig, FrequencyTable, TextFeatures};
pub use loader::load_corpus;
pub use models::{Corpus, Document};
pub use preprocessor::{Preprocessor, ProcessedText, TextResources};
pub use report::{analyze_corpus, AnalysisConfig, AnalysisReport};
pub use time_patterns::{extract_time_patterns, TimePatterns};
pub use topic_modeling::{extract_topics, TopicConfig, TopicExtraction, TopicOutcome};
