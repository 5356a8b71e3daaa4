use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One social-media post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub raw_text: Option<String>,
    pub hashtags: Option<String>,
    pub hour: Option<u8>,
    pub timestamp: Option<NaiveDateTime>,
    // Derived by the preprocessor, written once.
    pub tokens: Option<Vec<String>>,
    pub processed_text: Option<String>,
}

impl Document {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Document {
            raw_text: Some(raw_text.into()),
            ..Default::default()
        }
    }

    pub fn with_hashtags(mut self, hashtags: impl Into<String>) -> Self {
        self.hashtags = Some(hashtags.into());
        self
    }

    pub fn with_hour(mut self, hour: u8) -> Self {
        self.hour = Some(hour);
        self
    }

    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn is_processed(&self) -> bool {
        self.tokens.is_some() && self.processed_text.is_some()
    }
}

/// Ordered collection of posts sharing one schema.
///
/// The `has_*` flags record whether the optional column existed in the
/// source at all, which is distinct from a single row leaving it empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    pub documents: Vec<Document>,
    pub has_hashtags: bool,
    pub has_hour: bool,
    pub has_timestamp: bool,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Corpus {
            documents,
            ..Default::default()
        }
    }

    /// Builds a text-only corpus, mostly useful in tests.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Corpus::new(texts.into_iter().map(Document::new).collect())
    }

    pub fn with_hashtag_column(mut self) -> Self {
        self.has_hashtags = true;
        self
    }

    pub fn with_hour_column(mut self) -> Self {
        self.has_hour = true;
        self
    }

    pub fn with_timestamp_column(mut self) -> Self {
        self.has_timestamp = true;
        self
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }
}
