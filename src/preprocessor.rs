use std::sync::OnceLock;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::lemmatize::Lemmatizer;
use crate::models::Corpus;
use crate::normalize::clean;
use crate::stopwords::StopwordFilter;
use crate::tokenize::tokenize;

/// Language resources shared by every pipeline stage. Built once, never
/// mutated, safe to share across worker threads.
#[derive(Debug, Clone, Default)]
pub struct TextResources {
    pub stopwords: StopwordFilter,
    pub lemmatizer: Lemmatizer,
}

impl TextResources {
    pub fn new(stopwords: StopwordFilter, lemmatizer: Lemmatizer) -> Self {
        TextResources {
            stopwords,
            lemmatizer,
        }
    }

    pub fn english() -> Self {
        Self::new(StopwordFilter::english(), Lemmatizer::new())
    }

    /// Process-wide English resources, initialised on first use.
    pub fn english_shared() -> &'static TextResources {
        static SHARED: OnceLock<TextResources> = OnceLock::new();
        SHARED.get_or_init(TextResources::english)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ProcessedText {
    pub tokens: Vec<String>,
    pub text: String,
}

pub struct Preprocessor<'a> {
    resources: &'a TextResources,
}

impl<'a> Preprocessor<'a> {
    pub fn new(resources: &'a TextResources) -> Self {
        Preprocessor { resources }
    }

    /// clean -> tokenize -> drop stopwords -> lemmatize.
    pub fn process(&self, raw: Option<&str>) -> ProcessedText {
        let cleaned = clean(raw);
        let tokens = tokenize(&cleaned);
        let tokens = self.resources.stopwords.filter(tokens);
        let tokens = self.resources.lemmatizer.lemmatize(tokens);
        let text = tokens.join(" ");

        ProcessedText { tokens, text }
    }

    /// Fills `tokens` and `processed_text` for every document. Nothing is
    /// written back until the whole corpus has been processed.
    pub fn process_corpus(&self, corpus: &mut Corpus, parallel: bool) {
        info!(documents = corpus.len(), parallel, "Preprocessing corpus");

        let processed: Vec<ProcessedText> = if parallel {
            corpus
                .documents
                .par_iter()
                .map(|doc| self.process(doc.raw_text.as_deref()))
                .collect()
        } else {
            corpus
                .documents
                .iter()
                .map(|doc| self.process(doc.raw_text.as_deref()))
                .collect()
        };

        let mut empty = 0usize;
        for (doc, result) in corpus.documents.iter_mut().zip(processed) {
            // derived fields are written once
            if doc.is_processed() {
                continue;
            }
            if result.tokens.is_empty() {
                empty += 1;
            }
            doc.tokens = Some(result.tokens);
            doc.processed_text = Some(result.text);
        }

        debug!(empty_documents = empty, "Preprocessing finished");
    }
}
