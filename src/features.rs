use std::collections::HashMap;
use std::hash::Hash;

use counter::Counter;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Corpus;

/// Top-K sizes for each frequency table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureConfig {
    pub top_words: usize,
    pub top_bigrams: usize,
    pub top_trigrams: usize,
    pub top_hashtags: usize,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        FeatureConfig {
            top_words: 50,
            top_bigrams: 30,
            top_trigrams: 20,
            top_hashtags: 20,
        }
    }
}

/// Counts ordered by descending frequency; equal counts keep the order in
/// which the keys were first seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable<K> {
    pub entries: Vec<(K, usize)>,
}

impl<K: Hash + Eq + Clone> FrequencyTable<K> {
    pub fn from_items<I>(items: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let items: Vec<K> = items.into_iter().collect();

        let mut first_seen: HashMap<K, usize> = HashMap::new();
        for (position, item) in items.iter().enumerate() {
            first_seen.entry(item.clone()).or_insert(position);
        }

        let counts: Counter<K> = items.into_iter().collect();
        let mut entries = counts.most_common_tiebreaker(|a, b| first_seen[a].cmp(&first_seen[b]));
        entries.truncate(limit);

        FrequencyTable { entries }
    }

    pub fn get(&self, key: &K) -> Option<usize> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, count)| *count)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }
}

impl<K> FrequencyTable<K> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextFeatures {
    pub top_words: FrequencyTable<String>,
    pub top_bigrams: FrequencyTable<Vec<String>>,
    pub top_trigrams: FrequencyTable<Vec<String>>,
    /// `None` when the corpus has no hashtag column.
    pub top_hashtags: Option<FrequencyTable<String>>,
}

/// All document tokens back to back, in document order.
///
/// N-grams taken over this sequence can span the boundary between two
/// adjacent documents.
pub fn corpus_tokens(corpus: &Corpus) -> Vec<String> {
    corpus
        .iter()
        .filter_map(|doc| doc.tokens.as_ref())
        .filter(|tokens| !tokens.is_empty())
        .flat_map(|tokens| tokens.iter().cloned())
        .collect()
}

pub fn ngrams(tokens: &[String], n: usize) -> impl Iterator<Item = Vec<String>> + '_ {
    tokens.windows(n.max(1)).map(|window| window.to_vec())
}

/// Splits a raw hashtag cell such as `"#AI #ML"` into `["AI", "ML"]`.
pub fn split_hashtags(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split('#')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
}

pub fn extract_features(corpus: &Corpus, config: &FeatureConfig) -> TextFeatures {
    let tokens = corpus_tokens(corpus);

    let top_words = FrequencyTable::from_items(tokens.iter().cloned(), config.top_words);
    let top_bigrams = FrequencyTable::from_items(ngrams(&tokens, 2), config.top_bigrams);
    let top_trigrams = FrequencyTable::from_items(ngrams(&tokens, 3), config.top_trigrams);

    let top_hashtags = corpus.has_hashtags.then(|| {
        let hashtags = corpus
            .iter()
            .filter_map(|doc| doc.hashtags.as_deref())
            .flat_map(split_hashtags);
        FrequencyTable::from_items(hashtags, config.top_hashtags)
    });

    debug!(
        tokens = tokens.len(),
        distinct_words = top_words.len(),
        hashtags = top_hashtags.as_ref().map(|table| table.len()),
        "Extracted text features"
    );

    TextFeatures {
        top_words,
        top_bigrams,
        top_trigrams,
        top_hashtags,
    }
}

/// Every processed document joined into one string.
pub fn processed_corpus_text(corpus: &Corpus) -> String {
    corpus
        .iter()
        .filter_map(|doc| doc.processed_text.as_deref())
        .collect::<Vec<_>>()
        .join(" ")
}
