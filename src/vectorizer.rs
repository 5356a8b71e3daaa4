//! Document-term counting for the topic model.
//!
//! Documents are lowercased and split on runs of two or more word
//! characters. Terms from a second, broader English stop list are dropped,
//! and the surviving vocabulary is pruned by document frequency.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::TopicError;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// English stop list shipped with the common ML toolkits. Broader than the
/// preprocessing list; it also drops number words and filler like "well".
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against",
    "all", "almost", "alone", "along", "already", "also", "although", "always",
    "am", "among", "amongst", "amoungst", "amount", "an", "and", "another",
    "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being",
    "below", "beside", "besides", "between", "beyond", "bill", "both",
    "bottom", "but", "by", "call", "can", "cannot", "cant", "co", "con",
    "could", "couldnt", "cry", "de", "describe", "detail", "do", "done",
    "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone",
    "everything", "everywhere", "except", "few", "fifteen", "fifty", "fill",
    "find", "fire", "first", "five", "for", "former", "formerly", "forty",
    "found", "four", "from", "front", "full", "further", "get", "give", "go",
    "had", "has", "hasnt", "have", "he", "hence", "her", "here", "hereafter",
    "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed",
    "interest", "into", "is", "it", "its", "itself", "keep", "last", "latter",
    "latterly", "least", "less", "ltd", "made", "many", "may", "me",
    "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly",
    "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone",
    "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on",
    "once", "one", "only", "onto", "or", "other", "others", "otherwise", "our",
    "ours", "ourselves", "out", "over", "own", "part", "per", "perhaps",
    "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side",
    "since", "sincere", "six", "sixty", "so", "some", "somehow", "someone",
    "something", "sometime", "sometimes", "somewhere", "still", "such",
    "system", "take", "ten", "than", "that", "the", "their", "them",
    "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin",
    "third", "this", "those", "though", "three", "through", "throughout",
    "thru", "thus", "to", "together", "too", "top", "toward", "towards",
    "twelve", "twenty", "two", "un", "under", "until", "up", "upon", "us",
    "very", "via", "was", "we", "well", "were", "what", "whatever", "when",
    "whence", "whenever", "where", "whereafter", "whereas", "whereby",
    "wherein", "whereupon", "wherever", "whether", "which", "while", "whither",
    "who", "whoever", "whole", "whom", "whose", "why", "will", "with",
    "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Sparse document-term counts. Each row holds `(term index, count)` pairs
/// in ascending term order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentTermMatrix {
    pub rows: Vec<Vec<(usize, f64)>>,
    pub n_terms: usize,
}

impl DocumentTermMatrix {
    pub fn n_docs(&self) -> usize {
        self.rows.len()
    }

    pub fn total_count(&self) -> f64 {
        self.rows.iter().flatten().map(|(_, count)| count).sum()
    }
}

#[derive(Debug, Clone)]
pub struct CountVectorizer {
    min_df: usize,
    max_df: f64,
    stop_words: HashSet<&'static str>,
    vocabulary: Vec<String>,
    index: HashMap<String, usize>,
}

impl CountVectorizer {
    /// `max_df` is a fraction of the documents, `min_df` an absolute count.
    pub fn new(min_df: usize, max_df: f64) -> Self {
        CountVectorizer {
            min_df,
            max_df,
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
            vocabulary: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn analyze(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        TOKEN
            .find_iter(&lowered)
            .map(|term| term.as_str())
            .filter(|term| !self.stop_words.contains(*term))
            .map(str::to_string)
            .collect()
    }

    /// Learns the vocabulary from `documents` and returns their counts.
    pub fn fit_transform<S: AsRef<str>>(
        &mut self,
        documents: &[S],
    ) -> Result<DocumentTermMatrix, TopicError> {
        let counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut counts = HashMap::new();
                for term in self.analyze(doc.as_ref()) {
                    *counts.entry(term).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for doc in &counts {
            for term in doc.keys() {
                *document_frequency.entry(term.as_str()).or_insert(0) += 1;
            }
        }
        if document_frequency.is_empty() {
            return Err(TopicError::EmptyVocabulary);
        }

        let max_docs = self.max_df * documents.len() as f64;
        if max_docs < self.min_df as f64 {
            return Err(TopicError::InvalidThresholds {
                max_docs,
                min_df: self.min_df,
            });
        }

        let distinct = document_frequency.len();
        let vocabulary: Vec<String> = document_frequency
            .into_iter()
            .filter(|(_, df)| *df >= self.min_df && *df as f64 <= max_docs)
            .map(|(term, _)| term.to_string())
            .collect();
        if vocabulary.is_empty() {
            return Err(TopicError::NoTermsRemain);
        }

        debug!(
            documents = documents.len(),
            distinct_terms = distinct,
            kept_terms = vocabulary.len(),
            "Built document-term vocabulary"
        );

        self.index = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();
        self.vocabulary = vocabulary;

        let rows = counts
            .into_iter()
            .map(|doc| self.row(doc))
            .collect();

        Ok(DocumentTermMatrix {
            rows,
            n_terms: self.vocabulary.len(),
        })
    }

    /// Counts `documents` against the already learned vocabulary. Unknown
    /// terms are ignored.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> DocumentTermMatrix {
        let rows = documents
            .iter()
            .map(|doc| {
                let mut counts = HashMap::new();
                for term in self.analyze(doc.as_ref()) {
                    *counts.entry(term).or_insert(0) += 1;
                }
                self.row(counts)
            })
            .collect();

        DocumentTermMatrix {
            rows,
            n_terms: self.vocabulary.len(),
        }
    }

    fn row(&self, counts: HashMap<String, usize>) -> Vec<(usize, f64)> {
        let mut row: Vec<(usize, f64)> = counts
            .into_iter()
            .filter_map(|(term, count)| self.index.get(&term).map(|&i| (i, count as f64)))
            .collect();
        row.sort_by_key(|(i, _)| *i);
        row
    }

    /// Feature names in column order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new(2, 0.95)
    }
}
