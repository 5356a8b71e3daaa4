//! Noun-form lemmatization.
//!
//! Irregular plurals come from an exception table. Everything else goes
//! through the WordNet noun detachment rules, and a candidate is accepted
//! only if it appears in the bundled noun list. When several candidates
//! survive the shortest wins; when none do the word is returned unchanged.

use std::collections::{HashMap, HashSet};

const NOUN_LIST: &str = include_str!("../resources/lemmas/nouns.txt");

const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("oxen", "ox"),
    ("dice", "die"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
    ("alumni", "alumnus"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("diagnoses", "diagnosis"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("lives", "life"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("loaves", "loaf"),
    ("calves", "calf"),
    ("elves", "elf"),
    ("scarves", "scarf"),
];

const RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

#[derive(Debug, Clone)]
pub struct Lemmatizer {
    exceptions: HashMap<String, String>,
    nouns: HashSet<String>,
}

impl Lemmatizer {
    pub fn new() -> Self {
        Lemmatizer {
            exceptions: NOUN_EXCEPTIONS
                .iter()
                .map(|(word, lemma)| (word.to_string(), lemma.to_string()))
                .collect(),
            nouns: NOUN_LIST
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Adds or overrides an irregular form.
    pub fn with_exception(mut self, word: impl Into<String>, lemma: impl Into<String>) -> Self {
        self.exceptions.insert(word.into(), lemma.into());
        self
    }

    /// Extends the list of known noun lemmas.
    pub fn with_nouns<I, S>(mut self, nouns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nouns.extend(nouns.into_iter().map(Into::into));
        self
    }

    pub fn is_noun(&self, word: &str) -> bool {
        self.nouns.contains(word)
    }

    pub fn lemmatize(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .map(|token| self.lemmatize_word(&token))
            .collect()
    }

    pub fn lemmatize_word(&self, word: &str) -> String {
        if let Some(lemma) = self.exceptions.get(word) {
            return lemma.clone();
        }

        RULES
            .iter()
            .filter_map(|(suffix, replacement)| {
                word.strip_suffix(suffix)
                    .map(|stem| format!("{stem}{replacement}"))
            })
            .filter(|candidate| self.nouns.contains(candidate))
            .min_by_key(|candidate| candidate.chars().count())
            .unwrap_or_else(|| word.to_string())
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}
