use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Gamma};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::TopicError;
use crate::models::Corpus;
use crate::vectorizer::{CountVectorizer, DocumentTermMatrix};

const EPS: f64 = f64::EPSILON;
const GAMMA_SHAPE: f64 = 100.0;
const GAMMA_SCALE: f64 = 0.01;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicConfig {
    pub num_topics: usize,
    pub random_seed: u64,
    pub max_df: f64,
    pub min_df: usize,
    pub max_iter: usize,
    pub top_words: usize,
    /// Defaults to `1 / num_topics`.
    pub doc_topic_prior: Option<f64>,
    /// Defaults to `1 / num_topics`.
    pub topic_word_prior: Option<f64>,
    pub max_doc_update_iter: usize,
    pub mean_change_tol: f64,
}

impl Default for TopicConfig {
    fn default() -> Self {
        TopicConfig {
            num_topics: 5,
            random_seed: 42,
            max_df: 0.95,
            min_df: 2,
            max_iter: 10,
            top_words: 10,
            doc_topic_prior: None,
            topic_word_prior: None,
            max_doc_update_iter: 100,
            mean_change_tol: 1e-3,
        }
    }
}

impl TopicConfig {
    pub fn with_num_topics(mut self, num_topics: usize) -> Self {
        self.num_topics = num_topics;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    pub fn with_document_frequency(mut self, min_df: usize, max_df: f64) -> Self {
        self.min_df = min_df;
        self.max_df = max_df;
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn with_top_words(mut self, top_words: usize) -> Self {
        self.top_words = top_words;
        self
    }

    pub fn with_priors(mut self, doc_topic: f64, topic_word: f64) -> Self {
        self.doc_topic_prior = Some(doc_topic);
        self.topic_word_prior = Some(topic_word);
        self
    }

    fn validate(&self) -> Result<(), TopicError> {
        if self.num_topics == 0 {
            return Err(TopicError::InvalidConfig("num_topics must be at least 1".into()));
        }
        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(TopicError::InvalidConfig(format!(
                "max_df must be in (0, 1], got {}",
                self.max_df
            )));
        }
        for (name, prior) in [
            ("doc_topic_prior", self.doc_topic_prior),
            ("topic_word_prior", self.topic_word_prior),
        ] {
            if let Some(value) = prior {
                if !(value > 0.0 && value.is_finite()) {
                    return Err(TopicError::InvalidConfig(format!(
                        "{name} must be positive, got {value}"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// A fitted topic: its label and top terms with their weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedTopic {
    pub id: usize,
    pub label: String,
    pub words: Vec<(String, f64)>,
}

impl NamedTopic {
    pub fn word_list(&self) -> Vec<&str> {
        self.words.iter().map(|(word, _)| word.as_str()).collect()
    }
}

/// Latent Dirichlet allocation fitted with batch variational Bayes.
#[derive(Debug, Clone)]
pub struct LatentDirichletAllocation {
    num_topics: usize,
    doc_topic_prior: f64,
    topic_word_prior: f64,
    max_iter: usize,
    max_doc_update_iter: usize,
    mean_change_tol: f64,
    rng: StdRng,
    gamma: Gamma<f64>,
    /// Topic-word variational parameters, `num_topics` x `n_terms`.
    components: Vec<Vec<f64>>,
    exp_dirichlet_component: Vec<Vec<f64>>,
    doc_topic: Vec<Vec<f64>>,
}

impl LatentDirichletAllocation {
    pub fn new(config: &TopicConfig) -> Result<Self, TopicError> {
        config.validate()?;
        let default_prior = 1.0 / config.num_topics as f64;
        let gamma = Gamma::new(GAMMA_SHAPE, GAMMA_SCALE)
            .map_err(|e| TopicError::Sampling(e.to_string()))?;

        Ok(LatentDirichletAllocation {
            num_topics: config.num_topics,
            doc_topic_prior: config.doc_topic_prior.unwrap_or(default_prior),
            topic_word_prior: config.topic_word_prior.unwrap_or(default_prior),
            max_iter: config.max_iter,
            max_doc_update_iter: config.max_doc_update_iter,
            mean_change_tol: config.mean_change_tol,
            rng: StdRng::seed_from_u64(config.random_seed),
            gamma,
            components: Vec::new(),
            exp_dirichlet_component: Vec::new(),
            doc_topic: Vec::new(),
        })
    }

    /// Fits the model and stores the normalized topic mixture of every
    /// training document.
    pub fn fit(&mut self, matrix: &DocumentTermMatrix) {
        self.components = (0..self.num_topics)
            .map(|_| {
                (0..matrix.n_terms)
                    .map(|_| self.gamma.sample(&mut self.rng))
                    .collect()
            })
            .collect();
        self.exp_dirichlet_component = exp_dirichlet_rows(&self.components);

        for iteration in 0..self.max_iter {
            let initial: Vec<Vec<f64>> = (0..matrix.n_docs())
                .map(|_| {
                    (0..self.num_topics)
                        .map(|_| self.gamma.sample(&mut self.rng))
                        .collect()
                })
                .collect();
            let (_, suff_stats) = self.e_step(matrix, initial, true);
            self.m_step(suff_stats);
            debug!(iteration = iteration + 1, "LDA iteration finished");
        }

        self.doc_topic = self.transform(matrix);
    }

    /// Per-document topic distributions (rows sum to one) under the fitted
    /// topics. Every document starts from a flat mixture, so repeated calls
    /// agree.
    pub fn transform(&self, matrix: &DocumentTermMatrix) -> Vec<Vec<f64>> {
        let initial = vec![vec![1.0; self.num_topics]; matrix.n_docs()];
        let (doc_topic, _) = self.e_step(matrix, initial, false);
        doc_topic
            .into_iter()
            .map(|row| {
                let total: f64 = row.iter().sum();
                row.into_iter().map(|value| value / total).collect()
            })
            .collect()
    }

    fn e_step(
        &self,
        matrix: &DocumentTermMatrix,
        initial: Vec<Vec<f64>>,
        collect_stats: bool,
    ) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let k = self.num_topics;
        let mut suff_stats = if collect_stats {
            vec![vec![0.0; matrix.n_terms]; k]
        } else {
            Vec::new()
        };

        let mut doc_topic = Vec::with_capacity(matrix.n_docs());
        for (row, mut gamma_d) in matrix.rows.iter().zip(initial) {
            let exp_w = &self.exp_dirichlet_component;
            let mut exp_doc = exp_dirichlet(&gamma_d);

            for _ in 0..self.max_doc_update_iter {
                let last = gamma_d.clone();
                let norm_phi = normalizer(row, &exp_doc, exp_w);

                for topic in 0..k {
                    let weighted: f64 = row
                        .iter()
                        .zip(&norm_phi)
                        .map(|(&(term, count), norm)| count / norm * exp_w[topic][term])
                        .sum();
                    gamma_d[topic] = exp_doc[topic] * weighted + self.doc_topic_prior;
                }
                exp_doc = exp_dirichlet(&gamma_d);

                let mean_change = gamma_d
                    .iter()
                    .zip(&last)
                    .map(|(new, old)| (new - old).abs())
                    .sum::<f64>()
                    / k as f64;
                if mean_change < self.mean_change_tol {
                    break;
                }
            }

            if collect_stats {
                let norm_phi = normalizer(row, &exp_doc, exp_w);
                for (topic, stats) in suff_stats.iter_mut().enumerate() {
                    for (&(term, count), norm) in row.iter().zip(&norm_phi) {
                        stats[term] += exp_doc[topic] * count / norm;
                    }
                }
            }
            doc_topic.push(gamma_d);
        }

        (doc_topic, suff_stats)
    }

    fn m_step(&mut self, mut suff_stats: Vec<Vec<f64>>) {
        for (stats, exp_row) in suff_stats.iter_mut().zip(&self.exp_dirichlet_component) {
            for (value, exp_value) in stats.iter_mut().zip(exp_row) {
                *value = self.topic_word_prior + *value * exp_value;
            }
        }
        self.components = suff_stats;
        self.exp_dirichlet_component = exp_dirichlet_rows(&self.components);
    }

    pub fn num_topics(&self) -> usize {
        self.num_topics
    }

    /// Unnormalized topic-word weights.
    pub fn components(&self) -> &[Vec<f64>] {
        &self.components
    }

    pub fn doc_topic(&self) -> &[Vec<f64>] {
        &self.doc_topic
    }

    /// Highest-weighted topic of a training document; ties go to the lower
    /// topic index.
    pub fn dominant_topic(&self, doc: usize) -> Option<usize> {
        let row = self.doc_topic.get(doc)?;
        let mut best: Option<(usize, f64)> = None;
        for (topic, &weight) in row.iter().enumerate() {
            if best.map_or(true, |(_, top)| weight > top) {
                best = Some((topic, weight));
            }
        }
        best.map(|(topic, _)| topic)
    }

    /// Indices of the `n` heaviest terms of `topic`, ties by term index.
    pub fn top_terms(&self, topic: usize, n: usize) -> Vec<(usize, f64)> {
        let Some(weights) = self.components.get(topic) else {
            return Vec::new();
        };
        let mut ranked: Vec<(usize, f64)> = weights.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(n);
        ranked
    }
}

/// `sum_k exp_doc[k] * exp_w[k][term]` for every term of the row, plus a
/// tiny offset so it never divides by zero.
fn normalizer(row: &[(usize, f64)], exp_doc: &[f64], exp_w: &[Vec<f64>]) -> Vec<f64> {
    row.iter()
        .map(|&(term, _)| {
            exp_doc
                .iter()
                .zip(exp_w)
                .map(|(doc_weight, topic_row)| doc_weight * topic_row[term])
                .sum::<f64>()
                + EPS
        })
        .collect()
}

fn exp_dirichlet(alpha: &[f64]) -> Vec<f64> {
    let total = digamma(alpha.iter().sum());
    alpha.iter().map(|&a| (digamma(a) - total).exp()).collect()
}

fn exp_dirichlet_rows(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    rows.iter().map(|row| exp_dirichlet(row)).collect()
}

/// Digamma function for positive arguments: shift up with the recurrence,
/// then use the asymptotic expansion.
pub(crate) fn digamma(mut x: f64) -> f64 {
    let mut result = 0.0;
    while x < 6.0 {
        result -= 1.0 / x;
        x += 1.0;
    }
    let f = 1.0 / (x * x);
    result + x.ln()
        - 0.5 / x
        - f * (1.0 / 12.0 - f * (1.0 / 120.0 - f * (1.0 / 252.0 - f * (1.0 / 240.0 - f / 132.0))))
}

/// Everything produced by a successful topic fit.
#[derive(Debug, Clone)]
pub struct TopicExtraction {
    pub vectorizer: CountVectorizer,
    pub model: LatentDirichletAllocation,
    pub vocabulary: Vec<String>,
    pub topics: Vec<NamedTopic>,
}

/// Vectorizes the processed text of `corpus` and fits `config.num_topics`
/// topics. Documents without processed text are skipped; empty ones count.
pub fn extract_topics(corpus: &Corpus, config: &TopicConfig) -> Result<TopicExtraction, TopicError> {
    config.validate()?;

    let documents: Vec<&str> = corpus
        .iter()
        .filter_map(|doc| doc.processed_text.as_deref())
        .collect();

    let mut vectorizer = CountVectorizer::new(config.min_df, config.max_df);
    let matrix = vectorizer.fit_transform(&documents)?;
    let vocabulary = vectorizer.vocabulary().to_vec();

    info!(
        documents = matrix.n_docs(),
        terms = matrix.n_terms,
        topics = config.num_topics,
        "Fitting topic model"
    );

    let mut model = LatentDirichletAllocation::new(config)?;
    model.fit(&matrix);

    let topics = (0..model.num_topics())
        .map(|topic| NamedTopic {
            id: topic,
            label: format!("Topic {}", topic + 1),
            words: model
                .top_terms(topic, config.top_words)
                .into_iter()
                .map(|(term, weight)| (vocabulary[term].clone(), weight))
                .collect(),
        })
        .collect();

    Ok(TopicExtraction {
        vectorizer,
        model,
        vocabulary,
        topics,
    })
}

/// Topic results as reported: either the topics or why there are none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TopicOutcome {
    Extracted {
        vocabulary_size: usize,
        topics: Vec<NamedTopic>,
    },
    Unavailable {
        reason: String,
    },
}

impl TopicOutcome {
    pub fn topics(&self) -> Option<&[NamedTopic]> {
        match self {
            TopicOutcome::Extracted { topics, .. } => Some(topics),
            TopicOutcome::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, TopicOutcome::Extracted { .. })
    }
}

impl From<Result<TopicExtraction, TopicError>> for TopicOutcome {
    fn from(result: Result<TopicExtraction, TopicError>) -> Self {
        match result {
            Ok(extraction) => TopicOutcome::Extracted {
                vocabulary_size: extraction.vocabulary.len(),
                topics: extraction.topics,
            },
            Err(e) => TopicOutcome::Unavailable {
                reason: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digamma_matches_known_values() {
        let euler_gamma = 0.577_215_664_901_532_9;
        assert!((digamma(1.0) + euler_gamma).abs() < 1e-10);
        assert!((digamma(0.5) + euler_gamma + 2.0 * 2f64.ln()).abs() < 1e-10);
        assert!((digamma(10.0) - 2.251_752_589_066_721).abs() < 1e-10);
    }

    #[test]
    fn exp_dirichlet_is_below_one() {
        let values = exp_dirichlet(&[1.0, 2.0, 3.0]);
        assert!(values.iter().all(|v| *v > 0.0 && *v < 1.0));
    }
}
