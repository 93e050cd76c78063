// Latent Dirichlet Allocation: batch variational Bayes over a dense
// document-term count matrix, and the topic scorer built on top of it.
//
// Model: each topic k has a variational Dirichlet `lambda[k]` over the
// vocabulary (the "components"). Each pass runs a per-document E-step to
// estimate the document-topic Dirichlet `gamma[d]`, collects sufficient
// statistics, then resets `lambda = eta + sstats` (M-step).
//
// Everything is seeded: the same counts always produce the same components.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Gamma};
use statrs::function::gamma::digamma;
use tracing::debug;

use super::error::ScoringFailure;
use super::ranking::{rank_and_normalize, RankedTerm};
use super::traits::TermScorer;
use super::vectorizer::{count_terms, NgramRange};

/// A topic model needs at least this many distinct terms.
pub const MIN_TOPIC_VOCABULARY: usize = 2;

/// Fitting parameters. Priors default to `1 / n_topics`.
#[derive(Debug, Clone)]
pub struct LdaParams {
    pub n_topics: usize,
    pub max_iter: usize,
    pub max_doc_update_iter: usize,
    pub mean_change_tol: f64,
    pub doc_topic_prior: Option<f64>,
    pub topic_word_prior: Option<f64>,
    pub seed: u64,
}

impl Default for LdaParams {
    fn default() -> Self {
        Self {
            n_topics: 5,
            max_iter: 10,
            max_doc_update_iter: 100,
            mean_change_tol: 1e-3,
            doc_topic_prior: None,
            topic_word_prior: None,
            seed: 42,
        }
    }
}

/// A fitted model: one unnormalized word-weight row per topic.
#[derive(Debug, Clone)]
pub struct LdaModel {
    pub components: Vec<Vec<f64>>,
}

impl LdaModel {
    pub fn n_topics(&self) -> usize {
        self.components.len()
    }

    /// Indices of the `n` heaviest words of `topic`, heaviest first.
    /// Equal weights keep vocabulary order.
    pub fn top_word_indices(&self, topic: usize, n: usize) -> Vec<usize> {
        let row = &self.components[topic];
        let mut indices: Vec<usize> = (0..row.len()).collect();
        indices.sort_by(|&a, &b| {
            row[b]
                .partial_cmp(&row[a])
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.cmp(&b))
        });
        indices.truncate(n);
        indices
    }
}

/// `E[log theta]` for a Dirichlet with parameters `alpha`, exponentiated.
fn exp_dirichlet_expectation(alpha: &[f64]) -> Vec<f64> {
    let psi_total = digamma(alpha.iter().sum());
    alpha
        .iter()
        .map(|a| (digamma(*a) - psi_total).exp())
        .collect()
}

fn mean_abs_change(a: &[f64], b: &[f64]) -> f64 {
    if a.is_empty() {
        return 0.0;
    }
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum::<f64>() / a.len() as f64
}

/// Fit LDA to `docs`, a dense document-term count matrix with `n_features`
/// columns.
pub fn fit(
    docs: &[Vec<f64>],
    n_features: usize,
    params: &LdaParams,
) -> Result<LdaModel, ScoringFailure> {
    let k = params.n_topics;
    if k == 0 {
        return Err(ScoringFailure::Model("number of topics must be positive".into()));
    }
    if n_features == 0 {
        return Err(ScoringFailure::EmptyVocabulary);
    }

    let alpha = params.doc_topic_prior.unwrap_or(1.0 / k as f64);
    let eta = params.topic_word_prior.unwrap_or(1.0 / k as f64);

    let mut rng = StdRng::seed_from_u64(params.seed);
    let init = Gamma::new(100.0, 1.0 / 100.0).map_err(|e| ScoringFailure::Model(e.to_string()))?;

    let mut components: Vec<Vec<f64>> = (0..k)
        .map(|_| (0..n_features).map(|_| init.sample(&mut rng)).collect())
        .collect();
    let mut exp_topic_word: Vec<Vec<f64>> =
        components.iter().map(|row| exp_dirichlet_expectation(row)).collect();

    for _ in 0..params.max_iter {
        let mut sstats = vec![vec![0.0; n_features]; k];

        for doc in docs {
            let ids: Vec<usize> = (0..n_features.min(doc.len()))
                .filter(|&w| doc[w] > 0.0)
                .collect();
            let mut doc_topic: Vec<f64> = (0..k).map(|_| init.sample(&mut rng)).collect();
            if ids.is_empty() {
                continue;
            }
            let cnts: Vec<f64> = ids.iter().map(|&w| doc[w]).collect();
            let mut exp_doc_topic = exp_dirichlet_expectation(&doc_topic);

            for _ in 0..params.max_doc_update_iter {
                let norm_phi = phi_norm(&exp_doc_topic, &exp_topic_word, &ids);
                let last = doc_topic.clone();
                for t in 0..k {
                    let dot: f64 = ids
                        .iter()
                        .enumerate()
                        .map(|(j, &w)| cnts[j] / norm_phi[j] * exp_topic_word[t][w])
                        .sum();
                    doc_topic[t] = exp_doc_topic[t] * dot + alpha;
                }
                exp_doc_topic = exp_dirichlet_expectation(&doc_topic);
                if mean_abs_change(&last, &doc_topic) < params.mean_change_tol {
                    break;
                }
            }

            let norm_phi = phi_norm(&exp_doc_topic, &exp_topic_word, &ids);
            for t in 0..k {
                for (j, &w) in ids.iter().enumerate() {
                    sstats[t][w] += exp_doc_topic[t] * cnts[j] / norm_phi[j];
                }
            }
        }

        for t in 0..k {
            for w in 0..n_features {
                components[t][w] = eta + sstats[t][w] * exp_topic_word[t][w];
            }
        }
        if components.iter().flatten().any(|v| !v.is_finite()) {
            return Err(ScoringFailure::NonFiniteFit);
        }
        exp_topic_word = components.iter().map(|row| exp_dirichlet_expectation(row)).collect();
    }

    Ok(LdaModel { components })
}

fn phi_norm(exp_doc_topic: &[f64], exp_topic_word: &[Vec<f64>], ids: &[usize]) -> Vec<f64> {
    ids.iter()
        .map(|&w| {
            exp_doc_topic
                .iter()
                .zip(exp_topic_word)
                .map(|(theta, row)| theta * row[w])
                .sum::<f64>()
                + f64::EPSILON
        })
        .collect()
}

/// Topic scorer: fits LDA on the article's unigram counts and merges each
/// topic's top words into one ranking.
pub struct LdaScorer {
    pub max_features: usize,
    pub n_topics: usize,
    /// Words taken per topic, and the size of the merged ranking
    pub top_n_words: usize,
}

impl Default for LdaScorer {
    fn default() -> Self {
        Self {
            max_features: 100,
            n_topics: 5,
            top_n_words: 30,
        }
    }
}

impl TermScorer for LdaScorer {
    fn name(&self) -> &'static str {
        "topic"
    }

    fn score(&self, tokens: &[String]) -> Result<Vec<RankedTerm>, ScoringFailure> {
        let counts = count_terms(tokens, NgramRange::Unigrams, self.max_features);
        if counts.is_empty() {
            return Err(ScoringFailure::EmptyVocabulary);
        }
        if counts.len() < MIN_TOPIC_VOCABULARY {
            return Err(ScoringFailure::DegenerateVocabulary { size: counts.len() });
        }

        let params = LdaParams {
            n_topics: self.n_topics.min(counts.len()),
            ..LdaParams::default()
        };
        let model = fit(std::slice::from_ref(&counts.counts), counts.len(), &params)?;
        debug!(
            topics = model.n_topics(),
            vocabulary = counts.len(),
            "Fitted LDA model"
        );

        // A word seen in several topics keeps its strongest weight.
        let mut merged: Vec<(String, f64)> = Vec::new();
        for topic in 0..model.n_topics() {
            for idx in model.top_word_indices(topic, self.top_n_words) {
                let weight = model.components[topic][idx];
                let term = &counts.terms[idx];
                match merged.iter_mut().find(|(t, _)| t == term) {
                    Some(entry) => entry.1 = entry.1.max(weight),
                    None => merged.push((term.clone(), weight)),
                }
            }
        }

        Ok(rank_and_normalize(merged, self.top_n_words))
    }
}
