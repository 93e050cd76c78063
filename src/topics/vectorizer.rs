// Single-document vectorization: n-gram counting, vocabulary capping and
// TF-IDF weighting.
//
// The whole token stream is one document. With a corpus of one, every term
// has document frequency 1, so the smoothed IDF is the same constant for
// all terms and the TF-IDF vector is the L2-normalized count vector.

use std::collections::HashMap;

/// Which n-grams to extract from the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NgramRange {
    Unigrams,
    UnigramsAndBigrams,
}

/// Raw term counts over a capped vocabulary, in lexical term order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermCounts {
    pub terms: Vec<String>,
    pub counts: Vec<f64>,
}

impl TermCounts {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Pair each term with a weight from a parallel slice.
    pub fn zip_weights(&self, weights: &[f64]) -> Vec<(String, f64)> {
        self.terms
            .iter()
            .cloned()
            .zip(weights.iter().copied())
            .collect()
    }
}

/// Count n-grams in `tokens` and keep the `max_features` most frequent.
///
/// Bigrams are two adjacent tokens joined by a single space. When capping,
/// equal counts are ordered lexically so the cut is deterministic.
pub fn count_terms(tokens: &[String], ngrams: NgramRange, max_features: usize) -> TermCounts {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    if ngrams == NgramRange::UnigramsAndBigrams {
        for pair in tokens.windows(2) {
            *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(max_features);
    ranked.sort_by(|a, b| a.0.cmp(&b.0));

    let (terms, counts) = ranked
        .into_iter()
        .map(|(term, count)| (term, count as f64))
        .unzip();
    TermCounts { terms, counts }
}

/// Smoothed inverse document frequency: `ln((1 + n) / (1 + df)) + 1`.
pub fn smoothed_idf(n_documents: usize, document_frequency: usize) -> f64 {
    ((1.0 + n_documents as f64) / (1.0 + document_frequency as f64)).ln() + 1.0
}

/// TF-IDF weights for the single document, L2-normalized.
pub fn tfidf_weights(counts: &TermCounts) -> Vec<f64> {
    let idf = smoothed_idf(1, 1);
    let raw: Vec<f64> = counts.counts.iter().map(|tf| tf * idf).collect();

    let norm = raw.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm <= 0.0 {
        return raw;
    }
    raw.into_iter().map(|w| w / norm).collect()
}
