// TF-IDF keyword scoring over a single article.
//
// The token stream is treated as one document with unigrams and bigrams.
// Since IDF is constant for a one-document corpus, the ranking is driven by
// term frequency; the vectorizer still applies IDF and L2 normalization so
// the raw weights have the usual TF-IDF shape before max-normalization.

use tracing::debug;

use super::error::ScoringFailure;
use super::ranking::{rank_and_normalize, RankedTerm};
use super::traits::TermScorer;
use super::vectorizer::{count_terms, tfidf_weights, NgramRange};

/// TF-IDF keyword scorer, the default method.
pub struct TfIdfScorer {
    /// Vocabulary cap (most frequent terms win)
    pub max_features: usize,
    /// How many ranked terms to return
    pub top_n: usize,
}

impl Default for TfIdfScorer {
    fn default() -> Self {
        Self {
            max_features: 100,
            top_n: 30,
        }
    }
}

impl TermScorer for TfIdfScorer {
    fn name(&self) -> &'static str {
        "tfidf"
    }

    fn score(&self, tokens: &[String]) -> Result<Vec<RankedTerm>, ScoringFailure> {
        let counts = count_terms(tokens, NgramRange::UnigramsAndBigrams, self.max_features);
        if counts.is_empty() {
            return Err(ScoringFailure::EmptyVocabulary);
        }

        let weights = tfidf_weights(&counts);
        debug!(vocabulary = counts.len(), "Built TF-IDF vector");

        Ok(rank_and_normalize(counts.zip_weights(&weights), self.top_n))
    }
}
