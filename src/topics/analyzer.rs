// Scoring orchestrator: picks a method, runs it, and falls back from the
// topic model to TF-IDF when the topic model yields nothing.
//
// Scorer failures never escape from here. They are logged and treated as
// an empty ranking; escalating "still empty" to the user is the caller's job.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::lda::LdaScorer;
use super::ranking::RankedTerm;
use super::tfidf::TfIdfScorer;
use super::traits::TermScorer;

/// Scoring strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Single-document TF-IDF over unigrams and bigrams (default)
    #[default]
    Tfidf,
    /// LDA topic model over unigrams
    Topic,
}

impl Method {
    /// Parse a caller-supplied selector. `"topic"` and `"lda"` select the
    /// topic model; anything else, including no selector, selects TF-IDF.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("topic") | Some("lda") => Method::Topic,
            _ => Method::Tfidf,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Tfidf => write!(f, "tfidf"),
            Method::Topic => write!(f, "topic"),
        }
    }
}

/// Immutable analyzer settings, fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Vocabulary cap for both scorers
    pub max_features: usize,
    /// Number of latent topics for the topic model
    pub n_topics: usize,
    /// Result cap
    pub top_n: usize,
    /// Below this many tokens the analyzer refuses to score
    pub min_tokens: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_features: 100,
            n_topics: 5,
            top_n: 30,
            min_tokens: 5,
        }
    }
}

/// Runs the scorers under the fallback policy.
pub struct TopicAnalyzer {
    config: AnalyzerConfig,
}

impl Default for TopicAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl TopicAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Rank the terms of `tokens` with `method`.
    ///
    /// Returns an empty ranking for fewer than `min_tokens` tokens, or when
    /// every applicable scorer came up empty.
    pub fn analyze(&self, tokens: &[String], method: Method) -> Vec<RankedTerm> {
        if tokens.len() < self.config.min_tokens {
            warn!(
                tokens = tokens.len(),
                required = self.config.min_tokens,
                "Insufficient tokens for analysis"
            );
            return Vec::new();
        }

        info!(tokens = tokens.len(), method = %method, "Analyzing tokens");

        match method {
            Method::Tfidf => self.score_tfidf(tokens, self.config.top_n),
            Method::Topic => {
                let ranked = self.score_topics(tokens, self.config.n_topics, self.config.top_n);
                if ranked.is_empty() {
                    info!("Topic model produced no terms, falling back to TF-IDF");
                    self.score_tfidf(tokens, self.config.top_n)
                } else {
                    ranked
                }
            }
        }
    }

    /// TF-IDF ranking; failures become an empty ranking.
    pub fn score_tfidf(&self, tokens: &[String], top_n: usize) -> Vec<RankedTerm> {
        let scorer = TfIdfScorer {
            max_features: self.config.max_features,
            top_n,
        };
        run_scorer(&scorer, tokens)
    }

    /// Topic-model ranking; failures become an empty ranking.
    pub fn score_topics(&self, tokens: &[String], n_topics: usize, top_n_words: usize) -> Vec<RankedTerm> {
        let scorer = LdaScorer {
            max_features: self.config.max_features,
            n_topics,
            top_n_words,
        };
        run_scorer(&scorer, tokens)
    }
}

fn run_scorer(scorer: &dyn TermScorer, tokens: &[String]) -> Vec<RankedTerm> {
    match scorer.score(tokens) {
        Ok(ranked) => ranked,
        Err(e) => {
            error!(scorer = scorer.name(), error = %e, "Term scoring failed");
            Vec::new()
        }
    }
}
