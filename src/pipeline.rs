// Analysis pipeline: the caller side of the scoring core.
//
// Normalizes article text, enforces the minimum-token gate, runs the
// analyzer and turns an empty result into a user-facing error. This is the
// only place scoring emptiness becomes a failure.

use thiserror::Error;
use tracing::info;

use crate::text::normalizer::TextNormalizer;
use crate::topics::analyzer::{Method, TopicAnalyzer};
use crate::topics::ranking::RankedTerm;

/// Default minimum number of tokens after cleaning.
pub const DEFAULT_MIN_TOKENS: usize = 10;

/// Caller-visible analysis failures.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid article URL: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    FetchFailed(String),

    #[error(
        "Article content too short for meaningful analysis: found {found} meaningful words \
         after cleaning, need at least {required}. Please provide a longer article URL."
    )]
    InputTooShort { found: usize, required: usize },

    #[error("Could not extract meaningful topics from article")]
    NoTopicsExtracted,

    #[error("An error occurred while analyzing the article: {0}")]
    Unexpected(String),
}

impl AnalysisError {
    /// True for failures caused by the request (bad URL, unusable article).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AnalysisError::Unexpected(_))
    }
}

/// Normalizer, analyzer and the minimum-token gate, shared read-only.
pub struct Pipeline {
    normalizer: TextNormalizer,
    analyzer: TopicAnalyzer,
    min_tokens: usize,
}

impl Pipeline {
    pub fn new(normalizer: TextNormalizer, analyzer: TopicAnalyzer, min_tokens: usize) -> Self {
        Self {
            normalizer,
            analyzer,
            min_tokens,
        }
    }

    /// Turn raw article text into a ranked word cloud.
    pub fn analyze_text(&self, text: &str, method: Method) -> Result<Vec<RankedTerm>, AnalysisError> {
        let tokens = self.normalizer.normalize(text);
        if tokens.len() < self.min_tokens {
            return Err(AnalysisError::InputTooShort {
                found: tokens.len(),
                required: self.min_tokens,
            });
        }
        info!(tokens = tokens.len(), "Preprocessed article text");

        let ranked = self.analyzer.analyze(&tokens, method);
        if ranked.is_empty() {
            return Err(AnalysisError::NoTopicsExtracted);
        }

        info!(keywords = ranked.len(), "Extracted keywords");
        Ok(ranked)
    }
}
