// Scorer-internal failures.
//
// None of these ever leave the orchestrator: they are logged and degraded
// to an empty ranking, which in turn may trigger the TF-IDF fallback.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoringFailure {
    /// No term survived vectorization (empty or all-filtered token stream).
    #[error("empty vocabulary; tokens may be empty or all filtered")]
    EmptyVocabulary,

    /// Too few distinct terms to separate latent topics.
    #[error("vocabulary of {size} term(s) is too small for a topic model")]
    DegenerateVocabulary { size: usize },

    /// The fit produced NaN or infinite parameters.
    #[error("topic model fit produced non-finite parameters")]
    NonFiniteFit,

    #[error("topic model error: {0}")]
    Model(String),
}
