// Term scorer trait: the seam between the orchestrator and the two
// scoring strategies (TF-IDF and LDA topics).

use super::error::ScoringFailure;
use super::ranking::RankedTerm;

/// Scores a single document's token stream into a ranked, max-normalized
/// list of terms.
///
/// Implementations must be deterministic and hold no mutable state, so a
/// single scorer can serve concurrent requests.
pub trait TermScorer: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Rank the terms of `tokens`. `Ok(vec![])` means nothing scored above
    /// zero; `Err` means vectorization or model fitting failed.
    fn score(&self, tokens: &[String]) -> Result<Vec<RankedTerm>, ScoringFailure>;
}
