// Topic extraction: vectorization, TF-IDF and LDA scoring, and the
// orchestrator that ties them together.

pub mod analyzer;
pub mod error;
pub mod lda;
pub mod ranking;
pub mod tfidf;
pub mod traits;
pub mod vectorizer;
