// Unit tests for the scoring core.
//
// Checks the output invariants shared by both methods (weights in [0, 1],
// top weight 1.0, non-increasing order, length caps), determinism, and the
// topic -> TF-IDF fallback policy.

use newscloud::topics::analyzer::{AnalyzerConfig, Method, TopicAnalyzer};
use newscloud::topics::ranking::RankedTerm;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

/// 40 cycles of 8 distinct words with skewed frequencies:
/// economy x4, inflation x3, markets x2, five more x1 per cycle.
fn skewed_tokens() -> Vec<String> {
    let cycle = [
        "economy", "inflation", "economy", "markets", "economy", "inflation", "policy", "economy",
        "growth", "budget", "markets", "inflation", "tariffs", "currency",
    ];
    let mut tokens = Vec::new();
    for _ in 0..40 {
        tokens.extend(cycle.iter().map(|w| w.to_string()));
    }
    tokens
}

fn article_tokens() -> Vec<String> {
    words(&[
        "offshore", "wind", "turbine", "installations", "reached", "record", "levels", "offshore",
        "wind", "developers", "expect", "turbine", "prices", "falling", "grid", "operators",
        "warn", "grid", "capacity", "constraints", "offshore", "wind", "auctions", "delayed",
        "turbine", "manufacturers", "report", "supply", "chain", "pressure", "wind", "energy",
    ])
}

fn assert_ranking_invariants(ranked: &[RankedTerm], top_n: usize) {
    assert!(ranked.len() <= top_n);
    assert!(ranked.iter().all(|r| (0.0..=1.0).contains(&r.weight)));
    if let Some(first) = ranked.first() {
        assert_eq!(first.weight, 1.0);
    }
    assert!(
        ranked.windows(2).all(|w| w[0].weight >= w[1].weight),
        "weights must be non-increasing: {ranked:?}"
    );
}

// ============================================================
// TF-IDF path
// ============================================================

#[test]
fn tfidf_empty_tokens_is_empty_not_error() {
    let analyzer = TopicAnalyzer::default();
    assert!(analyzer.score_tfidf(&[], 30).is_empty());
}

#[test]
fn tfidf_skewed_cycle_ranks_most_frequent_first() {
    let analyzer = TopicAnalyzer::default();
    let ranked = analyzer.analyze(&skewed_tokens(), Method::Tfidf);

    assert_ranking_invariants(&ranked, 30);
    assert_eq!(ranked[0].term, "economy");
    assert_eq!(ranked[1].term, "inflation");
    assert_eq!(ranked[1].weight, 0.75);
    // 80 occurrences each; lexical tie-break puts the bigram first
    assert_eq!(ranked[2].term, "economy inflation");
    assert_eq!(ranked[3].term, "markets");
    assert_eq!(ranked[2].weight, 0.5);
    assert_eq!(ranked[3].weight, 0.5);
}

#[test]
fn tfidf_respects_vocabulary_cap() {
    let analyzer = TopicAnalyzer::new(AnalyzerConfig {
        max_features: 5,
        ..AnalyzerConfig::default()
    });
    let ranked = analyzer.analyze(&skewed_tokens(), Method::Tfidf);
    assert_eq!(ranked.len(), 5);
    assert_ranking_invariants(&ranked, 5);
}

#[test]
fn tfidf_respects_top_n() {
    let analyzer = TopicAnalyzer::default();
    let ranked = analyzer.score_tfidf(&article_tokens(), 7);
    assert_eq!(ranked.len(), 7);
    assert_ranking_invariants(&ranked, 7);
}

// ============================================================
// Topic path
// ============================================================

#[test]
fn topic_invariants_hold() {
    let analyzer = TopicAnalyzer::default();
    let tokens = article_tokens();
    let ranked = analyzer.score_topics(&tokens, 5, 30);

    assert!(!ranked.is_empty());
    assert_ranking_invariants(&ranked, 30);

    // unigrams only, so every term is a vocabulary word
    assert!(ranked.iter().all(|r| !r.term.contains(' ')));
    let distinct: std::collections::HashSet<&String> = tokens.iter().collect();
    assert!(ranked.len() <= distinct.len());
}

#[test]
fn topic_is_deterministic() {
    let analyzer = TopicAnalyzer::default();
    let tokens = article_tokens();
    let a = analyzer.analyze(&tokens, Method::Topic);
    let b = analyzer.analyze(&tokens, Method::Topic);
    assert_eq!(a, b);
}

#[test]
fn topic_more_topics_than_terms_still_fits() {
    let analyzer = TopicAnalyzer::default();
    let tokens = words(&["solar", "wind", "solar", "wind", "solar", "solar"]);
    let ranked = analyzer.score_topics(&tokens, 5, 30);
    assert!(ranked.len() <= 2);
    assert_ranking_invariants(&ranked, 30);
}

// ============================================================
// Orchestrator
// ============================================================

#[test]
fn topic_falls_back_to_tfidf_on_degenerate_vocabulary() {
    let analyzer = TopicAnalyzer::default();
    let tokens = words(&["hydrogen"; 12]);

    assert!(analyzer.score_topics(&tokens, 5, 30).is_empty());

    let via_topic = analyzer.analyze(&tokens, Method::Topic);
    let direct = analyzer.score_tfidf(&tokens, 30);
    assert!(!direct.is_empty());
    assert_eq!(via_topic, direct);
    assert_eq!(direct[0].term, "hydrogen");
    assert_eq!(direct[1].term, "hydrogen hydrogen");
}

#[test]
fn fewer_than_five_tokens_is_empty_for_both_methods() {
    let analyzer = TopicAnalyzer::default();
    let tokens = words(&["alpha", "bravo", "charlie", "delta"]);
    assert!(analyzer.analyze(&tokens, Method::Tfidf).is_empty());
    assert!(analyzer.analyze(&tokens, Method::Topic).is_empty());
}

#[test]
fn tfidf_is_deterministic() {
    let analyzer = TopicAnalyzer::default();
    let tokens = article_tokens();
    assert_eq!(
        analyzer.analyze(&tokens, Method::Tfidf),
        analyzer.analyze(&tokens, Method::Tfidf)
    );
}
