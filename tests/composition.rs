// Composition tests: raw text through the whole pipeline.
//
// Exercises normalizer -> analyzer -> caller-side gates without any network
// calls: the same path the HTTP handler and the `text` CLI command take.

use newscloud::article::fetcher::extract_article;
use newscloud::pipeline::{AnalysisError, Pipeline, DEFAULT_MIN_TOKENS};
use newscloud::text::normalizer::TextNormalizer;
use newscloud::topics::analyzer::{AnalyzerConfig, Method, TopicAnalyzer};

const ARTICLE: &str = "Offshore wind developers installed a record number of turbines \
    this quarter, according to figures published on Tuesday. Offshore wind capacity \
    grew fastest in the North Sea, where turbine manufacturers reported full order \
    books. Grid operators warned that grid connections remain the main bottleneck \
    for offshore wind, and several auctions for offshore wind leases were delayed. \
    Turbine prices have fallen, but grid upgrades will take years. Read more at \
    https://example.com/wind or email desk@example.com.";

fn pipeline(min_tokens: usize) -> Pipeline {
    Pipeline::new(
        TextNormalizer::new().unwrap(),
        TopicAnalyzer::new(AnalyzerConfig::default()),
        min_tokens,
    )
}

#[test]
fn article_text_to_tfidf_cloud() {
    let terms = pipeline(DEFAULT_MIN_TOKENS)
        .analyze_text(ARTICLE, Method::Tfidf)
        .unwrap();

    assert!(!terms.is_empty());
    assert!(terms.len() <= 30);
    assert_eq!(terms[0].weight, 1.0);
    assert!(terms.windows(2).all(|w| w[0].weight >= w[1].weight));
    assert!(terms.iter().any(|t| t.term == "offshore wind"));
    assert!(terms.iter().all(|t| !t.term.contains("example")));
}

#[test]
fn article_text_to_topic_cloud() {
    let terms = pipeline(DEFAULT_MIN_TOKENS)
        .analyze_text(ARTICLE, Method::Topic)
        .unwrap();

    assert!(!terms.is_empty());
    assert_eq!(terms[0].weight, 1.0);
    assert!(terms.iter().all(|t| (0.0..=1.0).contains(&t.weight)));
}

#[test]
fn short_article_is_input_too_short() {
    let err = pipeline(DEFAULT_MIN_TOKENS)
        .analyze_text("Turbines spin. Offshore wind grows.", Method::Tfidf)
        .unwrap_err();
    assert!(matches!(err, AnalysisError::InputTooShort { required: 10, .. }));
    assert!(err.to_string().contains("too short"));
}

#[test]
fn empty_ranking_is_no_topics_extracted() {
    // With the caller gate disabled, the analyzer's own 5-token floor is
    // what rejects the text.
    let err = pipeline(0)
        .analyze_text("Turbines spin offshore.", Method::Tfidf)
        .unwrap_err();
    assert!(matches!(err, AnalysisError::NoTopicsExtracted));
    assert!(err.is_client_error());
}

#[test]
fn extracted_html_feeds_the_pipeline() {
    let html = format!("<html><head><title>Wind</title></head><body><article><p>{ARTICLE}</p></article></body></html>");
    let article = extract_article(&html).unwrap();
    assert_eq!(article.title, "Wind");

    let terms = pipeline(DEFAULT_MIN_TOKENS)
        .analyze_text(&article.text, Method::Tfidf)
        .unwrap();
    assert_eq!(terms[0].weight, 1.0);
}
