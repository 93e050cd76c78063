// POST /analyze: fetch an article and return its word cloud.
//
// The URL is validated before any network access. Scoring is CPU-bound, so
// it runs on the blocking pool instead of an async worker.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::pipeline::AnalysisError;
use crate::topics::analyzer::Method;
use crate::topics::ranking::RankedTerm;
use crate::web::{api_error, AppState};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
    /// "tfidf" (default), "topic" or "lda"
    #[serde(default)]
    pub method: Option<String>,
}

/// Single word in the word cloud.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WordCloudItem {
    pub word: String,
    pub weight: f64,
}

impl From<RankedTerm> for WordCloudItem {
    fn from(term: RankedTerm) -> Self {
        Self {
            word: term.term,
            weight: term.weight,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub url: String,
    pub title: Option<String>,
    pub words: Vec<WordCloudItem>,
    pub total_words: usize,
    pub message: Option<String>,
}

/// POST /analyze
pub async fn analyze_article(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            error!(error = %rejection, "Malformed analysis request");
            return api_error(rejection.status(), &rejection.body_text());
        }
    };
    info!(url = %request.url, "Received analysis request");

    match run_analysis(&state, &request).await {
        Ok(response) => Json(response).into_response(),
        Err(e) if e.is_client_error() => {
            error!(error = %e, "Validation error");
            api_error(StatusCode::BAD_REQUEST, &e.to_string())
        }
        Err(e) => {
            error!(error = %e, "Unexpected error");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

async fn run_analysis(
    state: &AppState,
    request: &AnalyzeRequest,
) -> Result<AnalysisResponse, AnalysisError> {
    let url = validate_url(&request.url)?;
    let method = Method::from_selector(request.method.as_deref());

    let article = state.fetcher.fetch_article(&url).await?;

    let pipeline = state.pipeline.clone();
    let text = article.text;
    let ranked = tokio::task::spawn_blocking(move || pipeline.analyze_text(&text, method))
        .await
        .map_err(|e| AnalysisError::Unexpected(e.to_string()))??;

    let words: Vec<WordCloudItem> = ranked.into_iter().map(WordCloudItem::from).collect();
    Ok(AnalysisResponse {
        success: true,
        url,
        title: Some(article.title),
        total_words: words.len(),
        words,
        message: Some("Analysis completed successfully".to_string()),
    })
}

/// Accept only absolute http(s) URLs.
pub fn validate_url(raw: &str) -> Result<String, AnalysisError> {
    let parsed =
        reqwest::Url::parse(raw.trim()).map_err(|e| AnalysisError::InvalidUrl(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(parsed.to_string()),
        scheme => Err(AnalysisError::InvalidUrl(format!(
            "unsupported scheme '{scheme}', expected http or https"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://example.com/news/story").is_ok());
        assert!(validate_url("  http://example.com ").is_ok());
        assert!(validate_url("ftp://example.com/file").is_err());
        assert!(validate_url("not a url").is_err());
    }

    #[test]
    fn test_word_cloud_item_from_ranked_term() {
        let item = WordCloudItem::from(RankedTerm {
            term: "turbine".to_string(),
            weight: 0.5,
        });
        assert_eq!(item.word, "turbine");
        assert_eq!(item.weight, 0.5);
    }
}
