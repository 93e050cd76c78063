// Article fetcher: downloads a news page and pulls out its title and body.
//
// Two extraction strategies run over the same HTML: a main-content pass
// that only looks inside <article>/<main>, then a whole-page paragraph pass
// that skips navigation and page chrome. The first to yield enough text wins.

use std::time::Duration;

use anyhow::{Context, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};

use crate::pipeline::AnalysisError;

/// Extracted text must be longer than this to count as an article.
pub const MIN_ARTICLE_CHARS: usize = 100;

/// Default browser-like user agent; some news sites refuse obvious bots.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const BOILERPLATE_TAGS: &[&str] = &["script", "style", "nav", "footer", "header"];

/// A fetched article.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub text: String,
}

/// Thin reqwest wrapper for article downloads.
pub struct ArticleFetcher {
    client: reqwest::Client,
}

impl ArticleFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// Download `url` and extract its article text.
    pub async fn fetch_article(&self, url: &str) -> Result<Article, AnalysisError> {
        let html = match self.download(url).await {
            Ok(html) => html,
            Err(e) => {
                warn!(url = url, error = %e, "Article download failed");
                return Err(AnalysisError::FetchFailed(
                    "Could not extract article content from the provided URL".to_string(),
                ));
            }
        };

        let article = extract_article(&html).ok_or_else(|| {
            AnalysisError::FetchFailed(
                "Could not extract article content from the provided URL".to_string(),
            )
        })?;

        info!(title = %article.title, chars = article.text.chars().count(), "Fetched article");
        Ok(article)
    }

    async fn download(&self, url: &str) -> Result<String> {
        debug!(url = url, "GET article");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request failed: {url}"))?;

        if !response.status().is_success() {
            anyhow::bail!("{url} returned {}", response.status());
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {url}"))
    }
}

/// Run both extraction strategies over `html`.
pub fn extract_article(html: &str) -> Option<Article> {
    let doc = Html::parse_document(html);
    extract_main_content(&doc).or_else(|| {
        debug!("Main-content extraction came up short, trying all paragraphs");
        extract_paragraphs(&doc)
    })
}

/// Paragraphs inside <article> or <main>, titled from og:title or <title>.
fn extract_main_content(doc: &Html) -> Option<Article> {
    let sel = Selector::parse("article p, main p").ok()?;
    let text = join_paragraphs(doc.select(&sel));
    if text.chars().count() <= MIN_ARTICLE_CHARS {
        return None;
    }

    let title = first_attr(doc, r#"meta[property="og:title"]"#, "content")
        .or_else(|| first_text(doc, "title"))
        .unwrap_or_else(|| "Untitled".to_string());
    Some(Article { title, text })
}

/// Every <p> outside page chrome, titled from <title> or the first <h1>.
fn extract_paragraphs(doc: &Html) -> Option<Article> {
    let sel = Selector::parse("p").ok()?;
    let text = join_paragraphs(doc.select(&sel).filter(|p| !inside_boilerplate(p)));
    if text.chars().count() <= MIN_ARTICLE_CHARS {
        return None;
    }

    let title = first_text(doc, "title")
        .or_else(|| first_text(doc, "h1"))
        .unwrap_or_else(|| "Untitled".to_string());
    Some(Article { title, text })
}

fn join_paragraphs<'a>(paragraphs: impl Iterator<Item = ElementRef<'a>>) -> String {
    paragraphs
        .map(|p| p.text().collect::<String>())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn inside_boilerplate(el: &ElementRef) -> bool {
    el.ancestors().any(|node| {
        node.value()
            .as_element()
            .is_some_and(|e| BOILERPLATE_TAGS.contains(&e.name()))
    })
}

fn first_text(doc: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    doc.select(&sel)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .find(|t| !t.is_empty())
}

fn first_attr(doc: &Html, selector: &str, attr: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    doc.select(&sel)
        .filter_map(|el| el.value().attr(attr))
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}
