// Text normalizer: lowercasing, URL/email stripping, tokenization and
// stop word filtering.
//
// The normalizer is built once at startup and shared read-only between
// requests. Every step is total: bad input degrades to fewer tokens, never
// to an error.

use std::collections::HashSet;

use anyhow::{Context, Result};
use regex_lite::Regex;
use stop_words::{get, LANGUAGE};
use unicode_segmentation::UnicodeSegmentation;

/// Shortest token kept. Anything of three characters or fewer is dropped.
pub const MIN_TOKEN_CHARS: usize = 4;

/// News-generic words filtered on top of the standard English list:
/// reporting verbs, vague quantities and time words, honorifics.
pub const SUPPLEMENTARY_STOP_WORDS: &[&str] = &[
    "said", "also", "would", "could", "may", "might", "one", "two", "new", "first", "last",
    "made", "like", "get", "got", "take", "took", "make", "come", "came", "go", "went", "know",
    "think", "see", "saw", "want", "use", "find", "give", "tell", "ask", "work", "seem", "feel",
    "try", "leave", "call", "mr", "ms", "mrs", "dr",
];

/// Cleans raw article text and splits it into scoring tokens.
pub struct TextNormalizer {
    stop_words: HashSet<String>,
    url_pattern: Regex,
    email_pattern: Regex,
}

impl TextNormalizer {
    /// Build a normalizer with the English stop word list plus
    /// [`SUPPLEMENTARY_STOP_WORDS`].
    pub fn new() -> Result<Self> {
        let mut stop_words: HashSet<String> = get(LANGUAGE::English).into_iter().collect();
        stop_words.extend(SUPPLEMENTARY_STOP_WORDS.iter().map(|w| w.to_string()));

        Ok(Self {
            stop_words,
            url_pattern: Regex::new(r"http\S+|www\S+|https\S+")
                .context("Failed to compile URL pattern")?,
            email_pattern: Regex::new(r"\S+@\S+").context("Failed to compile email pattern")?,
        })
    }

    /// Full preprocessing: clean, tokenize, filter.
    ///
    /// The result may be empty. Enforcing a minimum token count is the
    /// caller's job.
    pub fn normalize(&self, raw_text: &str) -> Vec<String> {
        let cleaned = self.clean_text(raw_text);
        self.tokenize_and_filter(&cleaned)
    }

    /// Lowercase, strip URLs and emails, keep only `a-z` and whitespace,
    /// collapse whitespace.
    pub fn clean_text(&self, raw_text: &str) -> String {
        // `\S` in the patterns is ASCII-only, so fold Unicode spaces (e.g.
        // U+00A0 from `&nbsp;`) to plain spaces first.
        let lowered: String = raw_text
            .to_lowercase()
            .chars()
            .map(|c| if c.is_whitespace() { ' ' } else { c })
            .collect();
        let without_urls = self.url_pattern.replace_all(&lowered, "");
        let without_emails = self.email_pattern.replace_all(&without_urls, "");

        let letters_only: String = without_emails
            .chars()
            .map(|c| {
                if c.is_ascii_lowercase() || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        letters_only.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Split cleaned text into words and drop stop words and short tokens.
    pub fn tokenize_and_filter(&self, cleaned: &str) -> Vec<String> {
        cleaned
            .unicode_words()
            .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|word| !self.stop_words.contains(*word))
            .map(str::to_string)
            .collect()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}
