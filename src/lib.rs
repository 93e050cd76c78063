// newscloud: keyword and topic word clouds for news articles
//
// This is the library root. The scoring core lives in `text` and `topics`;
// `article`, `pipeline` and `web` are the glue that feeds it real articles.

pub mod article;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod text;
pub mod topics;

#[cfg(feature = "web")]
pub mod web;
