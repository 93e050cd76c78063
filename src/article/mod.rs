// Article retrieval: download and HTML text extraction.

pub mod fetcher;
