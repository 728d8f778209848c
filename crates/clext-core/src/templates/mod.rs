//! Template retrieval from the remote repository

pub mod fetcher;

pub use fetcher::TemplateFetcher;
