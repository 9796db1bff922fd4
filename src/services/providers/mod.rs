//! Title lookup provider abstraction
//!
//! The resolver only needs "search this title as this kind of media"; the HTTP
//! details of the lookup service live behind this trait so the export loop can be
//! driven by a fake in tests.

use crate::{
    error::AppResult,
    models::{MediaKind, OmdbSearchResponse},
};

pub mod omdb;

pub use omdb::OmdbProvider;

/// Trait for title search providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TitleSearchProvider: Send + Sync {
    /// Search for a title, restricted to the given kind of media
    ///
    /// Transport failures, non-2xx statuses and undecodable bodies are returned as
    /// errors. A well-formed "no match" answer is an `Ok` response.
    async fn search(&self, title: &str, kind: MediaKind) -> AppResult<OmdbSearchResponse>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
