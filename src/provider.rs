//! Suggestion providers
//!
//! A provider maps a query to an ordered list of candidates, asynchronously.
//! The controller never inspects how candidates are ranked; it only decides
//! whether a finished result is still relevant.

use std::future::Future;

use futures::future::{BoxFuture, FutureExt};
use thiserror::Error;

mod word_list;

pub use word_list::WordListProvider;

/// Errors a provider may report
///
/// The controller degrades every variant to "no suggestions".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The lookup ran and failed
    #[error("Suggestion lookup failed: {0}")]
    Failed(String),

    /// The source could not be reached or went away mid-request
    #[error("Suggestion source unavailable: {0}")]
    Unavailable(String),

    /// Reading the backing data failed
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ProviderError {
    fn from(err: std::io::Error) -> Self {
        ProviderError::Io(err.to_string())
    }
}

/// Future returned by [`SuggestionProvider::suggest`]
pub type SuggestionFuture = BoxFuture<'static, Result<Vec<String>, ProviderError>>;

/// Source of ranked candidates for a query
pub trait SuggestionProvider: Send + Sync + 'static {
    /// Start a lookup for `query`
    ///
    /// The returned future owns everything it needs; it may outlive the
    /// call and is dropped without polling to completion when superseded.
    fn suggest(&self, query: &str) -> SuggestionFuture;
}

/// Adapter turning an async closure into a provider
pub struct FnProvider<F> {
    f: F,
}

impl<F, Fut> FnProvider<F>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<String>, ProviderError>> + Send + 'static,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F, Fut> SuggestionProvider for FnProvider<F>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<String>, ProviderError>> + Send + 'static,
{
    fn suggest(&self, query: &str) -> SuggestionFuture {
        (self.f)(query.to_string()).boxed()
    }
}

impl<F> std::fmt::Debug for FnProvider<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnProvider").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
