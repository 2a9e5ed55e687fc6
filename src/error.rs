use thiserror::Error;

/// Errors raised while attaching a suggestion dropdown or setting up its host.
///
/// These fail fast at construction time. Provider failures are a separate
/// type ([`crate::provider::ProviderError`]) because they never escape the
/// controller.
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("Suggestion surface cannot be mounted: {0}")]
    MountUnavailable(String),

    #[error("Autocomplete requires a single-line input, found {0} lines")]
    NotSingleLine(usize),

    #[error("No async runtime available; attach the controller from inside a tokio runtime")]
    NoRuntime,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
