use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use futures::future::FutureExt;

use super::{ProviderError, SuggestionFuture, SuggestionProvider};

/// Default cap on returned candidates
pub const DEFAULT_LIMIT: usize = 50;

/// Fuzzy-matches queries against a fixed list of words
///
/// Used by the demo binary. An optional latency simulates a remote source
/// so out-of-order completion can be observed interactively.
#[derive(Clone)]
pub struct WordListProvider {
    words: Arc<Vec<String>>,
    latency: Option<Duration>,
    limit: usize,
}

impl fmt::Debug for WordListProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordListProvider")
            .field("words", &self.words.len())
            .field("latency", &self.latency)
            .field("limit", &self.limit)
            .finish()
    }
}

impl WordListProvider {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
            latency: None,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Load one word per line; blank lines and `#` comments are skipped
    pub fn from_file(path: &Path) -> Result<Self, ProviderError> {
        let content = std::fs::read_to_string(path)?;
        let words: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        log::debug!("Loaded {} words from {}", words.len(), path.display());
        Ok(Self::new(words))
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = (!latency.is_zero()).then_some(latency);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Rank words against `query`, best match first
    ///
    /// Ties keep shorter words first, then alphabetical order.
    pub fn rank(&self, query: &str) -> Vec<String> {
        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(&String, i64)> = self
            .words
            .iter()
            .filter_map(|word| matcher.fuzzy_match(word, query).map(|score| (word, score)))
            .collect();

        scored.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| a.0.len().cmp(&b.0.len()))
                .then_with(|| a.0.cmp(b.0))
        });

        scored
            .into_iter()
            .take(self.limit)
            .map(|(word, _)| word.clone())
            .collect()
    }
}

impl SuggestionProvider for WordListProvider {
    fn suggest(&self, query: &str) -> SuggestionFuture {
        let provider = self.clone();
        let query = query.to_string();
        async move {
            if let Some(latency) = provider.latency {
                tokio::time::sleep(latency).await;
            }
            Ok(provider.rank(&query))
        }
        .boxed()
    }
}

#[cfg(test)]
#[path = "word_list_tests.rs"]
mod word_list_tests;
