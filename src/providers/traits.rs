//! Provider traits and types

use crate::error::ProviderError;
use crate::results::SearchResult;
use crate::search::{Category, SearchQuery};
use async_trait::async_trait;
use tokio::time::Instant;

/// Capability contract implemented by every search category backend
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Provider name, used for logging
    fn name(&self) -> &str;

    /// The one category this provider answers
    fn category(&self) -> Category;

    /// Answer a validated query.
    ///
    /// `deadline` bounds the whole call. Implementations pass the remaining
    /// budget to their backing store; the dispatcher additionally stops
    /// waiting once the deadline passes.
    async fn search(
        &self,
        query: &SearchQuery,
        deadline: Instant,
    ) -> Result<Vec<SearchResult>, ProviderError>;

    /// Reject queries addressed to another category
    fn check_category(&self, query: &SearchQuery) -> Result<(), ProviderError> {
        if query.category == self.category() {
            Ok(())
        } else {
            Err(ProviderError::invalid_category(self.category(), query.category))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderErrorKind;

    struct EchoProvider;

    #[async_trait]
    impl SearchProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        fn category(&self) -> Category {
            Category::Users
        }

        async fn search(
            &self,
            query: &SearchQuery,
            _deadline: Instant,
        ) -> Result<Vec<SearchResult>, ProviderError> {
            self.check_category(query)?;
            Ok(vec![SearchResult::new("1", query.text.clone())])
        }
    }

    #[tokio::test]
    async fn test_check_category() {
        let provider = EchoProvider;
        let deadline = Instant::now();

        let ok = provider
            .search(&SearchQuery::new("jane", Category::Users), deadline)
            .await
            .unwrap();
        assert_eq!(ok[0].title, "jane");

        let err = provider
            .search(&SearchQuery::new("jane", Category::Places), deadline)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ProviderErrorKind::InvalidCategory);
    }
}
