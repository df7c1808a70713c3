use async_trait::async_trait;
use tracing::{debug, warn};

use crate::types::{Article, NewsQuery};
use crate::Result;

#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Display name of the upstream, also used as the fallback outlet name
    fn name(&self) -> &str;

    /// Performs the upstream lookup. Errors stay inside the provider; callers
    /// go through [`NewsProvider::fetch`].
    async fn fetch_articles(&self, query: &NewsQuery) -> Result<Vec<Article>>;

    /// Fetches articles for `query`, degrading any failure to an empty list.
    async fn fetch(&self, query: &NewsQuery) -> Vec<Article> {
        match self.fetch_articles(query).await {
            Ok(articles) => {
                debug!(provider = self.name(), count = articles.len(), "fetched articles");
                articles
            }
            Err(e) => {
                warn!(provider = self.name(), error = %e, "provider fetch failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Source;
    use crate::Error;
    use chrono::Utc;

    struct FailingProvider;
    struct StaticProvider;

    #[async_trait]
    impl NewsProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn fetch_articles(&self, _query: &NewsQuery) -> Result<Vec<Article>> {
            Err(Error::Provider("upstream unavailable".to_string()))
        }
    }

    #[async_trait]
    impl NewsProvider for StaticProvider {
        fn name(&self) -> &str {
            "static"
        }

        async fn fetch_articles(&self, _query: &NewsQuery) -> Result<Vec<Article>> {
            Ok(vec![Article {
                title: "Only story".to_string(),
                description: None,
                url: "https://example.com".to_string(),
                image: None,
                published_at: Utc::now(),
                source: Source::new(self.name()),
            }])
        }
    }

    #[tokio::test]
    async fn test_fetch_swallows_errors() {
        let articles = FailingProvider.fetch(&NewsQuery::default()).await;
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_passes_articles_through() {
        let articles = StaticProvider.fetch(&NewsQuery::default()).await;
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].source.name, "static");
    }
}
