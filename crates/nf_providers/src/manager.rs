use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use nf_core::{Article, NewsProvider, NewsQuery, Result};
use tracing::{error, info, warn};

use crate::config::ProvidersConfig;
use crate::pipeline;
use crate::providers::default_providers;

/// Fans one query out to every registered provider and merges the results.
pub struct ProviderManager {
    providers: Vec<Arc<dyn NewsProvider>>,
    timeout: Option<Duration>,
}

impl Default for ProviderManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderManager {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            timeout: None,
        }
    }

    /// The per-provider deadline comes from `config.timeout`; a provider that
    /// misses it contributes nothing.
    pub fn from_config(config: &ProvidersConfig) -> Result<Self> {
        let mut manager = Self::new();
        for provider in default_providers(config)? {
            manager.add_provider(provider);
        }
        manager.timeout = config.timeout;
        Ok(manager)
    }

    pub fn add_provider(&mut self, provider: Arc<dyn NewsProvider>) {
        self.providers.push(provider);
    }

    pub fn providers(&self) -> &[Arc<dyn NewsProvider>] {
        &self.providers
    }

    /// Runs every provider concurrently and waits for all of them. The result
    /// holds one list per provider, in registration order.
    pub async fn fetch_all(&self, query: &NewsQuery) -> Vec<Vec<Article>> {
        let handles: Vec<_> = self
            .providers
            .iter()
            .map(|provider| {
                let provider = Arc::clone(provider);
                let query = query.clone();
                let timeout = self.timeout;
                tokio::spawn(async move {
                    let Some(limit) = timeout else {
                        return provider.fetch(&query).await;
                    };
                    match tokio::time::timeout(limit, provider.fetch(&query)).await {
                        Ok(articles) => articles,
                        Err(_) => {
                            warn!(
                                provider = provider.name(),
                                timeout_ms = limit.as_millis() as u64,
                                "provider timed out"
                            );
                            Vec::new()
                        }
                    }
                })
            })
            .collect();

        join_all(handles)
            .await
            .into_iter()
            .zip(&self.providers)
            .map(|(outcome, provider)| match outcome {
                Ok(articles) => articles,
                Err(e) => {
                    error!(provider = provider.name(), error = %e, "provider task failed");
                    Vec::new()
                }
            })
            .collect()
    }

    /// One deduplicated, newest-first feed for `query`.
    pub async fn aggregate(&self, query: &NewsQuery) -> Vec<Article> {
        let results = self.fetch_all(query).await;
        let fetched: usize = results.iter().map(Vec::len).sum();
        let articles = pipeline::merge(results);
        info!(
            category = %query.category,
            lang = %query.lang,
            search = query.search_term().unwrap_or(""),
            fetched,
            returned = articles.len(),
            "aggregated news feed"
        );
        articles
    }
}
