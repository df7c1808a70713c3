use std::sync::Arc;

use nf_core::{NewsProvider, Result};
use reqwest::Client;

use crate::config::ProvidersConfig;

pub mod gnews;
pub mod mediastack;
pub mod newsapi;

pub use gnews::GNewsProvider;
pub use mediastack::MediastackProvider;
pub use newsapi::NewsApiProvider;

const USER_AGENT: &str = concat!("newsfeed/", env!("CARGO_PKG_VERSION"));

/// Builds one shared HTTP client for all upstreams.
pub fn http_client() -> Result<Client> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// Returns every provider in fan-out order.
pub fn default_providers(config: &ProvidersConfig) -> Result<Vec<Arc<dyn NewsProvider>>> {
    let client = http_client()?;
    Ok(vec![
        Arc::new(GNewsProvider::new(client.clone(), config.gnews.clone())),
        Arc::new(NewsApiProvider::new(client.clone(), config.newsapi.clone())),
        Arc::new(MediastackProvider::new(client, config.mediastack.clone())),
    ])
}

/// Common utilities for providers
pub(crate) mod utils {
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
    use nf_core::{Article, Error, Result};
    use reqwest::Client;
    use serde::de::DeserializeOwned;
    use serde_json::Value;
    use tracing::debug;
    use url::Url;

    /// Request URLs carry credentials, so they never reach error messages.
    fn redact(e: reqwest::Error) -> Error {
        Error::Http(e.without_url())
    }

    pub async fn get_json<T: DeserializeOwned>(client: &Client, provider: &str, url: Url) -> Result<T> {
        let response = client.get(url).send().await.map_err(redact)?;
        let status = response.status();
        if !status.is_success() {
            debug!(provider, %status, "upstream returned non-success status");
        }
        let body = response.text().await.map_err(redact)?;
        serde_json::from_str(&body).map_err(|e| {
            Error::Provider(format!("{} answered {} with an undecodable body: {}", provider, status, e))
        })
    }

    pub fn parse_published_at(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                    .ok()
                    .map(|naive| Utc.from_utc_datetime(&naive))
            })
    }

    /// Decodes raw upstream entries one by one and maps them to articles.
    /// An entry that does not decode, or lacks a title or a usable
    /// timestamp, is dropped without affecting the rest of the batch.
    pub fn normalize<T: DeserializeOwned>(
        provider: &str,
        raw: Vec<Value>,
        map: impl Fn(T) -> Option<Article>,
    ) -> Vec<Article> {
        let total = raw.len();
        let articles: Vec<Article> = raw
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<T>(entry).ok())
            .filter_map(map)
            .collect();
        if articles.len() < total {
            debug!(provider, dropped = total - articles.len(), "dropped malformed articles");
        }
        articles
    }
}
