use async_trait::async_trait;
use nf_core::{Article, NewsProvider, NewsQuery, Result, Source};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use super::utils;
use crate::config::ProviderConfig;

pub const NAME: &str = "GNews";

#[derive(Deserialize)]
struct GNewsResponse {
    /// Entries stay untyped so one bad entry cannot fail the whole response.
    articles: Option<Vec<Value>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GNewsArticle {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    image: Option<String>,
    published_at: Option<String>,
    source: Option<GNewsSource>,
}

#[derive(Deserialize)]
struct GNewsSource {
    name: Option<String>,
}

impl GNewsArticle {
    fn into_article(self) -> Option<Article> {
        let title = self.title?;
        let published_at = utils::parse_published_at(self.published_at.as_deref()?)?;
        let source = self.source.and_then(|s| s.name).unwrap_or_else(|| NAME.to_string());
        Some(Article {
            title,
            description: self.description,
            url: self.url.unwrap_or_default(),
            image: self.image,
            published_at,
            source: Source::new(source),
        })
    }
}

/// Topic headlines and search from gnews.io.
pub struct GNewsProvider {
    client: Client,
    config: ProviderConfig,
}

impl GNewsProvider {
    pub fn new(client: Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }

    /// GNews has no "nation" topic.
    fn topic(category: &str) -> &str {
        if category == "nation" {
            "general"
        } else {
            category
        }
    }

    pub(crate) fn request_url(&self, query: &NewsQuery) -> Result<Url> {
        let (path, key, value) = match query.search_term() {
            Some(q) => ("search", "q", q),
            None => ("top-headlines", "topic", Self::topic(&query.category)),
        };
        let mut url = self.config.endpoint(path)?;
        url.query_pairs_mut()
            .append_pair(key, value)
            .append_pair("lang", &query.lang)
            .append_pair("token", &self.config.api_key);
        Ok(url)
    }
}

#[async_trait]
impl NewsProvider for GNewsProvider {
    fn name(&self) -> &str {
        NAME
    }

    async fn fetch_articles(&self, query: &NewsQuery) -> Result<Vec<Article>> {
        let url = self.request_url(query)?;
        let response: GNewsResponse = utils::get_json(&self.client, NAME, url).await?;
        Ok(utils::normalize(
            NAME,
            response.articles.unwrap_or_default(),
            GNewsArticle::into_article,
        ))
    }
}
