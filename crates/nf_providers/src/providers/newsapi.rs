use async_trait::async_trait;
use nf_core::{Article, NewsProvider, NewsQuery, Result, Source};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::utils;
use crate::config::ProviderConfig;

pub const NAME: &str = "NewsAPI";

/// The integrated access tier only serves English.
const SUPPORTED_LANG: &str = "en";
const HEADLINES_COUNTRY: &str = "us";

#[derive(Deserialize)]
struct NewsApiResponse {
    /// Entries stay untyped so one bad entry cannot fail the whole response.
    articles: Option<Vec<Value>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsApiArticle {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    url_to_image: Option<String>,
    published_at: Option<String>,
    source: Option<NewsApiSource>,
}

#[derive(Deserialize)]
struct NewsApiSource {
    name: Option<String>,
}

impl NewsApiArticle {
    fn into_article(self) -> Option<Article> {
        let title = self.title?;
        let published_at = utils::parse_published_at(self.published_at.as_deref()?)?;
        let source = self.source.and_then(|s| s.name).unwrap_or_else(|| NAME.to_string());
        Some(Article {
            title,
            description: self.description,
            url: self.url.unwrap_or_default(),
            image: self.url_to_image,
            published_at,
            source: Source::new(source),
        })
    }
}

/// Headlines and full-text search from newsapi.org.
pub struct NewsApiProvider {
    client: Client,
    config: ProviderConfig,
}

impl NewsApiProvider {
    pub fn new(client: Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }

    pub fn supports_lang(lang: &str) -> bool {
        lang == SUPPORTED_LANG
    }

    pub(crate) fn request_url(&self, query: &NewsQuery) -> Result<Url> {
        let path = if query.search_term().is_some() { "everything" } else { "top-headlines" };
        let mut url = self.config.endpoint(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            match query.search_term() {
                Some(q) => pairs.append_pair("q", q),
                None => pairs
                    .append_pair("country", HEADLINES_COUNTRY)
                    .append_pair("category", &query.category),
            };
            pairs.append_pair("apiKey", &self.config.api_key);
        }
        Ok(url)
    }
}

#[async_trait]
impl NewsProvider for NewsApiProvider {
    fn name(&self) -> &str {
        NAME
    }

    async fn fetch_articles(&self, query: &NewsQuery) -> Result<Vec<Article>> {
        if !Self::supports_lang(&query.lang) {
            debug!(provider = NAME, lang = %query.lang, "language not supported, skipping");
            return Ok(Vec::new());
        }

        let url = self.request_url(query)?;
        let response: NewsApiResponse = utils::get_json(&self.client, NAME, url).await?;
        Ok(utils::normalize(
            NAME,
            response.articles.unwrap_or_default(),
            NewsApiArticle::into_article,
        ))
    }
}
