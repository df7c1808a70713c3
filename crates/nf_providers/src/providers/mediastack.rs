use async_trait::async_trait;
use nf_core::{Article, NewsProvider, NewsQuery, Result, Source};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use super::utils;
use crate::config::ProviderConfig;

pub const NAME: &str = "Mediastack";

#[derive(Deserialize)]
struct MediastackResponse {
    /// Entries stay untyped so one bad entry cannot fail the whole response.
    data: Option<Vec<Value>>,
}

#[derive(Deserialize)]
struct MediastackArticle {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    image: Option<String>,
    published_at: Option<String>,
    source: Option<String>,
}

impl MediastackArticle {
    fn into_article(self) -> Option<Article> {
        let title = self.title?;
        let published_at = utils::parse_published_at(self.published_at.as_deref()?)?;
        Some(Article {
            title,
            description: self.description,
            url: self.url.unwrap_or_default(),
            image: self.image,
            published_at,
            source: Source::new(self.source.unwrap_or_else(|| NAME.to_string())),
        })
    }
}

/// Keyword and category lookups from mediastack.com.
pub struct MediastackProvider {
    client: Client,
    config: ProviderConfig,
}

impl MediastackProvider {
    pub fn new(client: Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }

    /// Hindi coverage is thin, so Hindi requests also pull English stories.
    pub fn languages(lang: &str) -> String {
        if lang == "hi" {
            "hi,en".to_string()
        } else {
            lang.to_string()
        }
    }

    pub(crate) fn request_url(&self, query: &NewsQuery) -> Result<Url> {
        let mut url = self.config.endpoint("news")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("access_key", &self.config.api_key);
            match query.search_term() {
                Some(q) => pairs.append_pair("keywords", q),
                None => pairs.append_pair("categories", &query.category),
            };
            pairs
                .append_pair("languages", &Self::languages(&query.lang))
                .append_pair("sort", "popularity");
        }
        Ok(url)
    }
}

#[async_trait]
impl NewsProvider for MediastackProvider {
    fn name(&self) -> &str {
        NAME
    }

    async fn fetch_articles(&self, query: &NewsQuery) -> Result<Vec<Article>> {
        let url = self.request_url(query)?;
        let response: MediastackResponse = utils::get_json(&self.client, NAME, url).await?;
        Ok(utils::normalize(
            NAME,
            response.data.unwrap_or_default(),
            MediastackArticle::into_article,
        ))
    }
}
