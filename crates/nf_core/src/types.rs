use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news story normalized from any upstream provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub source: Source,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
}

impl Source {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Response envelope shared by the HTTP endpoint and the CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsFeed {
    pub articles: Vec<Article>,
}

impl From<Vec<Article>> for NewsFeed {
    fn from(articles: Vec<Article>) -> Self {
        Self { articles }
    }
}

fn default_category() -> String {
    "general".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

/// One logical lookup, fanned out unchanged to every provider.
///
/// `category` and `lang` are passed through without validation; each provider
/// decides what it can serve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsQuery {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default)]
    pub q: Option<String>,
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self {
            category: default_category(),
            lang: default_lang(),
            q: None,
        }
    }
}

impl NewsQuery {
    pub fn new(category: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            lang: lang.into(),
            q: None,
        }
    }

    pub fn with_search(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// The free-text term, if one was given. A blank term counts as absent,
    /// so the lookup falls back to the category.
    pub fn search_term(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.trim().is_empty())
    }
}
