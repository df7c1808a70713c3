use std::fmt;
use std::time::Duration;

use nf_core::{Error, Result};
use url::Url;

use crate::providers::{gnews, mediastack, newsapi};

pub const GNEWS_BASE_URL: &str = "https://gnews.io/api/v4";
pub const NEWSAPI_BASE_URL: &str = "https://newsapi.org/v2";
pub const MEDIASTACK_BASE_URL: &str = "http://api.mediastack.com/v1";

/// Credentials and location of one upstream.
#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: Url,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(format!("{} cannot be used as a base URL", base_url)));
        }
        Ok(Self {
            api_key: api_key.into(),
            base_url,
        })
    }

    pub fn with_base_url(self, base_url: &str) -> Result<Self> {
        Self::new(self.api_key, base_url)
    }

    pub fn has_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Appends `path` to the base URL, keeping any prefix such as `/api/v4`.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(path);
        Ok(url)
    }
}

/// Everything needed to build the provider set.
#[derive(Debug, Clone)]
pub struct ProvidersConfig {
    pub gnews: ProviderConfig,
    pub newsapi: ProviderConfig,
    pub mediastack: ProviderConfig,
    /// Per-provider deadline. `None` waits for the slowest upstream.
    pub timeout: Option<Duration>,
}

impl ProvidersConfig {
    /// Builds a config against the public upstream endpoints.
    pub fn new(
        gnews_key: impl Into<String>,
        newsapi_key: impl Into<String>,
        mediastack_key: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            gnews: ProviderConfig::new(gnews_key, GNEWS_BASE_URL)?,
            newsapi: ProviderConfig::new(newsapi_key, NEWSAPI_BASE_URL)?,
            mediastack: ProviderConfig::new(mediastack_key, MEDIASTACK_BASE_URL)?,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Provider names paired with their config, in fan-out order.
    pub fn entries(&self) -> [(&'static str, &ProviderConfig); 3] {
        [
            (gnews::NAME, &self.gnews),
            (newsapi::NAME, &self.newsapi),
            (mediastack::NAME, &self.mediastack),
        ]
    }
}
