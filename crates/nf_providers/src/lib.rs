pub mod config;
pub mod manager;
pub mod pipeline;
pub mod providers;

pub use config::{ProviderConfig, ProvidersConfig};
pub use manager::ProviderManager;
pub use providers::{default_providers, GNewsProvider, MediastackProvider, NewsApiProvider};

pub mod prelude {
    pub use super::config::{ProviderConfig, ProvidersConfig};
    pub use super::manager::ProviderManager;
    pub use nf_core::{Article, Error, NewsProvider, NewsQuery, Result};
}
