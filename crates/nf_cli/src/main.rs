use clap::{Args, Parser, Subcommand};
use nf_core::{Error, NewsFeed, NewsQuery, Result};
use nf_providers::config::{GNEWS_BASE_URL, MEDIASTACK_BASE_URL, NEWSAPI_BASE_URL};
use nf_providers::{ProviderConfig, ProviderManager, ProvidersConfig};
use nf_web::{create_app, AppState};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{info, warn};

mod logging;

#[derive(Parser, Debug)]
#[command(author, version, about = "One news feed from GNews, NewsAPI and Mediastack", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    providers: ProviderArgs,
    /// Log filter directive, e.g. `info` or `nf_providers=debug`
    #[arg(long, env = "NF_LOG", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct ProviderArgs {
    #[arg(long, env = "GNEWS_API_KEY", default_value = "", hide_env_values = true)]
    gnews_api_key: String,
    #[arg(long, env = "NEWSAPI_API_KEY", default_value = "", hide_env_values = true)]
    newsapi_api_key: String,
    #[arg(long, env = "MEDIASTACK_API_KEY", default_value = "", hide_env_values = true)]
    mediastack_api_key: String,
    #[arg(long, env = "GNEWS_BASE_URL", default_value = GNEWS_BASE_URL)]
    gnews_url: String,
    #[arg(long, env = "NEWSAPI_BASE_URL", default_value = NEWSAPI_BASE_URL)]
    newsapi_url: String,
    #[arg(long, env = "MEDIASTACK_BASE_URL", default_value = MEDIASTACK_BASE_URL)]
    mediastack_url: String,
    /// Seconds to wait for each provider; by default waits for the slowest one
    #[arg(long, env = "NF_PROVIDER_TIMEOUT")]
    provider_timeout: Option<u64>,
}

/// Names the offending flag so a bad base URL is reported as a setup mistake.
fn provider_config(flag: &str, api_key: String, base_url: &str) -> Result<ProviderConfig> {
    ProviderConfig::new(api_key, base_url).map_err(|e| Error::Config(format!("--{}: {}", flag, e)))
}

impl ProviderArgs {
    fn into_config(self) -> Result<ProvidersConfig> {
        let mut config = ProvidersConfig {
            gnews: provider_config("gnews-url", self.gnews_api_key, &self.gnews_url)?,
            newsapi: provider_config("newsapi-url", self.newsapi_api_key, &self.newsapi_url)?,
            mediastack: provider_config("mediastack-url", self.mediastack_api_key, &self.mediastack_url)?,
            timeout: None,
        };
        if let Some(secs) = self.provider_timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the news endpoint over HTTP
    Serve {
        #[arg(long, env = "NF_BIND", default_value = "0.0.0.0:8888")]
        bind: SocketAddr,
    },
    /// Run one aggregation and print the feed as JSON
    Fetch {
        #[arg(long, default_value = "general")]
        category: String,
        #[arg(long, default_value = "en")]
        lang: String,
        /// Free-text search; overrides the category
        #[arg(long)]
        q: Option<String>,
    },
    /// List the configured providers
    Providers,
}

fn build_manager(config: &ProvidersConfig) -> Result<ProviderManager> {
    for (name, provider) in config.entries() {
        if !provider.has_key() {
            warn!(provider = name, "no API key configured, upstream will likely reject requests");
        }
    }
    let manager = ProviderManager::from_config(config)?;
    info!(
        providers = manager.providers().len(),
        timeout_secs = config.timeout.map(|t| t.as_secs()),
        "🦗 Providers initialized"
    );
    Ok(manager)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);
    let config = cli.providers.into_config()?;

    match cli.command {
        Commands::Serve { bind } => {
            let manager = build_manager(&config)?;
            let app = create_app(AppState::new(manager));
            let listener = tokio::net::TcpListener::bind(bind).await?;
            info!("📰 Serving news feed on http://{}/api/news", listener.local_addr()?);
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
        Commands::Fetch { category, lang, q } => {
            let manager = build_manager(&config)?;
            let mut query = NewsQuery::new(category, lang);
            if let Some(q) = q {
                query = query.with_search(q);
            }
            let feed = NewsFeed::from(manager.aggregate(&query).await);
            println!("{}", serde_json::to_string_pretty(&feed)?);
        }
        Commands::Providers => {
            for (name, provider) in config.entries() {
                let key = if provider.has_key() { "key set" } else { "no key" };
                println!("{:<12} {} ({})", name, provider.base_url, key);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_fetch_args() {
        let cli = Cli::try_parse_from([
            "nf",
            "--gnews-api-key",
            "g",
            "--provider-timeout",
            "3",
            "fetch",
            "--category",
            "nation",
            "--lang",
            "hi",
        ])
        .unwrap();
        match cli.command {
            Commands::Fetch { category, lang, q } => {
                assert_eq!(category, "nation");
                assert_eq!(lang, "hi");
                assert!(q.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
        let config = cli.providers.into_config().unwrap();
        assert!(config.gnews.has_key());
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_bad_base_url_is_config_error() {
        let cli = Cli::try_parse_from(["nf", "--newsapi-url", "::not-a-url::", "providers"]).unwrap();
        match cli.providers.into_config() {
            Err(Error::Config(message)) => assert!(message.starts_with("--newsapi-url:")),
            other => panic!("expected a config error, got {:?}", other.map(|_| ())),
        }
    }
}
