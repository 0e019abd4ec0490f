//! # Application State
//!
//! The `AppState` holds all shared resources: the configuration, the storage
//! provider, the generation provider (when a credential is configured), the
//! web-search client, and the HTTP client used by the scrapers.

use crate::config::AppConfig;
use brandrag::providers::ai::OpenAiProvider;
use brandrag::providers::db::sqlite::SqliteProvider;
use brandrag::websearch::WebSearchClient;
use std::sync::Arc;
use std::time::Duration;

/// Timeout for one scraper page fetch.
const SCRAPE_TIMEOUT: Duration = Duration::from_secs(10);

/// Browser-like User-Agent used for scraping public pages.
const SCRAPE_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<AppConfig>,
    /// The storage provider for records and the chunk index.
    pub store: Arc<SqliteProvider>,
    /// The generation provider; `None` when no credential is configured, in
    /// which case generation uses the deterministic fallback directly.
    pub ai_provider: Option<Arc<OpenAiProvider>>,
    /// The web-search collaborator.
    pub web_search: Arc<WebSearchClient>,
    /// HTTP client shared by the scrapers, with a hard per-fetch timeout.
    pub scrape_client: reqwest::Client,
}

/// Builds the shared application state from the configuration.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let store = SqliteProvider::new(&config.db_url).await?;
    store.initialize_schema().await?;
    tracing::info!(db_path = %config.db_url, "Initialized storage provider (SQLite).");

    let ai_provider = match &config.generation.api_key {
        Some(api_key) => Some(Arc::new(OpenAiProvider::new(
            config.generation.api_url.clone(),
            api_key.clone(),
            config.generation.model.clone(),
            config.generation.fallback_model.clone(),
        )?)),
        None => {
            tracing::warn!(
                "No generation credential configured; responses will use the deterministic fallback."
            );
            None
        }
    };

    let web_search = WebSearchClient::new(
        config.web_search.api_url.clone(),
        config.web_search.api_key.clone(),
    )?;

    let scrape_client = reqwest::Client::builder()
        .timeout(SCRAPE_TIMEOUT)
        .user_agent(SCRAPE_USER_AGENT)
        .build()?;

    Ok(AppState {
        config: Arc::new(config),
        store: Arc::new(store),
        ai_provider,
        web_search: Arc::new(web_search),
        scrape_client,
    })
}
