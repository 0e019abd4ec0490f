//! Shared helpers for the server integration tests.

use brandrag_server::config::AppConfig;
use brandrag_server::run;
use tokio::net::TcpListener;
use tokio::time::{sleep, Duration};

/// Spawns the application with the given config on a random port and
/// returns its base address.
pub async fn spawn_app(config: AppConfig) -> String {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .try_init();

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{port}");

    tokio::spawn(async move {
        if let Err(e) = run(listener, config).await {
            eprintln!("Server error: {e}");
        }
    });

    // Give the server a moment to start.
    sleep(Duration::from_millis(100)).await;

    address
}

/// A config backed by an isolated in-memory database and no upstream
/// credentials.
pub fn test_config() -> AppConfig {
    AppConfig {
        db_url: ":memory:".to_string(),
        ..AppConfig::default()
    }
}
