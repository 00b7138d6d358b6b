#![cfg_attr(test, allow(clippy::disallowed_methods))]
// Forbid unwrap() in production code; a bad dataset must be reported, not panic.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
use std::net::SocketAddr;
use std::sync::Arc;

use space_api::{
    config::ServerConfig,
    dataset::Dataset,
    http::{AppState, router},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "space_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Loaded configuration: missions_path={}, gdp_path={}, listen_port={}",
        config.missions_path.display(),
        config
            .gdp_path
            .as_ref()
            .map_or_else(|| "<none>".to_string(), |p| p.display().to_string()),
        config.listen_port
    );

    // The server must not accept requests without data.
    let dataset = match Dataset::load(&config.dataset_paths()) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("Failed to load dataset: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Dataset ready: {} missions from {} countries, {} GDP values",
        dataset.missions().len(),
        dataset.country_count(),
        dataset.gdp().map_or(0, |gdp| gdp.len())
    );

    let app = router(AppState::new(Arc::new(dataset)));

    let addr = SocketAddr::from(([127, 0, 0, 1], config.listen_port));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind: {e}");
            std::process::exit(1);
        });

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    });
}
