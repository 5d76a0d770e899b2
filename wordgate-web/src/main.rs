use std::sync::Arc;
use tracing::info;

use wordgate::GoogleTranslateProvider;
use wordgate_web::{AppState, Config, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    // Initialize translation provider
    let translator = GoogleTranslateProvider::new(&config.upstream_url, config.timeout)
        .map_err(|e| format!("Failed to initialize translator: {}", e))?;
    info!(
        "Upstream {} (timeout {:?})",
        translator.base_url(),
        config.timeout
    );

    let app = router(AppState::new(Arc::new(translator)));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Server running at http://{}", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
