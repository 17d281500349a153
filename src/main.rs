use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use allowance_engine::api::{AppState, create_router};
use allowance_engine::config::ConfigLoader;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_CONFIG_DIR: &str = "./config/cockpit_crew";

/// Initialize tracing from RUST_LOG, defaulting to info for this crate.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "allowance_engine=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config_dir =
        std::env::var("ALLOWANCE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let bind_addr =
        std::env::var("ALLOWANCE_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading configuration from {}", config_dir))?;
    tracing::info!(
        agreement = %config.agreement().code,
        version = %config.agreement().version,
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {}", bind_addr))?;
    tracing::info!("Allowance server listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
