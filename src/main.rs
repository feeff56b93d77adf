//! YouTube Music Skill - HTTP server entry point.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ytmusic_skill::adapters::{skill_router, HttpMusicCatalog};
use ytmusic_skill::application::SkillDispatcher;
use ytmusic_skill::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    config.validate()?;

    tracing::info!(
        environment = ?config.server.environment,
        catalog = %config.catalog.base_url,
        "Starting YouTube Music skill"
    );

    let catalog = HttpMusicCatalog::new(&config.catalog)?;
    let dispatcher = SkillDispatcher::standard(Arc::new(catalog));
    tracing::info!(handlers = ?dispatcher.handler_names(), "Handlers registered");

    let app = skill_router(Arc::new(dispatcher), config.server.request_timeout());

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

/// `RUST_LOG` wins over the configured level; production logs are JSON.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
