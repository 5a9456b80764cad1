//! WaterSaver API Server
//!
//! Main entry point for the WaterSaver backend service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use watersaver_api::{AppState, create_router};
use watersaver_core::restriction::RestrictionTable;
use watersaver_db::connect;
use watersaver_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "watersaver=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let db = connect(&config.database).await?;
    info!(
        max_connections = config.database.max_connections,
        "Connected to database"
    );

    let restrictions = RestrictionTable::new(&config.restrictions);
    info!(
        towns = restrictions.towns().len(),
        "Restriction table loaded"
    );

    let state = AppState {
        db: Arc::new(db),
        restrictions: Arc::new(restrictions),
    };

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
