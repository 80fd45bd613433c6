mod analytics;
mod areas;
mod centers;
mod config;
mod error;
mod health;
mod roads;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use axum::serve;
use mimalloc::MiMalloc;
use tracing::{Level, info};

use crate::{
    config::ApiConfig,
    routes::app,
    state::AppState,
    store::{ReliefStore, load_seed_file},
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = ApiConfig::from_env()?;

    let store = match &config.seed_file {
        Some(path) => load_seed_file(path)?,
        None => ReliefStore::default(),
    };

    let state = Arc::new(AppState::new(store, config.weights));

    let listener = tokio::net::TcpListener::bind(config.address()).await?;
    info!("Disaster relief API listening on {}", config.address());

    serve(listener, app(state)).await?;

    Ok(())
}
