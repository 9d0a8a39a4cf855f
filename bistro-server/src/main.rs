mod api;
mod auth;
mod config;
mod db;
mod models;
mod response;
mod util;

use std::sync::Arc;
use tracing::{error, info};
use util::logging::init_tracing;

use crate::response::ServerResult;

#[tokio::main]
async fn main() -> ServerResult<()> {
    init_tracing("info");
    info!("Starting Bistro Boss server");

    let config = config::AppConfig::from_env().unwrap_or_else(|e| {
        error!("Failed to load config: {}", e);
        std::process::exit(1);
    });

    info!("Connecting to database");
    let db = Arc::new(db::Mongo::connect(&config.mongo_uri, &config.mongo_db).await?);
    db.ping().await?;
    info!("Pinged your deployment. Connected to MongoDB");
    db.ensure_indexes().await?;
    let config = Arc::new(config);

    if let Err(e) = api::serve::serve(db, config).await {
        error!("Server exited: {:?}", e);
    }
    Ok(())
}
