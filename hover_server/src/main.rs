use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::{catalogue::load_catalogue, config::ServerConfig};

mod catalogue;
mod config;
mod routes;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env()?;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let catalogue = Arc::new(load_catalogue(&config.catalogue_path)?);
    info!(
        "loaded {} songs from {}",
        catalogue.len(),
        config.catalogue_path.display()
    );

    let app = routes::app(catalogue, &config.dist_dir);
    let addr = config.addr();
    debug!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .context("server stopped unexpectedly")?;

    Ok(())
}
