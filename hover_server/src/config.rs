use std::{env, net::SocketAddr, path::PathBuf};

use anyhow::{Context, Result};
use tracing::Level;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DIST_DIR: &str = "dist";
pub const DEFAULT_CATALOGUE_PATH: &str = "songs.json";

/// Settings read from the environment at start-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `PORT`
    pub port: u16,
    /// `DIST_DIR`, the packaged page and wasm bundle
    pub dist_dir: PathBuf,
    /// `CATALOGUE_PATH`, JSON array of songs
    pub catalogue_path: PathBuf,
    /// `LOG_LEVEL`
    pub log_level: Level,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a number, got `{}`", port))?,
            None => DEFAULT_PORT,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => level
                .parse()
                .with_context(|| format!("LOG_LEVEL `{}` is not a tracing level", level))?,
            None => Level::DEBUG,
        };

        Ok(Self {
            port,
            dist_dir: lookup("DIST_DIR")
                .unwrap_or_else(|| String::from(DEFAULT_DIST_DIR))
                .into(),
            catalogue_path: lookup("CATALOGUE_PATH")
                .unwrap_or_else(|| String::from(DEFAULT_CATALOGUE_PATH))
                .into(),
            log_level,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
