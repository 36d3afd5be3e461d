use std::{fs, path::Path};

use anyhow::{Context, Result};
use hover_core::shared_types::Catalogue;

/// Reads the song catalogue served to the gallery
pub fn load_catalogue(path: &Path) -> Result<Catalogue> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalogue {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("invalid catalogue {}", path.display()))
}
