// ABOUTME: File-backed option records and header catalogs
// ABOUTME: Missing option files load as defaults; catalogs are lists of raw handler records

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;
use vizzini_extender::{HeaderCatalog, OptionSet};

pub fn load_options(path: &Path) -> Result<OptionSet> {
    if !path.exists() {
        debug!("No option record at {}, using defaults", path.display());
        return Ok(OptionSet::default());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read option record {}", path.display()))?;
    OptionSet::from_json(&raw)
        .with_context(|| format!("Failed to parse option record {}", path.display()))
}

pub fn save_options(path: &Path, options: &OptionSet) -> Result<()> {
    let raw = options.to_json_pretty()?;
    fs::write(path, raw + "\n")
        .with_context(|| format!("Failed to write option record {}", path.display()))?;
    debug!("Saved option record to {}", path.display());
    Ok(())
}

/// No path means the display declares no headers
pub fn load_catalog(path: Option<&Path>) -> Result<HeaderCatalog> {
    let Some(path) = path else {
        return Ok(HeaderCatalog::new());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read header list {}", path.display()))?;
    HeaderCatalog::from_handler_json(&raw)
        .with_context(|| format!("Failed to parse header list {}", path.display()))
}
