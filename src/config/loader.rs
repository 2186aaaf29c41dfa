use std::fs;
use std::path::{Path, PathBuf};

use super::FileConfig;
use crate::errors::{GateError, Result};

pub const CONFIG_FILE_NAME: &str = ".ccgate.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Generate `start` and its ancestors, up to `max_depth` directories
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.ccgate.toml` at or above `start`
pub fn find_config(start: &Path) -> Option<PathBuf> {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Read and parse a config file; any failure is an error
pub fn load_config_from_path(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| GateError::config(path, format!("cannot read file: {e}")))?;

    let config = toml::from_str::<FileConfig>(&contents)
        .map_err(|e| GateError::config(path, e.message().to_string()))?;

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load the explicit config file, or discover one from the current directory.
///
/// Only discovery tolerates absence: an explicit path must exist, and a
/// discovered file that fails to parse is still an error.
pub fn load_config(explicit: Option<&Path>) -> Result<FileConfig> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!("Failed to get current directory: {}. Using default config.", e);
            return Ok(FileConfig::default());
        }
    };

    match find_config(&current) {
        Some(path) => load_config_from_path(&path),
        None => {
            tracing::debug!(
                "No {} found after checking {} directories. Using default config.",
                CONFIG_FILE_NAME,
                MAX_TRAVERSAL_DEPTH
            );
            Ok(FileConfig::default())
        }
    }
}
