use std::fs;
use std::path::{Path, PathBuf};

use super::core::ConfigFile;
use crate::errors::PipelineError;

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".review-sentiment.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse a config file from a TOML string
pub fn parse_config(contents: &str) -> Result<ConfigFile, String> {
    toml::from_str::<ConfigFile>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

/// Load an explicitly requested config file. Any failure is an error.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, PipelineError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        PipelineError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    let config = parse_config(&contents).map_err(PipelineError::config)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ConfigFile> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Pure function to generate directory ancestors up to a depth limit
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

/// Search `start` and its ancestors for a config file.
pub fn discover_config_from(start: PathBuf) -> ConfigFile {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ConfigFile::default()
        })
}

/// Search the current directory and its ancestors for a config file,
/// falling back to defaults.
pub fn discover_config() -> ConfigFile {
    match std::env::current_dir() {
        Ok(dir) => discover_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ConfigFile::default()
        }
    }
}
