//! Optional `callable-inspect.toml` configuration.
//!
//! An explicit path must load; a file found by searching the current
//! directory and its ancestors is best effort and falls back to defaults.

use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::errors::InspectError;

pub const CONFIG_FILE_NAME: &str = "callable-inspect.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InspectConfig {
    /// Output format when `--format` is not given
    pub format: Option<OutputFormat>,
    /// Catalogue entries to show; empty shows all
    pub entries: Vec<String>,
}

pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

pub fn parse_config(contents: &str, path: &Path) -> Result<InspectConfig, InspectError> {
    toml::from_str(contents).map_err(|source| InspectError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a config file the user named explicitly.
pub fn load_config_from(path: &Path) -> Result<InspectConfig, InspectError> {
    let contents = read_config_file(path).map_err(|source| InspectError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents, path)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

fn try_load_discovered(path: &Path) -> Option<InspectConfig> {
    match load_config_from(path) {
        Ok(config) => Some(config),
        Err(InspectError::ConfigRead { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            None
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

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

/// Search `start` and its ancestors for [`CONFIG_FILE_NAME`].
pub fn discover_config(start: PathBuf) -> InspectConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_discovered(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            InspectConfig::default()
        })
}

pub fn load_config(explicit: Option<&Path>) -> Result<InspectConfig, InspectError> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    match std::env::current_dir() {
        Ok(current) => Ok(discover_config(current)),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(InspectConfig::default())
        }
    }
}
