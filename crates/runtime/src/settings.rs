//! On-disk configuration for a scan.
//!
//! The file is a flat JSON object; every key is optional so the same file can
//! be shared between projects and completed from the command line.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{DEFAULT_PRINT_VALUE, MAX_WORKERS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file {} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed configuration file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("please specify a root directory to scan")]
    MissingRoot,

    #[error("root {} does not exist", .0.display())]
    RootNotFound(PathBuf),

    #[error("root {} is not a directory", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("worker count must be at least 1")]
    ZeroWorkers,

    #[error("worker count {requested} exceeds the maximum of {max}")]
    TooManyWorkers { requested: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory to scan.
    pub root: Option<PathBuf>,
    /// Directory base names pruned from the walk.
    pub skip: Vec<String>,
    /// Extensions to count, with the leading dot. Empty means all.
    pub ext: Vec<String>,
    /// Itemize files by byte size instead of line count.
    pub print_by_size: bool,
    /// Itemization threshold; zero or negative disables itemization.
    #[serde(alias = "print_lines")]
    pub print_value: i64,
    /// Worker threads; defaults to the available parallelism.
    pub workers: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: None,
            skip: Vec::new(),
            ext: Vec::new(),
            print_by_size: false,
            print_value: DEFAULT_PRINT_VALUE,
            workers: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`, which must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_optional(path)?.ok_or_else(|| ConfigError::NotFound {
            path: path.to_path_buf(),
        })
    }

    /// Load settings from `path`, treating a missing file as "no settings".
    pub fn load_optional(path: &Path) -> Result<Option<Self>, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("[config] no configuration at {}", path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("[config] loaded {}", path.display());
        Ok(Some(settings))
    }

    /// The root directory, checked to exist and be a directory.
    pub fn validated_root(&self) -> Result<PathBuf, ConfigError> {
        let root = match &self.root {
            Some(root) if !root.as_os_str().is_empty() => root.clone(),
            _ => return Err(ConfigError::MissingRoot),
        };

        match fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => Ok(root),
            Ok(_) => Err(ConfigError::RootNotDirectory(root)),
            Err(_) => Err(ConfigError::RootNotFound(root)),
        }
    }

    /// Requested worker count, within `1..=MAX_WORKERS`.
    pub fn validated_workers(&self) -> Result<Option<usize>, ConfigError> {
        match self.workers {
            Some(0) => Err(ConfigError::ZeroWorkers),
            Some(requested) if requested > MAX_WORKERS => Err(ConfigError::TooManyWorkers {
                requested,
                max: MAX_WORKERS,
            }),
            other => Ok(other),
        }
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
