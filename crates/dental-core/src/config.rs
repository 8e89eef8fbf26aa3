//! Store configuration.
//!
//! ```toml
//! [store]
//! data_dir = "/var/lib/dental/data"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::store::{StoreError, StoreResult};

/// Directory used when nothing else is configured.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Where the collection documents live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    store: StoreConfig,
}

impl StoreConfig {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Parse a TOML config document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> StoreResult<Self> {
        let file: ConfigFile = toml::from_str(text)?;
        Ok(file.store)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        Self::from_toml_str(&text)
    }
}
