//! Resolver configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::Result;

/// Settings shared by every resolution a `Resolver` performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Prefix used when a call does not pass one explicitly
    #[serde(default = "defaults::default_prefix")]
    pub default_prefix: String,
    /// Directory relative unit origins are resolved against.
    /// Falls back to the working directory when unset.
    #[serde(default)]
    pub origin_root: Option<PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_prefix: defaults::default_prefix(),
            origin_root: None,
        }
    }
}

impl ResolverConfig {
    /// Config with a different default prefix (`""` for none).
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            default_prefix: prefix.into(),
            ..Self::default()
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Make a unit origin absolute without touching the filesystem.
    pub(crate) fn absolutize(&self, origin: &Path) -> Result<PathBuf> {
        if origin.is_absolute() {
            return Ok(origin.to_path_buf());
        }

        match &self.origin_root {
            Some(root) => Ok(std::path::absolute(root.join(origin))?),
            None => Ok(std::path::absolute(origin)?),
        }
    }
}
