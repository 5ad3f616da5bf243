//! Interchange configuration, loaded from TOML.
//!
//! # Example
//!
//! ```toml
//! [xml.namespace_prefixes]
//! "http://postnl.nl/cif/services/common/" = "common"
//! "http://schemas.microsoft.com/2003/10/Serialization/Arrays" = "arr"
//!
//! [deserialize]
//! reject_unknown_fields = true
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ── Types ─────────────────────────────────────────────────────────────

/// Top-level interchange configuration. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterchangeConfig {
    pub xml: XmlConfig,
    pub deserialize: DeserializeConfig,
}

/// `[xml]` section -- namespace prefix assignment for XML encoders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XmlConfig {
    /// Preferred prefix per namespace URI. Unlisted URIs get `ns1`, `ns2`, ...
    pub namespace_prefixes: BTreeMap<String, String>,
}

impl Default for XmlConfig {
    fn default() -> Self {
        let namespace_prefixes = [
            ("http://postnl.nl/cif/services/common/", "common"),
            (
                "http://schemas.microsoft.com/2003/10/Serialization/Arrays",
                "arr",
            ),
        ]
        .into_iter()
        .map(|(uri, prefix)| (uri.to_owned(), prefix.to_owned()))
        .collect();
        XmlConfig { namespace_prefixes }
    }
}

/// `[deserialize]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeserializeConfig {
    /// Fail on inbound keys that match no field of the target entity
    /// instead of ignoring them.
    pub reject_unknown_fields: bool,
}

/// Errors loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse interchange config: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Loading ───────────────────────────────────────────────────────────

impl InterchangeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
