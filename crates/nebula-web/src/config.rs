//! Site configuration.
//!
//! Loaded from an optional TOML file; command-line flags and `NEBULA_*`
//! environment variables are applied on top by the binary.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 5000
//!
//! [site]
//! recent_inquiries = 5
//! content = "content.toml"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Number of inquiries shown on the page unless configured otherwise.
pub const DEFAULT_RECENT_INQUIRIES: usize = 5;

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// `[server]` section.
    #[serde(default)]
    pub server: ServerConfig,

    /// `[site]` section.
    #[serde(default)]
    pub site: SiteSettings,
}

/// Listener settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    5000
}

/// Page settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// How many of the newest inquiries the page lists.
    #[serde(default = "default_recent_inquiries")]
    pub recent_inquiries: usize,

    /// Content file; the built-in content is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<PathBuf>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            recent_inquiries: default_recent_inquiries(),
            content: None,
        }
    }
}

fn default_recent_inquiries() -> usize {
    DEFAULT_RECENT_INQUIRIES
}

impl SiteConfig {
    /// Load configuration from `path`, or defaults when no path is given.
    ///
    /// A relative `site.content` path is resolved against the config
    /// file's directory.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let mut config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("{}: {e}", path.display())))?;

        if let (Some(content), Some(dir)) = (config.site.content.as_mut(), path.parent()) {
            if content.is_relative() {
                *content = dir.join(&*content);
            }
        }

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
