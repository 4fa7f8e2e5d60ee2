//! Configuration loading
//!
//! The server and CLI read an optional YAML file. Every section has
//! defaults, so an empty document describes the stock 50-project setup.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete configuration loaded from YAML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Collection seeding
    #[serde(default)]
    pub seed: SeedConfig,

    /// Client-side paging defaults
    #[serde(default)]
    pub paging: PagingConfig,
}

// ============================================================================
// Sections
// ============================================================================

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allow cross-origin requests from any origin
    #[serde(default = "default_true")]
    pub cors: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: true,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_true() -> bool {
    true
}

/// Collection seeding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of generated projects
    #[serde(default = "default_count")]
    pub count: usize,

    /// Name prefix for generated projects
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,

    /// Relay ids assigned round-robin to generated projects
    #[serde(default)]
    pub relay_ids: Vec<String>,

    /// JSON file of projects, replaces generated seeding
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            name_prefix: default_name_prefix(),
            relay_ids: Vec::new(),
            file: None,
        }
    }
}

fn default_count() -> usize {
    50
}

fn default_name_prefix() -> String {
    "Project".to_string()
}

/// Client-side paging defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Page size used when no count is given
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Upper bound on pages fetched by one walk
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_pages: default_max_pages(),
        }
    }
}

fn default_page_size() -> u32 {
    5
}

fn default_max_pages() -> usize {
    1000
}

// ============================================================================
// Loading
// ============================================================================

/// Load configuration from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_config_from_str(&content)
}

/// Load configuration from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<AppConfig> {
    // serde_yaml rejects an empty document, treat it as all defaults
    let config: AppConfig = if yaml.trim().is_empty() {
        AppConfig::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    validate_config(&config)?;
    Ok(config)
}

/// Validate a configuration
fn validate_config(config: &AppConfig) -> Result<()> {
    if config.seed.file.is_none() && config.seed.count == 0 {
        return Err(Error::invalid_value(
            "seed.count",
            "must be greater than 0 when no seed file is given",
        ));
    }

    if config.paging.default_page_size == 0 {
        return Err(Error::invalid_value(
            "paging.default_page_size",
            "must be greater than 0",
        ));
    }

    if config.paging.max_pages == 0 {
        return Err(Error::invalid_value(
            "paging.max_pages",
            "must be greater than 0",
        ));
    }

    if config.seed.relay_ids.iter().any(String::is_empty) {
        return Err(Error::invalid_value(
            "seed.relay_ids",
            "relay ids cannot be empty",
        ));
    }

    Ok(())
}
