//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.consulta/config.toml`. If missing on first run, a
//! commented-out default is generated so workshop participants can discover
//! all options.
//!
//! Whether the remote service is used is an explicit `use_remote` flag, not
//! inferred from the endpoint URL. The upload bucket identifier is carried
//! for parity with the deployed workshop stack; it only shows up in logs.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WorkshopConfig {
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub query_endpoint: Option<String>,
    pub upload_bucket: Option<String>,
    pub use_remote: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Placeholder endpoint from the workshop handout. Participants replace it
/// with their own API Gateway URL after deploying the stack.
pub const DEFAULT_QUERY_ENDPOINT: &str =
    "https://abc123.execute-api.us-east-1.amazonaws.com/prod/query";
pub const DEFAULT_UPLOAD_BUCKET: &str = "rag-workshop-{tu-nombre}-docs-{account-id}";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub query_endpoint: String,
    pub upload_bucket: String,
    pub use_remote: bool,
}

/// Values supplied on the command line (None / false = not specified).
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides<'a> {
    pub endpoint: Option<&'a str>,
    pub offline: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.consulta/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".consulta").join("config.toml"))
}

/// Load config from `~/.consulta/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WorkshopConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<WorkshopConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(WorkshopConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(WorkshopConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: WorkshopConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Consulta Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [service]
# query_endpoint = "https://abc123.execute-api.us-east-1.amazonaws.com/prod/query"
# upload_bucket = "rag-workshop-{tu-nombre}-docs-{account-id}"
# use_remote = false           # true once your API Gateway is deployed
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &WorkshopConfig, cli: CliOverrides<'_>) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let query_endpoint = cli
        .endpoint
        .map(|s| s.to_string())
        .or_else(|| std::env::var("CONSULTA_QUERY_ENDPOINT").ok())
        .or_else(|| config.service.query_endpoint.clone())
        .unwrap_or_else(|| DEFAULT_QUERY_ENDPOINT.to_string());

    // Bucket: env → config → default
    let upload_bucket = std::env::var("CONSULTA_UPLOAD_BUCKET")
        .ok()
        .or_else(|| config.service.upload_bucket.clone())
        .unwrap_or_else(|| DEFAULT_UPLOAD_BUCKET.to_string());

    // Remote mode: --offline wins; --endpoint implies remote; then env → config → off
    let use_remote = if cli.offline {
        false
    } else if cli.endpoint.is_some() {
        true
    } else {
        std::env::var("CONSULTA_USE_REMOTE")
            .ok()
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .or(config.service.use_remote)
            .unwrap_or(false)
    };

    ResolvedConfig {
        query_endpoint,
        upload_bucket,
        use_remote,
    }
}
