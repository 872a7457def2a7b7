//! # Server Configuration
//!
//! Configuration is resolved from (lowest to highest precedence):
//! 1. Default values
//! 2. TOML config file (only when `--config` is given)
//! 3. Environment variables (`HOST`, `PORT`, `FRONTEND_URL`, `STATIC_DIR`, `FOLIO_DATA`)
//! 4. Command-line flags (applied by the CLI)
//!
//! A `.env` file in the working directory is loaded into the environment
//! by `main` before this runs.

use folio_core::FolioError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default bind host (all interfaces).
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;
/// Default frontend origin allowed by CORS.
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
/// Default static assets directory, relative to the working directory.
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Maximum config file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

// =============================================================================
// SERVER CONFIG
// =============================================================================

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// The single origin allowed to make cross-origin requests.
    pub frontend_url: String,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// Optional JSON dataset replacing the built-in content.
    pub data_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            data_file: None,
        }
    }
}

/// Partial config as written in a TOML file. Absent keys keep the
/// lower-precedence value.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    host: Option<String>,
    port: Option<u16>,
    frontend_url: Option<String>,
    static_dir: Option<PathBuf>,
    data_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Load defaults, then the optional config file, then the process environment.
    pub fn load(config_file: Option<&Path>) -> Result<Self, FolioError> {
        let mut config = Self::default();
        if let Some(path) = config_file {
            config.merge_file(path)?;
        }
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Merge a TOML config file. A named file that does not exist is an error.
    pub fn merge_file(&mut self, path: &Path) -> Result<(), FolioError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            FolioError::ConfigError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(FolioError::ConfigError(format!(
                "Config file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            FolioError::ConfigError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        self.merge_toml(&content)
    }

    /// Merge TOML text.
    pub fn merge_toml(&mut self, content: &str) -> Result<(), FolioError> {
        let file: FileConfig =
            toml::from_str(content).map_err(|e| FolioError::ConfigError(e.to_string()))?;

        if let Some(host) = file.host {
            self.host = host;
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        if let Some(frontend_url) = file.frontend_url {
            self.frontend_url = frontend_url;
        }
        if let Some(static_dir) = file.static_dir {
            self.static_dir = static_dir;
        }
        if file.data_file.is_some() {
            self.data_file = file.data_file;
        }
        Ok(())
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// Empty values are ignored. A `PORT` that is not a valid port number
    /// is an error rather than a silent fallback.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), FolioError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = var("HOST") {
            self.host = host;
        }
        if let Some(port) = var("PORT") {
            self.port = port.trim().parse().map_err(|_| {
                FolioError::ConfigError(format!("PORT must be a number in 0-65535, got '{}'", port))
            })?;
        }
        if let Some(frontend_url) = var("FRONTEND_URL") {
            self.frontend_url = frontend_url;
        }
        if let Some(static_dir) = var("STATIC_DIR") {
            self.static_dir = PathBuf::from(static_dir);
        }
        if let Some(data_file) = var("FOLIO_DATA") {
            self.data_file = Some(PathBuf::from(data_file));
        }
        Ok(())
    }

    /// `host:port` string for binding.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// TESTS
// =============================================================================
