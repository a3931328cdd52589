use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, SealError};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "gpgseal.toml";

/// Top-level gpgseal configuration, read from `gpgseal.toml`.
///
/// Loaded once at startup and passed down explicitly; nothing in the
/// crate reads configuration from process-global state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub seal: SealSection,
}

impl AppConfig {
    /// Load configuration from `path`, or from `gpgseal.toml` in the
    /// working directory when `path` is `None`. A missing default file
    /// yields the built-in defaults; an explicit path must exist.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => {
                let p = PathBuf::from(p);
                if !p.exists() {
                    return Err(SealError::FileNotFound { path: p });
                }
                p
            }
            None => {
                let p = PathBuf::from(CONFIG_FILE);
                if !p.exists() {
                    return Ok(Self::default());
                }
                p
            }
        };

        Self::load_file(&config_path)
    }

    fn load_file(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)?;
        let config: Self = toml::from_str(&content).map_err(|e| SealError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", config_path.display()),
        })?;

        // Surface a bad algorithm name at load time, not mid-operation.
        crate::adapters::cipher::pgp_backend::PgpBackend::with_algorithm(&config.seal.cipher)?;

        Ok(config)
    }
}

/// The `[seal]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SealSection {
    /// Session-key algorithm: aes128, aes192 or aes256.
    #[serde(default = "default_cipher")]
    pub cipher: String,
    /// Public key files used when `--key` is not given.
    #[serde(default)]
    pub recipients: Vec<PathBuf>,
}

impl Default for SealSection {
    fn default() -> Self {
        Self {
            cipher: default_cipher(),
            recipients: Vec::new(),
        }
    }
}

fn default_cipher() -> String {
    "aes256".to_string()
}
