//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables and
//! default values through Figment. The rest of the workspace never reads the
//! environment; it receives an [`AppConfig`].

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use insights_domain::error::{Error, Result};

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first one discovered)
    /// 3. Environment variables with prefix and `__` between nested keys
    ///    (e.g., `INSIGHTS_VECTOR_STORE__USE_REMOTE=true`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;
        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing configuration file among the usual locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_vector_store_config(config)?;
    validate_embedding_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_vector_store_config(config: &AppConfig) -> Result<()> {
    let store = &config.vector_store;
    if store.local_storage_path.as_os_str().is_empty() {
        return Err(Error::configuration("Local storage path cannot be empty"));
    }
    if store.timeout_secs == 0 {
        return Err(Error::configuration("Vector store timeout cannot be 0"));
    }
    if store.batch_size == 0 {
        return Err(Error::configuration("Vector store batch size cannot be 0"));
    }
    if store.use_remote && store.index_name.trim().is_empty() {
        return Err(Error::configuration(
            "Index name cannot be empty when remote storage is enabled",
        ));
    }
    Ok(())
}

fn validate_embedding_config(config: &AppConfig) -> Result<()> {
    let embedding = &config.embedding;
    if embedding.timeout_secs == 0 {
        return Err(Error::configuration("Embedding timeout cannot be 0"));
    }
    if embedding.dimensions == 0 {
        return Err(Error::configuration("Embedding dimensions cannot be 0"));
    }
    if embedding.model.trim().is_empty() {
        return Err(Error::configuration("Embedding model cannot be empty"));
    }
    Ok(())
}
