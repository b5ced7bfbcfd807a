//! # Configuration State
//!
//! Application configuration loaded once at startup.
//!
//! ## Configuration Sources (later overrides earlier)
//! 1. Defaults (this file)
//! 2. Config file (`stockroom.toml`, from `STOCKROOM_CONFIG` or the
//!    platform config directory)
//! 3. Environment variables (`STOCKROOM_*`)
//!
//! ## Example `stockroom.toml`
//! ```toml
//! bind_addr = "0.0.0.0:8080"
//! store_name = "Rangesh Mobiles"
//! currency_symbol = "₹"
//! seed_path = "/srv/stockroom/seed.json"
//! deduct_stock_on_sale = false
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after startup and shared behind an `Arc`.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stockroom_core::Money;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const CONFIG_FILE_NAME: &str = "stockroom.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Address the HTTP listener binds to.
    pub bind_addr: String,

    /// Shop name shown in the screen header.
    pub store_name: String,

    /// Currency symbol for display.
    pub currency_symbol: String,

    /// Seed JSON to start from instead of the built-in sample shop.
    pub seed_path: Option<PathBuf>,

    /// Whether recording a sale lowers the product's stock.
    ///
    /// Off by default, leaving stock untouched by sales.
    pub deduct_stock_on_sale: bool,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            bind_addr: "127.0.0.1:8080".to_string(),
            store_name: "Stockroom".to_string(),
            currency_symbol: "₹".to_string(),
            seed_path: None,
            deduct_stock_on_sale: false,
        }
    }
}

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigState {
    /// Loads configuration from defaults, file and environment.
    ///
    /// `config_path` overrides the file location; when `None` the
    /// `STOCKROOM_CONFIG` variable and then the platform config directory
    /// are tried. A missing file is not an error.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = config_path
            .or_else(|| std::env::var_os("STOCKROOM_CONFIG").map(PathBuf::from))
            .or_else(Self::default_config_path);

        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        info!(
            bind_addr = %config.bind_addr,
            store_name = %config.store_name,
            deduct_stock_on_sale = config.deduct_stock_on_sale,
            "Configuration loaded"
        );
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `STOCKROOM_*` overrides read through `lookup`.
    fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("STOCKROOM_BIND_ADDR") {
            debug!(bind_addr = %addr, "Overriding bind address from environment");
            self.bind_addr = addr;
        }

        if let Some(name) = lookup("STOCKROOM_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(symbol) = lookup("STOCKROOM_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(path) = lookup("STOCKROOM_SEED_PATH") {
            self.seed_path = Some(PathBuf::from(path));
        }

        if let Some(flag) = lookup("STOCKROOM_DEDUCT_STOCK_ON_SALE") {
            match flag.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.deduct_stock_on_sale = true,
                "0" | "false" | "no" => self.deduct_stock_on_sale = false,
                _ => warn!(value = %flag, "Unknown STOCKROOM_DEDUCT_STOCK_ON_SALE value"),
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;

        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "currency_symbol must not be empty".into(),
            ));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr.parse().map_err(|_| {
            ConfigError::Invalid(format!(
                "bind_addr must be host:port, got: {}",
                self.bind_addr
            ))
        })
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_money(Money::from_minor(1234)), "₹12.34");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.major().abs(),
            amount.minor_part()
        )
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stockroom", "stockroom")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
