//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Listen Address
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"   # full bind address, highest priority
//! export PORT="8080"               # used with 0.0.0.0 when LISTEN is unset
//! ```
//!
//! With neither set the service binds `0.0.0.0:3000`.
//!
//! ## Optional Variables
//!
//! - `ORDER_ID_MIN` - Lowest order identifier (default: `0`)
//! - `ORDER_ID_MAX` - Highest order identifier, inclusive (default: `9`)
//! - `UPDATE_MODE` - `replace` or `merge` (default: `replace`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::domain::entities::{OrderId, UpdateMode};
use crate::utils::id_generator::{DEFAULT_MAX_ID, DEFAULT_MIN_ID, IdRange};

/// Port used when neither `LISTEN` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 3000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub order_id_min: OrderId,
    pub order_id_max: OrderId,
    pub update_mode: UpdateMode,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT`, `ORDER_ID_MIN` or `ORDER_ID_MAX` is set
    /// but not a valid number, or if `UPDATE_MODE` is set to an unknown value.
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr()?;
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let order_id_min = parse_var("ORDER_ID_MIN")?.unwrap_or(DEFAULT_MIN_ID);
        let order_id_max = parse_var("ORDER_ID_MAX")?.unwrap_or(DEFAULT_MAX_ID);

        let update_mode = match env::var("UPDATE_MODE") {
            Ok(raw) => raw
                .parse::<UpdateMode>()
                .with_context(|| format!("UPDATE_MODE must be 'replace' or 'merge', got '{raw}'"))?,
            Err(_) => UpdateMode::default(),
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            order_id_min,
            order_id_max,
            update_mode,
        })
    }

    /// Resolves the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:{PORT}`
    /// 3. `0.0.0.0:3000`
    fn load_listen_addr() -> Result<String> {
        if let Ok(listen) = env::var("LISTEN") {
            return Ok(listen);
        }

        let port: u16 = parse_var("PORT")?.unwrap_or(DEFAULT_PORT);

        Ok(format!("0.0.0.0:{port}"))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not a socket address
    /// - `log_format` is not `text` or `json`
    /// - `order_id_min` exceeds `order_id_max`
    pub fn validate(&self) -> Result<()> {
        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.order_id_min > self.order_id_max {
            anyhow::bail!(
                "ORDER_ID_MIN ({}) must not exceed ORDER_ID_MAX ({})",
                self.order_id_min,
                self.order_id_max
            );
        }

        Ok(())
    }

    /// Identifier range orders are allocated from.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are inverted.
    pub fn id_range(&self) -> Result<IdRange> {
        IdRange::new(self.order_id_min, self.order_id_max)
            .context("Invalid order identifier range")
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!(
            "  Order ids: {}..={}",
            self.order_id_min,
            self.order_id_max
        );
        tracing::info!("  Update mode: {}", self.update_mode);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses an optional numeric variable. Unset yields `None`; set but
/// malformed is an error.
fn parse_var<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{key} must be a non-negative integer, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
