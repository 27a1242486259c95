//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults run a local demo store.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront (default: <http://localhost:3000>)
//! - `STOREFRONT_BRAND_NAME` - Brand shown in the header and footer (default: `ElectroMart`)
//! - `STOREFRONT_PRODUCTS_PER_PAGE` - Listing page size (default: 9)
//! - `STOREFRONT_MAX_LINE_QUANTITY` - Upper bound for a single cart line (default: 10)
//! - `STOREFRONT_SEED_DEMO_CART` - Start new sessions with the demo cart (default: true)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Brand name rendered in navigation, footer and page titles
    pub brand_name: String,
    /// Products shown per listing page
    pub products_per_page: usize,
    /// Maximum quantity for one cart line
    pub max_line_quantity: u32,
    /// Seed a fresh session's cart with the demo lines
    pub seed_demo_cart: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions sent to Sentry
    pub sentry_traces_sample_rate: f32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            brand_name: "ElectroMart".to_string(),
            products_per_page: 9,
            max_line_quantity: 10,
            seed_demo_cart: true,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed,
    /// or if a numeric setting is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let host = parse_env_or("STOREFRONT_HOST", defaults.host)?;
        let port = parse_env_or("STOREFRONT_PORT", defaults.port)?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", &defaults.base_url);
        let brand_name = get_env_or_default("STOREFRONT_BRAND_NAME", &defaults.brand_name);

        let products_per_page =
            parse_env_or("STOREFRONT_PRODUCTS_PER_PAGE", defaults.products_per_page)?;
        if products_per_page == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_PRODUCTS_PER_PAGE".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        let max_line_quantity =
            parse_env_or("STOREFRONT_MAX_LINE_QUANTITY", defaults.max_line_quantity)?;
        if max_line_quantity == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_MAX_LINE_QUANTITY".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        let seed_demo_cart = parse_bool_env("STOREFRONT_SEED_DEMO_CART", defaults.seed_demo_cart)?;

        Ok(Self {
            host,
            port,
            base_url,
            brand_name,
            products_per_page,
            max_line_quantity,
            seed_demo_cart,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_env_or("SENTRY_SAMPLE_RATE", defaults.sentry_sample_rate)?,
            sentry_traces_sample_rate: parse_env_or(
                "SENTRY_TRACES_SAMPLE_RATE",
                defaults.sentry_traces_sample_rate,
            )?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |raw| parse_value(key, &raw))
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a boolean flag (`true/false`, `1/0`, `yes/no`, `on/off`).
fn parse_bool_env(key: &str, default: bool) -> Result<bool, ConfigError> {
    get_optional_env(key).map_or(Ok(default), |raw| parse_bool(key, &raw))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.products_per_page, 9);
        assert_eq!(config.max_line_quantity, 10);
        assert!(config.seed_demo_cart);
        assert!(!config.is_secure());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "0.0.0.0".parse().unwrap(),
            port: 8080,
            ..StorefrontConfig::default()
        };
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_is_secure() {
        let config = StorefrontConfig {
            base_url: "https://shop.example.com".to_string(),
            ..StorefrontConfig::default()
        };
        assert!(config.is_secure());
    }

    #[test]
    fn test_parse_value_reports_key() {
        let err = parse_value::<u16>("STOREFRONT_PORT", "not-a-port").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "STOREFRONT_PORT"));

        assert_eq!(parse_value::<u16>("STOREFRONT_PORT", " 8080 ").unwrap(), 8080);
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("FLAG", "true").unwrap());
        assert!(parse_bool("FLAG", "Yes").unwrap());
        assert!(parse_bool("FLAG", "1").unwrap());
        assert!(!parse_bool("FLAG", "off").unwrap());
        assert!(!parse_bool("FLAG", "FALSE").unwrap());
        assert!(parse_bool("FLAG", "maybe").is_err());
    }
}
