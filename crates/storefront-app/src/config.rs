//! Environment-driven configuration.

use crate::error::AppError;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_CATALOG_EMAIL: &str = "catalog@storefront.local";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable multi-line output.
    Pretty,
}

/// Settings read at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// PostgreSQL URL. When absent orders are kept in memory.
    pub database_url: Option<String>,
    /// Pool size for the PostgreSQL connection pool.
    pub database_max_connections: u32,
    /// Log output format.
    pub log_format: LogFormat,
    /// Recipient of product-created notifications.
    pub catalog_email: String,
}

impl AppConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(0) | Err(_) => {
                    return Err(AppError::Config(format!(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer, got {raw:?}"
                    )));
                }
                Ok(n) => n,
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "LOG_FORMAT must be \"json\" or \"pretty\", got {other:?}"
                )));
            }
        };

        let catalog_email =
            lookup("CATALOG_EMAIL").unwrap_or_else(|| DEFAULT_CATALOG_EMAIL.to_owned());

        Ok(Self {
            database_url,
            database_max_connections,
            log_format,
            catalog_email,
        })
    }
}
