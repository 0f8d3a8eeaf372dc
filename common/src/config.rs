//! Environment-sourced configuration.
//!
//! Everything is read once at startup. Appwrite identifiers are kept optional:
//! a missing project, key, database or collection only fails the calls that
//! need it, so the landing page keeps working with an incomplete setup.

use std::time::Duration;

use secrecy::Secret;

use crate::errors::{AppError, AppResult};

/// Default Appwrite Cloud endpoint (Frankfurt region).
pub const DEFAULT_APPWRITE_ENDPOINT: &str = "https://fra.cloud.appwrite.io/v1";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

/// Top-level service configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Service name used in logs and health responses.
    pub service_name: String,
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Origins allowed by the CORS layer.
    pub allowed_origins: AllowedOrigins,
    /// Report backend failures with a non-200 status.
    pub strict_error_status: bool,
    /// Emit logs as JSON lines.
    pub log_json: bool,
    /// Appwrite connection settings.
    pub appwrite: AppwriteConfig,
}

/// Appwrite connection and target collection settings.
#[derive(Clone, Debug)]
pub struct AppwriteConfig {
    /// REST endpoint, e.g. `https://fra.cloud.appwrite.io/v1`.
    pub endpoint: String,
    pub project_id: Option<String>,
    pub api_key: Option<Secret<String>>,
    pub database_id: Option<String>,
    /// Collection holding subscription documents.
    pub subscription_collection_id: Option<String>,
    /// Per-request timeout; `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

/// CORS origin policy parsed from `ALLOWED_ORIGINS`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// `*`: any origin.
    Any,
    /// Explicit origin list.
    List(Vec<String>),
}

impl AllowedOrigins {
    /// Parses `*` or a comma-separated origin list. Blank entries are dropped.
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(origins)
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    pub fn load_with_service(service_name: &str) -> AppResult<Self> {
        Self::from_lookup(service_name, |key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(service_name: &str, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match var("SERVER_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::Config(format!("SERVER_PORT 无效: {raw}")))?,
            None => DEFAULT_PORT,
        };

        let timeout = match var("APPWRITE_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(raw.parse().map_err(|_| {
                AppError::Config(format!("APPWRITE_TIMEOUT_SECS 无效: {raw}"))
            })?)),
            None => None,
        };

        let appwrite = AppwriteConfig {
            endpoint: var("APPWRITE_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_APPWRITE_ENDPOINT.to_string()),
            project_id: var("APPWRITE_PROJECT_ID"),
            api_key: var("APPWRITE_API_KEY").map(Secret::new),
            database_id: var("APPWRITE_DATABASE_ID"),
            subscription_collection_id: var("APPWRITE_COLLECTION_ID_SUBSCRIPTION"),
            timeout,
        };

        Ok(Self {
            service_name: service_name.to_string(),
            host: var("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            allowed_origins: var("ALLOWED_ORIGINS")
                .map(|raw| AllowedOrigins::parse(&raw))
                .unwrap_or(AllowedOrigins::Any),
            strict_error_status: var("STRICT_ERROR_STATUS").is_some_and(|v| is_truthy(&v)),
            log_json: var("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json")),
            appwrite,
        })
    }

    /// `host:port` bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Loads `.env` from the working directory when `APPWRITE_LOCAL_TEST=1`.
///
/// Returns whether a file was loaded. Variables already present in the
/// environment win. Call before [`AppConfig::load_with_service`].
pub fn load_local_env() -> AppResult<bool> {
    if !local_env_requested(|key| std::env::var(key).ok()) {
        return Ok(false);
    }
    dotenvy::dotenv()
        .map(|_| true)
        .map_err(|e| AppError::Config(format!("未能加载 .env 文件: {e}")))
}

/// Whether the lookup asks for local `.env` loading.
pub fn local_env_requested<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup("APPWRITE_LOCAL_TEST").is_some_and(|v| v.trim() == "1")
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
