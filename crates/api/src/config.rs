use std::path::PathBuf;
use std::time::Duration;

use presence_core::cache::DEFAULT_TTL;
use presence_core::users::UserOrdering;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Presence log (CSV).
    pub presence_csv: PathBuf,
    /// User directory (XML).
    pub users_xml: PathBuf,
    /// How long a parsed presence log stays fresh.
    pub cache_ttl: Duration,
    /// Sort order of the users listing.
    pub users_order: UserOrdering,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                        |
    /// |---------------------------|--------------------------------|
    /// | `HOST`                    | `0.0.0.0`                      |
    /// | `PORT`                    | `5000`                         |
    /// | `CORS_ORIGINS`            | `http://localhost:5000`        |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                           |
    /// | `PRESENCE_CSV`            | `runtime/data/sample_data.csv` |
    /// | `USERS_XML`               | `runtime/data/users.xml`       |
    /// | `PRESENCE_CACHE_TTL_SECS` | `600`                          |
    /// | `USERS_ORDER`             | `id` (`id` or `name`)          |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let presence_csv = std::env::var("PRESENCE_CSV")
            .unwrap_or_else(|_| "runtime/data/sample_data.csv".into())
            .into();

        let users_xml = std::env::var("USERS_XML")
            .unwrap_or_else(|_| "runtime/data/users.xml".into())
            .into();

        let cache_ttl = std::env::var("PRESENCE_CACHE_TTL_SECS")
            .ok()
            .map(|v| {
                v.parse()
                    .map(Duration::from_secs)
                    .expect("PRESENCE_CACHE_TTL_SECS must be a valid u64")
            })
            .unwrap_or(DEFAULT_TTL);

        let users_order = std::env::var("USERS_ORDER")
            .ok()
            .map(|v| v.parse().unwrap_or_else(|e| panic!("Invalid USERS_ORDER: {e}")))
            .unwrap_or_default();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            presence_csv,
            users_xml,
            cache_ttl,
            users_order,
        }
    }
}
