use recipes_core::pagination::{API_PAGE_SIZE, DEFAULT_PER_PAGE};

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Recipes per HTML listing page.
    pub per_page: usize,
    /// Recipes per page on the JSON API.
    pub api_page_size: usize,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:8000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `PER_PAGE`             | `6`                        |
    /// | `API_PAGE_SIZE`        | `10`                       |
    ///
    /// # Panics
    ///
    /// Panics on unparsable values, and when a page size is zero.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:8000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let per_page = page_size_from_env("PER_PAGE", DEFAULT_PER_PAGE);
        let api_page_size = page_size_from_env("API_PAGE_SIZE", API_PAGE_SIZE);

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            per_page,
            api_page_size,
            jwt,
        }
    }
}

fn page_size_from_env(var: &str, default: usize) -> usize {
    let size: usize = std::env::var(var)
        .map(|v| v.parse().unwrap_or_else(|_| panic!("{var} must be a valid usize")))
        .unwrap_or(default);
    assert!(size > 0, "{var} must be greater than zero");
    size
}
