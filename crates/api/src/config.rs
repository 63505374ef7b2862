//! Server configuration loaded from environment variables.

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Path to the catalog snapshot JSON file.
    pub marketplace_data_path: String,
    /// Path to the taxonomy configuration JSON file.
    pub taxonomy_path: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                   |
    /// |-------------------------|---------------------------|
    /// | `HOST`                  | `0.0.0.0`                 |
    /// | `PORT`                  | `3000`                    |
    /// | `CORS_ORIGINS`          | `http://localhost:3000`   |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                      |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                      |
    /// | `MARKETPLACE_DATA_PATH` | `data/marketplace.json`   |
    /// | `TAXONOMY_PATH`         | `config/taxonomy.json`    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let marketplace_data_path = std::env::var("MARKETPLACE_DATA_PATH")
            .unwrap_or_else(|_| "data/marketplace.json".into());

        let taxonomy_path =
            std::env::var("TAXONOMY_PATH").unwrap_or_else(|_| "config/taxonomy.json".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            marketplace_data_path,
            taxonomy_path,
        }
    }
}
