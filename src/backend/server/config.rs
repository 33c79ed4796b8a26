/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables.
 * A `.env` file is read by the binary before this runs.
 *
 * # Variables
 *
 * - `HOST` - Bind address (default `0.0.0.0`)
 * - `PORT` - Bind port (default `5000`)
 * - `DATABASE_URL` - SQLite URL (default `sqlite://rewatch.db?mode=rwc`)
 * - `REWATCH_ADMIN_ROUTES` - Mount `/admin` routes when `1`, `true` or `yes`
 *
 * # Error Handling
 *
 * Malformed values are a `ConfigError`; the server refuses to start.
 */

use std::net::{IpAddr, SocketAddr};

use crate::shared::ConfigError;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://rewatch.db?mode=rwc";

/// Runtime configuration of the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    /// Whether the `/admin` inspection routes are mounted
    pub admin_routes: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            admin_routes: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use rewatch::backend::server::config::ServerConfig;
    ///
    /// let config = ServerConfig::from_env().expect("valid configuration");
    /// println!("listening on {}", config.socket_addr());
    /// ```
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "HOST",
                value: raw,
            })?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let admin_routes = lookup("REWATCH_ADMIN_ROUTES")
            .map(|raw| is_truthy(&raw))
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            database_url,
            admin_routes,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
