use std::env;
use std::net::SocketAddr;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub redis_host: String,
    pub redis_port: u16,
    pub redis_password: Option<String>,
    pub redis_db: i64,
    pub service_host: String,
    pub service_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source
    ///
    /// `from_env` passes the process environment; tests pass a map so they
    /// never touch global state.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let redis_host = var("REDIS_CONTAINER_IPV4")
            .context("REDIS_CONTAINER_IPV4 environment variable is required")?;

        let redis_port = var("REDIS_CONTAINER_PORT")
            .context("REDIS_CONTAINER_PORT environment variable is required")?
            .parse::<u16>()
            .context("REDIS_CONTAINER_PORT must be a valid port number (0-65535)")?;

        let redis_password = var("REDIS_PASSWORD").filter(|p| !p.is_empty());

        let redis_db = var("REDIS_DB")
            .unwrap_or_else(|| "0".to_string())
            .parse::<i64>()
            .context("REDIS_DB must be a database index")?;

        let service_port = var("API_CONTAINER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("API_CONTAINER_PORT must be a valid port number (0-65535)")?;

        let service_host = var("API_CONTAINER_IPV4")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            redis_host,
            redis_port,
            redis_password,
            redis_db,
            service_host,
            service_port,
        })
    }

    /// Socket the HTTP server binds to. The listen host is only advertised in
    /// the startup log; the server accepts on all interfaces.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.service_port))
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Redis address: {}:{}", self.redis_host, self.redis_port);
        tracing::info!("  Redis database: {}", self.redis_db);
        tracing::info!("  Redis password: {}",
            if self.redis_password.is_some() { "set" } else { "not set" });
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
