use std::env;

use super::ConfigError;

/// Every route is served below this prefix.
pub const API_PREFIX: &str = "/rses/api";

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env::var("SERVICE_IP").ok(), env::var("SERVICE_PORT").ok())
    }

    fn from_values(ip: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let ip = ip.unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match port {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "SERVICE_PORT",
                value,
            })?,
            None => 8080,
        };

        Ok(Self { ip, port })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
