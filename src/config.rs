//! Application configuration loaded from environment variables.

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};

use serde::Deserialize;

/// Host the server binds to: all interfaces.
pub const BIND_HOST: Ipv4Addr = Ipv4Addr::UNSPECIFIED;

/// `FLASK_ENV` value that turns debug mode off.
const PRODUCTION: &str = "production";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP listening port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment mode; `production` disables debug output.
    #[serde(default)]
    pub flask_env: Option<String>,

    /// Tracing filter directive, overrides the mode default.
    #[serde(default)]
    pub rust_log: Option<String>,
}

fn default_port() -> u16 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            flask_env: None,
            rust_log: None,
        }
    }
}

/// Whether the process runs with verbose diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    /// Default: verbose logging and error detail.
    Development,
    /// `FLASK_ENV=production`: minimal diagnostics.
    Production,
}

impl DeploymentMode {
    /// Derive the mode from the raw `FLASK_ENV` value.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(PRODUCTION) => Self::Production,
            _ => Self::Development,
        }
    }

    /// Debug mode is on everywhere except production.
    pub fn is_debug(self) -> bool {
        self == Self::Development
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("PORT must be a non-zero port number".to_string());
        }

        Ok(())
    }

    /// Deployment mode derived from `FLASK_ENV`.
    pub fn mode(&self) -> DeploymentMode {
        DeploymentMode::from_env_value(self.flask_env.as_deref())
    }

    /// Socket address the server listens on.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((BIND_HOST, self.port))
    }
}
