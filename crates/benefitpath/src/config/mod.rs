//! Environment-driven configuration for the calculator service.
//!
//! All knobs come from the process environment (a `.env` file is honored in
//! development): `APP_ENV`, `APP_HOST`, `APP_PORT`, `APP_LOG_LEVEL`.

use std::env;
use std::net::{SocketAddr, ToSocketAddrs};

/// Deployment stage the service believes it is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeEnv {
    #[default]
    Development,
    Test,
    Production,
}

impl RuntimeEnv {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Everything the binary needs to come up.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: RuntimeEnv,
    pub listen: ListenConfig,
    pub telemetry: TelemetryConfig,
}

/// Where the HTTP listener binds.
#[derive(Debug, Clone)]
pub struct ListenConfig {
    pub host: String,
    pub port: u16,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT is not a valid port number: {value}")]
    InvalidPort { value: String },
    #[error("cannot resolve listen address {host}:{port}")]
    UnresolvableHost {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },
    #[error("listen address {host}:{port} resolved to no usable address")]
    EmptyResolution { host: String, port: u16 },
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port_raw = env_or("APP_PORT", "8000");
        let port = port_raw
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: port_raw })?;

        Ok(Self {
            environment: RuntimeEnv::parse(&env_or("APP_ENV", "development")),
            listen: ListenConfig {
                host: env_or("APP_HOST", "127.0.0.1"),
                port,
            },
            telemetry: TelemetryConfig {
                log_level: env_or("APP_LOG_LEVEL", "info"),
            },
        })
    }
}

impl ListenConfig {
    /// Resolve the configured host and port to a bindable socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let mut addrs = (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|source| ConfigError::UnresolvableHost {
                host: self.host.clone(),
                port: self.port,
                source,
            })?;

        addrs.next().ok_or_else(|| ConfigError::EmptyResolution {
            host: self.host.clone(),
            port: self.port,
        })
    }
}
