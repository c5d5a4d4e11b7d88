//! Application configuration.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Default schedule document location.
pub const DEFAULT_DATA_PATH: &str = "data/response.json";

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Settings shared by the `search` and `serve` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Schedule document to import at startup.
    pub data_path: PathBuf,

    /// Address the HTTP API binds to.
    pub listen_addr: SocketAddr,

    /// Number of `-v` flags given.
    pub verbosity: u8,
}

impl AppConfig {
    /// Create a configuration with the given data path and defaults elsewhere.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            ..Self::default()
        }
    }

    /// Set the listen address.
    pub fn with_listen_addr(mut self, listen_addr: SocketAddr) -> Self {
        self.listen_addr = listen_addr;
        self
    }

    /// Set the verbosity.
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Returns the default `tracing` filter directive for the verbosity.
    ///
    /// `RUST_LOG` takes precedence when set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            listen_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            verbosity: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.data_path, PathBuf::from("data/response.json"));
        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn builder_overrides() {
        let addr: SocketAddr = "0.0.0.0:8080".parse().unwrap();
        let config = AppConfig::new("/tmp/schedule.json")
            .with_listen_addr(addr)
            .with_verbosity(2);

        assert_eq!(config.data_path, PathBuf::from("/tmp/schedule.json"));
        assert_eq!(config.listen_addr, addr);
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn verbosity_saturates_at_trace() {
        assert_eq!(AppConfig::default().with_verbosity(1).log_filter(), "info");
        assert_eq!(AppConfig::default().with_verbosity(9).log_filter(), "trace");
    }
}
