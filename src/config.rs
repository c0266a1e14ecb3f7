//! Runtime configuration loaded from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default CSV path, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;

/// Where to read launches from and where to listen.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    /// CSV file with launch records (from LAUNCH_DASH_DATA)
    pub data_path: PathBuf,
    /// Bind address (from LAUNCH_DASH_HOST)
    pub host: String,
    /// Bind port (from LAUNCH_DASH_PORT)
    pub port: u16,
}

impl DashboardConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_path = lookup("LAUNCH_DASH_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let host = lookup("LAUNCH_DASH_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("LAUNCH_DASH_PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid LAUNCH_DASH_PORT '{}'", raw);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            data_path,
            host,
            port,
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        data_path: Option<PathBuf>,
        host: Option<String>,
        port: Option<u16>,
    ) -> Self {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// `host:port`, parsed. Fails for hostnames that are not IP literals.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid listen address {}:{}: {}", self.host, self.port, e))
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
