//! Runtime configuration for the capture server.

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use browser_adapter::AdapterConfig;

/// Port used when neither the CLI flag nor `PORT` supplies one.
pub const DEFAULT_PORT: u16 = 9999;

/// Assembled server configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub adapter: AdapterConfig,
}

impl AppConfig {
    /// Build from CLI-level overrides; environment fills the gaps
    /// (`PORT` for the port, `CAPTUREKIT_CHROME`/`CAPTUREKIT_HEADLESS`
    /// inside [`AdapterConfig::default`]).
    pub fn resolve(
        host: &str,
        port_flag: Option<u16>,
        chrome_path: Option<PathBuf>,
        user_data_dir: Option<PathBuf>,
        headful: bool,
    ) -> Result<Self> {
        let host: IpAddr = host
            .parse()
            .with_context(|| format!("invalid bind host '{host}'"))?;

        let port = match port_flag {
            Some(port) => port,
            None => port_from_env()?,
        };

        let mut adapter = AdapterConfig::default();
        if let Some(path) = chrome_path {
            adapter = adapter.with_executable(path);
        }
        if let Some(dir) = user_data_dir {
            adapter = adapter.with_user_data_dir(dir);
        }
        if headful {
            adapter = adapter.with_headless(false);
        }

        Ok(Self {
            host,
            port,
            adapter,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn port_from_env() -> Result<u16> {
    match env::var("PORT") {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid PORT value '{raw}'")),
        _ => Ok(DEFAULT_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_environment() {
        let config = AppConfig::resolve("127.0.0.1", Some(4000), None, None, false).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:4000");
    }

    #[test]
    fn headful_flag_flips_headless() {
        let config = AppConfig::resolve("0.0.0.0", Some(4000), None, None, true).unwrap();
        assert!(!config.adapter.headless);
    }

    #[test]
    fn bad_host_is_rejected() {
        assert!(AppConfig::resolve("not-a-host", Some(4000), None, None, false).is_err());
    }
}
