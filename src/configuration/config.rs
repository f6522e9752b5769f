use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::error_handling::types::ConfigError;

/// Application configuration defining all runtime parameters.
///
/// A configuration can come from a TOML file (`Config::from_file`) or from
/// command-line flags (`Config::from_args`); both shapes are validated the
/// same way before use.
#[derive(Parser, Deserialize, Debug, Clone)]
#[command(name = "galeri")]
pub struct Config {
    /// IP address to bind the server to.
    ///
    /// # Command Line
    /// Use `--bind-address <ADDRESS>` to set this value from the CLI
    #[arg(long, default_value = "127.0.0.1")]
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Port the gallery is served on. Must not be in the reserved range.
    ///
    /// # Command Line
    /// Use `--port <PORT>` to set this value from the CLI
    #[arg(long, default_value_t = 8080)]
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory the photo collection is persisted under.
    ///
    /// Created on startup when missing. Can also be overridden at runtime
    /// with the GALERI_STORAGE_DIR environment variable.
    ///
    /// # Command Line
    /// Use `--storage-path <PATH>` to set this value from the CLI
    #[arg(long, default_value = "galeri-data")]
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("galeri-data")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            storage_path: default_storage_path(),
        }
    }
}

impl Config {
    /// Loads and validates a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&raw).map_err(|e| ConfigError::TomlError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Builds and validates a configuration from command-line arguments.
    pub fn from_args() -> Result<Self, ConfigError> {
        let config = Config::parse();
        config.validate()?;
        Ok(config)
    }

    /// The socket address the web server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .bind_address
            .parse()
            .map_err(|_| ConfigError::BadAddress(self.bind_address.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;
        if self.port < 1024 {
            return Err(ConfigError::PortOutOfRange(self.port));
        }
        if self.storage_path.exists() && !self.storage_path.is_dir() {
            return Err(ConfigError::StorageDirUnavailable(format!(
                "{} exists but is not a directory",
                self.storage_path.display()
            )));
        }
        Ok(())
    }

    #[cfg(test)]
    fn from_args_under_test(args: &[&str]) -> Result<Self, ConfigError> {
        let config = Config::try_parse_from(args).unwrap_or_else(|e| panic!("{}", e));
        config.validate()?;
        Ok(config)
    }
}
