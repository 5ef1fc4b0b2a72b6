//! Server configuration.
//!
//! Values are resolved in layers, each overriding the previous one:
//! built-in defaults, an optional TOML file, environment variables
//! (`CASES_CSV`, `BIND_ADDR`, `PORT`), then command-line flags.

use std::path::{Path, PathBuf};

use sentencing_dashboard_models::DEFAULT_PAGE_SIZE;
use serde::Deserialize;

/// Default source dataset path.
pub const DEFAULT_DATA_PATH: &str = "cases.csv";

/// Default bind address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

/// Default port.
pub const DEFAULT_PORT: u16 = 8080;

/// Errors that can occur while resolving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`FileConfig`].
    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// `PORT` is not a valid port number.
    #[error("Invalid port: {0:?}")]
    InvalidPort(String),
}

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Path of the source CSV dataset.
    pub data_path: PathBuf,
    /// Address to bind.
    pub bind_addr: String,
    /// Port to bind.
    pub port: u16,
    /// Detail table rows per page when the client gives no limit.
    pub page_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Contents of the TOML config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    /// Path of the source CSV dataset.
    pub data_path: Option<PathBuf>,
    /// Address to bind.
    pub bind_addr: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Default table page size.
    pub page_size: Option<usize>,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Path of the source CSV dataset.
    pub data_path: Option<PathBuf>,
    /// Address to bind.
    pub bind_addr: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Default table page size.
    pub page_size: Option<usize>,
}

impl ServerConfig {
    /// Resolves the configuration from every layer, reading the process
    /// environment.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::Io`] if `config_file` cannot be read
    /// * [`ConfigError::Toml`] if `config_file` is not valid
    /// * [`ConfigError::InvalidPort`] if `PORT` is not a port number
    pub fn resolve(
        config_file: Option<&Path>,
        overrides: ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_file {
            config = config.with_file(FileConfig::load(path)?);
        }

        Ok(config
            .with_env(|key| std::env::var(key).ok())?
            .with_overrides(overrides))
    }

    /// Applies the values present in a config file.
    #[must_use]
    pub fn with_file(self, file: FileConfig) -> Self {
        Self {
            data_path: file.data_path.unwrap_or(self.data_path),
            bind_addr: file.bind_addr.unwrap_or(self.bind_addr),
            port: file.port.unwrap_or(self.port),
            page_size: file.page_size.unwrap_or(self.page_size),
        }
    }

    /// Applies `CASES_CSV`, `BIND_ADDR` and `PORT` as returned by `lookup`.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::InvalidPort`] if `PORT` is not a port number
    pub fn with_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = lookup("CASES_CSV") {
            self.data_path = PathBuf::from(path);
        }
        if let Some(addr) = lookup("BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        Ok(self)
    }

    /// Applies command-line values.
    #[must_use]
    pub fn with_overrides(self, overrides: ConfigOverrides) -> Self {
        Self {
            data_path: overrides.data_path.unwrap_or(self.data_path),
            bind_addr: overrides.bind_addr.unwrap_or(self.bind_addr),
            port: overrides.port.unwrap_or(self.port),
            page_size: overrides.page_size.unwrap_or(self.page_size),
        }
    }
}

impl FileConfig {
    /// Reads and parses the TOML file at `path`.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::Io`] if the file cannot be read
    /// * [`ConfigError::Toml`] if the file is not valid
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config file {}", path.display());
        Self::parse(&contents)
    }

    /// Parses TOML config file contents.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::Toml`] if `contents` is not valid
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.data_path, PathBuf::from("cases.csv"));
        assert_eq!(config.bind_addr, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.page_size, 50);
    }

    #[test]
    fn file_overrides_defaults() {
        let file = FileConfig::parse("port = 9000\ndata_path = \"data/cases.csv\"\n").unwrap();
        let config = ServerConfig::default().with_file(file);
        assert_eq!(config.port, 9000);
        assert_eq!(config.data_path, PathBuf::from("data/cases.csv"));
        assert_eq!(config.bind_addr, "127.0.0.1");
    }

    #[test]
    fn env_overrides_file_and_flags_override_env() {
        let file = FileConfig::parse("port = 9000\nbind_addr = \"10.0.0.1\"\n").unwrap();
        let config = ServerConfig::default()
            .with_file(file)
            .with_env(env(&[("PORT", "9100"), ("CASES_CSV", "env.csv")]))
            .unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.bind_addr, "10.0.0.1");
        assert_eq!(config.data_path, PathBuf::from("env.csv"));

        let config = config.with_overrides(ConfigOverrides {
            port: Some(9200),
            ..ConfigOverrides::default()
        });
        assert_eq!(config.port, 9200);
        assert_eq!(config.data_path, PathBuf::from("env.csv"));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = ServerConfig::default()
            .with_env(env(&[("PORT", "eighty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(p) if p == "eighty"));
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        assert!(matches!(
            FileConfig::parse("colour = \"blue\"\n"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = FileConfig::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
