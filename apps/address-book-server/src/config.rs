//! Layered application configuration.
//!
//! Precedence (lowest to highest): built-in defaults, YAML file, `APP__*` environment
//! variables (`__` separates nesting levels), CLI overrides.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use address_book::config::AuthConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "APP__";
pub const IN_MEMORY_DSN: &str = "sqlite::memory:";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file does not exist: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
    #[error("invalid server.bind_addr '{addr}': {source}")]
    BindAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("auth.api_key must be set when auth is enabled")]
    MissingApiKey,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_owned(),
            port: 8087,
            request_timeout_secs: 30,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    pub dsn: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: "sqlite://address_book.db?mode=rwc".to_owned(),
            max_connections: 10,
        }
    }
}

impl DatabaseConfig {
    /// Every connection to an in-memory `SQLite` DSN opens its own empty database.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.dsn.contains(":memory:") || self.dsn.contains("mode=memory")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set
    pub level: String,
    pub format: LogFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
            file: None,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
}

/// CLI values that override the loaded configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub verbose: u8,
    pub mock: bool,
}

impl AppConfig {
    /// Load defaults, then the YAML file (if any), then `APP__*` environment variables.
    ///
    /// # Errors
    /// `MissingFile` if `path` does not point at a file, `Invalid` if any layer fails to
    /// parse or does not match the schema.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn load_with(path: Option<&Path>, env: Env) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(env)
            .extract()
            .map_err(|e| ConfigError::Invalid(Box::new(e)))
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        match cli.verbose {
            0 => {}
            1 => "info".clone_into(&mut self.logging.level),
            2 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }
        if cli.mock {
            IN_MEMORY_DSN.clone_into(&mut self.database.dsn);
        }
    }

    /// # Errors
    /// `BindAddr` if `server.bind_addr` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr =
            self.server
                .bind_addr
                .parse()
                .map_err(|source| ConfigError::BindAddr {
                    addr: self.server.bind_addr.clone(),
                    source,
                })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    /// Checks that need the whole config, beyond what deserialization enforces.
    ///
    /// # Errors
    /// `BindAddr` for an unparsable bind address, `MissingApiKey` when auth is enabled
    /// without a key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;
        if self.auth.enabled && self.auth.api_key().is_none() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }

    /// Effective configuration with secrets redacted.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // Prefix no test process sets, so the real environment never leaks in
    fn no_env() -> Env {
        Env::prefixed("ADDRESS_BOOK_CONFIG_TEST_UNSET__").split("__")
    }

    fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn defaults_without_file() {
        let cfg = AppConfig::load_with(None, no_env()).unwrap();

        assert_eq!(cfg.server.port, 8087);
        assert_eq!(cfg.logging.format, LogFormat::Text);
        assert!(cfg.auth.enabled);
        assert!(!cfg.database.is_in_memory());
    }

    #[test]
    fn yaml_overrides_defaults() {
        let file = yaml_file(
            r"
server:
  port: 9100
database:
  dsn: 'sqlite::memory:'
logging:
  format: json
auth:
  header: x-token
  api_key: topsecret
",
        );

        let cfg = AppConfig::load_with(Some(file.path()), no_env()).unwrap();

        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.server.bind_addr, "127.0.0.1");
        assert!(cfg.database.is_in_memory());
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.auth.header, "x-token");
        assert_eq!(cfg.auth.api_key(), Some("topsecret"));
        cfg.validate().unwrap();
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = AppConfig::load_with(Some(Path::new("/nonexistent/app.yaml")), no_env())
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = yaml_file("server:\n  prot: 1\n");
        let err = AppConfig::load_with(Some(file.path()), no_env()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn cli_overrides_win() {
        let mut cfg = AppConfig::default();
        cfg.apply_cli_overrides(&CliOverrides {
            port: Some(1234),
            verbose: 2,
            mock: true,
        });

        assert_eq!(cfg.server.port, 1234);
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.database.dsn, IN_MEMORY_DSN);
        assert!(cfg.database.is_in_memory());
    }

    #[test]
    fn validate_requires_api_key_when_auth_enabled() {
        let cfg = AppConfig::default();
        assert!(matches!(cfg.validate(), Err(ConfigError::MissingApiKey)));

        let mut cfg = AppConfig::default();
        cfg.auth.enabled = false;
        cfg.validate().unwrap();
    }

    #[test]
    fn bad_bind_addr_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.auth.enabled = false;
        "not-an-ip".clone_into(&mut cfg.server.bind_addr);

        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::BindAddr { .. })
        ));
    }

    #[test]
    fn printed_config_hides_api_key() {
        let file = yaml_file("auth:\n  api_key: hunter2\n");
        let cfg = AppConfig::load_with(Some(file.path()), no_env()).unwrap();

        let rendered = cfg.to_pretty_json().unwrap();

        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn numeric_api_key_loads_from_yaml_and_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("address-book.yaml", "auth:\n  api_key: 123456\n")?;
            let cfg = AppConfig::load_with(Some(Path::new("address-book.yaml")), no_env())
                .map_err(|e| e.to_string())?;
            assert_eq!(cfg.auth.api_key(), Some("123456"));

            jail.set_env("ADDRESS_BOOK_JAIL__AUTH__API_KEY", "987654");
            let env = Env::prefixed("ADDRESS_BOOK_JAIL__").split("__");
            let cfg = AppConfig::load_with(Some(Path::new("address-book.yaml")), env)
                .map_err(|e| e.to_string())?;
            assert_eq!(cfg.auth.api_key(), Some("987654"));
            cfg.validate().map_err(|e| e.to_string())?;
            Ok(())
        });
    }
}
