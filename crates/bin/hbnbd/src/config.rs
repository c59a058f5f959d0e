//! Settings for the hbnb API daemon.
//!
//! Values are layered: built-in defaults, then `hbnb.toml` from the working
//! directory when it exists, then `HBNB_*` environment variables (and
//! `RUST_LOG` for the log filter). The merged result is checked before the
//! daemon binds its listener or opens the database.

use serde::Deserialize;

const CONFIG_FILE: &str = "hbnb.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite:hbnb.db?mode=rwc";
const DEFAULT_LOG_FILTER: &str = "hbnbd=info,hbnb=info,tower_http=debug";

/// Daemon settings, one table per concern in `hbnb.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `[server]`: where the API listens.
    pub server: ServerConfig,
    /// `[database]`: where records are stored.
    pub database: DatabaseConfig,
    /// `[logging]`: which spans and events are printed.
    pub logging: LoggingConfig,
}

/// Listener address of the API.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Record store location.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlx` `SQLite` URL; `sqlite::memory:` keeps everything in RAM.
    pub url: String,
}

/// Log output.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives.
    pub filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Merge defaults, `hbnb.toml` and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `hbnb.toml` cannot be read or parsed, or
    /// when the merged settings cannot be served.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// A missing file yields the defaults; an unreadable one is an error.
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides looked up by variable name. Later keys win, so
    /// `HBNB_BIND` beats `HBNB_API_HOST`/`HBNB_API_PORT` and `RUST_LOG` beats
    /// `HBNB_LOG`. Unparseable ports are ignored.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("HBNB_API_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("HBNB_API_PORT")
            && let Ok(port) = val.parse()
        {
            self.server.port = port;
        }
        if let Some(val) = var("HBNB_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("HBNB_DATABASE_URL") {
            self.database.url = val;
        }
        if let Some(val) = var("HBNB_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.url.is_empty() {
            return Err(ConfigError::Validation(
                "database url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// `host:port`, as accepted by `TcpListener::bind`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

/// Why the daemon could not assemble its settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse hbnb.toml")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read hbnb.toml")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn overridden(mut config: Config, pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<&str, &str> = pairs.iter().copied().collect();
        config.apply_overrides(|key| env.get(key).map(|val| (*val).to_string()));
        config
    }

    #[test]
    fn should_listen_on_port_5000_with_local_database_by_default() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.database_url(), "sqlite:hbnb.db?mode=rwc");
        assert!(config.logging.filter.contains("tower_http=debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_fill_missing_tables_from_defaults() {
        let config: Config = toml::from_str("[database]\nurl = 'sqlite::memory:'").unwrap();
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn should_read_every_table_from_file() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [database]
            url = "sqlite:/var/lib/hbnb/hbnb.db"

            [logging]
            filter = "hbnbd=debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.database_url(), "sqlite:/var/lib/hbnb/hbnb.db");
        assert_eq!(config.logging.filter, "hbnbd=debug");
    }

    #[test]
    fn should_fail_on_malformed_file_content() {
        assert!(toml::from_str::<Config>("[server\nport = 1").is_err());
        assert!(toml::from_str::<Config>("[server]\nport = 'five'").is_err());
    }

    #[test]
    fn should_fall_back_to_defaults_without_file() {
        let config = Config::from_file("does-not-exist/hbnb.toml").unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn should_let_environment_win_over_file_values() {
        let from_file: Config =
            toml::from_str("[server]\nhost = '10.0.0.1'\nport = 9000").unwrap();
        let config = overridden(
            from_file,
            &[("HBNB_API_PORT", "8000"), ("HBNB_DATABASE_URL", "sqlite::memory:")],
        );
        assert_eq!(config.bind_addr(), "10.0.0.1:8000");
        assert_eq!(config.database_url(), "sqlite::memory:");
    }

    #[test]
    fn should_keep_port_when_override_is_not_a_number() {
        let config = overridden(Config::default(), &[("HBNB_API_PORT", "eighty")]);
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn should_prefer_bind_over_host_and_port() {
        let config = overridden(
            Config::default(),
            &[
                ("HBNB_API_HOST", "127.0.0.1"),
                ("HBNB_API_PORT", "8000"),
                ("HBNB_BIND", "[::1]:7000"),
            ],
        );
        assert_eq!(config.bind_addr(), "[::1]:7000");
    }

    #[test]
    fn should_prefer_rust_log_over_hbnb_log() {
        let config = overridden(
            Config::default(),
            &[("HBNB_LOG", "warn"), ("RUST_LOG", "trace")],
        );
        assert_eq!(config.logging.filter, "trace");

        let config = overridden(Config::default(), &[("HBNB_LOG", "warn")]);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_refuse_settings_that_cannot_be_served() {
        let config = overridden(Config::default(), &[("HBNB_API_PORT", "0")]);
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let config = overridden(Config::default(), &[("HBNB_DATABASE_URL", "")]);
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }
}
