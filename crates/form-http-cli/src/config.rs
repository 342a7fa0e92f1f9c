//! Layered settings: built-in defaults, TOML file, then environment

use std::env;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Overrides [`Settings::log_level`]
pub const ENV_LOG_LEVEL: &str = "FORM_HTTP_LOG_LEVEL";
/// Overrides [`Settings::base_url`]
pub const ENV_BASE_URL: &str = "FORM_HTTP_BASE_URL";
/// Overrides [`Settings::headers`]
pub const ENV_HEADERS: &str = "FORM_HTTP_HEADERS";
/// Overrides [`Settings::timeout_secs`]
pub const ENV_TIMEOUT_SECS: &str = "FORM_HTTP_TIMEOUT_SECS";

/// Separator for header lines packed into [`ENV_HEADERS`]
pub const ENV_HEADERS_SEPARATOR: char = ';';

/// CLI settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Default tracing directive, `RUST_LOG` takes precedence
    pub log_level: String,
    /// Base URL relative request URLs are resolved against
    pub base_url: Option<String>,
    /// Header lines sent before those given on the command line
    #[serde(default)]
    pub headers: Vec<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Environment overrides that were rejected, reported once logging is up
    #[serde(skip)]
    pub env_warnings: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            base_url: None,
            headers: Vec::new(),
            timeout_secs: None,
            env_warnings: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from `config_file`, or from the default location when none is given
    ///
    /// An explicitly named file must exist; the default file is optional.
    /// Environment variables override whatever the file sets.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => match default_config_path() {
                Some(path) => File::from(path).required(false),
                None => return Ok(Self::default().with_env()),
            },
        };

        let config = Config::builder()
            // use defaults
            .add_source(Config::try_from(&Self::default())?)
            // override with file contents
            .add_source(file)
            .build()?;
        let settings: Settings = config.try_deserialize()?;

        Ok(settings.with_env())
    }

    /// Parse settings from TOML text layered over the defaults
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Apply overrides from the process environment
    pub fn with_env(self) -> Self {
        self.apply_env(|key| env::var(key).ok())
    }

    /// Apply overrides looked up through `lookup`
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = Some(base_url);
        }

        if let Some(headers) = lookup(ENV_HEADERS) {
            self.headers = headers
                .split(ENV_HEADERS_SEPARATOR)
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            match timeout.parse() {
                Ok(secs) => self.timeout_secs = Some(secs),
                Err(_) => self
                    .env_warnings
                    .push(format!("Ignoring invalid {ENV_TIMEOUT_SECS}: {timeout}")),
            }
        }

        self
    }
}

/// `~/.form-http/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".form-http").join("config.toml"))
}
