//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`ServiceOptions`]
//! derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `W3CV__SECTION__KEY` (e.g. `W3CV__ENDPOINTS__CSS`)
//! 3. Config file (`--config FILE`, else the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use w3cv_adapters::{HttpSettings, SleepCooldown};
use w3cv_core::{
    application::{ServiceOptions, services::DEFAULT_MAX_ATTEMPTS},
    domain::{DEFAULT_CSS_ENDPOINT, DEFAULT_HTML_ENDPOINT, DEFAULT_UNICORN_ENDPOINT, Endpoints},
};

use crate::error::{CliError, CliResult};

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "W3CV";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Validator service URLs.
    pub endpoints: EndpointConfig,
    /// Retry and pacing.
    pub validation: ValidationConfig,
    /// HTTP client settings.
    pub http: HttpConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub css: String,
    pub html: String,
    pub unicorn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Seconds to wait after every request.
    pub cooldown_secs: u64,
    /// Attempts per target before giving up on unreadable answers.
    pub max_attempts: u32,
    /// Add generic-checker failures to the error total instead of replacing it.
    pub accumulate_generic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            css: DEFAULT_CSS_ENDPOINT.into(),
            html: DEFAULT_HTML_ENDPOINT.into(),
            unicorn: DEFAULT_UNICORN_ENDPOINT.into(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            cooldown_secs: 2,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            accumulate_generic: false,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        let settings = HttpSettings::default();
        Self {
            timeout_secs: settings.timeout.as_secs(),
            user_agent: settings.user_agent,
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicit `--config` file must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> CliResult<Self> {
        let defaults = Config::try_from(&Self::default()).map_err(|e| config_error(path, e))?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| config_error(path, e))?;

        let cfg: Self = settings
            .try_deserialize()
            .map_err(|e| config_error(path, e))?;

        tracing::debug!(path = %path.display(), "Configuration loaded");
        Ok(cfg)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.w3cv.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "w3cv", "w3cv")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".w3cv.toml"))
    }

    /// Options handed to the validation service.
    pub fn service_options(&self, verbose: bool) -> ServiceOptions {
        ServiceOptions {
            endpoints: Endpoints {
                css: self.endpoints.css.clone(),
                html: self.endpoints.html.clone(),
                unicorn: self.endpoints.unicorn.clone(),
            },
            max_attempts: self.validation.max_attempts,
            verbose,
            accumulate_generic: self.validation.accumulate_generic,
        }
    }

    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            timeout: Duration::from_secs(self.http.timeout_secs),
            user_agent: self.http.user_agent.clone(),
        }
    }

    pub fn cooldown(&self) -> SleepCooldown {
        SleepCooldown::new(Duration::from_secs(self.validation.cooldown_secs))
    }

    /// Render as TOML for `--show-config`.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("cannot render configuration: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

fn config_error(path: &Path, e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: format!("cannot load {}: {e}", path.display()),
        source: Some(Box::new(e)),
    }
}
