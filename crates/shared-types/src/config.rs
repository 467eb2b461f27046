use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{Role, User};

/// The `[session]` table: who is using the portal.
///
/// The role is kept as a raw string so an unknown value degrades to the
/// student portal instead of rejecting the whole file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_user_id")]
    pub id: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            role: default_role(),
            id: default_user_id(),
        }
    }
}

impl SessionConfig {
    /// Build the session user handed to the shell.
    pub fn user(&self) -> User {
        User {
            name: self.name.clone(),
            role: Role::from_str_or_default(&self.role),
            id: self.id.clone(),
        }
    }
}

fn default_name() -> String {
    "Sarah Johnson".to_string()
}

fn default_role() -> String {
    "student".to_string()
}

fn default_user_id() -> String {
    "student_001".to_string()
}

/// The `[ui]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_brand")]
    pub brand: String,
    /// Whether the navigation drawer starts open on narrow viewports.
    #[serde(default)]
    pub drawer_open: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            drawer_open: false,
        }
    }
}

fn default_brand() -> String {
    "AttendEase".to_string()
}

/// The `[logging]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level; anything unrecognised means `INFO`.
    pub fn tracing_level(&self) -> tracing::Level {
        self.level.trim().parse().unwrap_or(tracing::Level::INFO)
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Top-level config file structure matching `config.toml`.
///
/// Every table is optional so that a missing or partial file still
/// produces a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(contents)?)
    }

    /// Parse `contents`, falling back to defaults when it is malformed.
    pub fn from_toml_or_default(contents: &str) -> Self {
        match Self::from_toml_str(contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "config parse failed, using defaults");
                Self::default()
            }
        }
    }
}
