use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
///
/// Domain lookups (role, page key, record id) never produce an error; they
/// fall back silently. Only the ambient surfaces below can fail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// The configuration file could not be parsed.
    Config,
    /// A persistence collaborator rejected a write.
    Persistence,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Config => write!(f, "Config"),
            AppErrorKind::Persistence => write!(f, "Persistence"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured application error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Config,
            message: message.into(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Persistence,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
        }
    }

    /// A message suitable for a toast or inline notice.
    ///
    /// Internal errors are not shown verbatim.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::InternalError => "Something went wrong. Please try again.".to_string(),
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::config(err.message().to_string())
    }
}
