use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    ValidationError,
    NetworkError,
    NotFound,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::NetworkError => write!(f, "NetworkError"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error used by the client when talking to the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NetworkError,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
        }
    }

    /// Map an HTTP status from the backend onto an error kind.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            404 => Self::not_found(message),
            400 | 422 => Self::validation(message),
            _ => Self::internal(message),
        }
    }

    /// Whether the network error handler should take this error.
    pub fn is_network(&self) -> bool {
        self.kind == AppErrorKind::NetworkError
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
