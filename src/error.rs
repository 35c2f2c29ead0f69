//! Error taxonomy for providers, the registry and the dispatcher
//!
//! Provider and registry errors never leave the dispatcher as-is: they are
//! translated into a [`DispatchError`], which is the only error type the
//! transport layer sees.

use crate::search::Category;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Failure class reported by a provider or its backing store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderErrorKind {
    /// Backing store temporarily unreachable
    Unavailable,
    /// No answer before the deadline
    Timeout,
    /// Logic or data error inside the provider
    Internal,
    /// Provider invoked with a query for another category
    InvalidCategory,
}

impl ProviderErrorKind {
    /// Whether an outer layer may retry the same request
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable | Self::Timeout)
    }
}

impl fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "unavailable"),
            Self::Timeout => write!(f, "timeout"),
            Self::Internal => write!(f, "internal"),
            Self::InvalidCategory => write!(f, "invalid category"),
        }
    }
}

/// Error returned by a [`SearchProvider`](crate::providers::SearchProvider)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Unavailable, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Timeout, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Internal, message)
    }

    pub fn invalid_category(expected: Category, got: Category) -> Self {
        Self::new(
            ProviderErrorKind::InvalidCategory,
            format!("provider serves '{}' but was called with '{}'", expected, got),
        )
    }
}

/// Registry lookup failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no provider registered for category '{0}'")]
    UnknownCategory(Category),
}

/// Error returned by [`Dispatcher::dispatch`](crate::search::Dispatcher::dispatch)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The request is malformed or out of contract. Never retried.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// A provider or its backing store failed
    #[error("upstream {kind} failure: {reason}")]
    Upstream {
        kind: ProviderErrorKind,
        retryable: bool,
        reason: String,
    },
}

impl DispatchError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// True for errors caused by the request itself
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Validation { .. } => false,
            Self::Upstream { retryable, .. } => *retryable,
        }
    }
}

impl From<ProviderError> for DispatchError {
    fn from(err: ProviderError) -> Self {
        Self::Upstream {
            kind: err.kind,
            retryable: err.kind.is_retryable(),
            reason: err.message,
        }
    }
}

impl From<RegistryError> for DispatchError {
    // An unregistered category is a request shape problem, not a backend failure.
    fn from(err: RegistryError) -> Self {
        Self::validation("type", err.to_string())
    }
}
