//! Error types for ElastiCache request marshaling.
//!
//! Errors raised here are local and synchronous: a request descriptor is
//! either built completely or not at all. AWS-side failures (auth,
//! throttling, validation) never originate in this crate; they surface from
//! the transport and are passed through as [`ElastiCacheErrorKind::Transport`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a marshaling failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElastiCacheErrorKind {
    /// A structured option value does not match the shape its field expects.
    InvalidParameterShape,
    /// Two option entries flattened to the same query key under the
    /// `Reject` duplicate policy.
    DuplicateParameter,
    /// An action name does not correspond to a known ElastiCache operation.
    UnknownAction,
    /// The transport collaborator reported a failure.
    Transport,
}

impl ElastiCacheErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidParameterShape => "InvalidParameterShape",
            Self::DuplicateParameter => "DuplicateParameter",
            Self::UnknownAction => "UnknownAction",
            Self::Transport => "TransportError",
        }
    }
}

/// Top-level error type for all request-building operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElastiCacheError {
    /// What went wrong.
    pub kind: ElastiCacheErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// The option field (or flattened key) the error refers to, if any.
    pub field: Option<String>,
    /// The API action being built when the error occurred.
    pub action: Option<String>,
}

impl fmt::Display for ElastiCacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElastiCache {} error: {}", self.kind.as_str(), self.message)?;
        if let Some(ref action) = self.action {
            write!(f, " [Action: {}]", action)?;
        }
        Ok(())
    }
}

impl std::error::Error for ElastiCacheError {}

impl ElastiCacheError {
    /// Create a new error of the given kind.
    pub fn new(kind: ElastiCacheErrorKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
            field: None,
            action: None,
        }
    }

    /// Build a shape-mismatch error for `field`.
    pub fn invalid_parameter_shape(field: &str, expected: &str, found: &str) -> Self {
        Self {
            kind: ElastiCacheErrorKind::InvalidParameterShape,
            message: format!(
                "parameter '{}' expects {}, found {}",
                field, expected, found
            ),
            field: Some(field.to_string()),
            action: None,
        }
    }

    /// Build a duplicate-key error for the flattened `key`.
    pub fn duplicate_parameter(key: &str) -> Self {
        Self {
            kind: ElastiCacheErrorKind::DuplicateParameter,
            message: format!("query parameter '{}' was supplied more than once", key),
            field: Some(key.to_string()),
            action: None,
        }
    }

    /// Build an unknown-action error.
    pub fn unknown_action(name: &str) -> Self {
        Self {
            kind: ElastiCacheErrorKind::UnknownAction,
            message: format!("'{}' is not a known ElastiCache action", name),
            field: None,
            action: None,
        }
    }

    /// Wrap a failure reported by the transport.
    pub fn transport(message: &str) -> Self {
        Self::new(ElastiCacheErrorKind::Transport, message)
    }

    /// With action.
    pub fn with_action(mut self, action: &str) -> Self {
        self.action = Some(action.to_string());
        self
    }

    pub fn is_shape_error(&self) -> bool {
        self.kind == ElastiCacheErrorKind::InvalidParameterShape
    }
}

/// Convert to a plain string error for callers that surface messages only.
impl From<ElastiCacheError> for String {
    fn from(err: ElastiCacheError) -> String {
        err.to_string()
    }
}

/// Convenience result type for ElastiCache request building.
pub type ElastiCacheResult<T> = Result<T, ElastiCacheError>;
