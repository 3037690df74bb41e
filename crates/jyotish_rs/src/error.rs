//! Caller-facing error type.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jyotish_time::TimeError;
use jyotish_vedic_base::{ErrorKind, VedicError};

/// The two failure categories a caller has to distinguish.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum JyotishError {
    /// Malformed or out-of-range input; the request should not be retried as-is.
    Validation(String),
    /// A formula failed for otherwise well-formed input (e.g. a polar latitude).
    Computation(String),
}

impl JyotishError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Computation(_) => ErrorKind::Computation,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::Computation(msg) => msg,
        }
    }
}

impl Display for JyotishError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "validation error: {msg}"),
            Self::Computation(msg) => write!(f, "computation error: {msg}"),
        }
    }
}

impl Error for JyotishError {}

impl From<VedicError> for JyotishError {
    fn from(e: VedicError) -> Self {
        match e.kind() {
            ErrorKind::Validation => Self::Validation(e.to_string()),
            ErrorKind::Computation => Self::Computation(e.to_string()),
        }
    }
}

impl From<TimeError> for JyotishError {
    fn from(e: TimeError) -> Self {
        Self::Validation(e.to_string())
    }
}
