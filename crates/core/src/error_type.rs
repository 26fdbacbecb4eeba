//! Coarse classification attached to every [`Error`](crate::Error).

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of failure classifications.
///
/// Purely descriptive: callers use it for coarse-grained dispatch (for
/// example mapping a failed outcome to a transport status code). Nothing in
/// this crate branches on it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Generic failure that does not fit another category.
    #[default]
    Failure,
    /// A requested resource does not exist.
    NotFound,
    /// Input did not meet the required criteria.
    Validation,
    /// The operation conflicts with the current state of a resource.
    Conflict,
    /// The caller is not authenticated.
    Unauthorized,
    /// The caller is authenticated but not allowed to do this.
    Forbidden,
    /// A required condition for the operation was not met.
    PreconditionFailed,
}

impl ErrorType {
    pub const ALL: [ErrorType; 7] = [
        ErrorType::Failure,
        ErrorType::NotFound,
        ErrorType::Validation,
        ErrorType::Conflict,
        ErrorType::Unauthorized,
        ErrorType::Forbidden,
        ErrorType::PreconditionFailed,
    ];

    /// Stable snake_case name, identical to the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorType::Failure => "failure",
            ErrorType::NotFound => "not_found",
            ErrorType::Validation => "validation",
            ErrorType::Conflict => "conflict",
            ErrorType::Unauthorized => "unauthorized",
            ErrorType::Forbidden => "forbidden",
            ErrorType::PreconditionFailed => "precondition_failed",
        }
    }
}

impl core::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown classification name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown error type: {0}")]
pub struct UnknownErrorType(pub String);

impl FromStr for ErrorType {
    type Err = UnknownErrorType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownErrorType(s.to_string()))
    }
}
