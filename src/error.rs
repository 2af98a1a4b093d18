//! Error types returned by the topology generators.

use std::fmt;

/// Errors raised while validating generator parameters.
///
/// Every generator checks its parameters before any graph is built, so an
/// error always means that nothing was constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// A parameter is not an integer, is missing, or is not accepted by the generator
    #[error("{param} argument must be of int type: {detail}")]
    TypeMismatch { param: String, detail: String },
    /// An integer parameter is outside the range accepted by the generator
    #[error("Invalid {param} parameter ({value}): {reason}")]
    InvalidParameter {
        param: String,
        value: i64,
        reason: String,
    },
}

/// Coarse classification of a [`TopologyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeMismatch,
    InvalidParameter,
}

impl TopologyError {
    pub fn type_mismatch(param: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::TypeMismatch {
            param: param.into(),
            detail: detail.into(),
        }
    }

    pub fn invalid(param: impl Into<String>, value: i64, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            value,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::InvalidParameter { .. } => ErrorKind::InvalidParameter,
        }
    }

    /// Name of the offending parameter
    pub fn param(&self) -> &str {
        match self {
            Self::TypeMismatch { param, .. } => param,
            Self::InvalidParameter { param, .. } => param,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch => write!(f, "type mismatch"),
            Self::InvalidParameter => write!(f, "invalid parameter"),
        }
    }
}
