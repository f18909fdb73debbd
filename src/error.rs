//! The single error type raised while building query nodes.

use std::fmt;

use thiserror::Error as ThisError;

use crate::validate::Role;

/// Machine-checkable discriminant carried by every [`AqlError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A raw value could not be mapped to any literal or primitive node.
    CastFailure,
    /// A value violates the declared role of a constructor parameter.
    RoleViolation,
    /// Malformed input to a structural node.
    StructuralViolation,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CastFailure => "cast-failure",
            Self::RoleViolation => "role-violation",
            Self::StructuralViolation => "structural-violation",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// AqlError
///
/// Raised synchronously by constructors. Serialization never fails, so this
/// is the only error a caller of the library has to deal with.
///

#[derive(Debug, Clone, PartialEq, ThisError)]
#[error("{message} ({code}){}", context(.role, .value))]
pub struct AqlError {
    pub code: ErrorCode,
    pub message: String,
    /// Role of the parameter that rejected the value, when there was one.
    pub role: Option<Role>,
    /// Debug rendering of the offending input.
    pub value: String,
}

impl AqlError {
    pub fn cast_failure(message: impl Into<String>, value: impl fmt::Debug) -> Self {
        Self {
            code: ErrorCode::CastFailure,
            message: message.into(),
            role: None,
            value: format!("{value:?}"),
        }
    }

    pub fn role_violation(role: Role, message: impl Into<String>, value: impl fmt::Debug) -> Self {
        Self {
            code: ErrorCode::RoleViolation,
            message: message.into(),
            role: Some(role),
            value: format!("{value:?}"),
        }
    }

    pub fn structural_violation(message: impl Into<String>, value: impl fmt::Debug) -> Self {
        Self {
            code: ErrorCode::StructuralViolation,
            message: message.into(),
            role: None,
            value: format!("{value:?}"),
        }
    }

    /// Attach the parameter role to an error raised below the role check.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }
}

/// Trailing `[role] value` part of the display text.
fn context(role: &Option<Role>, value: &str) -> String {
    let role = role.as_ref().map(|r| format!(" [{r}]")).unwrap_or_default();
    if value.is_empty() {
        role
    } else {
        format!("{role} value: {value}")
    }
}

pub type Result<T> = std::result::Result<T, AqlError>;
