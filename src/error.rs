//! Error types for xsdatomic
//!
//! This module defines the failure taxonomy used throughout the library:
//! validation failures, out-of-range numeric values, coercion rules that
//! do not apply to a source shape, and coercion rules that applied but
//! failed mid-conversion.

use std::fmt;
use thiserror::Error;

/// Result type alias using xsdatomic Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for xsdatomic operations
#[derive(Error, Debug)]
pub enum Error {
    /// A representation does not satisfy its type's predicate
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A numeric value was recognized but falls outside the type's bounds
    #[error("out of range: {0}")]
    OutOfRange(ValidationError),

    /// The source value's shape has no coercion rule for the target type
    #[error("no coercion from this source shape to '{type_name}'")]
    NotApplicable {
        /// Target type name the coercion was attempted against
        type_name: &'static str,
    },

    /// A coercion rule was attempted but an intermediate step failed
    #[error("coercion error: {0}")]
    Coercion(String),

    /// Unknown type name
    #[error("type error: {0}")]
    Type(String),

    /// I/O error while draining a binary stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True if this is the coercion-not-applicable signal, which callers
    /// use to fall back to direct validation of the raw value.
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Error::NotApplicable { .. })
    }

    /// True if this is an out-of-range failure (a specialized validation
    /// failure, kept distinct so callers can tell it from shape failures).
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange(_))
    }
}

/// Validation error with optional context
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Error message
    pub message: String,
    /// Type name the value was checked against
    pub type_name: Option<String>,
    /// Original failure reason
    pub reason: Option<String>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            type_name: None,
            reason: None,
        }
    }

    /// Set the type name
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Set the reason
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(ref type_name) = self.type_name {
            write!(f, " (type: {})", type_name)?;
        }

        if let Some(ref reason) = self.reason {
            write!(f, "\n\nReason: {}", reason)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}
