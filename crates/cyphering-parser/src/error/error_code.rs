//! Error codes for the Cyphering diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Document decoding errors
//! - `E1xx` - Structural errors
//! - `E2xx` - Expansion and validation errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Decoding Errors (E0xx)
    // =========================================================================
    /// Malformed model document.
    ///
    /// The input is not valid YAML, or its shape does not match a model
    /// document (e.g. `nodes` is not a list).
    E001,

    // =========================================================================
    // Structural Errors (E1xx)
    // =========================================================================
    /// Missing required field.
    ///
    /// An element record lacks `label` or `mode`, a relationship lacks
    /// `reltype`, or a required field is empty.
    E100,

    // =========================================================================
    // Expansion and Validation Errors (E2xx)
    // =========================================================================
    /// Invalid relationship expression.
    ///
    /// A relationship type does not match `a -> b`, `a - b` or `a <- b`
    /// after macro expansion.
    E200,

    /// Invalid mode.
    ///
    /// An element mode is not `match`, `merge` or `create`.
    E201,

    /// Unresolved alias.
    ///
    /// An element depends on an alias that no node or relationship defines.
    E202,

    /// Duplicate alias.
    ///
    /// Two elements are defined with the same alias.
    E203,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E100 => "E100",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "malformed model document",
            ErrorCode::E100 => "missing required field",
            ErrorCode::E200 => "invalid relationship expression",
            ErrorCode::E201 => "invalid mode",
            ErrorCode::E202 => "unresolved alias",
            ErrorCode::E203 => "duplicate alias",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
