//! Validation error types

use std::fmt;

/// Validation error for creation payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required key is absent from the body
    Missing { field: &'static str },

    /// Key is present but explicitly null
    Null { field: &'static str },

    /// Value has the wrong JSON type
    NotString { field: &'static str },

    /// Value is empty after trimming whitespace
    Empty { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => {
                write!(f, "Missing required data. Expected '{}' in the body.", field)
            }
            Self::Null { field } => write!(f, "'{}' must not be null.", field),
            Self::NotString { field } => write!(f, "'{}' must be a string.", field),
            Self::Empty { field } => write!(f, "'{}' must not be empty.", field),
        }
    }
}

impl std::error::Error for ValidationError {}
