//! Entity name validation
//!
//! Names are trimmed before the emptiness check, and the trimmed value is
//! what reaches the database.

use serde_json::{Map, Value};

use super::ValidationError;

const NAME_FIELD: &str = "name";

/// Validated entity name (trimmed, non-empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityName(String);

impl EntityName {
    /// Create a new name, trimming surrounding whitespace.
    ///
    /// # Example
    /// ```
    /// use fitness_server::models::EntityName;
    ///
    /// assert_eq!(EntityName::new(" Biceps ").unwrap().as_str(), "Biceps");
    /// assert!(EntityName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: NAME_FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for EntityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validate a parsed creation body and extract its name.
///
/// Checks run in order: key present, not null, is a string, non-empty
/// after trimming.
pub fn validate_creation_payload(data: &Map<String, Value>) -> Result<EntityName, ValidationError> {
    match data.get(NAME_FIELD) {
        None => Err(ValidationError::Missing { field: NAME_FIELD }),
        Some(Value::Null) => Err(ValidationError::Null { field: NAME_FIELD }),
        Some(Value::String(s)) => EntityName::new(s),
        Some(_) => Err(ValidationError::NotString { field: NAME_FIELD }),
    }
}
