//! Path id parsing

use crate::models::EntityKind;
use super::error::ApiError;

/// Parse an entity id from a path segment.
///
/// A segment that is not an integer cannot name an existing row, so it is
/// reported exactly like an unknown id.
pub fn parse_id(kind: EntityKind, raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|_| ApiError::NotFound {
        message: format!("{} with ID \"{}\" not found", kind, raw),
    })
}
