//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod kind;
pub mod name;

pub use validation::ValidationError;
pub use kind::EntityKind;
pub use name::{validate_creation_payload, EntityName};
