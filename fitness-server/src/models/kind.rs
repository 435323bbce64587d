//! The two entity kinds and their persistence mapping
//!
//! Muscles and exercises share one shape (`id`, unique `name`) and are linked
//! many-to-many through `exercise_muscle_association`. Everything the data
//! access layer needs to build SQL for either side lives here.

use std::fmt;

/// Name of the join table linking exercises and muscles.
pub const ASSOCIATION_TABLE: &str = "exercise_muscle_association";

/// One of the two entity kinds served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Muscle,
    Exercise,
}

impl EntityKind {
    /// Table holding rows of this kind.
    pub const fn table(self) -> &'static str {
        match self {
            Self::Muscle => "muscle",
            Self::Exercise => "exercise",
        }
    }

    /// Column of the join table referencing this kind.
    pub const fn link_column(self) -> &'static str {
        match self {
            Self::Muscle => "muscle_id",
            Self::Exercise => "exercise_id",
        }
    }

    /// The kind on the other side of the association.
    pub const fn other(self) -> Self {
        match self {
            Self::Muscle => Self::Exercise,
            Self::Exercise => Self::Muscle,
        }
    }

    /// Capitalised singular label used in error messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Muscle => "Muscle",
            Self::Exercise => "Exercise",
        }
    }

    /// Plural used as the JSON key for related entities and in URL paths.
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Muscle => "muscles",
            Self::Exercise => "exercises",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
