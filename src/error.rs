//! Error types for recipe registration and configuration.

use thiserror::Error;

/// Failures raised while naming parts or registering archetype recipes.
///
/// Assembly itself never fails; only the data feeding a builder can be wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipeError {
    /// A catalog name that matches no variant.
    #[error("Unknown {kind} '{name}'")]
    UnknownPart { kind: &'static str, name: String },

    /// No recipe is registered under this archetype.
    #[error("Archetype '{name}' not found in recipe book")]
    UnknownArchetype { name: String },

    /// An archetype registered twice.
    #[error("Archetype '{name}' is already registered")]
    DuplicateArchetype { name: String },

    /// A recipe with a blank archetype name.
    #[error("Archetype name must not be empty")]
    EmptyArchetype,

    /// Recipe TOML could not be decoded.
    #[error("Failed to parse recipe book: {0}")]
    Parse(String),

    /// Recipe book could not be encoded as TOML.
    #[error("Failed to serialize recipe book: {0}")]
    Serialize(String),
}
