use std::num::ParseIntError;

use thiserror::Error;

use crate::enchants::validation::NameValidationError;

#[derive(Error, Debug)]
pub enum EnchantError {
    #[error("Malformed level '{token}': {source}")]
    MalformedLevel {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Enchant already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Display name '{display_name}' overlaps with registered display name '{existing}'")]
    DisplayNameConflict {
        display_name: String,
        existing: String,
    },

    #[error("Invalid enchant name: {0}")]
    InvalidName(#[from] NameValidationError),

    #[error("Invalid max level {max_level} for enchant {id} (must be at least 1)")]
    InvalidMaxLevel { id: String, max_level: i32 },

    #[error("Level {level} is out of range for enchant {id} (0..={max_level})")]
    LevelOutOfRange {
        id: String,
        level: i32,
        max_level: i32,
    },

    #[error("Enchant {id} cannot be applied to {material}")]
    NotApplicable { id: String, material: String },

    #[error("Enchant {id} is incompatible with {other}, which is already on the item")]
    Incompatible { id: String, other: String },

    #[error("Unknown enchant: {0}")]
    UnknownEnchant(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, EnchantError>;
