//! # Enchantlore Architecture
//!
//! Enchantlore stores **custom enchantments as lore lines**. An item never
//! carries a hidden field for them: the human-readable line *is* the data,
//! e.g. `§7Lifesteal III`, living next to any other free-form lore.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Enchants (enchants/)                                       │
//! │  - Registry: definitions, display names, line recognition   │
//! │  - Enchant handle: apply / remove / get_level / can_apply   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Lore encoding (lore.rs, numeral.rs)                        │
//! │  - Pure transforms over a list of lines                     │
//! │  - Replace-in-place vs grouped insertion                    │
//! │  - Level numerals I..X, decimal beyond                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Item model (model.rs, builder.rs)                          │
//! │  - Copy-on-write item values with optional metadata         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Items Are Values
//!
//! Every operation reads the item's current lore and returns a new [`model::Item`].
//! Nothing is cached between calls, so edits to unrelated lore lines made
//! elsewhere are always picked up. Absent items (`None`) and items without
//! lore are "nothing to do", never errors.
//!
//! ## Module Overview
//!
//! - [`enchants`]: Specs, registry and enchant handles
//! - [`lore`]: Line placement and level parsing
//! - [`numeral`]: Level ↔ numeral conversion
//! - [`model`]: `Item`, `ItemMeta`, `Material`
//! - [`builder`]: `ItemBuilder`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod builder;
pub mod config;
pub mod enchants;
pub mod error;
pub mod lore;
pub mod model;
pub mod numeral;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::EnchantConfig;
pub use enchants::{Applicability, Enchant, EnchantKey, EnchantRegistry, EnchantSpec};
pub use error::{EnchantError, Result};
pub use model::{Item, ItemMeta, Material};
