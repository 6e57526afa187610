//! # Custom Enchants
//!
//! A custom enchant is a named, leveled property stored as a lore line on an
//! item. This module holds the pieces that turn a plugin's description of an
//! enchant into something that can read and write those lines:
//!
//! - **Specs** ([`EnchantSpec`]): name, max level, applicable materials and
//!   incompatibilities, as written by the plugin author
//! - **Registry** ([`EnchantRegistry`]): validates and stores definitions,
//!   assigns display names, recognizes lore lines
//! - **Handles** ([`Enchant`]): apply / remove / query one enchant on an item
//!
//! ## Usage
//!
//! ```
//! use enchantlore::enchants::{Applicability, EnchantRegistry, EnchantSpec};
//! use enchantlore::model::Item;
//!
//! let mut registry = EnchantRegistry::default();
//! let key = registry
//!     .register(EnchantSpec::new("Lifesteal", 3).applies_to(Applicability::materials(["diamond_sword"])))
//!     .unwrap();
//!
//! let lifesteal = registry.get(key).unwrap();
//! let sword = lifesteal.apply(&Item::new("diamond_sword"), 2).unwrap();
//! assert_eq!(sword.lore(), ["§7Lifesteal II"]);
//! assert_eq!(lifesteal.get_level(&sword).unwrap(), 2);
//! ```

mod definition;
mod enchant;
mod registry;
pub mod validation;

pub use definition::{Applicability, EnchantDefinition, EnchantKey, EnchantSpec};
pub use enchant::Enchant;
pub use registry::{EnchantRegistry, Namer};
