//! Host item representation.
//!
//! [`Item`] is a value type. Every mutator takes `&self` and hands back a new
//! `Item`, so a caller holding the old value never observes a change. Custom
//! enchantments live purely as lines inside [`ItemMeta::lore`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An item type, stored in its canonical upper-snake form (`DIAMOND_SWORD`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Material(String);

impl Material {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_ascii_uppercase().replace([' ', '-'], "_"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Material {
    fn from(name: &str) -> Self {
        Material::new(name)
    }
}

/// Detachable metadata record of an item.
///
/// `lore` distinguishes "never had lore" (`None`) from "has an empty lore list".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMeta {
    pub display_name: Option<String>,
    pub lore: Option<Vec<String>>,
    /// Native (non-lore) enchantments keyed by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub enchantments: BTreeMap<String, i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub material: Material,
    pub amount: u32,
    pub durability: u16,
    pub meta: Option<ItemMeta>,
}

impl Item {
    pub fn new(material: impl Into<Material>) -> Self {
        Self {
            material: material.into(),
            amount: 1,
            durability: 0,
            meta: None,
        }
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn has_meta(&self) -> bool {
        self.meta.is_some()
    }

    pub fn has_lore(&self) -> bool {
        self.meta.as_ref().is_some_and(|m| m.lore.is_some())
    }

    /// Current lore lines; empty when the item has no metadata or no lore.
    pub fn lore(&self) -> &[String] {
        self.meta
            .as_ref()
            .and_then(|m| m.lore.as_deref())
            .unwrap_or(&[])
    }

    pub fn display_name(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.display_name.as_deref())
    }

    /// Returns a copy with the whole lore list replaced.
    pub fn with_lore(&self, lines: Vec<String>) -> Item {
        self.with_meta(|meta| meta.lore = Some(lines))
    }

    /// Returns a copy with one line appended to the lore.
    pub fn with_lore_line(&self, line: impl Into<String>) -> Item {
        let line = line.into();
        self.with_meta(|meta| meta.lore.get_or_insert_with(Vec::new).push(line))
    }

    pub fn renamed(&self, name: impl Into<String>) -> Item {
        let name = name.into();
        self.with_meta(|meta| meta.display_name = Some(name))
    }

    /// Returns a copy with a native enchantment set. Level 0 removes it.
    pub fn with_enchantment(&self, name: impl Into<String>, level: i32) -> Item {
        let name = name.into();
        self.with_meta(|meta| {
            if level == 0 {
                meta.enchantments.remove(&name);
            } else {
                meta.enchantments.insert(name, level);
            }
        })
    }

    pub fn with_durability(&self, durability: u16) -> Item {
        Item {
            durability,
            ..self.clone()
        }
    }

    pub fn with_amount(&self, amount: u32) -> Item {
        Item {
            amount,
            ..self.clone()
        }
    }

    fn with_meta(&self, edit: impl FnOnce(&mut ItemMeta)) -> Item {
        let mut meta = self.meta.clone().unwrap_or_default();
        edit(&mut meta);
        Item {
            meta: Some(meta),
            ..self.clone()
        }
    }
}
