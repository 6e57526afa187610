//! Fluent item construction.

use crate::enchants::Enchant;
use crate::model::{Item, Material};

/// Chains the [`Item`] helpers and custom enchant application.
///
/// ```
/// use enchantlore::builder::ItemBuilder;
///
/// let item = ItemBuilder::new("diamond_sword")
///     .name("Excalibur")
///     .lore(["Pulled from a stone"])
///     .durability(7)
///     .build();
///
/// assert_eq!(item.display_name(), Some("Excalibur"));
/// assert_eq!(item.lore(), ["Pulled from a stone"]);
/// assert_eq!(item.durability, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBuilder {
    item: Item,
}

impl ItemBuilder {
    pub fn new(material: impl Into<Material>) -> Self {
        Self {
            item: Item::new(material),
        }
    }

    pub fn amount(self, amount: u32) -> Self {
        self.map(|item| item.with_amount(amount))
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.map(|item| item.renamed(name))
    }

    /// Replaces the lore.
    pub fn lore<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = lines.into_iter().map(Into::into).collect();
        self.map(|item| item.with_lore(lines))
    }

    pub fn add_lore(self, line: impl Into<String>) -> Self {
        self.map(|item| item.with_lore_line(line))
    }

    pub fn durability(self, durability: u16) -> Self {
        self.map(|item| item.with_durability(durability))
    }

    /// Native enchantment; level 0 removes it.
    pub fn enchantment(self, name: impl Into<String>, level: i32) -> Self {
        self.map(|item| item.with_enchantment(name, level))
    }

    /// Custom lore enchant; level 0 removes it.
    pub fn custom_enchant(self, enchant: &Enchant<'_>, level: i32) -> Self {
        let item = enchant.apply(&self.item, level).unwrap_or(self.item);
        Self { item }
    }

    pub fn build(self) -> Item {
        self.item
    }

    fn map(self, f: impl FnOnce(&Item) -> Item) -> Self {
        Self {
            item: f(&self.item),
        }
    }
}

impl From<Item> for ItemBuilder {
    fn from(item: Item) -> Self {
        Self { item }
    }
}
