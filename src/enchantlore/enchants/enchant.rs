use std::fmt;

use tracing::{debug, warn};

use super::definition::{EnchantDefinition, EnchantKey};
use super::registry::EnchantRegistry;
use crate::error::{EnchantError, Result};
use crate::lore::{locate, read_level, render_line, strip_lines, write_line, Placement};
use crate::model::{Item, Material};

/// A registered enchant, borrowed from its registry.
///
/// All item operations read the lore fresh on every call and return a new
/// [`Item`]; nothing is cached between calls. Absent items are passed as
/// `None` and are never an error.
#[derive(Clone, Copy)]
pub struct Enchant<'r> {
    registry: &'r EnchantRegistry,
    key: EnchantKey,
    definition: &'r EnchantDefinition,
}

impl<'r> Enchant<'r> {
    pub(crate) fn new(
        registry: &'r EnchantRegistry,
        key: EnchantKey,
        definition: &'r EnchantDefinition,
    ) -> Self {
        Self {
            registry,
            key,
            definition,
        }
    }

    pub fn key(&self) -> EnchantKey {
        self.key
    }

    pub fn definition(&self) -> &'r EnchantDefinition {
        self.definition
    }

    pub fn name(&self) -> &'r str {
        self.definition.name()
    }

    pub fn id(&self) -> &'r str {
        self.definition.id()
    }

    pub fn max_level(&self) -> i32 {
        self.definition.max_level()
    }

    pub fn display_name(&self) -> &'r str {
        self.definition.display_name()
    }

    /// Enchants this one refuses to share an item with.
    pub fn incompatible(&self) -> impl Iterator<Item = Enchant<'r>> + 'r {
        let registry = self.registry;
        self.definition
            .incompatible()
            .iter()
            .filter_map(move |key| registry.get(*key))
    }

    pub fn applies_to(&self, material: &Material) -> bool {
        self.definition.applicability().allows(material)
    }

    /// The lore line this enchant gets at `level`.
    pub fn lore_line(&self, level: i32) -> String {
        render_line(self.display_name(), self.max_level(), level)
    }

    /// Writes this enchant onto the item at `level`, replacing an existing
    /// line in place. Level 0 removes the enchant.
    ///
    /// A new line is placed right after the last line of any registered
    /// enchant, or appended when there is none.
    pub fn apply<'i>(&self, item: impl Into<Option<&'i Item>>, level: i32) -> Option<Item> {
        let item = item.into()?;
        if level == 0 {
            return self.remove(item);
        }

        let lines = item.lore().to_vec();
        let placement = locate(
            &lines,
            |line| self.owns(line),
            |line| self.registry.recognizes(line),
        );
        debug!(enchant = self.id(), level, ?placement, "applying enchant");

        let line = self.lore_line(level);
        Some(item.with_lore(write_line(lines, placement, line)))
    }

    /// Removes every line of this enchant. Items without lore come back unchanged.
    pub fn remove<'i>(&self, item: impl Into<Option<&'i Item>>) -> Option<Item> {
        let item = item.into()?;
        if !item.has_lore() {
            return Some(item.clone());
        }

        let lines = strip_lines(item.lore(), |line| self.owns(line));
        debug!(
            enchant = self.id(),
            removed = item.lore().len() - lines.len(),
            "removing enchant"
        );
        Some(item.with_lore(lines))
    }

    /// Level of this enchant on the item, 0 when absent.
    pub fn get_level<'i>(&self, item: impl Into<Option<&'i Item>>) -> Result<i32> {
        let Some(item) = item.into() else {
            return Ok(0);
        };
        if !item.has_lore() {
            return Ok(0);
        }

        match read_level(item.lore(), self.display_name(), |line| self.owns(line)) {
            Ok(level) => Ok(level.unwrap_or(0)),
            Err(err) => {
                warn!(enchant = self.id(), error = %err, "unreadable enchant level");
                Err(err)
            }
        }
    }

    /// False when the item's material is not allowed, or when an enchant this
    /// one is incompatible with is already on the item.
    pub fn can_apply(&self, item: &Item) -> bool {
        if !self.applies_to(item.material()) {
            return false;
        }
        let present = self.registry.get_enchants(item);
        !self
            .definition
            .incompatible()
            .iter()
            .any(|key| present.contains_key(key))
    }

    /// Identity check against the incompatibility list.
    pub fn is_compatible(&self, other: &Enchant<'_>) -> bool {
        !self.definition.incompatible().contains(&other.key)
    }

    /// [`apply`](Self::apply) with validation: the level must lie in
    /// `0..=max_level` and, unless removing, [`can_apply`](Self::can_apply)
    /// must hold.
    pub fn apply_checked(&self, item: &Item, level: i32) -> Result<Item> {
        if !(0..=self.max_level()).contains(&level) {
            return Err(EnchantError::LevelOutOfRange {
                id: self.id().to_string(),
                level,
                max_level: self.max_level(),
            });
        }
        if level > 0 {
            if !self.applies_to(item.material()) {
                return Err(EnchantError::NotApplicable {
                    id: self.id().to_string(),
                    material: item.material().to_string(),
                });
            }
            let present = self.registry.get_enchants(item);
            if let Some(other) = self.incompatible().find(|e| present.contains_key(&e.key)) {
                return Err(EnchantError::Incompatible {
                    id: self.id().to_string(),
                    other: other.id().to_string(),
                });
            }
        }

        let updated = match self.apply(item, level) {
            Some(updated) => updated,
            None => item.clone(),
        };
        Ok(updated)
    }

    /// Where a fresh line for this enchant would land on `item`.
    pub fn placement(&self, item: &Item) -> Placement {
        locate(
            item.lore(),
            |line| self.owns(line),
            |line| self.registry.recognizes(line),
        )
    }

    /// Whether `line` is this enchant's line. A line that also fits a longer
    /// registered display name belongs to that enchant instead.
    pub fn owns(&self, line: &str) -> bool {
        self.registry.owner_of(line) == Some(self.key)
    }
}

impl PartialEq for Enchant<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Enchant<'_> {}

impl fmt::Debug for Enchant<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enchant")
            .field("key", &self.key)
            .field("id", &self.id())
            .field("display_name", &self.display_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enchants::EnchantSpec;
    use crate::test_utils::{sample_registry, SampleKeys};

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn sword(raw: &[&str]) -> Item {
        Item::new("diamond_sword").with_lore(lines(raw))
    }

    #[test]
    fn apply_to_absent_item_is_absent() {
        let (registry, keys) = sample_registry();
        let lifesteal = registry.get(keys.lifesteal).unwrap();
        assert_eq!(lifesteal.apply(None, 2), None);
        assert_eq!(lifesteal.remove(None), None);
        assert_eq!(lifesteal.get_level(None).unwrap(), 0);
    }

    #[test]
    fn apply_to_bare_item_creates_lore() {
        let (registry, keys) = sample_registry();
        let lifesteal = registry.get(keys.lifesteal).unwrap();

        let item = lifesteal.apply(&Item::new("diamond_sword"), 2).unwrap();
        assert_eq!(item.lore(), ["§7Lifesteal II"]);
        assert_eq!(lifesteal.get_level(&item).unwrap(), 2);
    }

    #[test]
    fn apply_leaves_input_item_untouched() {
        let (registry, keys) = sample_registry();
        let lifesteal = registry.get(keys.lifesteal).unwrap();

        let item = sword(&["flavour"]);
        let _ = lifesteal.apply(&item, 1);
        assert_eq!(item.lore(), ["flavour"]);
    }

    #[test]
    fn apply_replaces_existing_line_in_place() {
        let (registry, keys) = sample_registry();
        let lifesteal = registry.get(keys.lifesteal).unwrap();

        let item = sword(&["flavour", "§7Lifesteal I", "§7Glow", "footer"]);
        let updated = lifesteal.apply(&item, 3).unwrap();
        assert_eq!(
            updated.lore(),
            ["flavour", "§7Lifesteal III", "§7Glow", "footer"]
        );
    }

    #[test]
    fn apply_same_level_still_rewrites_line() {
        let (registry, keys) = sample_registry();
        let lifesteal = registry.get(keys.lifesteal).unwrap();

        // An out-of-band decimal suffix gets normalized back to a numeral.
        let item = sword(&["§7Lifesteal 2"]);
        let updated = lifesteal.apply(&item, 2).unwrap();
        assert_eq!(updated.lore(), ["§7Lifesteal II"]);
    }

    #[test]
    fn apply_inserts_after_last_enchant_line() {
        let (registry, keys) = sample_registry();
        let glow = registry.get(keys.glow).unwrap();

        let item = sword(&["unrelated", "§7Lifesteal II", "unrelated2"]);
        let updated = glow.apply(&item, 1).unwrap();
        assert_eq!(
            updated.lore(),
            ["unrelated", "§7Lifesteal II", "§7Glow", "unrelated2"]
        );
    }

    #[test]
    fn apply_appends_without_enchant_lines() {
        let (registry, keys) = sample_registry();
        let glow = registry.get(keys.glow).unwrap();

        let updated = glow.apply(&sword(&["a", "b"]), 1).unwrap();
        assert_eq!(updated.lore(), ["a", "b", "§7Glow"]);
    }

    #[test]
    fn apply_zero_removes() {
        let (registry, keys) = sample_registry();
        let lifesteal = registry.get(keys.lifesteal).unwrap();

        let item = sword(&["§7Lifesteal II", "flavour"]);
        assert_eq!(lifesteal.apply(&item, 0), lifesteal.remove(&item));
        assert_eq!(lifesteal.apply(&item, 0).unwrap().lore(), ["flavour"]);
    }

    #[test]
    fn remove_without_meta_returns_same_item() {
        let (registry, keys) = sample_registry();
        let lifesteal = registry.get(keys.lifesteal).unwrap();

        let bare = Item::new("stick");
        assert_eq!(lifesteal.remove(&bare), Some(bare.clone()));

        let named = bare.renamed("Wand");
        let removed = lifesteal.remove(&named).unwrap();
        assert!(!removed.has_lore());
    }

    #[test]
    fn remove_drops_every_matching_line() {
        let (registry, keys) = sample_registry();
        let lifesteal = registry.get(keys.lifesteal).unwrap();

        let item = sword(&["§7Lifesteal I", "keep", "§7Lifesteal III"]);
        assert_eq!(lifesteal.remove(&item).unwrap().lore(), ["keep"]);
    }

    #[test]
    fn get_level_binary_enchant() {
        let (registry, keys) = sample_registry();
        let glow = registry.get(keys.glow).unwrap();

        let item = glow.apply(&Item::new("bow"), 1).unwrap();
        assert_eq!(item.lore(), ["§7Glow"]);
        assert_eq!(glow.get_level(&item).unwrap(), 1);
    }

    #[test]
    fn get_level_malformed_line_is_error() {
        let (registry, keys) = sample_registry();
        let lifesteal = registry.get(keys.lifesteal).unwrap();

        let item = sword(&["§7Lifesteal many"]);
        assert!(matches!(
            lifesteal.get_level(&item),
            Err(EnchantError::MalformedLevel { .. })
        ));
    }

    #[test]
    fn can_apply_respects_material() {
        let (registry, keys) = sample_registry();
        let lifesteal = registry.get(keys.lifesteal).unwrap();

        assert!(lifesteal.can_apply(&Item::new("iron_sword")));
        assert!(!lifesteal.can_apply(&Item::new("bow")));
    }

    #[test]
    fn can_apply_respects_incompatibility() {
        let (registry, SampleKeys {
            lifesteal, vampirism, ..
        }) = sample_registry();
        let lifesteal = registry.get(lifesteal).unwrap();
        let vampirism = registry.get(vampirism).unwrap();

        let item = lifesteal.apply(&Item::new("diamond_sword"), 2).unwrap();
        assert!(!vampirism.can_apply(&item));

        let cleared = lifesteal.remove(&item).unwrap();
        assert!(vampirism.can_apply(&cleared));
    }

    #[test]
    fn is_compatible_uses_identity() {
        let (registry, keys) = sample_registry();
        let lifesteal = registry.get(keys.lifesteal).unwrap();
        let vampirism = registry.get(keys.vampirism).unwrap();
        let glow = registry.get(keys.glow).unwrap();

        assert!(!vampirism.is_compatible(&lifesteal));
        assert!(vampirism.is_compatible(&glow));
        // Declarations are one-directional.
        assert!(lifesteal.is_compatible(&vampirism));
        assert_eq!(vampirism.incompatible().collect::<Vec<_>>(), vec![lifesteal]);
    }

    #[test]
    fn apply_checked_rejects_out_of_range() {
        let (registry, keys) = sample_registry();
        let lifesteal = registry.get(keys.lifesteal).unwrap();
        let item = Item::new("diamond_sword");

        assert!(matches!(
            lifesteal.apply_checked(&item, 4),
            Err(EnchantError::LevelOutOfRange { level: 4, max_level: 3, .. })
        ));
        assert!(matches!(
            lifesteal.apply_checked(&item, -1),
            Err(EnchantError::LevelOutOfRange { .. })
        ));
    }

    #[test]
    fn apply_checked_rejects_wrong_material() {
        let (registry, keys) = sample_registry();
        let lifesteal = registry.get(keys.lifesteal).unwrap();

        let err = lifesteal.apply_checked(&Item::new("bow"), 1).unwrap_err();
        assert_eq!(err.to_string(), "Enchant lifesteal cannot be applied to BOW");
    }

    #[test]
    fn apply_checked_reports_incompatible_enchant() {
        let (registry, keys) = sample_registry();
        let lifesteal = registry.get(keys.lifesteal).unwrap();
        let vampirism = registry.get(keys.vampirism).unwrap();

        let item = lifesteal.apply(&Item::new("diamond_sword"), 1).unwrap();
        assert!(matches!(
            vampirism.apply_checked(&item, 1),
            Err(EnchantError::Incompatible { ref other, .. }) if other == "lifesteal"
        ));
    }

    #[test]
    fn apply_checked_zero_removes_regardless_of_material() {
        let (registry, keys) = sample_registry();
        let lifesteal = registry.get(keys.lifesteal).unwrap();

        let item = Item::new("bow").with_lore_line("§7Lifesteal I");
        let updated = lifesteal.apply_checked(&item, 0).unwrap();
        assert!(updated.lore().is_empty());
    }

    #[test]
    fn overlapping_display_names_keep_their_own_lines() {
        let config = crate::config::EnchantConfig {
            strict_display_names: false,
            ..Default::default()
        };
        let mut registry = EnchantRegistry::new(config);
        let sharp = registry.register(EnchantSpec::new("Sharp", 3)).unwrap();
        let edge = registry.register(EnchantSpec::new("Sharp Edge", 3)).unwrap();
        let sharp = registry.get(sharp).unwrap();
        let edge = registry.get(edge).unwrap();

        let item = sword(&["§7Sharp Edge II", "footer"]);
        assert!(!sharp.owns("§7Sharp Edge II"));
        assert!(edge.owns("§7Sharp Edge II"));

        assert_eq!(sharp.get_level(&item).unwrap(), 0);
        assert_eq!(edge.get_level(&item).unwrap(), 2);

        let applied = sharp.apply(&item, 1).unwrap();
        assert_eq!(applied.lore(), ["§7Sharp Edge II", "§7Sharp I", "footer"]);
        assert_eq!(sharp.get_level(&applied).unwrap(), 1);
        assert_eq!(edge.get_level(&applied).unwrap(), 2);

        assert_eq!(sharp.remove(&item).unwrap().lore(), item.lore());
        assert_eq!(
            sharp.remove(&applied).unwrap().lore(),
            ["§7Sharp Edge II", "footer"]
        );
        assert_eq!(edge.remove(&applied).unwrap().lore(), ["§7Sharp I", "footer"]);
    }

    #[test]
    fn placement_preview_matches_apply() {
        let (registry, keys) = sample_registry();
        let glow = registry.get(keys.glow).unwrap();

        let item = sword(&["x", "§7Lifesteal I", "y"]);
        assert_eq!(glow.placement(&item), Placement::Insert(2));
    }
}
