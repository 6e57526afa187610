use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use super::definition::{EnchantDefinition, EnchantKey, EnchantSpec};
use super::enchant::Enchant;
use super::validation::{enchant_id, validate_enchant_name};
use crate::config::EnchantConfig;
use crate::error::{EnchantError, Result};
use crate::lore::{is_line_for, parse_line_level};
use crate::model::Item;

static NEXT_REGISTRY_ID: AtomicU64 = AtomicU64::new(1);

/// Turns an enchant's `(name, id)` into the display name written to lore.
pub type Namer = Box<dyn Fn(&str, &str) -> String + Send + Sync>;

/// Owns every enchant definition and hands out [`Enchant`] handles.
///
/// Registration is the only way to obtain an [`EnchantKey`], so a definition
/// cannot be registered twice. A second spec with the same id is rejected.
pub struct EnchantRegistry {
    id: u64,
    config: EnchantConfig,
    namer: Namer,
    definitions: Vec<EnchantDefinition>,
}

impl Default for EnchantRegistry {
    fn default() -> Self {
        Self::new(EnchantConfig::default())
    }
}

impl std::fmt::Debug for EnchantRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnchantRegistry")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("definitions", &self.definitions)
            .finish_non_exhaustive()
    }
}

impl EnchantRegistry {
    /// Creates an empty registry using the default namer
    /// (`display_prefix` followed by the enchant name).
    pub fn new(config: EnchantConfig) -> Self {
        let prefix = config.display_prefix.clone();
        Self {
            id: NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed),
            config,
            namer: Box::new(move |name: &str, _id: &str| format!("{}{}", prefix, name)),
            definitions: Vec::new(),
        }
    }

    /// Replaces the namer. Only affects enchants registered afterwards.
    pub fn with_namer(
        mut self,
        namer: impl Fn(&str, &str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.namer = Box::new(namer);
        self
    }

    pub fn config(&self) -> &EnchantConfig {
        &self.config
    }

    pub fn register(&mut self, spec: EnchantSpec) -> Result<EnchantKey> {
        validate_enchant_name(&spec.name)?;
        let id = enchant_id(&spec.name);

        if spec.max_level < 1 {
            return Err(EnchantError::InvalidMaxLevel {
                id,
                max_level: spec.max_level,
            });
        }
        if self.definitions.iter().any(|d| d.id == id) {
            return Err(EnchantError::AlreadyRegistered(id));
        }

        let display_name = (self.namer)(&spec.name, &id);
        if let Some(existing) = self
            .definitions
            .iter()
            .find(|d| self.display_names_clash(&d.display_name, &display_name))
        {
            return Err(EnchantError::DisplayNameConflict {
                display_name,
                existing: existing.display_name.clone(),
            });
        }

        let key = EnchantKey {
            registry: self.id,
            slot: self.definitions.len(),
        };
        debug!(
            id = %id,
            display_name = %display_name,
            max_level = spec.max_level,
            "registered enchant"
        );
        self.definitions.push(EnchantDefinition {
            name: spec.name,
            id,
            max_level: spec.max_level,
            display_name,
            incompatible: spec.incompatible,
            applicability: spec.applicability,
        });
        Ok(key)
    }

    /// Declares, after the fact, that `enchant` cannot join an item carrying `other`.
    ///
    /// One-directional, like [`EnchantSpec::incompatible_with`].
    pub fn declare_incompatible(&mut self, enchant: EnchantKey, other: EnchantKey) -> Result<()> {
        if self.definition(other).is_none() {
            return Err(EnchantError::UnknownEnchant(format!("{:?}", other)));
        }
        let slot = self.slot_of(enchant)?;
        let incompatible = &mut self.definitions[slot].incompatible;
        if !incompatible.contains(&other) {
            incompatible.push(other);
        }
        Ok(())
    }

    pub fn get(&self, key: EnchantKey) -> Option<Enchant<'_>> {
        self.definition(key)
            .map(|definition| Enchant::new(self, key, definition))
    }

    pub fn by_id(&self, id: &str) -> Option<Enchant<'_>> {
        self.iter().find(|enchant| enchant.id() == id)
    }

    /// Like [`by_id`](Self::by_id) but fails with [`EnchantError::UnknownEnchant`].
    pub fn require(&self, id: &str) -> Result<Enchant<'_>> {
        self.by_id(id)
            .ok_or_else(|| EnchantError::UnknownEnchant(id.to_string()))
    }

    /// All enchants in registration order.
    pub fn iter(&self) -> impl Iterator<Item = Enchant<'_>> + '_ {
        self.definitions.iter().enumerate().map(move |(slot, d)| {
            let key = EnchantKey {
                registry: self.id,
                slot,
            };
            Enchant::new(self, key, d)
        })
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// The enchant a lore line belongs to, without reading its level.
    ///
    /// A line belongs to the enchant with the longest display name that fits
    /// it (exactly, or followed by a space), so with both `§7Sharp` and
    /// `§7Sharp Edge` registered, `§7Sharp Edge II` is Sharp Edge's line.
    pub fn owner_of(&self, line: &str) -> Option<EnchantKey> {
        self.iter()
            .filter(|enchant| is_line_for(line, enchant.display_name()))
            .max_by_key(|enchant| enchant.display_name().len())
            .map(|enchant| enchant.key())
    }

    /// Identifies the enchant a lore line encodes, with its level.
    ///
    /// The owner is picked as in [`owner_of`](Self::owner_of); the line counts
    /// only if the owner can read a level from it.
    pub fn from_lore_line(&self, line: &str) -> Option<(EnchantKey, i32)> {
        let key = self.owner_of(line)?;
        let definition = self.definition(key)?;
        parse_line_level(line, definition.display_name())
            .ok()
            .map(|level| (key, level))
    }

    /// Whether `line` encodes some registered enchant.
    pub fn recognizes(&self, line: &str) -> bool {
        self.from_lore_line(line).is_some()
    }

    /// Every registered enchant on the item, with its level.
    ///
    /// Unrecognized and malformed lines are skipped. If an enchant shows up
    /// twice, the line nearer the tail wins.
    pub fn get_enchants(&self, item: &Item) -> HashMap<EnchantKey, i32> {
        item.lore()
            .iter()
            .filter_map(|line| self.from_lore_line(line))
            .collect()
    }

    pub(crate) fn definition(&self, key: EnchantKey) -> Option<&EnchantDefinition> {
        if key.registry != self.id {
            return None;
        }
        self.definitions.get(key.slot)
    }

    fn slot_of(&self, key: EnchantKey) -> Result<usize> {
        match self.definition(key) {
            Some(_) => Ok(key.slot),
            None => Err(EnchantError::UnknownEnchant(format!("{:?}", key))),
        }
    }

    /// Identical display names always clash. In strict mode, so does a pair
    /// where one name followed by a space starts the other (`Sharp` /
    /// `Sharp Edge`). `Fire` / `Fireball` never clash: the space rule already
    /// tells their lines apart.
    fn display_names_clash(&self, existing: &str, candidate: &str) -> bool {
        if existing == candidate {
            return true;
        }
        self.config.strict_display_names
            && (is_line_for(existing, candidate) || is_line_for(candidate, existing))
    }
}
