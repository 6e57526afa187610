//! Enchant specifications and registered definitions.
//!
//! An [`EnchantSpec`] is what a plugin author writes; registering it with an
//! [`EnchantRegistry`](super::EnchantRegistry) validates it and turns it into an
//! immutable [`EnchantDefinition`] addressed by an [`EnchantKey`].

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::model::Material;

/// Identity of a registered enchant.
///
/// Keys compare by registration, not by name: two registries that both
/// register "Lifesteal" hand out different keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnchantKey {
    pub(crate) registry: u64,
    pub(crate) slot: usize,
}

/// Which item types an enchant can go on.
#[derive(Clone, Default)]
pub enum Applicability {
    /// Any material
    #[default]
    Any,

    /// A fixed set of materials
    Materials(BTreeSet<Material>),

    /// An arbitrary predicate
    Custom(Arc<dyn Fn(&Material) -> bool + Send + Sync>),
}

impl Applicability {
    pub fn materials<I, M>(materials: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Material>,
    {
        Applicability::Materials(materials.into_iter().map(Into::into).collect())
    }

    pub fn custom(predicate: impl Fn(&Material) -> bool + Send + Sync + 'static) -> Self {
        Applicability::Custom(Arc::new(predicate))
    }

    pub fn allows(&self, material: &Material) -> bool {
        match self {
            Applicability::Any => true,
            Applicability::Materials(set) => set.contains(material),
            Applicability::Custom(predicate) => predicate(material),
        }
    }
}

impl fmt::Debug for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Applicability::Any => f.write_str("Any"),
            Applicability::Materials(set) => f.debug_tuple("Materials").field(set).finish(),
            Applicability::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Unregistered description of an enchant.
#[derive(Debug, Clone)]
pub struct EnchantSpec {
    pub(crate) name: String,
    pub(crate) max_level: i32,
    pub(crate) incompatible: Vec<EnchantKey>,
    pub(crate) applicability: Applicability,
}

impl EnchantSpec {
    pub fn new(name: impl Into<String>, max_level: i32) -> Self {
        Self {
            name: name.into(),
            max_level,
            incompatible: Vec::new(),
            applicability: Applicability::Any,
        }
    }

    /// Declares that this enchant cannot go on an item that already carries `other`.
    pub fn incompatible_with(mut self, other: EnchantKey) -> Self {
        if !self.incompatible.contains(&other) {
            self.incompatible.push(other);
        }
        self
    }

    pub fn applies_to(mut self, applicability: Applicability) -> Self {
        self.applicability = applicability;
        self
    }
}

/// A registered enchant. Immutable apart from incompatibility declarations
/// made through the registry.
#[derive(Debug, Clone)]
pub struct EnchantDefinition {
    pub(crate) name: String,
    pub(crate) id: String,
    pub(crate) max_level: i32,
    pub(crate) display_name: String,
    pub(crate) incompatible: Vec<EnchantKey>,
    pub(crate) applicability: Applicability,
}

impl EnchantDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercased name with spaces replaced by underscores.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn max_level(&self) -> i32 {
        self.max_level
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn incompatible(&self) -> &[EnchantKey] {
        &self.incompatible
    }

    pub fn applicability(&self) -> &Applicability {
        &self.applicability
    }
}
