use crate::enchants::{Applicability, EnchantKey, EnchantRegistry, EnchantSpec};

pub struct SampleKeys {
    pub lifesteal: EnchantKey,
    pub glow: EnchantKey,
    pub vampirism: EnchantKey,
}

fn swords() -> Applicability {
    Applicability::custom(|material| material.as_str().ends_with("_SWORD"))
}

/// Registry with three enchants:
/// - `Lifesteal` (max III, swords only)
/// - `Glow` (max 1, anything)
/// - `Vampirism` (max II, swords only, incompatible with Lifesteal)
pub fn sample_registry() -> (EnchantRegistry, SampleKeys) {
    let mut registry = EnchantRegistry::default();
    let lifesteal = registry
        .register(EnchantSpec::new("Lifesteal", 3).applies_to(swords()))
        .expect("register lifesteal");
    let glow = registry
        .register(EnchantSpec::new("Glow", 1))
        .expect("register glow");
    let vampirism = registry
        .register(
            EnchantSpec::new("Vampirism", 2)
                .applies_to(swords())
                .incompatible_with(lifesteal),
        )
        .expect("register vampirism");
    (
        registry,
        SampleKeys {
            lifesteal,
            glow,
            vampirism,
        },
    )
}
