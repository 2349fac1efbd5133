//! Craft-time enchantment resolution at the smithing table.
//!
//! Two tiers merge onto the crafted result:
//! - prefix: the template's trademark enchantment, always granted, level
//!   taken from the material's quality tier;
//! - postfix: every enchantment stored on the template item gets an
//!   independent level roll on an exponential-decay ladder capped by the
//!   same tier.
//!
//! Every craft attempt rolls fresh. Re-applying an already-applied trim
//! is allowed on purpose so players can burn materials rerolling levels.

use crate::config::{EnchantConfig, TemplateConfig};
use crate::constants::DEFAULT_MATERIAL_LEVEL;
use crate::items::{EnchantmentRegistry, Item};
use rand::Rng;

/// Where a prefix enchantment came from in the override cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixSource {
    /// The material used at the table has its own override on this template.
    MaterialOverride,
    /// The template's configured default enchantment.
    TemplateDefault,
}

/// A resolved prefix grant, tagged with which cascade step produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixResolution {
    pub enchantment: String,
    pub source: PrefixSource,
}

/// Walk the override cascade for the guaranteed prefix enchantment:
/// material-specific override first, then the template default. `None`
/// means the template grants nothing for this material.
pub fn resolve_prefix(template: &TemplateConfig, material_id: &str) -> Option<PrefixResolution> {
    if let Some(material) = template.materials.get(material_id) {
        if let Some(enchantment) = &material.enchantment {
            return Some(PrefixResolution {
                enchantment: enchantment.clone(),
                source: PrefixSource::MaterialOverride,
            });
        }
    }

    template.enchantment.as_ref().map(|enchantment| PrefixResolution {
        enchantment: enchantment.clone(),
        source: PrefixSource::TemplateDefault,
    })
}

/// Check a result item against a template's slot restrictions. Templates
/// without a config or without restrictions accept any slot. The host
/// also calls this at recipe-matching time to cancel incompatible crafts
/// before they reach the table preview.
pub fn slot_compatible(template: Option<&TemplateConfig>, item: &Item) -> bool {
    let Some(template) = template else {
        return true;
    };
    let Some(allowed) = &template.allowed_slots else {
        return true;
    };
    if allowed.is_empty() {
        return true;
    }
    match item.slot {
        Some(slot) => allowed.contains(&slot),
        None => false,
    }
}

/// Roll a level for one stored postfix enchantment.
///
/// Tests levels from the material tier down to 1. Level k passes when
/// `base_weight / 2^(k-1) > roll`, so each level above 1 is twice as hard
/// as the one below it and level 1 gets the full base weight. `None`
/// means every rung failed and the enchantment is dropped this craft.
pub fn roll_postfix_level(
    base_weight: f64,
    material_level: u32,
    rng: &mut impl Rng,
) -> Option<u32> {
    for test_level in (1..=material_level).rev() {
        let level_probability = base_weight / 2f64.powi(test_level as i32 - 1);
        let roll = rng.gen::<f64>();
        if level_probability > roll {
            return Some(test_level);
        }
    }
    None
}

/// Apply both enchantment tiers to a smithing result.
///
/// `template_item` is the physical template in the recipe, carrying any
/// postfix enchantments stamped at loot time; `result` is the crafted
/// output being decorated. The slot gate rejects the whole operation;
/// past it, the prefix is unconditional and each stored postfix rolls
/// independently. Postfix rolls also run for template items whose id has
/// no config, since the stored enchantments themselves are the source of
/// truth there.
pub fn apply_enchantments(
    config: &EnchantConfig,
    template_item: &Item,
    material_id: &str,
    mut result: Item,
    registry: &impl EnchantmentRegistry,
    rng: &mut impl Rng,
) -> Item {
    let template = config.template(&template_item.id);

    if !slot_compatible(template, &result) {
        return result;
    }

    let material_level = config.material_level(material_id);

    if let Some(template) = template {
        if let Some(prefix) = resolve_prefix(template, material_id) {
            if let Some(handle) = registry.resolve(&prefix.enchantment) {
                result.enchant(handle.id(), material_level.max(DEFAULT_MATERIAL_LEVEL));
            }
        }

        // Glint is keyed to the config alone so the preview never leaks
        // whether the hidden postfix rolls succeeded.
        if template.enchantment.is_some() {
            result.glint = true;
        }
    }

    for stored in &template_item.enchantments {
        let base_weight = config.probability(&stored.id);
        if let Some(level) = roll_postfix_level(base_weight, material_level, rng) {
            if let Some(handle) = registry.resolve(&stored.id) {
                result.enchant(handle.id(), level);
            }
        }
    }

    result
}
