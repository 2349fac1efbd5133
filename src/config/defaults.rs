//! Default configuration data seeded on first run.
//!
//! These tables are what a fresh install writes to ~/.trimsmith/ and what
//! the engine falls back to when a config file is missing or unreadable.
//! Existing installs depend on these exact values, so changes here are
//! compatibility-breaking.

use super::types::{MaterialConfig, TemplateConfig};
use crate::items::ArmorSlot;
use std::collections::HashMap;

/// The 18 default template mappings. Each armor trim template grants its
/// trademark enchantment; a handful carry material-specific overrides so
/// the override cascade is exercised out of the box.
pub fn default_templates() -> HashMap<String, TemplateConfig> {
    let mut templates = HashMap::new();

    add_template(
        &mut templates,
        "minecraft:sentry_armor_trim_smithing_template",
        "minecraft:projectile_protection",
        None,
        &[("minecraft:nether_star", "minecraft:protection")],
    );
    add_template(
        &mut templates,
        "minecraft:dune_armor_trim_smithing_template",
        "minecraft:fire_protection",
        None,
        &[],
    );
    add_template(
        &mut templates,
        "minecraft:coast_armor_trim_smithing_template",
        "minecraft:respiration",
        Some(vec![ArmorSlot::Head]),
        &[],
    );
    add_template(
        &mut templates,
        "minecraft:wild_armor_trim_smithing_template",
        "minecraft:thorns",
        None,
        &[],
    );
    add_template(
        &mut templates,
        "minecraft:ward_armor_trim_smithing_template",
        "minecraft:swift_sneak",
        Some(vec![ArmorSlot::Legs]),
        &[],
    );
    add_template(
        &mut templates,
        "minecraft:eye_armor_trim_smithing_template",
        "minecraft:unbreaking",
        None,
        &[],
    );
    add_template(
        &mut templates,
        "minecraft:vex_armor_trim_smithing_template",
        "minecraft:soul_speed",
        Some(vec![ArmorSlot::Feet]),
        &[],
    );
    add_template(
        &mut templates,
        "minecraft:tide_armor_trim_smithing_template",
        "minecraft:depth_strider",
        Some(vec![ArmorSlot::Feet]),
        &[],
    );
    add_template(
        &mut templates,
        "minecraft:snout_armor_trim_smithing_template",
        "minecraft:blast_protection",
        None,
        &[],
    );
    add_template(
        &mut templates,
        "minecraft:rib_armor_trim_smithing_template",
        "minecraft:protection",
        None,
        &[("minecraft:netherite_ingot", "minecraft:blast_protection")],
    );
    add_template(
        &mut templates,
        "minecraft:spire_armor_trim_smithing_template",
        "minecraft:feather_falling",
        Some(vec![ArmorSlot::Feet]),
        &[],
    );
    add_template(
        &mut templates,
        "minecraft:wayfinder_armor_trim_smithing_template",
        "minecraft:frost_walker",
        Some(vec![ArmorSlot::Feet]),
        &[],
    );
    add_template(
        &mut templates,
        "minecraft:shaper_armor_trim_smithing_template",
        "minecraft:mending",
        None,
        &[("minecraft:diamond", "minecraft:unbreaking")],
    );
    add_template(
        &mut templates,
        "minecraft:silence_armor_trim_smithing_template",
        "minecraft:swift_sneak",
        Some(vec![ArmorSlot::Legs]),
        &[],
    );
    add_template(
        &mut templates,
        "minecraft:raiser_armor_trim_smithing_template",
        "minecraft:blast_protection",
        None,
        &[],
    );
    add_template(
        &mut templates,
        "minecraft:host_armor_trim_smithing_template",
        "minecraft:projectile_protection",
        None,
        &[],
    );
    add_template(
        &mut templates,
        "minecraft:flow_armor_trim_smithing_template",
        "minecraft:aqua_affinity",
        Some(vec![ArmorSlot::Head]),
        &[],
    );
    add_template(
        &mut templates,
        "minecraft:bolt_armor_trim_smithing_template",
        "minecraft:protection",
        None,
        &[],
    );

    templates
}

fn add_template(
    templates: &mut HashMap<String, TemplateConfig>,
    id: &str,
    enchantment: &str,
    allowed_slots: Option<Vec<ArmorSlot>>,
    material_overrides: &[(&str, &str)],
) {
    let mut materials = HashMap::new();
    for (material_id, override_enchantment) in material_overrides {
        materials.insert(
            material_id.to_string(),
            MaterialConfig::with_enchantment(*override_enchantment),
        );
    }
    templates.insert(
        id.to_string(),
        TemplateConfig {
            enchantment: Some(enchantment.to_string()),
            display_name: None,
            allowed_slots,
            materials,
            probability: None,
        },
    );
}

/// Material quality tiers. Cheap furnace fuel sits at tier 1; a nether
/// star tops the ladder at tier 6.
pub fn default_material_levels() -> HashMap<String, u32> {
    [
        ("minecraft:copper_ingot", 1),
        ("minecraft:coal", 1),
        ("minecraft:redstone", 1),
        ("minecraft:iron_ingot", 2),
        ("minecraft:lapis_lazuli", 2),
        ("minecraft:quartz", 2),
        ("minecraft:glowstone_dust", 2),
        ("minecraft:gold_ingot", 3),
        ("minecraft:emerald", 3),
        ("minecraft:amethyst_shard", 3),
        ("minecraft:diamond", 4),
        ("minecraft:echo_shard", 4),
        ("minecraft:obsidian", 4),
        ("minecraft:netherite_scrap", 5),
        ("minecraft:netherite_ingot", 5),
        ("minecraft:nether_star", 6),
    ]
    .into_iter()
    .map(|(id, level)| (id.to_string(), level))
    .collect()
}

/// Base probability weights for the 30 enchantments loot rolls can pick
/// from. Commodity enchantments are heavy; mending and the curses are
/// deliberately rare.
pub fn default_probabilities() -> HashMap<String, f64> {
    [
        ("minecraft:protection", 0.8),
        ("minecraft:fire_protection", 0.6),
        ("minecraft:blast_protection", 0.5),
        ("minecraft:projectile_protection", 0.6),
        ("minecraft:respiration", 0.4),
        ("minecraft:aqua_affinity", 0.3),
        ("minecraft:thorns", 0.3),
        ("minecraft:depth_strider", 0.35),
        ("minecraft:frost_walker", 0.15),
        ("minecraft:feather_falling", 0.6),
        ("minecraft:soul_speed", 0.1),
        ("minecraft:swift_sneak", 0.1),
        ("minecraft:unbreaking", 0.7),
        ("minecraft:mending", 0.05),
        ("minecraft:binding_curse", 0.02),
        ("minecraft:vanishing_curse", 0.02),
        ("minecraft:sharpness", 0.7),
        ("minecraft:smite", 0.5),
        ("minecraft:bane_of_arthropods", 0.4),
        ("minecraft:knockback", 0.35),
        ("minecraft:fire_aspect", 0.25),
        ("minecraft:looting", 0.3),
        ("minecraft:sweeping_edge", 0.3),
        ("minecraft:efficiency", 0.7),
        ("minecraft:silk_touch", 0.2),
        ("minecraft:fortune", 0.25),
        ("minecraft:power", 0.6),
        ("minecraft:punch", 0.3),
        ("minecraft:flame", 0.25),
        ("minecraft:infinity", 0.1),
    ]
    .into_iter()
    .map(|(id, weight)| (id.to_string(), weight))
    .collect()
}
