//! Main simulation runner driving the real enchantment engine.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::enchant::{resolve_prefix, roll_postfix_level};
use crate::engine::EnchantEngine;
use crate::items::{ArmorSlot, Item};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let engine = EnchantEngine::with_defaults();
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &engine, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - loot enchants {}, prefix {:?}, postfix grants {}",
                run_idx + 1,
                config.num_runs,
                run_stats.loot_enchant_count,
                run_stats.prefix,
                run_stats.postfix_levels.len()
            );
        }

        all_runs.push(run_stats);
    }

    SimReport::from_runs(&all_runs, &config.template_id, &config.material_id)
}

/// One loot + craft cycle: generate the template in loot, then carry it
/// to the smithing table with the configured material.
fn simulate_single_run(
    config: &SimConfig,
    engine: &EnchantEngine<crate::items::SetRegistry>,
    rng: &mut ChaCha8Rng,
) -> RunStats {
    let looted = engine.on_item_generated(Item::new(&config.template_id), rng);
    let loot_enchant_count = looted.enchantments.len();

    let base = base_armor_for(engine, &config.template_id);
    let crafted = engine.on_assemble(&looted, &config.material_id, base, rng);

    let template = engine.config().template(&config.template_id);
    let prefix = match (template, &crafted) {
        (Some(template), Some(crafted)) => {
            resolve_prefix(template, &config.material_id).and_then(|resolution| {
                crafted
                    .enchantment_level(&resolution.enchantment)
                    .map(|level| (resolution.enchantment, level))
            })
        }
        _ => None,
    };

    // Ladder acceptance is measured per stored enchantment with the same
    // roll the table uses, so the distribution is uncontaminated by the
    // guaranteed prefix landing on the same id.
    let material_level = engine.config().material_level(&config.material_id);
    let mut postfix_levels = Vec::new();
    for stored in &looted.enchantments {
        let base_weight = engine.config().probability(&stored.id);
        if let Some(level) = roll_postfix_level(base_weight, material_level, rng) {
            postfix_levels.push(level);
        }
    }

    RunStats {
        loot_enchant_count,
        prefix,
        postfix_attempts: loot_enchant_count,
        postfix_levels,
    }
}

/// Pick a base armor piece the template will accept.
fn base_armor_for(engine: &EnchantEngine<crate::items::SetRegistry>, template_id: &str) -> Item {
    let slot = engine
        .config()
        .template(template_id)
        .and_then(|t| t.allowed_slots.as_ref())
        .and_then(|slots| slots.first().copied())
        .unwrap_or(ArmorSlot::Chest);

    let id = match slot {
        ArmorSlot::Head => "minecraft:iron_helmet",
        ArmorSlot::Chest => "minecraft:iron_chestplate",
        ArmorSlot::Legs => "minecraft:iron_leggings",
        ArmorSlot::Feet => "minecraft:iron_boots",
    };
    Item::with_slot(id, slot)
}
