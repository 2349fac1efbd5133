//! Loot-time enchantment of freshly generated templates.

use super::candidates::build_candidates;
use super::sampler::draw_unique;
use crate::config::EnchantConfig;
use crate::constants::LOOT_ENCHANTMENT_LEVEL;
use crate::items::{EnchantmentRegistry, Item};
use rand::Rng;
use std::collections::HashSet;

/// Possibly stamp postfix enchantments onto a loot-generated template.
///
/// Items whose id is not a configured template (or whose config has no
/// primary enchantment) pass through untouched; that is the common case
/// for every non-template item flowing past the loot hook. The config
/// lookup happens before any roll, so unconfigured items never consume
/// randomness.
///
/// Everything stamped here is level 1. The material chosen at the
/// smithing table decides the real level later, which keeps the power
/// decision in the player's hands.
pub fn maybe_enchant(
    mut item: Item,
    config: &EnchantConfig,
    registry: &impl EnchantmentRegistry,
    rng: &mut impl Rng,
) -> Item {
    let Some(template) = config.template(&item.id) else {
        return item;
    };
    if template.enchantment.is_none() {
        return item;
    }

    // Gate roll: does this template get enchanted at all?
    let chance = config.loot.enchanted_template_chance;
    if rng.gen::<f64>() >= chance {
        return item;
    }

    let candidates = build_candidates(template, config, rng);
    if candidates.is_empty() {
        return item;
    }

    let mut applied: HashSet<String> = HashSet::new();
    for _ in 0..config.loot.max_enchantments {
        // The same chance gates each additional slot.
        if rng.gen::<f64>() > chance {
            break;
        }

        let Some(candidate) = draw_unique(&candidates, &applied, rng) else {
            break;
        };

        // An id the registry no longer knows is skipped; the slot is
        // spent but the loop keeps going.
        if let Some(handle) = registry.resolve(&candidate.enchantment) {
            item.enchant(handle.id(), LOOT_ENCHANTMENT_LEVEL);
            applied.insert(candidate.enchantment.clone());
        }
    }

    item
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TemplateConfig;
    use crate::items::SetRegistry;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const SENTRY: &str = "minecraft:sentry_armor_trim_smithing_template";

    fn test_config() -> EnchantConfig {
        let mut config = EnchantConfig::default();
        config.templates.insert(
            SENTRY.to_string(),
            TemplateConfig {
                enchantment: Some("minecraft:projectile_protection".to_string()),
                ..Default::default()
            },
        );
        config
            .enchantment_probabilities
            .insert("minecraft:projectile_protection".to_string(), 0.6);
        config
            .enchantment_probabilities
            .insert("minecraft:unbreaking".to_string(), 0.7);
        config
            .enchantment_probabilities
            .insert("minecraft:thorns".to_string(), 0.3);
        config
    }

    fn full_registry(config: &EnchantConfig) -> SetRegistry {
        SetRegistry::from_config(config)
    }

    #[test]
    fn test_unconfigured_item_passes_through() {
        let config = test_config();
        let registry = full_registry(&config);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let item = Item::new("minecraft:stick");
        let result = maybe_enchant(item.clone(), &config, &registry, &mut rng);
        assert_eq!(result, item);
    }

    #[test]
    fn test_unconfigured_item_consumes_no_randomness() {
        let config = test_config();
        let registry = full_registry(&config);

        let mut rng = ChaCha8Rng::seed_from_u64(9);
        maybe_enchant(Item::new("minecraft:stick"), &config, &registry, &mut rng);

        let mut untouched = ChaCha8Rng::seed_from_u64(9);
        assert_eq!(rng.gen::<u64>(), untouched.gen::<u64>());
    }

    #[test]
    fn test_template_without_primary_passes_through() {
        let mut config = test_config();
        config
            .templates
            .get_mut(SENTRY)
            .expect("template")
            .enchantment = None;
        let registry = full_registry(&config);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let result = maybe_enchant(Item::new(SENTRY), &config, &registry, &mut rng);
        assert!(!result.is_enchanted());
    }

    #[test]
    fn test_failed_gate_roll_leaves_item_unchanged() {
        let mut config = test_config();
        config.loot.enchanted_template_chance = 0.0;
        let registry = full_registry(&config);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let result = maybe_enchant(Item::new(SENTRY), &config, &registry, &mut rng);
        assert!(!result.is_enchanted());
    }

    #[test]
    fn test_no_duplicate_enchantments_stamped() {
        let mut config = test_config();
        config.loot.enchanted_template_chance = 1.0;
        let registry = full_registry(&config);

        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let result = maybe_enchant(Item::new(SENTRY), &config, &registry, &mut rng);
            let mut ids: Vec<&str> = result.enchantments.iter().map(|e| e.id.as_str()).collect();
            let before = ids.len();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), before, "duplicate enchantment in result");
        }
    }

    #[test]
    fn test_all_loot_enchantments_are_level_one() {
        let mut config = test_config();
        config.loot.enchanted_template_chance = 1.0;
        let registry = full_registry(&config);
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let result = maybe_enchant(Item::new(SENTRY), &config, &registry, &mut rng);
        assert!(result.is_enchanted());
        for enchantment in &result.enchantments {
            assert_eq!(enchantment.level, 1, "{} not level 1", enchantment.id);
        }
    }

    #[test]
    fn test_respects_max_enchantments() {
        let mut config = test_config();
        config.loot.enchanted_template_chance = 1.0;
        config.loot.max_enchantments = 2;
        let registry = full_registry(&config);

        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let result = maybe_enchant(Item::new(SENTRY), &config, &registry, &mut rng);
            assert!(result.enchantments.len() <= 2);
        }
    }

    #[test]
    fn test_pool_smaller_than_max_terminates_early() {
        let mut config = test_config();
        config.loot.enchanted_template_chance = 1.0;
        config.loot.max_enchantments = 10;
        // Pool is exactly the three configured enchantments.
        let registry = full_registry(&config);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let result = maybe_enchant(Item::new(SENTRY), &config, &registry, &mut rng);
        assert!(result.enchantments.len() <= 3);
    }

    #[test]
    fn test_unresolvable_ids_skipped_silently() {
        let mut config = test_config();
        config.loot.enchanted_template_chance = 1.0;
        let registry = SetRegistry::new(); // resolves nothing
        let mut rng = ChaCha8Rng::seed_from_u64(6);

        let result = maybe_enchant(Item::new(SENTRY), &config, &registry, &mut rng);
        assert!(!result.is_enchanted());
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let mut config = test_config();
        config.loot.enchanted_template_chance = 1.0;
        let registry = full_registry(&config);

        let mut rng_a = ChaCha8Rng::seed_from_u64(77);
        let mut rng_b = ChaCha8Rng::seed_from_u64(77);
        let a = maybe_enchant(Item::new(SENTRY), &config, &registry, &mut rng_a);
        let b = maybe_enchant(Item::new(SENTRY), &config, &registry, &mut rng_b);
        assert_eq!(a, b);
    }
}
