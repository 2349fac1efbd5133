//! Candidate pool assembly for loot enchantment selection.

use crate::config::{EnchantConfig, TemplateConfig};
use crate::constants::EXTRA_CANDIDATE_COUNT;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;

/// One selectable enchantment with its sampling weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub enchantment: String,
    pub weight: f64,
}

impl Candidate {
    pub fn new(enchantment: impl Into<String>, weight: f64) -> Self {
        Self {
            enchantment: enchantment.into(),
            weight,
        }
    }
}

/// Build the deduplicated candidate pool for one template: the template's
/// own enchantment first, then its material overrides, then up to
/// `EXTRA_CANDIDATE_COUNT` extra picks drawn uniformly from the global
/// probability table for variety.
///
/// Map keys are sorted before any random draw so a seeded rng always
/// produces the same pool regardless of hash order. The final sort by
/// descending weight is a debugging aid; sampling does not depend on it.
pub fn build_candidates(
    template: &TemplateConfig,
    config: &EnchantConfig,
    rng: &mut impl Rng,
) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = Vec::new();

    if let Some(primary) = &template.enchantment {
        let weight = template
            .probability
            .unwrap_or_else(|| config.probability(primary));
        candidates.push(Candidate::new(primary.clone(), weight));
    }

    let mut material_ids: Vec<&String> = template.materials.keys().collect();
    material_ids.sort();
    for material_id in material_ids {
        if let Some(enchantment) = &template.materials[material_id].enchantment {
            if !contains(&candidates, enchantment) {
                candidates.push(Candidate::new(
                    enchantment.clone(),
                    config.probability(enchantment),
                ));
            }
        }
    }

    let mut all_enchantments: Vec<&String> = config.enchantment_probabilities.keys().collect();
    all_enchantments.sort();
    all_enchantments.shuffle(rng);

    for enchantment in all_enchantments.into_iter().take(EXTRA_CANDIDATE_COUNT) {
        if !contains(&candidates, enchantment) {
            candidates.push(Candidate::new(
                enchantment.clone(),
                config.probability(enchantment),
            ));
        }
    }

    candidates.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.enchantment.cmp(&b.enchantment))
    });

    candidates
}

fn contains(candidates: &[Candidate], enchantment: &str) -> bool {
    candidates.iter().any(|c| c.enchantment == enchantment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MaterialConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn config_with_probabilities(entries: &[(&str, f64)]) -> EnchantConfig {
        let mut config = EnchantConfig::default();
        for (id, weight) in entries {
            config
                .enchantment_probabilities
                .insert(id.to_string(), *weight);
        }
        config
    }

    fn template_with_primary(id: &str) -> TemplateConfig {
        TemplateConfig {
            enchantment: Some(id.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_primary_enchantment_comes_with_override_weight() {
        let config = config_with_probabilities(&[("minecraft:thorns", 0.3)]);
        let mut template = template_with_primary("minecraft:thorns");
        template.probability = Some(0.9);

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let candidates = build_candidates(&template, &config, &mut rng);

        let thorns = candidates
            .iter()
            .find(|c| c.enchantment == "minecraft:thorns")
            .expect("primary present");
        assert!((thorns.weight - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_primary_falls_back_to_table_then_default() {
        let config = config_with_probabilities(&[("minecraft:thorns", 0.3)]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let listed = build_candidates(&template_with_primary("minecraft:thorns"), &config, &mut rng);
        let thorns = listed
            .iter()
            .find(|c| c.enchantment == "minecraft:thorns")
            .expect("primary present");
        assert!((thorns.weight - 0.3).abs() < f64::EPSILON);

        let unlisted =
            build_candidates(&template_with_primary("minecraft:unlisted"), &config, &mut rng);
        let unknown = unlisted
            .iter()
            .find(|c| c.enchantment == "minecraft:unlisted")
            .expect("primary present");
        assert!((unknown.weight - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_duplicate_candidates() {
        let config = config_with_probabilities(&[
            ("minecraft:protection", 0.8),
            ("minecraft:thorns", 0.3),
            ("minecraft:unbreaking", 0.7),
        ]);
        let mut template = template_with_primary("minecraft:protection");
        // Material override that collides with the primary.
        template.materials.insert(
            "minecraft:diamond".to_string(),
            MaterialConfig::with_enchantment("minecraft:protection"),
        );
        template.materials.insert(
            "minecraft:emerald".to_string(),
            MaterialConfig::with_enchantment("minecraft:thorns"),
        );

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let candidates = build_candidates(&template, &config, &mut rng);

        let ids: HashSet<&str> = candidates.iter().map(|c| c.enchantment.as_str()).collect();
        assert_eq!(ids.len(), candidates.len(), "candidate ids must be unique");
        assert!(ids.contains("minecraft:protection"));
        assert!(ids.contains("minecraft:thorns"));
    }

    #[test]
    fn test_global_subset_capped_at_ten() {
        let entries: Vec<(String, f64)> = (0..40)
            .map(|i| (format!("minecraft:ench_{i:02}"), 0.5))
            .collect();
        let mut config = EnchantConfig::default();
        for (id, weight) in &entries {
            config
                .enchantment_probabilities
                .insert(id.clone(), *weight);
        }
        let template = TemplateConfig::default();

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let candidates = build_candidates(&template, &config, &mut rng);
        assert_eq!(candidates.len(), 10);
    }

    #[test]
    fn test_empty_template_and_table_gives_empty_pool() {
        let config = EnchantConfig::default();
        let template = TemplateConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(build_candidates(&template, &config, &mut rng).is_empty());
    }

    #[test]
    fn test_no_primary_still_uses_material_and_global_sources() {
        let config = config_with_probabilities(&[("minecraft:unbreaking", 0.7)]);
        let mut template = TemplateConfig::default();
        template.materials.insert(
            "minecraft:gold_ingot".to_string(),
            MaterialConfig::with_enchantment("minecraft:smite"),
        );

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let candidates = build_candidates(&template, &config, &mut rng);

        assert!(contains(&candidates, "minecraft:smite"));
        assert!(contains(&candidates, "minecraft:unbreaking"));
    }

    #[test]
    fn test_sorted_by_descending_weight() {
        let config = config_with_probabilities(&[
            ("minecraft:protection", 0.8),
            ("minecraft:mending", 0.05),
            ("minecraft:unbreaking", 0.7),
        ]);
        let template = template_with_primary("minecraft:mending");

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let candidates = build_candidates(&template, &config, &mut rng);

        for pair in candidates.windows(2) {
            assert!(pair[0].weight >= pair[1].weight);
        }
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let config = EnchantConfig::with_defaults();
        let template = config
            .template("minecraft:sentry_armor_trim_smithing_template")
            .expect("default template")
            .clone();

        let mut rng_a = ChaCha8Rng::seed_from_u64(99);
        let mut rng_b = ChaCha8Rng::seed_from_u64(99);
        let a = build_candidates(&template, &config, &mut rng_a);
        let b = build_candidates(&template, &config, &mut rng_b);
        assert_eq!(a, b);
    }
}
