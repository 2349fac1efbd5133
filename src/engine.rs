//! Engine facade tying configuration, registry, and the two host hooks
//! together.
//!
//! The host wires `on_item_generated` into its loot-generation event and
//! `on_assemble` into its smithing-recipe assembly. Both hooks take the
//! randomness provider as a parameter, so a host that dispatches events
//! concurrently can hand each thread its own rng while sharing one
//! engine behind a plain reference.

use crate::config::EnchantConfig;
use crate::enchant::{apply_enchantments, maybe_enchant, slot_compatible};
use crate::items::{EnchantmentRegistry, Item, SetRegistry};
use rand::Rng;

pub struct EnchantEngine<R: EnchantmentRegistry> {
    config: EnchantConfig,
    registry: R,
}

impl EnchantEngine<SetRegistry> {
    /// Engine over the default tables, resolving every enchantment the
    /// defaults reference. Handy for tests and the simulator.
    pub fn with_defaults() -> Self {
        let config = EnchantConfig::with_defaults();
        let registry = SetRegistry::from_config(&config);
        Self { config, registry }
    }
}

impl<R: EnchantmentRegistry> EnchantEngine<R> {
    pub fn new(config: EnchantConfig, registry: R) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &EnchantConfig {
        &self.config
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Loot-generation hook. Returns the item to place in the loot,
    /// possibly carrying freshly stamped level-1 postfix enchantments.
    /// The `enable_enchanted_loot` kill switch turns this into the
    /// identity function.
    pub fn on_item_generated(&self, item: Item, rng: &mut impl Rng) -> Item {
        if !self.config.loot.enable_enchanted_loot {
            return item;
        }
        maybe_enchant(item, &self.config, &self.registry, rng)
    }

    /// Craft-assembly hook. `None` rejects the recipe outright (the
    /// result item's slot fails the template's restrictions); otherwise
    /// the enchanted (or passed-through) result is returned.
    pub fn on_assemble(
        &self,
        template_item: &Item,
        material_id: &str,
        result: Item,
        rng: &mut impl Rng,
    ) -> Option<Item> {
        let template = self.config.template(&template_item.id);
        if !slot_compatible(template, &result) {
            return None;
        }
        Some(apply_enchantments(
            &self.config,
            template_item,
            material_id,
            result,
            &self.registry,
            rng,
        ))
    }
}
