//! Enchantment registry seam.
//!
//! The live game owns the real enchantment registry; the engine only needs
//! to ask "does this id resolve?" and get back a handle it can stamp with.
//! Ids that fail to resolve are skipped silently by every caller.

use crate::config::EnchantConfig;
use std::collections::HashSet;

/// A resolved enchantment reference, carrying the canonical id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnchantmentHandle {
    id: String,
}

impl EnchantmentHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Host-provided lookup from enchantment id to a usable handle.
/// Resolution may fail (datapack removed the enchantment, typo in config);
/// that is an expected outcome, not an error.
pub trait EnchantmentRegistry {
    fn resolve(&self, id: &str) -> Option<EnchantmentHandle>;
}

/// Set-backed registry: an id resolves iff it was registered.
#[derive(Debug, Clone, Default)]
pub struct SetRegistry {
    ids: HashSet<String>,
}

impl SetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>) {
        self.ids.insert(id.into());
    }

    /// Build a registry that resolves every enchantment id the given
    /// configuration references: the global probability table, template
    /// primaries, and material overrides.
    pub fn from_config(config: &EnchantConfig) -> Self {
        let mut registry = Self::new();
        for id in config.enchantment_probabilities.keys() {
            registry.register(id.clone());
        }
        for template in config.templates.values() {
            if let Some(primary) = &template.enchantment {
                registry.register(primary.clone());
            }
            for material in template.materials.values() {
                if let Some(enchantment) = &material.enchantment {
                    registry.register(enchantment.clone());
                }
            }
        }
        registry
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl EnchantmentRegistry for SetRegistry {
    fn resolve(&self, id: &str) -> Option<EnchantmentHandle> {
        if self.ids.contains(id) {
            Some(EnchantmentHandle::new(id))
        } else {
            None
        }
    }
}

impl<S: Into<String>> FromIterator<S> for SetRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
