use crate::constants::{
    DEFAULT_ENCHANTED_TEMPLATE_CHANCE, DEFAULT_ENCHANT_WEIGHT, DEFAULT_MATERIAL_LEVEL,
    DEFAULT_MAX_ENCHANTMENTS, DEFAULT_MIN_ENCHANTMENTS,
};
use crate::items::ArmorSlot;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Material-specific overrides on a template. Only the enchantment can be
/// overridden; the level always comes from the material tier table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enchantment: Option<String>,
}

impl MaterialConfig {
    pub fn with_enchantment(id: impl Into<String>) -> Self {
        Self {
            enchantment: Some(id.into()),
        }
    }
}

/// Rules for one smithing template, keyed by template item id in
/// `trim_data.json`. Field names stay camelCase on disk so existing
/// config files keep working.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    /// Default enchantment granted by this template. None means the
    /// template is listed but grants nothing.
    #[serde(default)]
    pub enchantment: Option<String>,

    /// Optional custom display name (rendering is the host's job).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Armor slots this template may be applied to. None or empty means
    /// unrestricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_slots: Option<Vec<ArmorSlot>>,

    /// Material id -> material-specific overrides.
    #[serde(default)]
    pub materials: HashMap<String, MaterialConfig>,

    /// Optional weight override for the template's own enchantment when
    /// building loot candidates. Falls back to the global table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
}

/// Loot generation options, stored in `loot_config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LootConfig {
    /// Chance that a loot-generated template is enchanted at all, and the
    /// per-slot continuation chance while adding more enchantments.
    pub enchanted_template_chance: f64,

    /// Parsed for config compatibility; the sampling loop does not
    /// enforce a lower bound (see DESIGN.md).
    pub min_enchantments: u32,

    /// Upper bound on enchantments stamped per loot roll.
    pub max_enchantments: u32,

    /// Master switch for the loot hook.
    pub enable_enchanted_loot: bool,
}

impl Default for LootConfig {
    fn default() -> Self {
        Self {
            enchanted_template_chance: DEFAULT_ENCHANTED_TEMPLATE_CHANCE,
            min_enchantments: DEFAULT_MIN_ENCHANTMENTS,
            max_enchantments: DEFAULT_MAX_ENCHANTMENTS,
            enable_enchanted_loot: true,
        }
    }
}

/// The full configuration the engine runs against. Loaded once at
/// startup and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnchantConfig {
    pub templates: HashMap<String, TemplateConfig>,
    pub material_levels: HashMap<String, u32>,
    pub enchantment_probabilities: HashMap<String, f64>,
    pub loot: LootConfig,
}

impl EnchantConfig {
    /// Configuration seeded entirely from the documented defaults.
    pub fn with_defaults() -> Self {
        Self {
            templates: super::defaults::default_templates(),
            material_levels: super::defaults::default_material_levels(),
            enchantment_probabilities: super::defaults::default_probabilities(),
            loot: LootConfig::default(),
        }
    }

    pub fn template(&self, template_id: &str) -> Option<&TemplateConfig> {
        self.templates.get(template_id)
    }

    /// Quality tier of a material. Unconfigured materials are tier 1.
    pub fn material_level(&self, material_id: &str) -> u32 {
        self.material_levels
            .get(material_id)
            .copied()
            .unwrap_or(DEFAULT_MATERIAL_LEVEL)
    }

    /// Base probability weight of an enchantment, 0.5 when unlisted.
    pub fn probability(&self, enchantment_id: &str) -> f64 {
        self.enchantment_probabilities
            .get(enchantment_id)
            .copied()
            .unwrap_or(DEFAULT_ENCHANT_WEIGHT)
    }
}
