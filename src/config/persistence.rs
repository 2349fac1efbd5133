//! JSON persistence for the ~/.trimsmith/ config files.
//!
//! Each table lives in its own pretty-printed JSON file so server admins
//! can edit one concern at a time. Missing files are seeded with the
//! documented defaults; unreadable files fall back to defaults without
//! touching what is on disk.

use super::defaults::{default_material_levels, default_probabilities, default_templates};
use super::types::{EnchantConfig, LootConfig, TemplateConfig};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const TEMPLATES_FILE: &str = "trim_data.json";
pub const MATERIAL_LEVELS_FILE: &str = "material_levels.json";
pub const PROBABILITIES_FILE: &str = "enchantment_probabilities.json";
pub const LOOT_CONFIG_FILE: &str = "loot_config.json";

/// Get the ~/.trimsmith/ directory path, creating it if needed.
pub fn trimsmith_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".trimsmith");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Save a value as pretty-printed JSON into the given config directory.
pub fn save_json<T: serde::Serialize>(dir: &Path, filename: &str, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(dir.join(filename), json)?;
    Ok(())
}

/// Load one config file, seeding it with `seed()` when absent. A file
/// that exists but fails to parse yields the seed value and is left
/// untouched on disk for the admin to repair.
fn load_or_seed<T>(dir: &Path, filename: &str, seed: impl FnOnce() -> T) -> T
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let path = dir.join(filename);
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|_| seed()),
        Err(_) => {
            let value = seed();
            save_json(dir, filename, &value).ok();
            value
        }
    }
}

/// Load the full configuration from an explicit directory, seeding any
/// missing file with defaults.
pub fn load_config_from(dir: &Path) -> EnchantConfig {
    let templates: HashMap<String, TemplateConfig> =
        load_or_seed(dir, TEMPLATES_FILE, default_templates);
    let material_levels: HashMap<String, u32> =
        load_or_seed(dir, MATERIAL_LEVELS_FILE, default_material_levels);
    let enchantment_probabilities: HashMap<String, f64> =
        load_or_seed(dir, PROBABILITIES_FILE, default_probabilities);
    let loot: LootConfig = load_or_seed(dir, LOOT_CONFIG_FILE, LootConfig::default);

    EnchantConfig {
        templates,
        material_levels,
        enchantment_probabilities,
        loot,
    }
}

/// Load the configuration from ~/.trimsmith/, seeding defaults on first
/// run. Falls back to the in-memory defaults if the directory itself is
/// unavailable.
pub fn load_config() -> EnchantConfig {
    match trimsmith_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(_) => EnchantConfig::with_defaults(),
    }
}

/// Persist the full configuration into the given directory.
pub fn save_config_to(dir: &Path, config: &EnchantConfig) -> io::Result<()> {
    save_json(dir, TEMPLATES_FILE, &config.templates)?;
    save_json(dir, MATERIAL_LEVELS_FILE, &config.material_levels)?;
    save_json(dir, PROBABILITIES_FILE, &config.enchantment_probabilities)?;
    save_json(dir, LOOT_CONFIG_FILE, &config.loot)?;
    Ok(())
}
