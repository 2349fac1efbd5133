//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of loot + craft cycles to simulate
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Template item to generate and craft with
    pub template_id: String,

    /// Material supplied at the smithing table
    pub material_id: String,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            template_id: "minecraft:sentry_armor_trim_smithing_template".to_string(),
            material_id: "minecraft:diamond".to_string(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a fast sanity pass.
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            ..Default::default()
        }
    }

    /// Config for comparing materials: same template, chosen material.
    pub fn material_comparison(material_id: &str) -> Self {
        Self {
            material_id: material_id.to_string(),
            ..Default::default()
        }
    }
}
