//! Simulation report generation.

use serde::Serialize;
use std::collections::HashMap;

/// Statistics from one simulated loot + craft cycle.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    /// Postfix enchantments stamped on the looted template
    pub loot_enchant_count: usize,

    /// Prefix enchantment granted at the table, with its level
    pub prefix: Option<(String, u32)>,

    /// Stored postfix enchantments that went into the craft roll
    pub postfix_attempts: usize,

    /// Levels granted by the postfix ladder (one entry per grant)
    pub postfix_levels: Vec<u32>,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub template_id: String,
    pub material_id: String,

    // Loot phase
    pub enchanted_loot_rate: f64,
    pub avg_loot_enchantments: f64,
    pub loot_count_distribution: HashMap<usize, u32>,

    // Smithing phase
    pub prefix_grant_rate: f64,
    pub prefix_levels: HashMap<u32, u32>,
    pub prefix_enchantments: HashMap<String, u32>,
    pub postfix_attempts: u64,
    pub postfix_grants: u64,
    pub postfix_level_distribution: HashMap<u32, u32>,
}

impl SimReport {
    /// Aggregate completed run stats into a report.
    pub fn from_runs(runs: &[RunStats], template_id: &str, material_id: &str) -> Self {
        let num_runs = runs.len() as u32;
        let denom = num_runs.max(1) as f64;

        let enchanted_runs = runs.iter().filter(|r| r.loot_enchant_count > 0).count();
        let total_loot_enchants: usize = runs.iter().map(|r| r.loot_enchant_count).sum();

        let mut loot_count_distribution = HashMap::new();
        for run in runs {
            *loot_count_distribution
                .entry(run.loot_enchant_count)
                .or_insert(0) += 1;
        }

        let mut prefix_levels = HashMap::new();
        let mut prefix_enchantments = HashMap::new();
        let mut prefix_granted = 0u32;
        for run in runs {
            if let Some((enchantment, level)) = &run.prefix {
                prefix_granted += 1;
                *prefix_levels.entry(*level).or_insert(0) += 1;
                *prefix_enchantments.entry(enchantment.clone()).or_insert(0) += 1;
            }
        }

        let postfix_attempts: u64 = runs.iter().map(|r| r.postfix_attempts as u64).sum();
        let postfix_grants: u64 = runs.iter().map(|r| r.postfix_levels.len() as u64).sum();
        let mut postfix_level_distribution = HashMap::new();
        for run in runs {
            for level in &run.postfix_levels {
                *postfix_level_distribution.entry(*level).or_insert(0) += 1;
            }
        }

        Self {
            num_runs,
            template_id: template_id.to_string(),
            material_id: material_id.to_string(),
            enchanted_loot_rate: enchanted_runs as f64 / denom,
            avg_loot_enchantments: total_loot_enchants as f64 / denom,
            loot_count_distribution,
            prefix_grant_rate: prefix_granted as f64 / denom,
            prefix_levels,
            prefix_enchantments,
            postfix_attempts,
            postfix_grants,
            postfix_level_distribution,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 ENCHANTMENT BALANCE REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Runs:     {}\n", self.num_runs));
        report.push_str(&format!("Template: {}\n", self.template_id));
        report.push_str(&format!("Material: {}\n\n", self.material_id));

        report.push_str("── LOOT PHASE ───────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Enchanted Rate:      {:.1}%\n",
            self.enchanted_loot_rate * 100.0
        ));
        report.push_str(&format!(
            "  Avg Enchantments:    {:.2}\n",
            self.avg_loot_enchantments
        ));

        let max_count = self.loot_count_distribution.keys().max().copied().unwrap_or(0);
        for count in 0..=max_count {
            let runs = self.loot_count_distribution.get(&count).copied().unwrap_or(0);
            let pct = (runs as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar_len = (pct / 2.0) as usize;
            let bar: String = "█".repeat(bar_len);
            report.push_str(&format!("  {count} enchants: {pct:>5.1}% {bar}\n"));
        }
        report.push('\n');

        report.push_str("── SMITHING PHASE ───────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Prefix Grant Rate:   {:.1}%\n",
            self.prefix_grant_rate * 100.0
        ));

        let mut prefix_ids: Vec<_> = self.prefix_enchantments.iter().collect();
        prefix_ids.sort_by(|a, b| b.1.cmp(a.1));
        for (enchantment, count) in prefix_ids {
            report.push_str(&format!("    {enchantment}: {count}\n"));
        }

        let mut levels: Vec<_> = self.prefix_levels.keys().copied().collect();
        levels.sort_unstable();
        for level in levels {
            let count = self.prefix_levels[&level];
            report.push_str(&format!("    level {level}: {count}\n"));
        }
        report.push('\n');

        report.push_str("── POSTFIX LADDER ───────────────────────────────────────────────\n");
        let grant_rate = if self.postfix_attempts > 0 {
            self.postfix_grants as f64 / self.postfix_attempts as f64
        } else {
            0.0
        };
        report.push_str(&format!("  Attempts:            {}\n", self.postfix_attempts));
        report.push_str(&format!(
            "  Grants:              {} ({:.1}%)\n",
            self.postfix_grants,
            grant_rate * 100.0
        ));

        let mut postfix_levels: Vec<_> = self.postfix_level_distribution.keys().copied().collect();
        postfix_levels.sort_unstable();
        for level in postfix_levels {
            let count = self.postfix_level_distribution[&level];
            let pct = if self.postfix_grants > 0 {
                (count as f64 / self.postfix_grants as f64) * 100.0
            } else {
                0.0
            };
            let bar_len = (pct / 2.0) as usize;
            let bar: String = "█".repeat(bar_len);
            report.push_str(&format!("  level {level}: {pct:>5.1}% {bar}\n"));
        }

        report
    }

    /// Generate a JSON report.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
