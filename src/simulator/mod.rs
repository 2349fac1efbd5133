//! Balance simulator for Monte Carlo analysis of the enchantment engine.
//!
//! Runs thousands of loot + craft cycles against the live engine code to
//! answer balance questions:
//! - How many postfix enchantments does a looted template carry?
//! - What prefix levels does each material produce?
//! - How often does the exponential-decay ladder grant each level?
//!
//! The simulator drives `EnchantEngine` directly, so results match real
//! gameplay behavior by construction.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::run_simulation;
