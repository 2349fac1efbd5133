//! Configuration: template rules, material tiers, enchantment weights,
//! loot options, plus default seeding and JSON persistence.

pub mod defaults;
pub mod persistence;
pub mod types;

pub use defaults::*;
pub use persistence::*;
pub use types::*;
