//! Trimsmith - Smithing Template Enchantment Engine
//!
//! Probability-weighted enchantment assignment for smithing templates:
//! templates picked up in loot carry probabilistic "postfix" enchantments,
//! and crafting with a template grants a guaranteed "prefix" enchantment
//! scaled by the material's quality tier.

pub mod config;
pub mod constants;
pub mod enchant;
pub mod engine;
pub mod items;
pub mod simulator;
