//! The enchantment assignment core.
//!
//! Two independent pipelines share the candidate/sampler primitives:
//! - `loot`: stamps probabilistic "postfix" enchantments onto templates
//!   when they spawn in loot, always at level 1.
//! - `smithing`: grants the guaranteed "prefix" enchantment at craft time
//!   and re-rolls a level for each stored postfix via exponential decay.
//!
//! Neither pipeline calls the other, and neither performs I/O; all
//! randomness comes in through an explicit `&mut impl Rng` parameter.

pub mod candidates;
pub mod loot;
pub mod sampler;
pub mod smithing;

pub use candidates::{build_candidates, Candidate};
pub use loot::maybe_enchant;
pub use sampler::{draw_unique, select_weighted};
pub use smithing::{
    apply_enchantments, resolve_prefix, roll_postfix_level, slot_compatible, PrefixResolution,
    PrefixSource,
};
