//! Item model: stacks, armor slots, and the enchantment registry seam.

pub mod registry;
pub mod types;

pub use registry::*;
pub use types::*;
