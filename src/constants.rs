// Candidate pool assembly
pub const EXTRA_CANDIDATE_COUNT: usize = 10;
pub const DEFAULT_ENCHANT_WEIGHT: f64 = 0.5;

// Weighted draw retry budget when avoiding already-applied enchantments
pub const UNIQUE_DRAW_ATTEMPTS: usize = 10;

// Material quality
pub const DEFAULT_MATERIAL_LEVEL: u32 = 1;

// Loot generation defaults
pub const DEFAULT_ENCHANTED_TEMPLATE_CHANCE: f64 = 0.654321;
pub const DEFAULT_MIN_ENCHANTMENTS: u32 = 1;
pub const DEFAULT_MAX_ENCHANTMENTS: u32 = 4;

// Enchantments stamped at loot time are always level 1; the real level
// is rolled at the smithing table from the material used.
pub const LOOT_ENCHANTMENT_LEVEL: u32 = 1;
