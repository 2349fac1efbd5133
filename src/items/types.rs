use serde::{Deserialize, Serialize};

/// Armor slot an item occupies, as named in template slot restrictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmorSlot {
    Head,
    Chest,
    Legs,
    Feet,
}

impl ArmorSlot {
    pub fn name(&self) -> &'static str {
        match self {
            ArmorSlot::Head => "head",
            ArmorSlot::Chest => "chest",
            ArmorSlot::Legs => "legs",
            ArmorSlot::Feet => "feet",
        }
    }
}

/// One enchantment stored on an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enchantment {
    pub id: String,
    pub level: u32,
}

/// A minimal item stack: identity, optional armor slot, stored
/// enchantments, and the enchantment-glint marker.
///
/// The engine receives items by value, mutates them, and hands them back;
/// it never keeps a reference after returning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub slot: Option<ArmorSlot>,
    pub enchantments: Vec<Enchantment>,
    pub glint: bool,
}

impl Item {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slot: None,
            enchantments: Vec::new(),
            glint: false,
        }
    }

    pub fn with_slot(id: impl Into<String>, slot: ArmorSlot) -> Self {
        Self {
            id: id.into(),
            slot: Some(slot),
            enchantments: Vec::new(),
            glint: false,
        }
    }

    /// Stamp an enchantment onto the item. Stamping an id that is already
    /// present keeps the higher of the two levels, so merging the
    /// guaranteed and rolled tiers never duplicates an entry.
    pub fn enchant(&mut self, id: &str, level: u32) {
        if let Some(existing) = self.enchantments.iter_mut().find(|e| e.id == id) {
            existing.level = existing.level.max(level);
        } else {
            self.enchantments.push(Enchantment {
                id: id.to_string(),
                level,
            });
        }
    }

    pub fn has_enchantment(&self, id: &str) -> bool {
        self.enchantments.iter().any(|e| e.id == id)
    }

    pub fn enchantment_level(&self, id: &str) -> Option<u32> {
        self.enchantments.iter().find(|e| e.id == id).map(|e| e.level)
    }

    pub fn is_enchanted(&self) -> bool {
        !self.enchantments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enchant_adds_entry() {
        let mut item = Item::new("minecraft:sentry_armor_trim_smithing_template");
        item.enchant("minecraft:protection", 2);
        assert!(item.has_enchantment("minecraft:protection"));
        assert_eq!(item.enchantment_level("minecraft:protection"), Some(2));
    }

    #[test]
    fn test_enchant_duplicate_keeps_higher_level() {
        let mut item = Item::new("template");
        item.enchant("minecraft:thorns", 1);
        item.enchant("minecraft:thorns", 3);
        item.enchant("minecraft:thorns", 2);
        assert_eq!(item.enchantments.len(), 1);
        assert_eq!(item.enchantment_level("minecraft:thorns"), Some(3));
    }

    #[test]
    fn test_with_slot() {
        let item = Item::with_slot("minecraft:iron_boots", ArmorSlot::Feet);
        assert_eq!(item.slot, Some(ArmorSlot::Feet));
        assert!(!item.is_enchanted());
        assert!(!item.glint);
    }

    #[test]
    fn test_armor_slot_names() {
        assert_eq!(ArmorSlot::Head.name(), "head");
        assert_eq!(ArmorSlot::Chest.name(), "chest");
        assert_eq!(ArmorSlot::Legs.name(), "legs");
        assert_eq!(ArmorSlot::Feet.name(), "feet");
    }

    #[test]
    fn test_armor_slot_serializes_lowercase() {
        let json = serde_json::to_string(&ArmorSlot::Feet).expect("serialize");
        assert_eq!(json, "\"feet\"");
        let slot: ArmorSlot = serde_json::from_str("\"legs\"").expect("deserialize");
        assert_eq!(slot, ArmorSlot::Legs);
    }
}
