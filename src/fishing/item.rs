//! Items produced from a finalized catch

/// Category string rods report for regular objects
pub const OBJECT_CATEGORY: &str = "Object";

/// Caroline's necklace, which must be flagged as a quest item
pub const CAROLINES_NECKLACE_ITEM: i32 = 191;

/// An inventory item handed to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i32,
    pub stack: i32,
    pub quality: i32,
    pub quest_item: bool,
}

impl Item {
    /// Create a new object item
    pub fn new(id: i32, stack: i32, quality: i32) -> Self {
        Self {
            id,
            stack,
            quality,
            quest_item: false,
        }
    }

    /// Build the item for a catch, `None` when the category is not one we can
    /// synthesize.
    pub fn from_catch(which_fish: i32, quality: i32, category: &str) -> Option<Self> {
        if category != OBJECT_CATEGORY {
            return None;
        }

        let mut item = Item::new(which_fish, 1, quality);
        if which_fish == CAROLINES_NECKLACE_ITEM {
            item.quest_item = true;
        }
        Some(item)
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item {} x{} (quality {})", self.id, self.stack, self.quality)
    }
}
