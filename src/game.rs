//! Capability interface over the host game
//!
//! The fishing state machine never touches game objects directly. A host
//! adapter implements [`GameContext`] (and [`FishingRod`] for the equipped rod)
//! over the real game and exposes exactly the fields and actions the machine
//! needs.

use global_hotkey::hotkey::Code;

use crate::fishing::item::Item;

/// Sentinel used by rods for "no fish on the line".
pub const NO_FISH: i32 = -1;

/// Direction the farmer is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacingDirection {
    Up,
    Right,
    Down,
    Left,
}

/// Edibility data for an inventory item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodValue {
    pub edibility: i32,
    pub stamina: i32,
    pub health: i32,
}

impl FoodValue {
    /// Whether eating this item is worth it for stamina recovery
    pub fn restores_stamina(&self) -> bool {
        self.edibility > 0 && self.stamina > 0 && self.health >= 0
    }
}

/// The fishing rod currently equipped by the farmer.
pub trait FishingRod {
    fn in_use(&self) -> bool;
    fn is_timing_cast(&self) -> bool;
    fn is_casting(&self) -> bool;
    fn casted_but_bobber_still_in_air(&self) -> bool;
    fn is_fishing(&self) -> bool;
    fn is_nibbling(&self) -> bool;
    fn is_reeling(&self) -> bool;
    fn hit(&self) -> bool;

    /// A catch has been finalized and waits to be collected
    fn fish_caught(&self) -> bool;
    /// Item id of the pending catch, [`NO_FISH`] when there is none
    fn which_fish(&self) -> i32;
    fn fish_quality(&self) -> i32;
    fn item_category(&self) -> &str;
    fn from_fish_pond(&self) -> bool;
    fn last_catch_was_junk(&self) -> bool;
    fn time_until_fishing_bite(&self) -> f32;

    fn set_casting_power(&mut self, power: f32);
    fn set_time_until_fishing_bite(&mut self, time: f32);
    fn set_recast_timer_ms(&mut self, ms: i32);

    /// Run the rod's own end-of-catch cleanup
    fn done_fishing(&mut self, consume_bait: bool);

    /// In use, or the bobber is still flying
    fn is_actively_used(&self) -> bool {
        self.in_use() || self.casted_but_bobber_still_in_air()
    }
}

/// Everything the fishing state machine reads from, and does to, the game
/// during one tick.
pub trait GameContext {
    type Rod: FishingRod;

    /// The world is loaded and a farmer exists
    fn is_world_ready(&self) -> bool;

    /// In-game clock, e.g. `1230` for 12:30 PM. Runs past midnight up to 2600.
    fn time_of_day(&self) -> u32;

    fn is_key_down(&self, key: Code) -> bool;

    /// The equipped tool, when it is a fishing rod
    fn fishing_rod(&self) -> Option<&Self::Rod>;
    fn fishing_rod_mut(&mut self) -> Option<&mut Self::Rod>;

    fn stamina(&self) -> f32;
    fn is_eating(&self) -> bool;

    /// Zero-based toolbar slot of the equipped item
    fn current_tool_index(&self) -> usize;
    fn set_current_tool_index(&mut self, index: usize);

    fn facing_direction(&self) -> FacingDirection;
    fn set_facing_direction(&mut self, direction: FacingDirection);

    fn inventory_len(&self) -> usize;
    /// Edibility of the item at a zero-based slot, `None` for empty or inedible slots
    fn food_value(&self, index: usize) -> Option<FoodValue>;

    /// Use the equipped tool at the farmer's tool location (a click)
    fn use_tool(&mut self);
    /// Start using the equipped tool (press and hold)
    fn begin_using_tool(&mut self);
    fn eat_held_object(&mut self);
    fn add_item_to_inventory(&mut self, item: Item) -> bool;
    fn play_sound(&mut self, cue: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_value_restores_stamina() {
        let bread = FoodValue {
            edibility: 20,
            stamina: 50,
            health: 22,
        };
        assert!(bread.restores_stamina());

        let poison = FoodValue {
            edibility: 10,
            stamina: 5,
            health: -10,
        };
        assert!(!poison.restores_stamina());

        let rock = FoodValue {
            edibility: -300,
            stamina: 0,
            health: 0,
        };
        assert!(!rock.restores_stamina());
    }
}
