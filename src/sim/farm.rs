//! Simulated farmer and world

use global_hotkey::hotkey::Code;

use super::rod::SimRod;
use crate::fishing::item::Item;
use crate::game::{FacingDirection, FoodValue, GameContext};

/// Toolbar size of the simulated farmer
pub const INVENTORY_SIZE: usize = 12;
/// Slot the rod lives in
pub const ROD_SLOT: usize = 2;
/// Ticks between ten-minute clock steps
pub const TICKS_PER_TEN_MINUTES: u64 = 420;
/// Stamina spent on every cast
pub const CAST_STAMINA: f32 = 8.0;
/// Length of the eating animation
pub const EAT_TICKS: u32 = 60;
pub const MAX_STAMINA: f32 = 270.0;

/// A stack of food in an inventory slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodStack {
    pub value: FoodValue,
    pub count: u32,
}

/// A farmer standing at the water with a rod in slot 3
#[derive(Debug, Clone)]
pub struct SimFarm {
    pub world_ready: bool,
    pub time_of_day: u32,
    pub keys_down: Vec<Code>,
    pub stamina: f32,
    pub current_tool_index: usize,
    pub facing: FacingDirection,
    pub rod: SimRod,
    pub food: Vec<Option<FoodStack>>,
    /// Items the state machine put into the inventory
    pub collected: Vec<Item>,
    pub inventory_full: bool,
    pub sounds: Vec<String>,
    pub use_tool_calls: u32,
    pub begin_using_calls: u32,
    pub eat_calls: u32,
    pub ticks: u64,
    eating_ticks: u32,
    pending_stamina: f32,
}

impl Default for SimFarm {
    fn default() -> Self {
        Self::new()
    }
}

impl SimFarm {
    pub fn new() -> Self {
        Self {
            world_ready: true,
            time_of_day: 600,
            keys_down: Vec::new(),
            stamina: MAX_STAMINA,
            current_tool_index: ROD_SLOT,
            facing: FacingDirection::Down,
            rod: SimRod::default(),
            food: vec![None; INVENTORY_SIZE],
            collected: Vec::new(),
            inventory_full: false,
            sounds: Vec::new(),
            use_tool_calls: 0,
            begin_using_calls: 0,
            eat_calls: 0,
            ticks: 0,
            eating_ticks: 0,
            pending_stamina: 0.0,
        }
    }

    /// Put a food stack into a zero-based slot
    pub fn set_food(&mut self, slot: usize, value: FoodValue, count: u32) {
        if let Some(entry) = self.food.get_mut(slot) {
            *entry = Some(FoodStack { value, count });
        }
    }

    /// What a player does to kick things off: equip the rod and press the button
    pub fn player_starts_cast(&mut self) {
        self.current_tool_index = ROD_SLOT;
        self.begin_using_tool();
    }

    /// Skip the rest of the eating animation
    pub fn finish_eating(&mut self) {
        if self.eating_ticks > 0 {
            self.eating_ticks = 0;
            self.apply_meal();
        }
    }

    fn apply_meal(&mut self) {
        self.stamina = (self.stamina + self.pending_stamina).min(MAX_STAMINA);
        self.pending_stamina = 0.0;
    }

    /// Step the world one tick forward: clock, eating animation, rod
    pub fn advance(&mut self) {
        self.ticks += 1;

        if self.ticks % TICKS_PER_TEN_MINUTES == 0 {
            self.time_of_day = advance_clock(self.time_of_day);
        }

        if self.eating_ticks > 0 {
            self.eating_ticks -= 1;
            if self.eating_ticks == 0 {
                self.apply_meal();
            }
        }

        if self.current_tool_index == ROD_SLOT {
            self.rod.advance();
        }
    }
}

/// Ten in-game minutes later
pub fn advance_clock(time_of_day: u32) -> u32 {
    let next = time_of_day + 10;
    if next % 100 >= 60 {
        next + 40
    } else {
        next
    }
}

impl GameContext for SimFarm {
    type Rod = SimRod;

    fn is_world_ready(&self) -> bool {
        self.world_ready
    }

    fn time_of_day(&self) -> u32 {
        self.time_of_day
    }

    fn is_key_down(&self, key: Code) -> bool {
        self.keys_down.contains(&key)
    }

    fn fishing_rod(&self) -> Option<&SimRod> {
        (self.current_tool_index == ROD_SLOT).then_some(&self.rod)
    }

    fn fishing_rod_mut(&mut self) -> Option<&mut SimRod> {
        if self.current_tool_index == ROD_SLOT {
            Some(&mut self.rod)
        } else {
            None
        }
    }

    fn stamina(&self) -> f32 {
        self.stamina
    }

    fn is_eating(&self) -> bool {
        self.eating_ticks > 0
    }

    fn current_tool_index(&self) -> usize {
        self.current_tool_index
    }

    fn set_current_tool_index(&mut self, index: usize) {
        if index < INVENTORY_SIZE {
            self.current_tool_index = index;
        }
    }

    fn facing_direction(&self) -> FacingDirection {
        self.facing
    }

    fn set_facing_direction(&mut self, direction: FacingDirection) {
        self.facing = direction;
    }

    fn inventory_len(&self) -> usize {
        INVENTORY_SIZE
    }

    fn food_value(&self, index: usize) -> Option<FoodValue> {
        self.food.get(index).copied().flatten().map(|stack| stack.value)
    }

    fn use_tool(&mut self) {
        self.use_tool_calls += 1;
        if self.current_tool_index == ROD_SLOT {
            self.rod.click();
        }
    }

    fn begin_using_tool(&mut self) {
        self.begin_using_calls += 1;
        if self.current_tool_index == ROD_SLOT && !self.rod.in_use && !self.rod.refuse_casts {
            self.rod.begin_using();
            self.stamina -= CAST_STAMINA;
        }
    }

    fn eat_held_object(&mut self) {
        self.eat_calls += 1;
        let slot = self.current_tool_index;
        let Some(Some(stack)) = self.food.get_mut(slot) else {
            return;
        };

        self.pending_stamina = stack.value.stamina as f32;
        self.eating_ticks = EAT_TICKS;
        stack.count = stack.count.saturating_sub(1);
        if stack.count == 0 {
            self.food[slot] = None;
        }
    }

    fn add_item_to_inventory(&mut self, item: Item) -> bool {
        if self.inventory_full {
            return false;
        }
        self.collected.push(item);
        true
    }

    fn play_sound(&mut self, cue: &str) {
        self.sounds.push(cue.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_clock() {
        assert_eq!(advance_clock(600), 610);
        assert_eq!(advance_clock(650), 700);
        assert_eq!(advance_clock(2350), 2400);
    }

    #[test]
    fn test_eating_restores_stamina() {
        let mut farm = SimFarm::new();
        farm.stamina = 10.0;
        let bread = FoodValue {
            edibility: 20,
            stamina: 50,
            health: 22,
        };
        farm.set_food(0, bread, 1);
        farm.current_tool_index = 0;

        farm.eat_held_object();
        assert!(farm.is_eating());
        assert_eq!(farm.food_value(0), None);

        for _ in 0..EAT_TICKS {
            farm.advance();
        }
        assert!(!farm.is_eating());
        assert_eq!(farm.stamina, 60.0);
    }

    #[test]
    fn test_rod_only_when_equipped() {
        let mut farm = SimFarm::new();
        assert!(farm.fishing_rod().is_some());
        farm.set_current_tool_index(0);
        assert!(farm.fishing_rod().is_none());
        farm.set_current_tool_index(99);
        assert_eq!(farm.current_tool_index(), 0);
    }
}
