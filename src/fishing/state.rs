//! The fishing state machine
//!
//! One [`GameState`] is live at a time. Each tick the host adapter calls
//! [`GameState::next`], which inspects the game through [`GameContext`],
//! performs at most the small side effect needed to move fishing forward and
//! returns the state for the following tick.

use super::item::Item;
use super::session::FishingSession;
use crate::config::ModConfig;
use crate::game::{FacingDirection, FishingRod, GameContext, NO_FISH};

/// Recast delay applied after a catch is collected
pub const RECAST_TIMER_MS: i32 = 200;

/// Audio cue played when a catch lands in the inventory
pub const CATCH_SOUND: &str = "coin";

/// State tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStateType {
    Idle,
    Fishing,
    CollectingFish,
    WaitingForFishing,
    /// Reserved extension point, never constructed by the machine
    Example,
}

impl GameStateType {
    /// Get human-readable description of the state
    pub fn description(&self) -> &'static str {
        match self {
            GameStateType::Idle => "Waiting for the player to cast",
            GameStateType::Fishing => "Fishing...",
            GameStateType::CollectingFish => "Collecting the catch",
            GameStateType::WaitingForFishing => "Recasting...",
            GameStateType::Example => "Example",
        }
    }
}

impl std::fmt::Display for GameStateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStateType::Idle => "Idle",
            GameStateType::Fishing => "Fishing",
            GameStateType::CollectingFish => "CollectingFish",
            GameStateType::WaitingForFishing => "WaitingForFishing",
            GameStateType::Example => "Example",
        };
        f.write_str(name)
    }
}

/// Scratch data carried while waiting to recast
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecastProgress {
    /// `begin_using_tool` was already issued by this state
    pub has_initiated_recast: bool,
    /// Slot the rod was in before switching to food
    pub fishing_rod_index: Option<usize>,
    /// Facing before switching to food
    pub facing_direction: Option<FacingDirection>,
}

/// State payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateKind {
    Idle,
    Fishing,
    CollectingFish,
    WaitingForFishing(RecastProgress),
    Example,
}

impl StateKind {
    pub fn state_type(&self) -> GameStateType {
        match self {
            StateKind::Idle => GameStateType::Idle,
            StateKind::Fishing => GameStateType::Fishing,
            StateKind::CollectingFish => GameStateType::CollectingFish,
            StateKind::WaitingForFishing(_) => GameStateType::WaitingForFishing,
            StateKind::Example => GameStateType::Example,
        }
    }
}

/// An immutable state value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    kind: StateKind,
    previous: GameStateType,
}

impl GameState {
    /// Initial state for a new session
    pub fn default_state(session: &mut FishingSession) -> Self {
        session.should_end_fishing = false;
        Self {
            kind: StateKind::Idle,
            previous: GameStateType::Idle,
        }
    }

    pub fn kind(&self) -> &StateKind {
        &self.kind
    }

    pub fn state_type(&self) -> GameStateType {
        self.kind.state_type()
    }

    /// Tag of the state this one was entered from
    pub fn previous_state_type(&self) -> GameStateType {
        self.previous
    }

    /// Recast scratch data, when waiting to recast
    pub fn recast_progress(&self) -> Option<&RecastProgress> {
        match &self.kind {
            StateKind::WaitingForFishing(progress) => Some(progress),
            _ => None,
        }
    }

    /// Advance the machine by one tick
    pub fn next<C: GameContext>(
        self,
        game: &mut C,
        config: &ModConfig,
        session: &mut FishingSession,
    ) -> GameState {
        match self.kind {
            StateKind::Idle => self.next_idle(game, config, session),
            StateKind::Fishing => self.next_fishing(game, config, session),
            StateKind::CollectingFish => self.next_collecting(game, session),
            StateKind::WaitingForFishing(progress) => {
                self.next_waiting(progress, game, config, session)
            }
            StateKind::Example => self,
        }
    }

    /// Build the successor state, logging the change
    fn enter(&self, kind: StateKind, session: &mut FishingSession) -> GameState {
        let from = self.state_type();
        let next = GameState {
            kind,
            previous: from,
        };

        if next.kind == StateKind::Idle {
            session.should_end_fishing = false;
        }
        if from != next.state_type() {
            tracing::debug!("Transitioning from {} to {}", from, next.state_type());
        }
        next
    }

    fn with_progress(self, progress: RecastProgress) -> GameState {
        GameState {
            kind: StateKind::WaitingForFishing(progress),
            previous: self.previous,
        }
    }

    fn next_idle<C: GameContext>(
        self,
        game: &mut C,
        config: &ModConfig,
        session: &mut FishingSession,
    ) -> GameState {
        let Some(rod) = using_rod(game) else {
            return self;
        };

        if rod.is_timing_cast() {
            max_cast_power(rod, config);
            return self.enter(StateKind::Fishing, session);
        }

        self
    }

    fn next_fishing<C: GameContext>(
        self,
        game: &mut C,
        config: &ModConfig,
        session: &mut FishingSession,
    ) -> GameState {
        if config.cancel_keys.codes().iter().any(|&key| game.is_key_down(key)) {
            session.request_end_fishing();
        }

        let Some(rod) = using_rod(game) else {
            return self.enter(StateKind::CollectingFish, session);
        };

        if rod.is_timing_cast() {
            max_cast_power(rod, config);
            return self;
        }

        if rod.is_casting() || rod.casted_but_bobber_still_in_air() {
            return self;
        }

        if rod.is_fishing() {
            if !rod.is_nibbling() {
                if config.fast_bite && rod.time_until_fishing_bite() > 0.0 {
                    rod.set_time_until_fishing_bite(0.0);
                }
                return self;
            }

            let should_click = !rod.is_reeling() && !rod.hit();
            if should_click {
                tracing::debug!("Fish is nibbling, hooking it");
                game.use_tool();
            }
            return self;
        }

        if rod.fish_caught() && rod.which_fish() != NO_FISH {
            tracing::debug!(
                "Caught item {} of type {}, isJunk: {}, waiting for click",
                rod.which_fish(),
                rod.item_category(),
                rod.last_catch_was_junk()
            );
            return self.enter(StateKind::CollectingFish, session);
        }

        self
    }

    fn next_collecting<C: GameContext>(
        self,
        game: &mut C,
        session: &mut FishingSession,
    ) -> GameState {
        let Some(rod) = using_rod(game) else {
            tracing::error!("Fishing rod is missing at state {}", self.state_type());
            return self.enter(
                StateKind::WaitingForFishing(RecastProgress::default()),
                session,
            );
        };

        if !rod.fish_caught() || rod.which_fish() == NO_FISH {
            return self;
        }

        let which_fish = rod.which_fish();
        let from_fish_pond = rod.from_fish_pond();
        let Some(item) = Item::from_catch(which_fish, rod.fish_quality(), rod.item_category())
        else {
            tracing::error!("Unknown item category: {}", rod.item_category());
            return self;
        };

        let quest_item = item.quest_item;
        tracing::info!("Collected {}", item);
        if !game.add_item_to_inventory(item) {
            tracing::warn!("Inventory rejected item {}", which_fish);
        }
        game.play_sound(CATCH_SOUND);

        if let Some(rod) = game.fishing_rod_mut() {
            rod.set_recast_timer_ms(RECAST_TIMER_MS);
            rod.done_fishing(!from_fish_pond);
        }
        session.stats.record_catch(quest_item);

        self.enter(
            StateKind::WaitingForFishing(RecastProgress::default()),
            session,
        )
    }

    fn next_waiting<C: GameContext>(
        self,
        mut progress: RecastProgress,
        game: &mut C,
        config: &ModConfig,
        session: &mut FishingSession,
    ) -> GameState {
        let current_time = game.time_of_day();
        if !config.within_fishing_hours(current_time) {
            tracing::debug!("Outside fishing hours (Current time: {})", current_time);
            return self.enter(StateKind::Idle, session);
        }

        if session.should_end_fishing {
            tracing::debug!("Movement was detected while fishing, stopping");
            return self.enter(StateKind::Idle, session);
        }

        let low_stamina = game.stamina() < config.stamina_to_eat;

        if low_stamina && !game.is_eating() && game.fishing_rod().is_some() {
            if let Some(food_slot) = food_slot(game, config) {
                progress.fishing_rod_index = Some(game.current_tool_index());
                progress.facing_direction = Some(game.facing_direction());
                game.set_current_tool_index(food_slot);
                game.eat_held_object();
                session.stats.record_meal();
                tracing::info!(
                    "Eating from slot {} at stamina {:.1}",
                    food_slot + 1,
                    game.stamina()
                );
                return self.with_progress(progress);
            }
        }

        if game.fishing_rod().is_some() {
            return self.attempt_recast(progress, game, config, session);
        }

        if !progress.has_initiated_recast && !game.is_eating() {
            let slot = progress.fishing_rod_index.unwrap_or_else(|| config.rod_slot());
            tracing::debug!("Switching back to the fishing rod in slot {}", slot + 1);
            game.set_current_tool_index(slot);
            if let Some(facing) = progress.facing_direction {
                game.set_facing_direction(facing);
            }
        }

        if low_stamina && !game.is_eating() {
            tracing::debug!("Stamina is low and there is nothing to eat");
            return self.enter(StateKind::Idle, session);
        }

        self.with_progress(progress)
    }

    /// Start a new cast at most once per waiting state, then follow it into
    /// Fishing as soon as the rod is timing the cast.
    fn attempt_recast<C: GameContext>(
        self,
        mut progress: RecastProgress,
        game: &mut C,
        config: &ModConfig,
        session: &mut FishingSession,
    ) -> GameState {
        if !progress.has_initiated_recast {
            progress.has_initiated_recast = true;
            game.begin_using_tool();
            session.stats.record_recast();
            tracing::debug!("Initiating recast from state: {}", self.state_type());
        }

        if let Some(rod) = using_rod(game) {
            if rod.is_timing_cast() {
                max_cast_power(rod, config);
                return self.enter(StateKind::Fishing, session);
            }
        }

        self.with_progress(progress)
    }
}

/// The equipped rod, only while it is in use or its bobber is in flight
fn using_rod<C: GameContext>(game: &mut C) -> Option<&mut C::Rod> {
    game.fishing_rod_mut().filter(|rod| rod.is_actively_used())
}

fn max_cast_power<R: FishingRod>(rod: &mut R, config: &ModConfig) {
    if config.fast_bite {
        rod.set_casting_power(1.0);
    }
}

/// Zero-based slot of usable food, if auto-eating is configured
fn food_slot<C: GameContext>(game: &C, config: &ModConfig) -> Option<usize> {
    let slot = config.food_slot()?;
    if slot >= game.inventory_len() {
        return None;
    }
    game.food_value(slot)
        .filter(|food| food.restores_stamina())
        .map(|_| slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::FoodValue;
    use crate::sim::{SimCatch, SimFarm};
    use global_hotkey::hotkey::Code;

    fn fast_config() -> ModConfig {
        ModConfig {
            fast_bite: true,
            ..ModConfig::default()
        }
    }

    fn state(kind: StateKind) -> GameState {
        GameState {
            kind,
            previous: GameStateType::Idle,
        }
    }

    fn waiting() -> GameState {
        state(StateKind::WaitingForFishing(RecastProgress::default()))
    }

    fn bread() -> FoodValue {
        FoodValue {
            edibility: 20,
            stamina: 50,
            health: 22,
        }
    }

    #[test]
    fn test_idle_stays_until_cast_is_timed() {
        let mut farm = SimFarm::new();
        let mut session = FishingSession::new();
        let config = ModConfig::default();

        let idle = GameState::default_state(&mut session);
        let next = idle.next(&mut farm, &config, &mut session);
        assert_eq!(next.state_type(), GameStateType::Idle);

        farm.rod.in_use = true;
        farm.rod.is_fishing = true;
        let next = next.next(&mut farm, &config, &mut session);
        assert_eq!(next.state_type(), GameStateType::Idle);
        assert_eq!(farm.rod.casting_power, 0.0);

        farm.current_tool_index = 0;
        let next = next.next(&mut farm, &config, &mut session);
        assert_eq!(next.state_type(), GameStateType::Idle);
    }

    #[test]
    fn test_idle_to_fishing_with_fast_bite() {
        let mut farm = SimFarm::new();
        farm.time_of_day = 1200;
        farm.rod.in_use = true;
        farm.rod.is_timing_cast = true;
        let mut session = FishingSession::new();

        let idle = GameState::default_state(&mut session);
        let next = idle.next(&mut farm, &fast_config(), &mut session);
        assert_eq!(next.state_type(), GameStateType::Fishing);
        assert_eq!(next.previous_state_type(), GameStateType::Idle);
        assert_eq!(farm.rod.casting_power, 1.0);
    }

    #[test]
    fn test_idle_to_fishing_keeps_power_without_fast_bite() {
        let mut farm = SimFarm::new();
        farm.rod.in_use = true;
        farm.rod.is_timing_cast = true;
        farm.rod.casting_power = 0.3;
        let mut session = FishingSession::new();

        let next = state(StateKind::Idle).next(&mut farm, &ModConfig::default(), &mut session);
        assert_eq!(next.state_type(), GameStateType::Fishing);
        assert_eq!(farm.rod.casting_power, 0.3);
    }

    #[test]
    fn test_fishing_to_collecting_when_rod_not_in_use() {
        let mut farm = SimFarm::new();
        let mut session = FishingSession::new();

        let next = state(StateKind::Fishing).next(&mut farm, &ModConfig::default(), &mut session);
        assert_eq!(next.state_type(), GameStateType::CollectingFish);
        assert_eq!(next.previous_state_type(), GameStateType::Fishing);
    }

    #[test]
    fn test_fishing_zeroes_bite_timer() {
        let mut farm = SimFarm::new();
        farm.rod.in_use = true;
        farm.rod.is_fishing = true;
        farm.rod.time_until_fishing_bite = 900.0;
        let mut session = FishingSession::new();

        let next = state(StateKind::Fishing).next(&mut farm, &fast_config(), &mut session);
        assert_eq!(next.state_type(), GameStateType::Fishing);
        assert_eq!(farm.rod.time_until_fishing_bite, 0.0);

        farm.rod.time_until_fishing_bite = 900.0;
        let next = next.next(&mut farm, &ModConfig::default(), &mut session);
        assert_eq!(next.state_type(), GameStateType::Fishing);
        assert_eq!(farm.rod.time_until_fishing_bite, 900.0);
    }

    #[test]
    fn test_fishing_clicks_once_on_nibble() {
        let mut farm = SimFarm::new();
        farm.rod.in_use = true;
        farm.rod.is_fishing = true;
        farm.rod.is_nibbling = true;
        let mut session = FishingSession::new();
        let config = ModConfig::default();

        let next = state(StateKind::Fishing).next(&mut farm, &config, &mut session);
        assert_eq!(next.state_type(), GameStateType::Fishing);
        assert_eq!(farm.use_tool_calls, 1);
        assert!(farm.rod.hit);

        let next = next.next(&mut farm, &config, &mut session);
        assert_eq!(next.state_type(), GameStateType::Fishing);
        assert_eq!(farm.use_tool_calls, 1);
    }

    #[test]
    fn test_fishing_waits_while_casting() {
        let mut farm = SimFarm::new();
        farm.rod.in_use = true;
        farm.rod.casted_but_bobber_still_in_air = true;
        farm.rod.fish_caught = true;
        farm.rod.which_fish = 12;
        let mut session = FishingSession::new();

        let next = state(StateKind::Fishing).next(&mut farm, &ModConfig::default(), &mut session);
        assert_eq!(next.state_type(), GameStateType::Fishing);
    }

    #[test]
    fn test_fishing_to_collecting_on_finalized_catch() {
        let mut farm = SimFarm::new();
        farm.rod.in_use = true;
        farm.rod.fish_caught = true;
        farm.rod.which_fish = 12;
        let mut session = FishingSession::new();

        let next = state(StateKind::Fishing).next(&mut farm, &ModConfig::default(), &mut session);
        assert_eq!(next.state_type(), GameStateType::CollectingFish);
    }

    #[test]
    fn test_fishing_ignores_sentinel_catch() {
        let mut farm = SimFarm::new();
        farm.rod.in_use = true;
        farm.rod.fish_caught = true;
        farm.rod.which_fish = NO_FISH;
        let mut session = FishingSession::new();

        let next = state(StateKind::Fishing).next(&mut farm, &ModConfig::default(), &mut session);
        assert_eq!(next.state_type(), GameStateType::Fishing);
    }

    #[test]
    fn test_movement_sets_deferred_cancel() {
        let mut farm = SimFarm::new();
        farm.rod.in_use = true;
        farm.rod.is_fishing = true;
        farm.keys_down.push(Code::KeyA);
        let mut session = FishingSession::new();

        let next = state(StateKind::Fishing).next(&mut farm, &ModConfig::default(), &mut session);
        assert_eq!(next.state_type(), GameStateType::Fishing);
        assert!(session.should_end_fishing);
    }

    #[test]
    fn test_collecting_adds_item_and_recasts() {
        let mut farm = SimFarm::new();
        farm.rod.in_use = true;
        farm.rod.fish_caught = true;
        farm.rod.which_fish = 12;
        farm.rod.item_category = "Object".to_string();
        farm.rod.from_fish_pond = false;
        let mut session = FishingSession::new();

        let collecting = state(StateKind::CollectingFish);
        let next = collecting.next(&mut farm, &ModConfig::default(), &mut session);
        assert_eq!(next.state_type(), GameStateType::WaitingForFishing);
        assert_eq!(farm.collected, vec![Item::new(12, 1, 0)]);
        assert_eq!(farm.sounds, vec!["coin".to_string()]);
        assert_eq!(farm.rod.recast_timer_ms, 200);
        assert_eq!(farm.rod.done_fishing_calls, vec![true]);
        assert_eq!(session.stats.catches, 1);
    }

    #[test]
    fn test_collecting_with_full_inventory_still_cleans_up() {
        let mut farm = SimFarm::new();
        farm.inventory_full = true;
        farm.rod.in_use = true;
        farm.rod.fish_caught = true;
        farm.rod.which_fish = 145;
        let mut session = FishingSession::new();

        let collecting = state(StateKind::CollectingFish);
        let next = collecting.next(&mut farm, &ModConfig::default(), &mut session);
        assert_eq!(next.state_type(), GameStateType::WaitingForFishing);
        assert!(farm.collected.is_empty());
        assert_eq!(farm.sounds, vec!["coin".to_string()]);
        assert_eq!(farm.rod.done_fishing_calls, vec![true]);
        assert!(!farm.rod.fish_caught);
    }

    #[test]
    fn test_collecting_pond_catch_keeps_bait() {
        let mut farm = SimFarm::new();
        farm.rod.in_use = true;
        farm.rod.fish_caught = true;
        farm.rod.which_fish = 145;
        farm.rod.from_fish_pond = true;
        let mut session = FishingSession::new();

        let collecting = state(StateKind::CollectingFish);
        collecting.next(&mut farm, &ModConfig::default(), &mut session);
        assert_eq!(farm.rod.done_fishing_calls, vec![false]);
    }

    #[test]
    fn test_collecting_unknown_category_stays() {
        let mut farm = SimFarm::new();
        farm.rod.in_use = true;
        farm.rod.fish_caught = true;
        farm.rod.which_fish = 12;
        farm.rod.item_category = "Furniture".to_string();
        let mut session = FishingSession::new();

        let collecting = state(StateKind::CollectingFish);
        let next = collecting.next(&mut farm, &ModConfig::default(), &mut session);
        assert_eq!(next.state_type(), GameStateType::CollectingFish);
        assert!(farm.collected.is_empty());
        assert!(farm.rod.fish_caught);
        assert_eq!(session.stats.catches, 0);
    }

    #[test]
    fn test_collecting_without_rod_moves_on() {
        let mut farm = SimFarm::new();
        farm.current_tool_index = 0;
        let mut session = FishingSession::new();

        let collecting = state(StateKind::CollectingFish);
        let next = collecting.next(&mut farm, &ModConfig::default(), &mut session);
        assert_eq!(next.state_type(), GameStateType::WaitingForFishing);
        assert!(farm.collected.is_empty());
    }

    #[test]
    fn test_waiting_outside_hours_goes_idle() {
        for time in [2200, 2400, 200, 150] {
            let mut farm = SimFarm::new();
            farm.time_of_day = time;
            let mut session = FishingSession::new();

            let next = waiting().next(&mut farm, &ModConfig::default(), &mut session);
            assert_eq!(next.state_type(), GameStateType::Idle, "time {}", time);
            assert_eq!(farm.begin_using_calls, 0);
        }
    }

    #[test]
    fn test_waiting_deferred_cancel_goes_idle_and_clears() {
        let mut farm = SimFarm::new();
        let mut session = FishingSession::new();
        session.should_end_fishing = true;

        let next = waiting().next(&mut farm, &ModConfig::default(), &mut session);
        assert_eq!(next.state_type(), GameStateType::Idle);
        assert!(!session.should_end_fishing);
        assert_eq!(farm.begin_using_calls, 0);
    }

    #[test]
    fn test_waiting_recast_is_idempotent() {
        let mut farm = SimFarm::new();
        farm.rod.refuse_casts = true;
        let mut session = FishingSession::new();
        let config = ModConfig::default();

        let mut current = waiting();
        for _ in 0..5 {
            current = current.next(&mut farm, &config, &mut session);
            assert_eq!(current.state_type(), GameStateType::WaitingForFishing);
        }
        assert_eq!(farm.begin_using_calls, 1);
        assert!(current.recast_progress().unwrap().has_initiated_recast);
    }

    #[test]
    fn test_waiting_recast_enters_fishing() {
        let mut farm = SimFarm::new();
        let mut session = FishingSession::new();

        let next = waiting().next(&mut farm, &fast_config(), &mut session);
        assert_eq!(next.state_type(), GameStateType::Fishing);
        assert_eq!(farm.begin_using_calls, 1);
        assert_eq!(farm.rod.casting_power, 1.0);
        assert_eq!(session.stats.recasts, 1);
    }

    #[test]
    fn test_waiting_eats_when_tired() {
        let mut farm = SimFarm::new();
        farm.stamina = 12.0;
        farm.facing = FacingDirection::Left;
        farm.set_food(4, bread(), 3);
        let config = ModConfig {
            food_index: 5,
            ..ModConfig::default()
        };
        let mut session = FishingSession::new();

        let next = waiting().next(&mut farm, &config, &mut session);
        assert_eq!(next.state_type(), GameStateType::WaitingForFishing);
        assert_eq!(farm.eat_calls, 1);
        assert_eq!(farm.current_tool_index, 4);
        assert_eq!(farm.begin_using_calls, 0);

        let progress = next.recast_progress().unwrap();
        assert_eq!(progress.fishing_rod_index, Some(2));
        assert_eq!(progress.facing_direction, Some(FacingDirection::Left));

        // Still eating: no second meal, no re-equip, no fallback to Idle
        let next = next.next(&mut farm, &config, &mut session);
        assert_eq!(next.state_type(), GameStateType::WaitingForFishing);
        assert_eq!(farm.eat_calls, 1);
        assert_eq!(farm.current_tool_index, 4);
        assert_eq!(session.stats.meals, 1);
    }

    #[test]
    fn test_waiting_restores_rod_after_meal() {
        let mut farm = SimFarm::new();
        farm.stamina = 12.0;
        farm.facing = FacingDirection::Up;
        farm.set_food(4, bread(), 3);
        let config = ModConfig {
            food_index: 5,
            ..ModConfig::default()
        };
        let mut session = FishingSession::new();

        let next = waiting().next(&mut farm, &config, &mut session);
        farm.facing = FacingDirection::Down;
        farm.finish_eating();
        assert!(farm.stamina >= 30.0);

        let next = next.next(&mut farm, &config, &mut session);
        assert_eq!(next.state_type(), GameStateType::WaitingForFishing);
        assert_eq!(farm.current_tool_index, 2);
        assert_eq!(farm.facing, FacingDirection::Up);

        let next = next.next(&mut farm, &config, &mut session);
        assert_eq!(next.state_type(), GameStateType::Fishing);
    }

    #[test]
    fn test_waiting_skips_inedible_food() {
        let mut farm = SimFarm::new();
        farm.stamina = 12.0;
        let rock = FoodValue {
            edibility: -300,
            stamina: 0,
            health: 0,
        };
        farm.set_food(0, rock, 1);
        let config = ModConfig {
            food_index: 1,
            ..ModConfig::default()
        };
        let mut session = FishingSession::new();

        let next = waiting().next(&mut farm, &config, &mut session);
        assert_eq!(farm.eat_calls, 0);
        assert_eq!(next.state_type(), GameStateType::Fishing);
    }

    #[test]
    fn test_waiting_food_index_out_of_range() {
        let mut farm = SimFarm::new();
        farm.stamina = 12.0;
        let config = ModConfig {
            food_index: 99,
            ..ModConfig::default()
        };
        let mut session = FishingSession::new();

        waiting().next(&mut farm, &config, &mut session);
        assert_eq!(farm.eat_calls, 0);
    }

    #[test]
    fn test_waiting_tired_without_rod_goes_idle() {
        let mut farm = SimFarm::new();
        farm.stamina = 5.0;
        farm.current_tool_index = 0;
        let mut session = FishingSession::new();

        let next = waiting().next(&mut farm, &ModConfig::default(), &mut session);
        assert_eq!(next.state_type(), GameStateType::Idle);
        assert_eq!(farm.current_tool_index, 2);
    }

    #[test]
    fn test_waiting_reequips_rod_slot() {
        let mut farm = SimFarm::new();
        farm.current_tool_index = 0;
        let mut session = FishingSession::new();
        let config = ModConfig::default();

        let next = waiting().next(&mut farm, &config, &mut session);
        assert_eq!(next.state_type(), GameStateType::WaitingForFishing);
        assert_eq!(farm.current_tool_index, config.rod_slot());
        assert_eq!(farm.begin_using_calls, 0);
    }

    #[test]
    fn test_example_is_inert() {
        let mut farm = SimFarm::new();
        let mut session = FishingSession::new();
        let example = state(StateKind::Example);

        let next = example.clone().next(&mut farm, &ModConfig::default(), &mut session);
        assert_eq!(next, example);
    }

    #[test]
    fn test_next_is_total_over_all_states() {
        let kinds = [
            StateKind::Idle,
            StateKind::Fishing,
            StateKind::CollectingFish,
            StateKind::WaitingForFishing(RecastProgress::default()),
            StateKind::Example,
        ];
        let catch = SimCatch::new(167, 0, "Object", true);

        for kind in kinds {
            for tool in [0usize, 2] {
                for time in [150u32, 900, 2300] {
                    let mut farm = SimFarm::new();
                    farm.current_tool_index = tool;
                    farm.time_of_day = time;
                    farm.rod.in_use = true;
                    farm.rod.fish_caught = true;
                    farm.rod.which_fish = catch.which_fish;

                    let mut session = FishingSession::new();
                    let next = state(kind.clone()).next(&mut farm, &fast_config(), &mut session);
                    assert_eq!(next.kind().state_type(), next.state_type());
                }
            }
        }
    }

    #[test]
    fn test_state_type_display() {
        assert_eq!(GameStateType::WaitingForFishing.to_string(), "WaitingForFishing");
        assert_eq!(GameStateType::Idle.description(), "Waiting for the player to cast");
    }
}
