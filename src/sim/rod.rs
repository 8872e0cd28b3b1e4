//! Simulated fishing rod

use crate::game::{FishingRod, NO_FISH};

/// Ticks the power meter runs before the cast is released
pub const CAST_TIMING_TICKS: u32 = 20;
/// Ticks the bobber spends in the air after release
pub const BOBBER_AIR_TICKS: u32 = 30;
/// Ticks a nibble lasts before the fish swims off
pub const NIBBLE_TICKS: u32 = 45;
/// Ticks between hooking a fish and landing it
pub const REEL_TICKS: u32 = 90;
/// Wait before a bite, in milliseconds
pub const DEFAULT_BITE_WAIT_MS: f32 = 1500.0;
/// Milliseconds per tick at 60 ticks per second
pub const TICK_MS: f32 = 1000.0 / 60.0;

/// A scripted catch
#[derive(Debug, Clone, PartialEq)]
pub struct SimCatch {
    pub which_fish: i32,
    pub quality: i32,
    pub category: String,
    pub junk: bool,
}

impl SimCatch {
    pub fn new(which_fish: i32, quality: i32, category: &str, junk: bool) -> Self {
        Self {
            which_fish,
            quality,
            category: category.to_string(),
            junk,
        }
    }
}

/// Rod whose flags can be set directly, or driven tick by tick with `advance`
#[derive(Debug, Clone)]
pub struct SimRod {
    pub in_use: bool,
    pub is_timing_cast: bool,
    pub is_casting: bool,
    pub casted_but_bobber_still_in_air: bool,
    pub is_fishing: bool,
    pub is_nibbling: bool,
    pub is_reeling: bool,
    pub hit: bool,
    pub fish_caught: bool,
    pub which_fish: i32,
    pub fish_quality: i32,
    pub item_category: String,
    pub from_fish_pond: bool,
    pub last_catch_was_junk: bool,
    pub time_until_fishing_bite: f32,
    pub casting_power: f32,
    pub recast_timer_ms: i32,
    /// `consume_bait` argument of every `done_fishing` call
    pub done_fishing_calls: Vec<bool>,
    /// Ignore `begin_using`, as if the game refused the cast
    pub refuse_casts: bool,
    pub catches: Vec<SimCatch>,
    next_catch: usize,
    phase_ticks: u32,
}

impl Default for SimRod {
    fn default() -> Self {
        Self {
            in_use: false,
            is_timing_cast: false,
            is_casting: false,
            casted_but_bobber_still_in_air: false,
            is_fishing: false,
            is_nibbling: false,
            is_reeling: false,
            hit: false,
            fish_caught: false,
            which_fish: NO_FISH,
            fish_quality: 0,
            item_category: "Object".to_string(),
            from_fish_pond: false,
            last_catch_was_junk: false,
            time_until_fishing_bite: 0.0,
            casting_power: 0.0,
            recast_timer_ms: 0,
            done_fishing_calls: Vec::new(),
            refuse_casts: false,
            catches: default_catches(),
            next_catch: 0,
            phase_ticks: 0,
        }
    }
}

/// Sunfish, bream, Joja cola and Caroline's necklace, in rotation
fn default_catches() -> Vec<SimCatch> {
    vec![
        SimCatch::new(145, 0, "Object", false),
        SimCatch::new(132, 1, "Object", false),
        SimCatch::new(167, 0, "Object", true),
        SimCatch::new(145, 2, "Object", false),
        SimCatch::new(191, 0, "Object", false),
    ]
}

impl SimRod {
    /// Press the tool button: start timing the cast
    pub fn begin_using(&mut self) {
        if self.refuse_casts || self.in_use {
            return;
        }
        self.in_use = true;
        self.is_timing_cast = true;
        self.casting_power = 0.0;
        self.phase_ticks = 0;
    }

    /// Click while the bobber is in the water
    pub fn click(&mut self) {
        if self.is_nibbling && !self.hit {
            self.hit = true;
            self.phase_ticks = 0;
        }
    }

    /// Step the rod one tick forward
    pub fn advance(&mut self) {
        if self.recast_timer_ms > 0 {
            self.recast_timer_ms = (self.recast_timer_ms - TICK_MS as i32).max(0);
        }
        if !self.in_use {
            return;
        }
        self.phase_ticks += 1;

        if self.is_timing_cast {
            if self.phase_ticks >= CAST_TIMING_TICKS {
                self.is_timing_cast = false;
                self.is_casting = true;
                self.phase_ticks = 0;
            }
        } else if self.is_casting {
            self.is_casting = false;
            self.casted_but_bobber_still_in_air = true;
            self.phase_ticks = 0;
        } else if self.casted_but_bobber_still_in_air {
            if self.phase_ticks >= BOBBER_AIR_TICKS {
                self.casted_but_bobber_still_in_air = false;
                self.is_fishing = true;
                self.time_until_fishing_bite = DEFAULT_BITE_WAIT_MS;
                self.phase_ticks = 0;
            }
        } else if self.is_fishing {
            self.advance_fishing();
        }
    }

    fn advance_fishing(&mut self) {
        if self.hit {
            self.is_nibbling = false;
            self.is_reeling = true;
            if self.phase_ticks >= REEL_TICKS {
                self.land_catch();
            }
        } else if self.is_nibbling {
            if self.phase_ticks >= NIBBLE_TICKS {
                self.is_nibbling = false;
                self.time_until_fishing_bite = DEFAULT_BITE_WAIT_MS;
                self.phase_ticks = 0;
            }
        } else {
            self.time_until_fishing_bite -= TICK_MS;
            if self.time_until_fishing_bite <= 0.0 {
                self.time_until_fishing_bite = 0.0;
                self.is_nibbling = true;
                self.phase_ticks = 0;
            }
        }
    }

    fn land_catch(&mut self) {
        self.is_fishing = false;
        self.is_reeling = false;
        self.hit = false;
        self.fish_caught = true;

        if let Some(catch) = self.catches.get(self.next_catch % self.catches.len().max(1)) {
            self.which_fish = catch.which_fish;
            self.fish_quality = catch.quality;
            self.item_category = catch.category.clone();
            self.last_catch_was_junk = catch.junk;
        }
        self.next_catch += 1;
    }

    fn reset(&mut self) {
        self.in_use = false;
        self.is_timing_cast = false;
        self.is_casting = false;
        self.casted_but_bobber_still_in_air = false;
        self.is_fishing = false;
        self.is_nibbling = false;
        self.is_reeling = false;
        self.hit = false;
        self.fish_caught = false;
        self.which_fish = NO_FISH;
        self.phase_ticks = 0;
    }
}

impl FishingRod for SimRod {
    fn in_use(&self) -> bool {
        self.in_use
    }
    fn is_timing_cast(&self) -> bool {
        self.is_timing_cast
    }
    fn is_casting(&self) -> bool {
        self.is_casting
    }
    fn casted_but_bobber_still_in_air(&self) -> bool {
        self.casted_but_bobber_still_in_air
    }
    fn is_fishing(&self) -> bool {
        self.is_fishing
    }
    fn is_nibbling(&self) -> bool {
        self.is_nibbling
    }
    fn is_reeling(&self) -> bool {
        self.is_reeling
    }
    fn hit(&self) -> bool {
        self.hit
    }
    fn fish_caught(&self) -> bool {
        self.fish_caught
    }
    fn which_fish(&self) -> i32 {
        self.which_fish
    }
    fn fish_quality(&self) -> i32 {
        self.fish_quality
    }
    fn item_category(&self) -> &str {
        &self.item_category
    }
    fn from_fish_pond(&self) -> bool {
        self.from_fish_pond
    }
    fn last_catch_was_junk(&self) -> bool {
        self.last_catch_was_junk
    }
    fn time_until_fishing_bite(&self) -> f32 {
        self.time_until_fishing_bite
    }

    fn set_casting_power(&mut self, power: f32) {
        self.casting_power = power;
    }
    fn set_time_until_fishing_bite(&mut self, time: f32) {
        self.time_until_fishing_bite = time;
    }
    fn set_recast_timer_ms(&mut self, ms: i32) {
        self.recast_timer_ms = ms;
    }

    fn done_fishing(&mut self, consume_bait: bool) {
        self.done_fishing_calls.push(consume_bait);
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_reaches_water() {
        let mut rod = SimRod::default();
        rod.begin_using();
        assert!(rod.is_timing_cast);

        for _ in 0..CAST_TIMING_TICKS {
            rod.advance();
        }
        assert!(rod.is_casting);
        rod.advance();
        assert!(rod.casted_but_bobber_still_in_air);

        for _ in 0..BOBBER_AIR_TICKS {
            rod.advance();
        }
        assert!(rod.is_fishing);
        assert_eq!(rod.time_until_fishing_bite, DEFAULT_BITE_WAIT_MS);
    }

    #[test]
    fn test_hooked_fish_is_landed() {
        let mut rod = SimRod {
            in_use: true,
            is_fishing: true,
            is_nibbling: true,
            ..SimRod::default()
        };
        rod.click();
        for _ in 0..=REEL_TICKS {
            rod.advance();
        }
        assert!(rod.fish_caught);
        assert_eq!(rod.which_fish, 145);
        assert!(rod.in_use);
    }

    #[test]
    fn test_missed_nibble_rebaits() {
        let mut rod = SimRod {
            in_use: true,
            is_fishing: true,
            is_nibbling: true,
            ..SimRod::default()
        };
        for _ in 0..NIBBLE_TICKS {
            rod.advance();
        }
        assert!(!rod.is_nibbling);
        assert!(rod.is_fishing);
        assert!(rod.time_until_fishing_bite > 0.0);
    }

    #[test]
    fn test_refused_cast() {
        let mut rod = SimRod {
            refuse_casts: true,
            ..SimRod::default()
        };
        rod.begin_using();
        assert!(!rod.in_use);
    }
}
