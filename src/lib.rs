//! Auto Fish - tick-driven fishing automation for farming-sim mod hosts
//!
//! The host calls the adapter once per game tick. The adapter keeps a single
//! current [`GameState`] and advances it: cast, wait for a bite, hook the
//! fish, collect the catch, eat when tired, recast.

pub mod config;
pub mod fishing;
pub mod game;
pub mod mod_entry;
pub mod sim;
pub mod utils;

// Re-exports for convenience
pub use config::{CancelKeys, ConfigError, ModConfig};
pub use fishing::{FishingSession, GameState, GameStateType, Item};
pub use game::{FacingDirection, FishingRod, FoodValue, GameContext};
pub use mod_entry::{AutoFishMod, ModHelper};
pub use utils::{bot_state, keybinds, logging::init_logging, path::get_data_dir};
