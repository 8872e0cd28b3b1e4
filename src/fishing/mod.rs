//! Fishing automation: state machine, session data and caught items

pub mod item;
pub mod session;
pub mod state;

pub use item::Item;
pub use session::FishingSession;
pub use state::{GameState, GameStateType, RecastProgress, StateKind};
