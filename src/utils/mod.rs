//! Shared helpers: key names, paths, logging, statistics

pub mod bot_state;
pub mod keybinds;
pub mod logging;
pub mod path;
