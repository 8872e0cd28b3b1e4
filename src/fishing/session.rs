//! Session-scoped data shared across transitions

use crate::utils::bot_state::FishingStats;

/// Data that outlives a single state value. Handed to every transition.
#[derive(Debug, Clone, Default)]
pub struct FishingSession {
    /// Set by a movement key while fishing, acted on once the catch is
    /// collected. Cleared whenever the machine re-enters Idle.
    pub should_end_fishing: bool,
    pub stats: FishingStats,
}

impl FishingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_end_fishing(&mut self) {
        if !self.should_end_fishing {
            tracing::debug!("[SESSION] Movement detected, fishing ends after this catch");
        }
        self.should_end_fishing = true;
    }
}
