//! Session statistics and the status snapshot shown to overlays

use crate::fishing::GameStateType;

/// Counters accumulated over one fishing session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FishingStats {
    pub catches: u32,
    pub quest_items: u32,
    pub meals: u32,
    pub recasts: u32,
}

impl FishingStats {
    pub fn record_catch(&mut self, quest_item: bool) {
        self.catches += 1;
        if quest_item {
            self.quest_items += 1;
        }
    }

    pub fn record_meal(&mut self) {
        self.meals += 1;
    }

    pub fn record_recast(&mut self) {
        self.recasts += 1;
    }
}

/// Point-in-time view of the adapter
#[derive(Debug, Clone)]
pub struct StatusSnapshot {
    pub state: Option<GameStateType>,
    pub activity: &'static str,
    pub should_end_fishing: bool,
    pub stats: FishingStats,
}

impl StatusSnapshot {
    /// Get status as JSON string for UI
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "state": self.state.map(|s| s.to_string()),
            "activity": self.activity,
            "should_end_fishing": self.should_end_fishing,
            "stats": {
                "catches": self.stats.catches,
                "quest_items": self.stats.quest_items,
                "meals": self.stats.meals,
                "recasts": self.stats.recasts,
            }
        })
        .to_string()
    }
}
