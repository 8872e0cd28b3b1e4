//! Host adapter: owns the current state and feeds it one tick at a time

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::{ConfigError, ModConfig};
use crate::fishing::{FishingSession, GameState, GameStateType};
use crate::game::GameContext;
use crate::utils::bot_state::StatusSnapshot;
use crate::utils::path::config_path;

/// What a mod host offers during startup
pub trait ModHelper {
    type Game: GameContext;

    /// Folder holding `config/config.json`
    fn data_dir(&self) -> PathBuf;

    /// Call `handler` once per game tick
    fn register_update_ticked(&mut self, handler: Box<dyn FnMut(&mut Self::Game)>);
}

/// The auto-fishing mod
pub struct AutoFishMod {
    config: ModConfig,
    current_state: Mutex<Option<GameState>>,
    session: Mutex<FishingSession>,
}

impl AutoFishMod {
    pub fn new(config: ModConfig) -> Self {
        Self {
            config,
            current_state: Mutex::new(None),
            session: Mutex::new(FishingSession::new()),
        }
    }

    /// Read the config and subscribe to the host's tick
    pub fn entry<H: ModHelper>(helper: &mut H) -> Result<Arc<Self>, ConfigError> {
        let path = config_path(&helper.data_dir());
        let config = ModConfig::load_or_create(&path)?;
        Ok(Self::register(helper, config))
    }

    /// Subscribe to the host's tick with an already loaded config
    pub fn register<H: ModHelper>(helper: &mut H, config: ModConfig) -> Arc<Self> {
        tracing::info!(
            "[INIT] Auto fishing loaded (FastBite={}, FoodIndex={})",
            config.fast_bite,
            config.food_index
        );

        let this = Arc::new(Self::new(config));
        let handler = Arc::clone(&this);
        helper.register_update_ticked(Box::new(move |game: &mut H::Game| {
            handler.on_update_ticked(game)
        }));

        this
    }

    /// Per-tick callback
    pub fn on_update_ticked<C: GameContext>(&self, game: &mut C) {
        if !game.is_world_ready() {
            return;
        }

        let mut slot = self.current_state.lock();
        let mut session = self.session.lock();

        let state = match slot.take() {
            Some(state) => state,
            None => GameState::default_state(&mut session),
        };
        *slot = Some(state.next(game, &self.config, &mut session));
    }

    pub fn config(&self) -> &ModConfig {
        &self.config
    }

    /// Tag of the current state, `None` before the first ready tick
    pub fn current_state_type(&self) -> Option<GameStateType> {
        self.current_state.lock().as_ref().map(GameState::state_type)
    }

    pub fn status(&self) -> StatusSnapshot {
        let state = self.current_state_type();
        let session = self.session.lock();
        StatusSnapshot {
            state,
            activity: state.map_or("Waiting for the world to load", |s| s.description()),
            should_end_fishing: session.should_end_fishing,
            stats: session.stats.clone(),
        }
    }
}
