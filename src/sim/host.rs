//! A minimal mod host that ticks a simulated farm

use std::path::PathBuf;

use global_hotkey::hotkey::Code;

use super::farm::SimFarm;
use crate::mod_entry::ModHelper;

type TickHandler = Box<dyn FnMut(&mut SimFarm)>;

/// Owns the farm and the registered tick handlers, like a game loop would
pub struct SimHost {
    data_dir: PathBuf,
    pub farm: SimFarm,
    handlers: Vec<TickHandler>,
    /// Keys held during a given tick
    key_presses: Vec<(u64, Code)>,
}

impl SimHost {
    pub fn new(data_dir: PathBuf, farm: SimFarm) -> Self {
        Self {
            data_dir,
            farm,
            handlers: Vec::new(),
            key_presses: Vec::new(),
        }
    }

    /// Hold `key` during tick number `tick` (1-based, as counted by the farm)
    pub fn press_key_at(&mut self, tick: u64, key: Code) {
        self.key_presses.push((tick, key));
    }

    /// Advance the world and fire every update-ticked handler once
    pub fn tick(&mut self) {
        self.farm.advance();

        let now = self.farm.ticks;
        self.farm.keys_down = self
            .key_presses
            .iter()
            .filter(|(tick, _)| *tick == now)
            .map(|(_, key)| *key)
            .collect();

        for handler in self.handlers.iter_mut() {
            handler(&mut self.farm);
        }
    }

    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();
        }
    }
}

impl ModHelper for SimHost {
    type Game = SimFarm;

    fn data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    fn register_update_ticked(&mut self, handler: Box<dyn FnMut(&mut SimFarm)>) {
        self.handlers.push(handler);
    }
}
