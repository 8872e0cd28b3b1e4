//! Auto Fish - run the fishing state machine against a simulated farm
//!
//! The real mod runs inside a game host. This binary wires the same adapter
//! to a deterministic simulated farm so the automation can be watched end to
//! end from a terminal:
//!
//!   auto-fish --ticks 5000 --fast-bite
//!   auto-fish --config ./config.json --cancel-at 900:W
//!   RUST_LOG=auto_fish=debug auto-fish --stamina 40 --food 5

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use auto_fish::game::FoodValue;
use auto_fish::keybinds::string_to_code;
use auto_fish::sim::{SimFarm, SimHost};
use auto_fish::utils::path::config_path;
use auto_fish::{get_data_dir, init_logging, AutoFishMod, ModConfig};

/// Drive the auto fishing mod with a simulated game loop.
#[derive(Parser)]
#[command(name = "auto-fish", about = "Auto fishing state machine simulator")]
struct Cli {
    /// Number of game ticks to simulate (60 per second)
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Data directory for logs and the default config location
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Config file, created with defaults when missing [default: <data dir>/config/config.json]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Turn FastBite on regardless of the config file
    #[arg(long)]
    fast_bite: bool,

    /// Starting clock, e.g. 1230
    #[arg(long, default_value_t = 900)]
    time: u32,

    /// Starting stamina
    #[arg(long, default_value_t = 270.0)]
    stamina: f32,

    /// Put a stack of bread into this 1-based slot
    #[arg(long)]
    food: Option<usize>,

    /// Hold a cancel key at the given tick, e.g. `--cancel-at 900:W`
    #[arg(long, value_name = "TICK:KEY")]
    cancel_at: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(get_data_dir);
    init_logging(&data_dir);

    let mut farm = SimFarm::new();
    farm.time_of_day = cli.time;
    farm.stamina = cli.stamina;
    if let Some(slot) = cli.food {
        let index = slot
            .checked_sub(1)
            .context("--food is a 1-based inventory slot")?;
        let bread = FoodValue {
            edibility: 20,
            stamina: 50,
            health: 22,
        };
        farm.set_food(index, bread, 10);
    }

    let mut host = SimHost::new(data_dir.clone(), farm);
    for entry in &cli.cancel_at {
        let (tick, key) = entry
            .split_once(':')
            .with_context(|| format!("expected TICK:KEY, got {:?}", entry))?;
        let tick: u64 = tick
            .parse()
            .with_context(|| format!("invalid tick in {:?}", entry))?;
        let code = string_to_code(key).with_context(|| format!("unknown key {:?}", key))?;
        host.press_key_at(tick, code);
    }

    let config_file = cli.config.unwrap_or_else(|| config_path(&data_dir));
    let mut config = ModConfig::load_or_create(&config_file)
        .with_context(|| format!("failed to load config from {:?}", config_file))?;
    if cli.fast_bite {
        config.fast_bite = true;
    }
    let fisher = AutoFishMod::register(&mut host, config);

    println!("Auto Fish {}", env!("CARGO_PKG_VERSION"));
    println!("================================");

    host.farm.player_starts_cast();
    host.run(cli.ticks);

    println!("{}", fisher.status().to_json());
    println!(
        "Clock {} | stamina {:.0} | {} items collected",
        host.farm.time_of_day,
        host.farm.stamina,
        host.farm.collected.len()
    );

    Ok(())
}
