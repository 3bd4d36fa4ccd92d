//! Nova Invaders entry point
//!
//! Wires the self-playing demo together: config from disk, seed from the
//! environment or the clock, autopilot input, console output.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use std::{env, process};

use nova_invaders::GameConfig;
use nova_invaders::platform::autopilot::Autopilot;
use nova_invaders::platform::console::ConsolePresenter;
use nova_invaders::platform::run;
use nova_invaders::sim::GameState;

const CONFIG_ENV: &str = "NOVA_CONFIG";
const SEED_ENV: &str = "NOVA_SEED";
const DEFAULT_CONFIG_PATH: &str = "nova-invaders.json";

fn main() {
    env_logger::init();
    log::info!("Nova Invaders starting...");

    let config_path =
        env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = match GameConfig::load(Path::new(&config_path)) {
        Ok(config) => config,
        Err(err) => {
            log::error!("config error in {}: {}", config_path, err);
            process::exit(1);
        }
    };

    let seed = match env::var(SEED_ENV).ok().and_then(|s| s.parse().ok()) {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default(),
    };
    log::info!("Game initialized with seed: {}", seed);

    let mut state = GameState::new(config, seed);
    let mut input = Autopilot;
    let mut presenter = ConsolePresenter::new(state.config.tick_hz as u64);

    let phase = run(&mut state, &mut input, &mut presenter);
    log::info!(
        "session over: {:?} with {} enemies defeated",
        phase,
        state.kills
    );
}
