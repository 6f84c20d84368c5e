//! Ghost Flap entry point
//!
//! Headless runner: drives the game with a simple autopilot and logs each
//! frame summary instead of drawing it.
//!
//! Usage: `ghost-flap [config.json] [seed] [ticks]`

use std::process::ExitCode;

use ghost_flap::renderer::{Frame, RenderSink, SpriteKind, present};
use ghost_flap::sim::GameState;
use ghost_flap::{Game, GameConfig};

/// Logs a one-line summary per frame at trace level
struct LogSink {
    frames: u64,
}

impl RenderSink for LogSink {
    fn render(&mut self, frame: &Frame) {
        self.frames += 1;
        if log::log_enabled!(log::Level::Trace) {
            let bird = frame.sprites(SpriteKind::Bird).next();
            let ghosts = frame.sprites(SpriteKind::Ghost).count();
            log::trace!(
                "frame {}: bird {:?}, {} ghosts, {} pipe rects",
                self.frames,
                bird,
                ghosts,
                frame.rect_count()
            );
        }
    }
}

/// Flap when the bird sinks below the centre of the next gap
fn autopilot_wants_flap(state: &GameState) -> bool {
    if !state.game_started() || state.game_over() {
        return true;
    }
    let bird = &state.bird;
    let target = state
        .pipes
        .iter()
        .find(|p| p.right() + bird.radius >= bird.pos.x)
        .map_or(state.bird.pos.y, |p| p.gap_y);
    bird.pos.y > target + 20.0 && bird.vel.y > 0.0
}

fn load_config(path: Option<&String>) -> Result<GameConfig, String> {
    let Some(path) = path else {
        log::warn!("No config file given, using defaults");
        return Ok(GameConfig::default());
    };
    let json = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    let config = GameConfig::from_json(&json).map_err(|e| format!("{path}: {e}"))?;
    log::info!("Loaded config from {}", path);
    Ok(config)
}

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first())?;
    let seed = match args.get(1) {
        Some(s) => s.parse::<u64>().map_err(|e| format!("bad seed {s:?}: {e}"))?,
        None => 0x5EED,
    };
    let ticks = match args.get(2) {
        Some(s) => s.parse::<u64>().map_err(|e| format!("bad tick count {s:?}: {e}"))?,
        None => 5_000,
    };

    let mut game = Game::new(config, seed).map_err(|e| e.to_string())?;
    let mut sink = LogSink { frames: 0 };
    let interval = game.config().tick_interval_ms as f32;

    log::info!("Ghost Flap (headless) running {} ticks", ticks);
    for _ in 0..ticks {
        if autopilot_wants_flap(game.state()) {
            game.key_down("Space");
        }
        game.update(interval);
        present(&mut sink, game.state(), game.config());
    }

    let history = game.history();
    log::info!(
        "{} runs finished, best score {:?}",
        history.total_runs(),
        history.best_score()
    );
    for entry in &history.entries {
        log::info!("  run {:>3}: score {:>4}, {} ticks", entry.run, entry.score, entry.ticks);
    }

    let json = serde_json::to_string_pretty(game.state()).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
