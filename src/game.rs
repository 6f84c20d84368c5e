//! Game session driver
//!
//! Owns everything outside the pure tick: the random source, buffered input,
//! the fixed-timestep accumulator and the run leaderboard.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::{ConfigError, GameConfig};
use crate::history::RunHistory;
use crate::sim::{GameState, InputLatch, Key, tick};

/// Game instance holding all session state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    state: GameState,
    rng: Pcg32,
    input: InputLatch,
    accumulator_ms: f32,
    history: RunHistory,
}

impl Game {
    /// Validate `config` and set up a game waiting for its first flap
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!("Game initialized with seed: {}", seed);
        Ok(Self {
            state: GameState::new(&config),
            rng: Pcg32::seed_from_u64(seed),
            input: InputLatch::default(),
            accumulator_ms: 0.0,
            history: RunHistory::new(),
            config,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    /// Buffer a key press; unknown codes are ignored
    pub fn key_down(&mut self, code: &str) {
        match Key::from_code(code) {
            Some(key) => self.input.press(key),
            None => log::trace!("Ignoring key {:?}", code),
        }
    }

    /// Feed wall-clock time; runs as many ticks as have elapsed, up to
    /// `max_substeps`. Returns the number of ticks run.
    pub fn update(&mut self, elapsed_ms: f32) -> u32 {
        let interval = self.config.tick_interval_ms as f32;
        // Cap frame time; NaN and negatives count as zero
        let max_frame_ms = interval * self.config.max_substeps as f32;
        self.accumulator_ms += elapsed_ms.max(0.0).min(max_frame_ms);

        let mut substeps = 0;
        while self.accumulator_ms >= interval && substeps < self.config.max_substeps {
            self.step();
            self.accumulator_ms -= interval;
            substeps += 1;
        }

        // Drop backlog instead of spiralling
        if substeps == self.config.max_substeps && self.accumulator_ms >= interval {
            log::debug!("Dropping {:.0} ms of backlog", self.accumulator_ms);
            self.accumulator_ms %= interval;
        }

        substeps
    }

    /// Run exactly one tick with whatever input was buffered
    pub fn step(&mut self) {
        let input = self.input.take();
        let next = tick(&self.state, &input, &self.config, &mut self.rng);

        if next.game_over() && !self.state.game_over() {
            // Ghost path holds every tick the run survived
            let ticks = next.ghosts.last().map_or(0, |g| g.path.len());
            if let Some(rank) = self.history.add_run(next.run, next.score, ticks) {
                log::info!("Run {} placed #{} with score {}", next.run, rank, next.score);
            }
        }

        self.state = next;
    }
}
