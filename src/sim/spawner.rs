//! Pipe scrolling, culling and spawning
//!
//! The random gap position is the only nondeterministic input of the
//! simulation; it is drawn through [`GapSource`] so replays and tests can
//! supply their own stream.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameState, Pipe};
use crate::config::GameConfig;

/// Source of uniform samples in `[0, 1)` for gap placement
pub trait GapSource {
    fn next_unit(&mut self) -> f32;
}

impl GapSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted
#[derive(Debug, Clone)]
pub struct SequenceSource {
    samples: Vec<f32>,
    cursor: usize,
}

impl SequenceSource {
    /// Samples are clamped into `[0, 1)`; an empty list always yields 0.5
    pub fn new(samples: Vec<f32>) -> Self {
        Self { samples, cursor: 0 }
    }
}

impl GapSource for SequenceSource {
    fn next_unit(&mut self) -> f32 {
        if self.samples.is_empty() {
            return 0.5;
        }
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        sample.clamp(0.0, 1.0 - f32::EPSILON)
    }
}

/// Gap centre for a unit sample, inside the configured margins
pub fn gap_center(unit: f32, config: &GameConfig) -> f32 {
    let (low, high) = config.gap_range();
    low + unit * (high - low)
}

/// Scroll pipes left, drop those fully off-screen, and append a new pipe at
/// the right edge once the newest one has moved `pipe_spacing` in.
pub fn advance_pipes(state: &mut GameState, config: &GameConfig, rng: &mut impl GapSource) {
    for pipe in &mut state.pipes {
        pipe.x -= config.pipe_speed;
    }
    state.pipes.retain(|p| p.right() >= 0.0);

    let spawn_due = state
        .pipes
        .last()
        .is_none_or(|newest| newest.x <= config.canvas_width - config.pipe_spacing);

    if spawn_due {
        let id = state.next_entity_id();
        let gap_y = gap_center(rng.next_unit(), config);
        log::debug!("Spawned pipe {} with gap at {:.1}", id, gap_y);
        state
            .pipes
            .push(Pipe::new(id, config.canvas_width, gap_y, config));
    }
}
