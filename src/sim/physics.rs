//! Bird physics
//!
//! Explicit Euler at one step per tick. The bird never moves horizontally;
//! the world scrolls past it.

use super::state::Bird;
use crate::config::GameConfig;

/// Result of advancing the bird one tick
#[derive(Debug, Clone, PartialEq)]
pub struct BirdStep {
    pub bird: Bird,
    /// Bird was clamped at the ground this tick
    pub hit_ground: bool,
}

/// Advance the bird by one tick.
///
/// A flap replaces the vertical velocity with the flap impulse; otherwise
/// gravity is added. Position is clamped to `[0, canvas_height]`: the
/// ceiling floors upward velocity to zero, the ground reports a hit.
pub fn step_bird(bird: &Bird, flap: bool, config: &GameConfig) -> BirdStep {
    let mut next = bird.clone();

    if flap {
        next.vel.y = config.flap_strength;
    } else {
        next.vel.y += config.gravity;
    }
    next.pos += next.vel;

    let mut hit_ground = false;
    if next.pos.y < 0.0 {
        next.pos.y = 0.0;
        next.vel.y = next.vel.y.max(0.0);
    } else if next.pos.y >= config.canvas_height {
        // Touching the ground counts as a hit, not only passing through it
        next.pos.y = config.canvas_height;
        next.vel.y = 0.0;
        hit_ground = true;
    }

    BirdStep {
        bird: next,
        hit_ground,
    }
}
