//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected gap randomness only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod ghost;
pub mod input;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, HitCause, bird_pipe_collision, resolve_collisions};
pub use ghost::{advance_ghosts, promote_run, record_position};
pub use input::{InputLatch, Key, TickInput};
pub use physics::{BirdStep, step_bird};
pub use spawner::{GapSource, SequenceSource, advance_pipes, gap_center};
pub use state::{Bird, GamePhase, GameState, Ghost, Pipe};
pub use tick::tick;
