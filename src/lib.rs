//! Ghost Flap - a Flappy-Bird style arcade game with ghost replays
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, ghosts)
//! - `config`: Validated, JSON-overridable game constants
//! - `game`: Session driver (fixed timestep, input buffering, seeded RNG)
//! - `history`: In-memory leaderboard of finished runs
//! - `renderer`: State to draw-command contract

pub mod config;
pub mod game;
pub mod history;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::Game;
pub use history::RunHistory;

pub use glam::Vec2;
