//! Game state and entity types
//!
//! `GameState` is the single root aggregate handed to the renderer each tick.
//! Entities are plain data; the tick function builds the next state from the
//! previous one and never mutates a state the caller still holds.

use std::sync::Arc;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Phase of the whole game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first flap
    NotStarted,
    /// Active run
    Running,
    /// Out of lives, waiting for restart
    Over,
}

/// The player's bird
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Bird {
    /// Bird at rest, vertically centred at the configured x
    pub fn new(id: u32, config: &GameConfig) -> Self {
        Self {
            id,
            pos: Vec2::new(config.bird_x, config.canvas_height / 2.0),
            vel: Vec2::ZERO,
            radius: config.bird_radius,
        }
    }
}

/// A pipe pair with a vertical gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    pub id: u32,
    /// Left edge
    pub x: f32,
    /// Gap centre
    pub gap_y: f32,
    pub gap_height: f32,
    pub width: f32,
    /// Bird cleared this pipe and it was scored
    pub passed: bool,
    /// Bird struck this pipe; it can neither score nor cost another life
    #[serde(default)]
    pub hit: bool,
}

impl Pipe {
    pub fn new(id: u32, x: f32, gap_y: f32, config: &GameConfig) -> Self {
        Self {
            id,
            x,
            gap_y,
            gap_height: config.pipe_gap_height,
            width: config.pipe_width,
            passed: false,
            hit: false,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.gap_y - self.gap_height / 2.0
    }

    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_y + self.gap_height / 2.0
    }
}

/// Replay of a finished run's trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ghost {
    pub id: u32,
    /// One bird position per tick of the recorded run; never modified
    pub path: Arc<[Vec2]>,
    /// Playback cursor, saturates at `path.len()`
    pub current_index: usize,
}

impl Ghost {
    pub fn new(id: u32, path: Vec<Vec2>) -> Self {
        Self {
            id,
            path: path.into(),
            current_index: 0,
        }
    }

    /// Position to draw this tick, `None` once playback has finished
    pub fn position(&self) -> Option<Vec2> {
        self.path.get(self.current_index).copied()
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.path.len()
    }

    /// Step playback forward one tick
    pub fn advance(&mut self) {
        if !self.is_finished() {
            self.current_index += 1;
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Simulated ticks since the state was created
    pub time_ticks: u64,
    pub bird: Bird,
    /// Active pipes, oldest first (x ascending)
    pub pipes: Vec<Pipe>,
    pub lives: u8,
    pub score: u64,
    pub phase: GamePhase,
    /// Retained ghosts, oldest first
    pub ghosts: Vec<Ghost>,
    /// Bird positions of the live run, one per running tick
    pub current_run_history: Vec<Vec2>,
    /// Remaining ticks of collision immunity
    pub grace_ticks: u32,
    /// Number of runs started (1-based once running)
    pub run: u32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh game waiting for the first flap
    pub fn new(config: &GameConfig) -> Self {
        let mut state = Self {
            time_ticks: 0,
            bird: Bird::new(0, config),
            pipes: Vec::new(),
            lives: config.initial_lives,
            score: 0,
            phase: GamePhase::NotStarted,
            ghosts: Vec::new(),
            current_run_history: Vec::new(),
            grace_ticks: 0,
            run: 0,
            next_id: 1,
        };
        state.bird.id = state.next_entity_id();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn game_started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// Enter `Running` with a fresh bird, no pipes, full lives and zero score.
    /// Ghosts are kept.
    pub fn begin_run(&mut self, config: &GameConfig) {
        let bird_id = self.bird.id;
        self.bird = Bird::new(bird_id, config);
        self.pipes.clear();
        self.lives = config.initial_lives;
        self.score = 0;
        self.current_run_history.clear();
        self.grace_ticks = 0;
        self.run += 1;
        self.phase = GamePhase::Running;
    }

    /// Ensure pipes and ghosts keep creation order
    pub fn normalize_order(&mut self) {
        self.pipes.sort_by_key(|p| p.id);
        self.ghosts.sort_by_key(|g| g.id);
    }
}
