//! Game configuration
//!
//! Every tunable the simulation reads lives here. Defaults reproduce the
//! classic 600x400 board; any field can be overridden from JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Invalid configuration, reported at startup
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Viewport width or height is not positive
    ViewportSize { width: f32, height: f32 },
    /// Bird radius or sprite size is not positive
    BirdSize,
    /// Bird start x lies outside the viewport
    BirdOutsideViewport { x: f32, width: f32 },
    /// Gravity pulls upward
    NegativeGravity { gravity: f32 },
    /// Flap impulse must point up (negative y)
    FlapNotUpward { flap_strength: f32 },
    /// Pipe width, speed or spacing is not positive
    PipeGeometry { field: &'static str, value: f32 },
    /// Gap plus margins does not fit inside the viewport
    GapTooLarge { gap_height: f32, margin: f32, canvas_height: f32 },
    /// Negative gap margin
    NegativeMargin { margin: f32 },
    /// A run must start with at least one life
    NoLives,
    /// Tick interval of zero
    ZeroTickInterval,
    /// Need at least one substep per update
    ZeroSubsteps,
    /// Ghost retention of zero
    ZeroGhostRetention,
    /// JSON could not be parsed
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ViewportSize { width, height } => {
                write!(f, "viewport must be positive, got {width}x{height}")
            }
            Self::BirdSize => write!(f, "bird radius and sprite size must be positive"),
            Self::BirdOutsideViewport { x, width } => {
                write!(f, "bird x={x} is outside the viewport (0..{width})")
            }
            Self::NegativeGravity { gravity } => {
                write!(f, "gravity must not be negative, got {gravity}")
            }
            Self::FlapNotUpward { flap_strength } => {
                write!(f, "flap strength must be negative (upward), got {flap_strength}")
            }
            Self::PipeGeometry { field, value } => {
                write!(f, "pipe {field} must be positive, got {value}")
            }
            Self::GapTooLarge {
                gap_height,
                margin,
                canvas_height,
            } => write!(
                f,
                "gap height {gap_height} with margin {margin} does not fit in canvas height {canvas_height}"
            ),
            Self::NegativeMargin { margin } => {
                write!(f, "gap margin must not be negative, got {margin}")
            }
            Self::NoLives => write!(f, "initial lives must be at least 1"),
            Self::ZeroTickInterval => write!(f, "tick interval must be at least 1 ms"),
            Self::ZeroSubsteps => write!(f, "max substeps must be at least 1"),
            Self::ZeroGhostRetention => write!(f, "ghost retention must be at least 1"),
            Self::Parse(msg) => write!(f, "invalid config json: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Viewport ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Bird ===
    /// Sprite width (render only)
    pub bird_width: f32,
    /// Sprite height (render only)
    pub bird_height: f32,
    /// Fixed horizontal position of the bird
    pub bird_x: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Vertical velocity set by a flap (negative = up)
    pub flap_strength: f32,
    /// Collision radius
    pub bird_radius: f32,

    // === Pipes ===
    pub pipe_width: f32,
    /// Leftward scroll per tick
    pub pipe_speed: f32,
    pub pipe_gap_height: f32,
    /// Horizontal distance between consecutive pipes
    pub pipe_spacing: f32,
    /// Minimum distance between the gap and the top/bottom edge
    pub gap_margin: f32,

    // === Timing ===
    pub tick_interval_ms: u32,
    /// Max ticks run per `Game::update` call
    pub max_substeps: u32,

    // === Rules ===
    pub initial_lives: u8,
    /// Ticks of collision immunity after losing a life
    pub hit_grace_ticks: u32,
    /// Number of ghosts kept; oldest evicted first
    pub max_ghosts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 600.0,
            canvas_height: 400.0,

            bird_width: 42.0,
            bird_height: 30.0,
            bird_x: 180.0,
            gravity: 0.5,
            flap_strength: -8.0,
            bird_radius: 15.0,

            pipe_width: 50.0,
            pipe_speed: 2.0,
            pipe_gap_height: 100.0,
            pipe_spacing: 200.0,
            gap_margin: 20.0,

            tick_interval_ms: 16,
            max_substeps: 8,

            initial_lives: 3,
            hit_grace_ticks: 45,
            max_ghosts: 1,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config over the defaults and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field; the first problem found is returned
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(ConfigError::ViewportSize {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if !(self.bird_radius > 0.0 && self.bird_width > 0.0 && self.bird_height > 0.0) {
            return Err(ConfigError::BirdSize);
        }
        if !(self.bird_x >= 0.0 && self.bird_x <= self.canvas_width) {
            return Err(ConfigError::BirdOutsideViewport {
                x: self.bird_x,
                width: self.canvas_width,
            });
        }
        if !(self.gravity >= 0.0) {
            return Err(ConfigError::NegativeGravity {
                gravity: self.gravity,
            });
        }
        if !(self.flap_strength < 0.0) {
            return Err(ConfigError::FlapNotUpward {
                flap_strength: self.flap_strength,
            });
        }
        for (field, value) in [
            ("width", self.pipe_width),
            ("speed", self.pipe_speed),
            ("gap height", self.pipe_gap_height),
            ("spacing", self.pipe_spacing),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::PipeGeometry { field, value });
            }
        }
        if !(self.gap_margin >= 0.0) {
            return Err(ConfigError::NegativeMargin {
                margin: self.gap_margin,
            });
        }
        if self.pipe_gap_height + 2.0 * self.gap_margin >= self.canvas_height {
            return Err(ConfigError::GapTooLarge {
                gap_height: self.pipe_gap_height,
                margin: self.gap_margin,
                canvas_height: self.canvas_height,
            });
        }
        if self.initial_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.max_substeps == 0 {
            return Err(ConfigError::ZeroSubsteps);
        }
        if self.max_ghosts == 0 {
            return Err(ConfigError::ZeroGhostRetention);
        }
        Ok(())
    }

    /// Range of valid gap centres `(low, high)`
    pub fn gap_range(&self) -> (f32, f32) {
        let half = self.pipe_gap_height / 2.0;
        (
            half + self.gap_margin,
            self.canvas_height - half - self.gap_margin,
        )
    }
}
