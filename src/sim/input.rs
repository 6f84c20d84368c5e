//! Input mapping
//!
//! Key presses arrive between ticks; the simulation only sees whether at
//! least one flap was requested.

use serde::{Deserialize, Serialize};

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Space,
    ArrowUp,
}

impl Key {
    /// Map a DOM-style key code; unknown codes are ignored
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Space" => Some(Key::Space),
            "ArrowUp" => Some(Key::ArrowUp),
            _ => None,
        }
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Flap, or start/restart outside a run
    pub flap: bool,
}

/// Collects presses between ticks
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    flap: bool,
}

impl InputLatch {
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Space | Key::ArrowUp => self.flap = true,
        }
    }

    /// Input for the next tick; clears the latch
    pub fn take(&mut self) -> TickInput {
        TickInput {
            flap: std::mem::take(&mut self.flap),
        }
    }
}
