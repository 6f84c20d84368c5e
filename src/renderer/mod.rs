//! Rendering contract
//!
//! The core never draws. It hands each produced state to a [`RenderSink`],
//! which receives typed draw commands built by [`frame`].

pub mod frame;

pub use frame::{DrawCommand, Frame, HudSlot, SpriteKind, frame};

use crate::config::GameConfig;
use crate::sim::GameState;

/// Consumer of produced states
pub trait RenderSink {
    fn render(&mut self, frame: &Frame);
}

/// Build the frame for `state` and pass it to `sink`
pub fn present(sink: &mut impl RenderSink, state: &GameState, config: &GameConfig) {
    sink.render(&frame(state, config));
}
