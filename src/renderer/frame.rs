//! Draw commands for one frame
//!
//! Translates a `GameState` into backend-agnostic primitives. Coordinates
//! are viewport pixels with y pointing down.

use glam::Vec2;
use serde::Serialize;

use crate::config::GameConfig;
use crate::sim::GameState;

/// Which sprite to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpriteKind {
    Bird,
    /// Drawn translucent
    Ghost,
}

/// HUD text slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HudSlot {
    Lives,
    Score,
}

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    /// Sprite with top-left corner at `pos`
    Sprite { kind: SpriteKind, pos: Vec2, size: Vec2 },
    /// Solid pipe segment
    Rect { pos: Vec2, size: Vec2 },
    Text { slot: HudSlot, value: String },
    /// Show or hide the game-over overlay
    GameOverOverlay { visible: bool },
}

/// All commands for one produced state, back to front
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn sprites(&self, kind: SpriteKind) -> impl Iterator<Item = Vec2> + '_ {
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::Sprite { kind: k, pos, .. } if *k == kind => Some(*pos),
            _ => None,
        })
    }

    pub fn rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count()
    }
}

/// Sprite top-left for a bird-sized sprite centred on `center`
fn sprite_origin(center: Vec2, size: Vec2) -> Vec2 {
    center - size / 2.0
}

/// Build the frame for `state`
pub fn frame(state: &GameState, config: &GameConfig) -> Frame {
    let sprite_size = Vec2::new(config.bird_width, config.bird_height);
    let mut commands = Vec::with_capacity(state.pipes.len() * 2 + state.ghosts.len() + 4);

    for pipe in &state.pipes {
        let top = pipe.gap_top();
        let bottom = pipe.gap_bottom();
        commands.push(DrawCommand::Rect {
            pos: Vec2::new(pipe.x, 0.0),
            size: Vec2::new(pipe.width, top),
        });
        commands.push(DrawCommand::Rect {
            pos: Vec2::new(pipe.x, bottom),
            size: Vec2::new(pipe.width, config.canvas_height - bottom),
        });
    }

    for pos in state.ghosts.iter().filter_map(|g| g.position()) {
        commands.push(DrawCommand::Sprite {
            kind: SpriteKind::Ghost,
            pos: sprite_origin(pos, sprite_size),
            size: sprite_size,
        });
    }

    commands.push(DrawCommand::Sprite {
        kind: SpriteKind::Bird,
        pos: sprite_origin(state.bird.pos, sprite_size),
        size: sprite_size,
    });

    commands.push(DrawCommand::Text {
        slot: HudSlot::Lives,
        value: state.lives.to_string(),
    });
    commands.push(DrawCommand::Text {
        slot: HudSlot::Score,
        value: state.score.to_string(),
    });
    commands.push(DrawCommand::GameOverOverlay {
        visible: state.game_over(),
    });

    Frame { commands }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Ghost, Pipe};

    #[test]
    fn test_pipe_rects_span_viewport() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.pipes.push(Pipe::new(5, 300.0, 200.0, &config));

        let frame = frame(&state, &config);
        assert_eq!(frame.rect_count(), 2);
        assert_eq!(
            frame.commands[0],
            DrawCommand::Rect {
                pos: Vec2::new(300.0, 0.0),
                size: Vec2::new(50.0, 150.0)
            }
        );
        assert_eq!(
            frame.commands[1],
            DrawCommand::Rect {
                pos: Vec2::new(300.0, 250.0),
                size: Vec2::new(50.0, 150.0)
            }
        );
    }

    #[test]
    fn test_bird_sprite_centred_on_position() {
        let config = GameConfig::default();
        let state = GameState::new(&config);
        let frame = frame(&state, &config);
        let birds: Vec<Vec2> = frame.sprites(SpriteKind::Bird).collect();
        assert_eq!(birds, vec![Vec2::new(159.0, 185.0)]);
    }

    #[test]
    fn test_finished_ghosts_not_drawn() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.ghosts.push(Ghost::new(7, vec![Vec2::new(180.0, 100.0)]));
        let mut done = Ghost::new(8, vec![Vec2::ZERO]);
        done.advance();
        state.ghosts.push(done);

        let frame = frame(&state, &config);
        let ghosts: Vec<Vec2> = frame.sprites(SpriteKind::Ghost).collect();
        assert_eq!(ghosts, vec![Vec2::new(159.0, 85.0)]);
    }

    #[test]
    fn test_hud_and_overlay() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.score = 12;
        let frame_running = frame(&state, &config);
        assert!(frame_running.commands.contains(&DrawCommand::Text {
            slot: HudSlot::Score,
            value: "12".to_string()
        }));
        assert!(
            frame_running
                .commands
                .contains(&DrawCommand::GameOverOverlay { visible: false })
        );

        state.lives = 0;
        state.phase = crate::sim::GamePhase::Over;
        let frame_over = frame(&state, &config);
        assert!(
            frame_over
                .commands
                .contains(&DrawCommand::GameOverOverlay { visible: true })
        );
    }
}
