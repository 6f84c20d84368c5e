//! Collision detection, scoring and life loss
//!
//! The bird is a circle; a pipe is two axis-aligned slabs above and below
//! its gap. A pipe that is struck is flagged so it neither scores nor costs
//! a second life.

use super::state::{Bird, GamePhase, GameState, Pipe};
use crate::config::GameConfig;

/// What cost the bird a life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitCause {
    Pipe { id: u32 },
    Ground,
}

/// Outcome of the collision stage for one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Collision signalled this tick (ground takes precedence over pipes)
    pub cause: Option<HitCause>,
    /// A life was deducted (false while hit grace is active)
    pub life_lost: bool,
    /// Pipes newly marked passed
    pub scored: u32,
}

/// Bird's horizontal extent overlaps the pipe
#[inline]
pub fn overlaps_horizontally(bird: &Bird, pipe: &Pipe) -> bool {
    bird.pos.x + bird.radius > pipe.x && bird.pos.x - bird.radius < pipe.right()
}

/// Bird's vertical extent leaves the gap
#[inline]
pub fn outside_gap(bird: &Bird, pipe: &Pipe) -> bool {
    bird.pos.y - bird.radius < pipe.gap_top() || bird.pos.y + bird.radius > pipe.gap_bottom()
}

/// Bird touches the solid part of the pipe
pub fn bird_pipe_collision(bird: &Bird, pipe: &Pipe) -> bool {
    overlaps_horizontally(bird, pipe) && outside_gap(bird, pipe)
}

/// Check every unresolved pipe, award points for cleared ones and apply at
/// most one life loss. Reaching zero lives ends the run.
pub fn resolve_collisions(
    state: &mut GameState,
    hit_ground: bool,
    config: &GameConfig,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    let mut struck = None;

    for pipe in state.pipes.iter_mut().filter(|p| !p.passed && !p.hit) {
        if bird_pipe_collision(&state.bird, pipe) {
            pipe.hit = true;
            struck.get_or_insert(pipe.id);
        } else if state.bird.pos.x > pipe.right() {
            pipe.passed = true;
            report.scored += 1;
        }
    }
    state.score += u64::from(report.scored);

    report.cause = if hit_ground {
        Some(HitCause::Ground)
    } else {
        struck.map(|id| HitCause::Pipe { id })
    };

    let immune = state.grace_ticks > 0;
    state.grace_ticks = state.grace_ticks.saturating_sub(1);

    if let Some(cause) = report.cause {
        if immune {
            log::trace!("{:?} ignored during hit grace", cause);
        } else {
            state.lives = state.lives.saturating_sub(1);
            state.grace_ticks = config.hit_grace_ticks;
            report.life_lost = true;
            log::debug!("Life lost to {:?}, {} remaining", cause, state.lives);
            if state.lives == 0 {
                state.phase = GamePhase::Over;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup(bird_y: f32) -> (GameConfig, GameState) {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.begin_run(&config);
        state.bird.pos = Vec2::new(180.0, bird_y);
        (config, state)
    }

    fn add_pipe(state: &mut GameState, config: &GameConfig, x: f32, gap_y: f32) -> u32 {
        let id = state.next_entity_id();
        state.pipes.push(Pipe::new(id, x, gap_y, config));
        id
    }

    #[test]
    fn test_bird_above_gap_collides_once_overlapping() {
        let (config, mut state) = setup(100.0);
        let pipe = Pipe::new(1, 50.0, 200.0, &config);

        // Pipe spans 50..100, bird spans 165..195: no overlap yet
        assert!(!overlaps_horizontally(&state.bird, &pipe));
        assert!(outside_gap(&state.bird, &pipe));

        let id = add_pipe(&mut state, &config, 140.0, 200.0);
        let report = resolve_collisions(&mut state, false, &config);
        assert_eq!(report.cause, Some(HitCause::Pipe { id }));
        assert!(report.life_lost);
        assert_eq!(state.lives, 2);
        assert!(state.pipes[0].hit);
    }

    #[test]
    fn test_bird_in_gap_no_collision() {
        let (config, mut state) = setup(200.0);
        add_pipe(&mut state, &config, 160.0, 200.0);
        let report = resolve_collisions(&mut state, false, &config);
        assert_eq!(report.cause, None);
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_radius_counts_against_gap_edge() {
        // Centre inside the gap but the body pokes 5px above it
        let (config, mut state) = setup(160.0);
        add_pipe(&mut state, &config, 160.0, 200.0);
        let report = resolve_collisions(&mut state, false, &config);
        assert!(report.cause.is_some());
    }

    #[test]
    fn test_pass_scores_once() {
        let (config, mut state) = setup(200.0);
        add_pipe(&mut state, &config, 100.0, 200.0);

        let report = resolve_collisions(&mut state, false, &config);
        assert_eq!(report.scored, 1);
        assert_eq!(state.score, 1);
        assert!(state.pipes[0].passed);

        let report = resolve_collisions(&mut state, false, &config);
        assert_eq!(report.scored, 0);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_pass_requires_center_past_right_edge() {
        let (config, mut state) = setup(200.0);
        // Right edge exactly at bird x
        add_pipe(&mut state, &config, 130.0, 200.0);
        resolve_collisions(&mut state, false, &config);
        assert!(!state.pipes[0].passed);
        state.pipes[0].x -= 1.0;
        resolve_collisions(&mut state, false, &config);
        assert!(state.pipes[0].passed);
    }

    #[test]
    fn test_struck_pipe_never_scores() {
        let (config, mut state) = setup(100.0);
        add_pipe(&mut state, &config, 160.0, 200.0);
        resolve_collisions(&mut state, false, &config);
        state.pipes[0].x = 0.0;
        state.bird.pos.y = 200.0;
        let report = resolve_collisions(&mut state, false, &config);
        assert_eq!(report.scored, 0);
        assert_eq!(state.score, 0);
        assert!(!state.pipes[0].passed);
    }

    #[test]
    fn test_struck_pipe_costs_one_life() {
        let config = GameConfig {
            hit_grace_ticks: 0,
            ..Default::default()
        };
        let mut state = GameState::new(&config);
        state.begin_run(&config);
        state.bird.pos = Vec2::new(180.0, 100.0);
        add_pipe(&mut state, &config, 160.0, 200.0);

        resolve_collisions(&mut state, false, &config);
        resolve_collisions(&mut state, false, &config);
        assert_eq!(state.lives, 2);
    }

    #[test]
    fn test_ground_hit() {
        let (config, mut state) = setup(400.0);
        let report = resolve_collisions(&mut state, true, &config);
        assert_eq!(report.cause, Some(HitCause::Ground));
        assert_eq!(state.lives, 2);
        assert_eq!(state.grace_ticks, config.hit_grace_ticks);
    }

    #[test]
    fn test_grace_suppresses_life_loss() {
        let (config, mut state) = setup(400.0);
        resolve_collisions(&mut state, true, &config);
        for _ in 0..config.hit_grace_ticks {
            let report = resolve_collisions(&mut state, true, &config);
            assert!(!report.life_lost);
        }
        assert_eq!(state.lives, 2);
        let report = resolve_collisions(&mut state, true, &config);
        assert!(report.life_lost);
        assert_eq!(state.lives, 1);
    }

    #[test]
    fn test_pipe_struck_during_grace_still_flagged() {
        let (config, mut state) = setup(100.0);
        state.grace_ticks = 10;
        add_pipe(&mut state, &config, 160.0, 200.0);
        let report = resolve_collisions(&mut state, false, &config);
        assert!(!report.life_lost);
        assert!(state.pipes[0].hit);
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_last_life_ends_run() {
        let (config, mut state) = setup(100.0);
        state.lives = 1;
        add_pipe(&mut state, &config, 160.0, 200.0);
        resolve_collisions(&mut state, false, &config);
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn test_two_pipes_one_life() {
        let (config, mut state) = setup(100.0);
        add_pipe(&mut state, &config, 150.0, 200.0);
        add_pipe(&mut state, &config, 175.0, 200.0);
        let report = resolve_collisions(&mut state, false, &config);
        assert_eq!(report.cause, Some(HitCause::Pipe { id: state.pipes[0].id }));
        assert_eq!(state.lives, 2);
        assert!(state.pipes.iter().all(|p| p.hit));
    }
}
