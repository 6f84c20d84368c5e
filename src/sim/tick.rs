//! Fixed timestep simulation tick
//!
//! Composes the stages into one state transition. Running order:
//! physics, pipes, collisions, ghosts.

use super::collision::resolve_collisions;
use super::ghost::{advance_ghosts, promote_run, record_position};
use super::input::TickInput;
use super::physics::step_bird;
use super::spawner::{GapSource, advance_pipes};
use super::state::{GamePhase, GameState};
use crate::config::GameConfig;

/// Produce the state one tick after `prev`.
///
/// Outside a run a flap starts (or restarts) one and nothing else happens
/// that tick. `prev` is left untouched.
pub fn tick(
    prev: &GameState,
    input: &TickInput,
    config: &GameConfig,
    rng: &mut impl GapSource,
) -> GameState {
    let mut state = prev.clone();

    match state.phase {
        GamePhase::NotStarted | GamePhase::Over => {
            if input.flap {
                let restart = state.game_over();
                state.begin_run(config);
                if restart {
                    log::info!("Run {} restarted ({} ghosts)", state.run, state.ghosts.len());
                } else {
                    log::info!("Run {} started", state.run);
                }
            }
            return state;
        }
        GamePhase::Running => {}
    }

    state.time_ticks += 1;

    let step = step_bird(&state.bird, input.flap, config);
    state.bird = step.bird;

    advance_pipes(&mut state, config, rng);

    resolve_collisions(&mut state, step.hit_ground, config);

    // Ghosts show path[n] on the tick the live run records history[n]
    if !state.current_run_history.is_empty() {
        advance_ghosts(&mut state);
    }
    if state.game_over() {
        let ticks = state.current_run_history.len();
        let ghost_id = promote_run(&mut state, config);
        log::info!(
            "Run {} over: score {} after {} ticks (ghost {})",
            state.run,
            state.score,
            ticks,
            ghost_id
        );
    } else {
        record_position(&mut state);
    }

    // Ensure deterministic ordering
    state.normalize_order();
    state
}
