//! Run recording and ghost playback
//!
//! The live run appends one position per tick. When the run ends the
//! recording is frozen into a [`Ghost`]; ghosts beyond `max_ghosts` are
//! evicted oldest first.

use super::state::{GameState, Ghost};
use crate::config::GameConfig;

/// Step every retained ghost's playback cursor by one tick
pub fn advance_ghosts(state: &mut GameState) {
    for ghost in &mut state.ghosts {
        ghost.advance();
    }
}

/// Append the bird's position to the live recording
pub fn record_position(state: &mut GameState) {
    state.current_run_history.push(state.bird.pos);
}

/// Freeze the live recording into a new ghost and clear it.
///
/// Returns the new ghost's id.
pub fn promote_run(state: &mut GameState, config: &GameConfig) -> u32 {
    let id = state.next_entity_id();
    let path = std::mem::take(&mut state.current_run_history);
    log::debug!("Recorded ghost {} ({} ticks)", id, path.len());
    state.ghosts.push(Ghost::new(id, path));

    let excess = state.ghosts.len().saturating_sub(config.max_ghosts);
    if excess > 0 {
        for evicted in state.ghosts.drain(..excess) {
            log::debug!("Evicted ghost {}", evicted.id);
        }
    }
    id
}
