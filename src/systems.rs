use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::{Board, Cursor, Dock, GameState, LineClears};
use crate::effects;
use crate::game::POINTS_PER_LINE;

/// What became of a placement attempt. Rejection is a normal outcome of
/// user input, not an error; the piece simply stays in the dock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    Rejected,
    Accepted {
        clears: LineClears,
        score_delta: u32,
    },
}

/// Attempts to place the dock piece `piece_id` with its top-left anchor at
/// (`row`, `col`).
///
/// On success the piece is consumed, the dock refills if that emptied it,
/// full rows and columns are cleared and scored, and the session flips to
/// game over if nothing offered fits anywhere anymore.
pub fn try_place(world: &mut World, piece_id: u64, row: i32, col: i32) -> PlacementOutcome {
    if world.resource::<GameState>().game_over {
        return PlacementOutcome::Rejected;
    }

    let Some(piece) = world.resource::<Dock>().get(piece_id).cloned() else {
        debug!("Placement attempt for unknown piece {piece_id}");
        return PlacementOutcome::Rejected;
    };

    if !world.resource::<Board>().can_place(&piece, row, col) {
        debug!(
            "Rejected {:?} piece {piece_id} at ({row}, {col})",
            piece.kind
        );
        return PlacementOutcome::Rejected;
    }

    world.resource_mut::<Board>().place(&piece, row, col);

    {
        let mut dock = world.resource_mut::<Dock>();
        dock.take(piece_id);
        if dock.is_empty() {
            debug!("Dock exhausted, drawing a fresh set");
            dock.refill();
        }
    }

    let clears = world.resource_mut::<Board>().clear_full_lines();
    let lines = u32::try_from(clears.total()).unwrap_or(u32::MAX);
    let score_delta = lines * POINTS_PER_LINE;

    if score_delta > 0 {
        let mut state = world.resource_mut::<GameState>();
        state.add_points(score_delta);
        info!(
            "Cleared {lines} line(s) for {score_delta} points, score now {}",
            state.score
        );
    }

    // The terminal check runs against the dock as it stands after any
    // refill triggered above.
    if check_game_over(world) {
        info!("No offered piece fits anywhere, game over");
        world.resource_mut::<GameState>().game_over = true;
    }

    PlacementOutcome::Accepted {
        clears,
        score_delta,
    }
}

/// True when no piece currently offered in the dock fits anywhere on the
/// board. Exhaustive pieces x N^2 scan, short-circuiting on the first fit.
#[must_use]
pub fn check_game_over(world: &World) -> bool {
    let board = world.resource::<Board>();
    let dock = world.resource::<Dock>();
    let size = i32::try_from(board.size).unwrap_or(i32::MAX);

    for piece in dock.pieces() {
        for row in 0..size {
            for col in 0..size {
                if board.can_place(piece, row, col) {
                    return false;
                }
            }
        }
    }

    true
}

/// Fresh board, fresh dock, score back to zero. The best score survives.
pub fn restart_session(world: &mut World) {
    info!("Restarting session");

    world.resource_mut::<Board>().clear();
    world.resource_mut::<Dock>().reset();
    world.resource_mut::<GameState>().reset();
    *world.resource_mut::<Cursor>() = Cursor::default();

    effects::clear_floating_scores(world);
}
