#![warn(clippy::all, clippy::pedantic)]

// Test modules
pub mod app_tests;
pub mod time_tests;

// Import test utilities
#[cfg(test)]
pub mod test_utils {
    use bevy_ecs::prelude::*;
    use std::sync::Mutex;

    use crate::Time;
    use crate::components::{BlockColor, Board, Cursor, Dock, GameState};
    use crate::game::{DOCK_CAPACITY, GRID_SIZE};

    /// Serializes tests that point `BLOCKDOCK_CONFIG` / `BLOCKDOCK_SCORES`
    /// at temp files, since env vars are process-global.
    pub static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// A fresh session world with every core resource installed, the way
    /// `App::new` builds one but without touching the filesystem.
    #[must_use]
    pub fn create_test_world() -> World {
        let mut world = World::new();
        world.insert_resource(Time::new());
        world.insert_resource(Board::new(GRID_SIZE));
        world.insert_resource(Dock::new(DOCK_CAPACITY));
        world.insert_resource(GameState::default());
        world.insert_resource(Cursor::default());
        world
    }

    /// Occupies the given cells with an arbitrary color.
    pub fn occupy(board: &mut Board, cells: &[(usize, usize)]) {
        for &(row, col) in cells {
            board.cells[row][col] = Some(BlockColor::Sky);
        }
    }

    /// Fills the whole board except the listed cells.
    pub fn fill_board_except(board: &mut Board, holes: &[(usize, usize)]) {
        for row in 0..board.size {
            for col in 0..board.size {
                if holes.contains(&(row, col)) {
                    board.cells[row][col] = None;
                } else {
                    board.cells[row][col] = Some(BlockColor::Green);
                }
            }
        }
    }

    /// Fills one full row.
    pub fn fill_row(board: &mut Board, row: usize) {
        for col in 0..board.size {
            board.cells[row][col] = Some(BlockColor::Amber);
        }
    }
}
