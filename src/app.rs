#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::{info, warn};
use std::error;

use crate::Time;
use crate::components::{Board, Cursor, Dock, GameState};
use crate::game::{DOCK_CAPACITY, GRID_SIZE};
use crate::{scores, systems};

pub type AppResult<T> = std::result::Result<T, Box<dyn error::Error>>;

/// Owns one game session: the ECS world holding the board, the dock and the
/// session state, plus the adapter-side bookkeeping (quit flag, best-score
/// write-through).
pub struct App {
    pub world: World,
    pub should_quit: bool,
    /// Best score currently on disk, so the file is only written on increase.
    best_on_disk: u32,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        let best_on_disk = match scores::load_best_score() {
            Ok(best) => best,
            Err(err) => {
                warn!("Could not read best score, starting from 0: {err:#}");
                0
            }
        };

        let mut world = World::new();
        world.insert_resource(Time::new());
        world.insert_resource(Board::new(GRID_SIZE));
        world.insert_resource(Dock::new(DOCK_CAPACITY));
        world.insert_resource(GameState {
            best_score: best_on_disk,
            ..GameState::default()
        });
        world.insert_resource(Cursor::default());

        info!("Session created, best score so far: {best_on_disk}");

        Self {
            world,
            should_quit: false,
            best_on_disk,
        }
    }

    /// Starts a new game. The best score is untouched.
    pub fn reset(&mut self) {
        systems::restart_session(&mut self.world);
    }

    /// Writes the best score through to disk if it has increased.
    pub fn persist_best(&mut self) {
        let best = self.world.resource::<GameState>().best_score;
        if best > self.best_on_disk {
            match scores::save_best_score(best) {
                Ok(()) => self.best_on_disk = best,
                Err(err) => warn!("Could not persist best score: {err:#}"),
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
