#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::{FloatingScore, LineClears};
use crate::game::{FLOATING_SCORE_SECS, POINTS_PER_LINE};

/// Spawns a "+100" popup at the head of every row and column cleared by a
/// single placement.
pub fn spawn_score_popups(world: &mut World, clears: &LineClears) {
    for &row in &clears.rows {
        trace!("Score popup for cleared row {row}");
        world.spawn(FloatingScore {
            row,
            col: 0,
            points: POINTS_PER_LINE,
            lifetime: FLOATING_SCORE_SECS,
        });
    }
    for &col in &clears.cols {
        trace!("Score popup for cleared column {col}");
        world.spawn(FloatingScore {
            row: 0,
            col,
            points: POINTS_PER_LINE,
            lifetime: FLOATING_SCORE_SECS,
        });
    }
}

/// Ages popups by the frame delta and despawns the expired ones.
pub fn update_floating_scores(world: &mut World, delta_seconds: f32) {
    let mut expired = Vec::new();

    {
        let mut query = world.query::<(Entity, &mut FloatingScore)>();
        for (entity, mut popup) in query.iter_mut(world) {
            popup.lifetime -= delta_seconds;
            if popup.lifetime <= 0.0 {
                expired.push(entity);
            }
        }
    }

    for entity in expired {
        world.despawn(entity);
    }
}

/// Removes every popup immediately (used on restart).
pub fn clear_floating_scores(world: &mut World) {
    let popups: Vec<Entity> = {
        let mut query = world.query_filtered::<Entity, With<FloatingScore>>();
        query.iter(world).collect()
    };

    for entity in popups {
        world.despawn(entity);
    }
}
