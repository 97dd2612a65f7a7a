#![warn(clippy::all, clippy::pedantic)]

// Board dimensions
pub const GRID_SIZE: usize = 8;

// Dock
pub const DOCK_CAPACITY: usize = 3;

// Scoring: flat per-line bonus, a double clear is simply worth two singles
pub const POINTS_PER_LINE: u32 = 100;

// Lifetime of the "+100" score popups, in seconds
pub const FLOATING_SCORE_SECS: f32 = 1.0;
