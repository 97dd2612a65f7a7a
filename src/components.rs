#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to i32 since board dimensions are always small enough to fit in i32
    clippy::cast_possible_truncation,
    // Allow sign loss when going from signed to unsigned types since we validate values are non-negative before casting
    clippy::cast_sign_loss,
    // Allow potential wrapping when casting between types of same size as board sizes are always small
    clippy::cast_possible_wrap
)]

use bevy_ecs::prelude::*;

use crate::game::{DOCK_CAPACITY, GRID_SIZE};

/// The five-color palette pieces are painted with. The color carries no
/// gameplay meaning; the board only cares whether a cell is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockColor {
    Sky,
    Pink,
    Green,
    Amber,
    Violet,
}

impl BlockColor {
    pub const PALETTE: [BlockColor; 5] = [
        BlockColor::Sky,
        BlockColor::Pink,
        BlockColor::Green,
        BlockColor::Amber,
        BlockColor::Violet,
    ];

    #[must_use]
    pub fn random() -> Self {
        Self::PALETTE[fastrand::usize(0..Self::PALETTE.len())]
    }
}

/// The eight shape templates pieces are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Dot,
    BarTwoWide,
    BarTwoTall,
    BarThreeWide,
    BarThreeTall,
    Square,
    Corner,
    Tee,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Dot,
        ShapeKind::BarTwoWide,
        ShapeKind::BarTwoTall,
        ShapeKind::BarThreeWide,
        ShapeKind::BarThreeTall,
        ShapeKind::Square,
        ShapeKind::Corner,
        ShapeKind::Tee,
    ];

    #[must_use]
    pub fn random() -> Self {
        Self::ALL[fastrand::usize(0..Self::ALL.len())]
    }

    /// Occupied (row, col) offsets relative to the anchor cell. Offsets are
    /// never negative; the anchor is the top-left of the bounding box.
    #[must_use]
    pub fn template(self) -> &'static [(i32, i32)] {
        match self {
            ShapeKind::Dot => &[(0, 0)],
            ShapeKind::BarTwoWide => &[(0, 0), (0, 1)],
            ShapeKind::BarTwoTall => &[(0, 0), (1, 0)],
            ShapeKind::BarThreeWide => &[(0, 0), (0, 1), (0, 2)],
            ShapeKind::BarThreeTall => &[(0, 0), (1, 0), (2, 0)],
            ShapeKind::Square => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            ShapeKind::Corner => &[(0, 0), (1, 0), (2, 0), (2, 1)],
            ShapeKind::Tee => &[(0, 0), (0, 1), (0, 2), (1, 1)],
        }
    }

    /// Bounding box as (rows, cols).
    #[must_use]
    pub fn bounds(self) -> (i32, i32) {
        let cells = self.template();
        let rows = cells.iter().map(|&(r, _)| r).max().unwrap_or(0) + 1;
        let cols = cells.iter().map(|&(_, c)| c).max().unwrap_or(0) + 1;
        (rows, cols)
    }
}

/// A shape instance offered in the dock. Each piece owns a private copy of
/// its template cells, so no two pieces ever share mask storage, and carries
/// an id the dock uses to consume it by identity rather than shape equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub id: u64,
    pub kind: ShapeKind,
    pub color: BlockColor,
    cells: Vec<(i32, i32)>,
}

impl Piece {
    #[must_use]
    pub fn new(id: u64, kind: ShapeKind, color: BlockColor) -> Self {
        Self {
            id,
            kind,
            color,
            cells: kind.template().to_vec(),
        }
    }

    #[must_use]
    pub fn random(id: u64) -> Self {
        // Shape and color are drawn independently, uniformly.
        Self::new(id, ShapeKind::random(), BlockColor::random())
    }

    #[must_use]
    pub fn cells(&self) -> &[(i32, i32)] {
        &self.cells
    }

    #[must_use]
    pub fn bounds(&self) -> (i32, i32) {
        self.kind.bounds()
    }
}

/// Indices of the rows and columns emptied by one `clear_full_lines` scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClears {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
}

impl LineClears {
    #[must_use]
    pub fn total(&self) -> usize {
        self.rows.len() + self.cols.len()
    }
}

#[derive(Resource, Debug, Clone)]
pub struct Board {
    pub size: usize,
    pub cells: Vec<Vec<Option<BlockColor>>>,
}

impl Board {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![None; size]; size],
        }
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                *cell = None;
            }
        }
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<BlockColor> {
        self.cells[row][col]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(Option::is_none))
    }

    /// True when every cell the piece would cover is in bounds and empty.
    /// Negative anchors always fail since template offsets are non-negative.
    #[must_use]
    pub fn can_place(&self, piece: &Piece, row: i32, col: i32) -> bool {
        let size = i32::try_from(self.size).unwrap_or(i32::MAX);

        for &(dr, dc) in piece.cells() {
            let r = row + dr;
            let c = col + dc;

            // Check if the cell is out of bounds
            if r < 0 || r >= size || c < 0 || c >= size {
                return false;
            }

            // Check if the cell is already occupied
            if self.cells[r as usize][c as usize].is_some() {
                return false;
            }
        }

        true
    }

    /// Writes the piece's color into every covered cell. The session checks
    /// `can_place` first; out-of-range cells are skipped rather than panicking.
    pub fn place(&mut self, piece: &Piece, row: i32, col: i32) {
        let size = i32::try_from(self.size).unwrap_or(i32::MAX);

        for &(dr, dc) in piece.cells() {
            let r = row + dr;
            let c = col + dc;

            if r >= 0 && r < size && c >= 0 && c < size {
                self.cells[r as usize][c as usize] = Some(piece.color);
            }
        }
    }

    /// Empties every full row and every full column and reports which.
    ///
    /// Fullness is judged for all rows and columns against the pre-clear
    /// board before anything is zeroed, so a single placement completing a
    /// row and a column that share a cell clears both.
    pub fn clear_full_lines(&mut self) -> LineClears {
        let mut clears = LineClears::default();

        // First identify the full lines
        for row in 0..self.size {
            if self.cells[row].iter().all(Option::is_some) {
                clears.rows.push(row);
            }
        }
        for col in 0..self.size {
            if (0..self.size).all(|row| self.cells[row][col].is_some()) {
                clears.cols.push(col);
            }
        }

        // Then zero them
        for &row in &clears.rows {
            for cell in &mut self.cells[row] {
                *cell = None;
            }
        }
        for &col in &clears.cols {
            for row in 0..self.size {
                self.cells[row][col] = None;
            }
        }

        clears
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(GRID_SIZE)
    }
}

/// The bag of currently offered pieces. It only ever refills once every
/// piece has been consumed; pieces are never topped up while any remain.
#[derive(Resource, Debug, Clone)]
pub struct Dock {
    pieces: Vec<Piece>,
    capacity: usize,
    next_id: u64,
}

impl Dock {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let mut dock = Self {
            pieces: Vec::new(),
            capacity,
            next_id: 0,
        };
        dock.refill();
        dock
    }

    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes the piece with the given id, if it is still offered.
    pub fn take(&mut self, id: u64) -> Option<Piece> {
        let index = self.pieces.iter().position(|piece| piece.id == id)?;
        Some(self.pieces.remove(index))
    }

    /// Draws fresh random pieces up to capacity. No-op unless the dock is
    /// empty: the bag must be fully exhausted before it refills.
    pub fn refill(&mut self) {
        if !self.pieces.is_empty() {
            return;
        }

        while self.pieces.len() < self.capacity {
            let piece = Piece::random(self.next_id);
            self.next_id += 1;
            self.pieces.push(piece);
        }
    }

    /// Discards whatever is offered and draws a fresh full set.
    pub fn reset(&mut self) {
        self.pieces.clear();
        self.refill();
    }

    /// Replaces the dock contents with specific pieces, assigning fresh ids.
    /// Used to script deterministic sessions (and tests).
    pub fn set_pieces(&mut self, specs: &[(ShapeKind, BlockColor)]) {
        self.pieces.clear();
        for &(kind, color) in specs {
            let piece = Piece::new(self.next_id, kind, color);
            self.next_id += 1;
            self.pieces.push(piece);
        }
    }
}

impl Default for Dock {
    fn default() -> Self {
        Self::new(DOCK_CAPACITY)
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct GameState {
    pub score: u32,
    /// Highest score ever observed; never decreases, survives restarts.
    pub best_score: u32,
    pub game_over: bool,
}

impl GameState {
    /// Back to a fresh game. The best score is deliberately kept.
    pub fn reset(&mut self) {
        self.score = 0;
        self.game_over = false;
    }

    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        if self.score > self.best_score {
            self.best_score = self.score;
        }
    }
}

/// Where the player is aiming the selected dock piece. Pure input state;
/// the session never reads it.
#[derive(Resource, Debug, Clone, Default)]
pub struct Cursor {
    pub row: i32,
    pub col: i32,
    /// Index into the dock's offered pieces.
    pub selected: usize,
}

impl Cursor {
    pub fn move_by(&mut self, dr: i32, dc: i32, board_size: usize) {
        let max = board_size as i32 - 1;
        self.row = (self.row + dr).clamp(0, max);
        self.col = (self.col + dc).clamp(0, max);
    }

    pub fn select_next(&mut self, dock_len: usize) {
        if dock_len > 0 {
            self.selected = (self.selected + 1) % dock_len;
        }
    }
}

/// A "+N" popup shown over a cleared row or column for a moment.
#[derive(Debug, Clone, Component)]
pub struct FloatingScore {
    pub row: usize,
    pub col: usize,
    pub points: u32,
    pub lifetime: f32,
}
