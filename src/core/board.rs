//! Board geometry: positions, units, and bases.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// Side length of the square board.
pub const GRID_SIZE: i32 = 12;

/// A board cell. Row 0 is player one's home edge.
///
/// Coordinates are signed so that callers can hand in off-board targets
/// (e.g. a click one cell above row 0); `in_bounds` rejects them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check whether this position lies on the board.
    #[must_use]
    pub fn in_bounds(self) -> bool {
        (0..GRID_SIZE).contains(&self.row) && (0..GRID_SIZE).contains(&self.col)
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub const fn manhattan_distance(self, other: Position) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Check whether `other` is exactly one orthogonal step away.
    /// Diagonals are never a single step.
    #[must_use]
    pub const fn is_orthogonal_step_to(self, other: Position) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// In-bounds orthogonal neighbors of this cell.
    #[must_use]
    pub fn orthogonal_neighbors(self) -> SmallVec<[Position; 4]> {
        [
            Position::new(self.row - 1, self.col),
            Position::new(self.row + 1, self.col),
            Position::new(self.row, self.col - 1),
            Position::new(self.row, self.col + 1),
        ]
        .into_iter()
        .filter(|cell| cell.in_bounds())
        .collect()
    }
}

/// What a unit is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Soldier,
    Miner,
}

/// A unit on the board, belonging to exactly one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    pub kind: UnitKind,
    pub position: Position,
}

impl Unit {
    /// Create a unit.
    #[must_use]
    pub const fn new(kind: UnitKind, position: Position) -> Self {
        Self { kind, position }
    }
}

/// A player's base: health and a fixed board cell.
///
/// Health only ever decreases through combat, which sits outside the
/// transition core; no handler here modifies it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Base {
    pub health: i64,
    pub position: Position,
}

impl Base {
    /// Health every base starts the match with.
    pub const STARTING_HEALTH: i64 = 20;

    /// Create a base.
    #[must_use]
    pub const fn new(health: i64, position: Position) -> Self {
        Self { health, position }
    }

    /// Fixed base cell for a player: mid-left edge for player one,
    /// mid-right edge for player two.
    #[must_use]
    pub const fn home_position(player: PlayerId) -> Position {
        match player {
            PlayerId::One => Position::new(5, 0),
            PlayerId::Two => Position::new(6, GRID_SIZE - 1),
        }
    }
}
