//! Common types for the board: coordinates, fire outcomes and placement errors.

use core::fmt;

/// A grid position as `(row, column)`, 0-indexed.
pub type Coordinate = (usize, usize);

/// Endpoints of a ship as supplied by the caller, in either order.
pub type ShipSpec = (Coordinate, Coordinate);

/// Index of a ship in [`Board::ships`](crate::Board::ships).
pub type ShipId = usize;

/// Result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FireOutcome {
    /// Nothing alive at the target.
    #[cfg_attr(feature = "std", serde(rename = "Miss!"))]
    Miss,
    /// A live deck was destroyed and its ship is still afloat.
    #[cfg_attr(feature = "std", serde(rename = "Hit!"))]
    Hit,
    /// The last live deck of a ship was destroyed.
    #[cfg_attr(feature = "std", serde(rename = "Sunk!"))]
    Sunk,
}

impl FireOutcome {
    /// User-facing text: `"Miss!"`, `"Hit!"` or `"Sunk!"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            FireOutcome::Miss => "Miss!",
            FireOutcome::Hit => "Hit!",
            FireOutcome::Sunk => "Sunk!",
        }
    }
}

impl fmt::Display for FireOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned while building a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Endpoints share neither a row nor a column.
    DegenerateShip { start: Coordinate, end: Coordinate },
    /// Span is longer than any ship the fleet table allows.
    ShipTooLong {
        start: Coordinate,
        end: Coordinate,
        max_length: usize,
    },
    /// A deck lies outside the configured grid.
    ShipOutOfBounds { at: Coordinate, grid_size: usize },
    /// Two ships claim the same cell.
    ShipOverlaps {
        at: Coordinate,
        first: ShipId,
        second: ShipId,
    },
    /// The number of ships of `length` differs from the fleet table.
    FleetComposition {
        length: usize,
        expected: usize,
        found: usize,
    },
    /// Two distinct ships touch, orthogonally or diagonally.
    ShipsTouching { at: Coordinate, neighbour: Coordinate },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::DegenerateShip { start, end } => write!(
                f,
                "Ship from {:?} to {:?} is neither horizontal nor vertical",
                start, end
            ),
            BoardError::ShipTooLong {
                start,
                end,
                max_length,
            } => write!(
                f,
                "Ship from {:?} to {:?} is longer than {} deck(s)",
                start, end, max_length
            ),
            BoardError::ShipOutOfBounds { at, grid_size } => write!(
                f,
                "Ship deck at {:?} lies outside the {}x{} grid",
                at, grid_size, grid_size
            ),
            BoardError::ShipOverlaps { at, first, second } => write!(
                f,
                "Ships {} and {} overlap at {:?}",
                first, second, at
            ),
            BoardError::FleetComposition {
                length,
                expected,
                found,
            } => write!(
                f,
                "Expected {} ship(s) of length {}, found {}",
                expected, length, found
            ),
            BoardError::ShipsTouching { at, neighbour } => write!(
                f,
                "Ships touch at {:?} and {:?}",
                at, neighbour
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
