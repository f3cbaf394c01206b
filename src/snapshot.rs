//! Read-only grid view of a board for presenters.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::board::Board;
use crate::config::{BOARD_SIZE, MAX_SNAPSHOT_SIZE};

/// What a single grid position shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Water,
    Ship,
    Hit,
    Sunk,
}

impl Cell {
    pub fn symbol(&self) -> char {
        match self {
            Cell::Water => '.',
            Cell::Ship => 'S',
            Cell::Hit => 'X',
            Cell::Sunk => '#',
        }
    }
}

/// Square grid of [`Cell`]s, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    size: usize,
    cells: Vec<Cell>,
}

impl Snapshot {
    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }
}

impl From<&Board> for Snapshot {
    fn from(board: &Board) -> Self {
        // Unbounded boards grow to fit the occupied extent; either way the
        // view stops at MAX_SNAPSHOT_SIZE and cells past it are left out.
        let size = board
            .grid_size()
            .unwrap_or_else(|| {
                board
                    .occupied()
                    .map(|((r, c), _)| r.max(c).saturating_add(1))
                    .fold(BOARD_SIZE, usize::max)
            })
            .min(MAX_SNAPSHOT_SIZE);
        let mut cells = vec![Cell::Water; size * size];
        for ((r, c), id) in board.occupied() {
            if r >= size || c >= size {
                continue;
            }
            let ship = &board.ships()[id];
            cells[r * size + c] = if ship.is_drowned() {
                Cell::Sunk
            } else {
                match ship.get_deck(r, c) {
                    Some(deck) if !deck.is_alive() => Cell::Hit,
                    _ => Cell::Ship,
                }
            };
        }
        Snapshot { size, cells }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, " {:>2}", c)?;
        }
        for (r, row) in self.rows().enumerate() {
            writeln!(f)?;
            write!(f, "{:>2} ", r)?;
            for cell in row {
                write!(f, "  {}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
