//! A single cell of a ship.

use crate::common::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    row: usize,
    col: usize,
    alive: bool,
}

impl Deck {
    /// New, undamaged deck at (`row`, `col`).
    pub fn new(row: usize, col: usize) -> Self {
        Deck {
            row,
            col,
            alive: true,
        }
    }

    /// Destroy the deck. Hitting a dead deck does nothing.
    pub fn hit(&mut self) {
        self.alive = false;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn position(&self) -> Coordinate {
        (self.row, self.col)
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_is_monotonic() {
        let mut deck = Deck::new(3, 4);
        assert!(deck.is_alive());
        deck.hit();
        assert!(!deck.is_alive());
        deck.hit();
        assert!(!deck.is_alive());
        assert_eq!(deck.position(), (3, 4));
    }
}
