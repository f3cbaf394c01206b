//! Ships built from two endpoints, tracking damage per deck.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coordinate, FireOutcome};
use crate::deck::Deck;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A straight run of decks between two endpoints.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    start: Coordinate,
    end: Coordinate,
    orientation: Orientation,
    decks: Vec<Deck>,
    drowned: bool,
}

impl Ship {
    /// Build a ship covering every cell between `start` and `end` inclusive.
    ///
    /// Endpoints may be given in either order. Endpoints that share neither a
    /// row nor a column are rejected.
    pub fn new(start: Coordinate, end: Coordinate) -> Result<Self, BoardError> {
        let (orientation, decks) = if start.0 == end.0 {
            let (lo, hi) = (start.1.min(end.1), start.1.max(end.1));
            let decks = (lo..=hi).map(|c| Deck::new(start.0, c)).collect();
            (Orientation::Horizontal, decks)
        } else if start.1 == end.1 {
            let (lo, hi) = (start.0.min(end.0), start.0.max(end.0));
            let decks = (lo..=hi).map(|r| Deck::new(r, start.1)).collect();
            (Orientation::Vertical, decks)
        } else {
            return Err(BoardError::DegenerateShip { start, end });
        };

        Ok(Ship {
            start,
            end,
            orientation,
            decks,
            drowned: false,
        })
    }

    /// Find the deck at (`row`, `col`), if this ship has one there.
    pub fn get_deck(&self, row: usize, col: usize) -> Option<&Deck> {
        self.decks.iter().find(|d| d.position() == (row, col))
    }

    fn get_deck_mut(&mut self, row: usize, col: usize) -> Option<&mut Deck> {
        self.decks.iter_mut().find(|d| d.position() == (row, col))
    }

    /// Resolve a shot at (`row`, `col`) against this ship.
    ///
    /// A cell that is not part of the ship, or whose deck is already dead,
    /// is a miss.
    pub fn fire(&mut self, row: usize, col: usize) -> FireOutcome {
        match self.get_deck_mut(row, col) {
            Some(deck) if deck.is_alive() => deck.hit(),
            _ => return FireOutcome::Miss,
        }
        self.drowned = self.decks.iter().all(|d| !d.is_alive());
        if self.drowned {
            FireOutcome::Sunk
        } else {
            FireOutcome::Hit
        }
    }

    /// `true` once every deck has been hit.
    pub fn is_drowned(&self) -> bool {
        self.drowned
    }

    /// Number of decks.
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Never true for a ship built by [`Ship::new`].
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Number of decks not yet hit.
    pub fn decks_alive(&self) -> usize {
        self.decks.iter().filter(|d| d.is_alive()).count()
    }

    /// Decks in order from the lower to the higher endpoint.
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Coordinates of every deck, in deck order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.decks.iter().map(Deck::position)
    }

    /// Endpoint as given at construction.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Endpoint as given at construction.
    pub fn end(&self) -> Coordinate {
        self.end
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ start: {:?}, end: {:?}, orientation: {:?}, alive: {}/{}, drowned: {} }}",
            self.start,
            self.end,
            self.orientation,
            self.decks_alive(),
            self.len(),
            self.drowned,
        )
    }
}
