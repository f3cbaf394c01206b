//! Board state: the fleet, the coordinate index and placement validation.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coordinate, FireOutcome, ShipId, ShipSpec};
use crate::config::BoardConfig;
use crate::ship::Ship;
use crate::snapshot::Snapshot;

/// Offsets of the eight cells surrounding a cell.
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A validated fleet layout that resolves shots.
///
/// Construction either yields a board satisfying every placement rule or an
/// error; there is no partially validated board.
#[derive(Clone)]
pub struct Board {
    ships: Vec<Ship>,
    field: BTreeMap<Coordinate, ShipId>,
    grid_size: Option<usize>,
}

impl Board {
    /// Build a board for the classic fleet on a 10x10 grid.
    pub fn new<I>(specs: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = ShipSpec>,
    {
        Self::with_config(specs, &BoardConfig::default())
    }

    /// Build a board validated against `config`.
    pub fn with_config<I>(specs: I, config: &BoardConfig) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = ShipSpec>,
    {
        let result = Self::build(specs, config);
        match &result {
            Ok(board) => log::debug!(
                "board ready: {} ships, {} cells",
                board.ships.len(),
                board.field.len()
            ),
            Err(e) => log::warn!("layout rejected: {}", e),
        }
        result
    }

    fn build<I>(specs: I, config: &BoardConfig) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = ShipSpec>,
    {
        let ships = specs
            .into_iter()
            .map(|spec| {
                check_span(spec, config)?;
                Ship::new(spec.0, spec.1)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let field = build_field(&ships)?;
        check_composition(&ships, config)?;
        check_adjacency(&field)?;
        Ok(Board {
            ships,
            field,
            grid_size: config.grid_size,
        })
    }

    /// Resolve a shot at `target`. Unoccupied or unknown cells are a miss.
    pub fn fire(&mut self, target: Coordinate) -> FireOutcome {
        let outcome = match self.field.get(&target) {
            Some(&id) => self.ships[id].fire(target.0, target.1),
            None => FireOutcome::Miss,
        };
        log::trace!("fire at {:?}: {}", target, outcome);
        outcome
    }

    /// The ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        self.ship_id_at(coord).map(|id| &self.ships[id])
    }

    /// Index into [`ships`](Self::ships) of the ship occupying `coord`.
    pub fn ship_id_at(&self, coord: Coordinate) -> Option<ShipId> {
        self.field.get(&coord).copied()
    }

    /// Ships in the order they were supplied.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Every occupied coordinate with its owning ship, in ascending order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, ShipId)> + '_ {
        self.field.iter().map(|(&c, &id)| (c, id))
    }

    /// Number of ships still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_drowned()).count()
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_drowned)
    }

    /// Configured grid side, `None` when unbounded.
    pub fn grid_size(&self) -> Option<usize> {
        self.grid_size
    }

    /// Render-ready view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{\n  grid_size: {:?},\n  remaining: {},\n  ships: {:?}\n}}",
            self.grid_size,
            self.ships_remaining(),
            self.ships
        )
    }
}

/// Reject a spec from its endpoints alone, before any deck is generated.
///
/// Both endpoints inside the grid keep every deck inside it. Unbounded boards
/// instead cap the span at the longest ship the fleet table allows.
fn check_span((start, end): ShipSpec, config: &BoardConfig) -> Result<(), BoardError> {
    if let Some(n) = config.grid_size {
        return match [start, end].into_iter().find(|at| at.0 >= n || at.1 >= n) {
            Some(at) => Err(BoardError::ShipOutOfBounds { at, grid_size: n }),
            None => Ok(()),
        };
    }
    let span = if start.0 == end.0 {
        start.1.abs_diff(end.1)
    } else if start.1 == end.1 {
        start.0.abs_diff(end.0)
    } else {
        // misaligned, left to Ship::new
        return Ok(());
    };
    let max_length = config.max_length();
    if span >= max_length {
        return Err(BoardError::ShipTooLong {
            start,
            end,
            max_length,
        });
    }
    Ok(())
}

/// Map every deck to its ship, rejecting overlaps.
fn build_field(ships: &[Ship]) -> Result<BTreeMap<Coordinate, ShipId>, BoardError> {
    let mut field = BTreeMap::new();
    for (id, ship) in ships.iter().enumerate() {
        for at in ship.cells() {
            if let Some(&first) = field.get(&at) {
                return Err(BoardError::ShipOverlaps {
                    at,
                    first,
                    second: id,
                });
            }
            field.insert(at, id);
        }
    }
    Ok(field)
}

/// Compare ship counts per length with the fleet table, smallest length first.
fn check_composition(ships: &[Ship], config: &BoardConfig) -> Result<(), BoardError> {
    let mut found: BTreeMap<usize, usize> = BTreeMap::new();
    for ship in ships {
        *found.entry(ship.len()).or_default() += 1;
    }
    let mut lengths: Vec<usize> = config.fleet.iter().map(|e| e.length()).collect();
    lengths.extend(found.keys().copied());
    lengths.sort_unstable();
    lengths.dedup();

    for length in lengths {
        let expected = config.required(length);
        let found = found.get(&length).copied().unwrap_or(0);
        if expected != found {
            return Err(BoardError::FleetComposition {
                length,
                expected,
                found,
            });
        }
    }
    Ok(())
}

/// Reject any occupied cell whose neighbour belongs to a different ship.
fn check_adjacency(field: &BTreeMap<Coordinate, ShipId>) -> Result<(), BoardError> {
    for (&at, &id) in field {
        for neighbour in neighbours(at) {
            match field.get(&neighbour) {
                Some(&other) if other != id => {
                    return Err(BoardError::ShipsTouching { at, neighbour });
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn neighbours((row, col): Coordinate) -> impl Iterator<Item = Coordinate> {
    NEIGHBOURS.into_iter().filter_map(move |(dr, dc)| {
        Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn corner_has_three_neighbours() {
        let n: Vec<_> = neighbours((0, 0)).collect();
        assert_eq!(n, vec![(0, 1), (1, 0), (1, 1)]);
        assert_eq!(neighbours((4, 4)).count(), 8);
    }

    #[test]
    fn span_checked_without_generating_decks() {
        let config = BoardConfig::default();
        assert_eq!(
            check_span(((0, 0), (0, usize::MAX)), &config),
            Err(BoardError::ShipOutOfBounds {
                at: (0, usize::MAX),
                grid_size: 10
            })
        );
        // in-bounds overlength ships are a composition matter
        assert_eq!(check_span(((0, 0), (0, 4)), &config), Ok(()));

        let unbounded = BoardConfig::unbounded();
        assert_eq!(
            check_span(((0, 0), (0, 4)), &unbounded),
            Err(BoardError::ShipTooLong {
                start: (0, 0),
                end: (0, 4),
                max_length: 4
            })
        );
        assert_eq!(check_span(((3, 3), (0, 3)), &unbounded), Ok(()));
        assert_eq!(check_span(((0, 0), (2, 2)), &unbounded), Ok(()));
    }
}
