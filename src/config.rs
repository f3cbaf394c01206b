use alloc::vec::Vec;

/// Side length of the classic square grid.
pub const BOARD_SIZE: usize = 10;
/// Number of ships in the classic fleet.
pub const NUM_SHIPS: usize = 10;
/// Classic fleet: four 1-deck, three 2-deck, two 3-deck and one 4-deck ship.
pub const FLEET: [FleetEntry; 4] = [
    FleetEntry::new(1, 4),
    FleetEntry::new(2, 3),
    FleetEntry::new(3, 2),
    FleetEntry::new(4, 1),
];

/// Largest side a [`Snapshot`](crate::Snapshot) is rendered with.
pub const MAX_SNAPSHOT_SIZE: usize = 100;

/// Total number of decks in the classic fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 * 2 + 2 * 3 + 4;

/// How many ships of a given length a fleet requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetEntry {
    length: usize,
    count: usize,
}

impl FleetEntry {
    pub const fn new(length: usize, count: usize) -> Self {
        Self { length, count }
    }

    /// Number of decks per ship.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Required number of ships of this length.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Rules a [`Board`](crate::Board) is validated against.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    /// Square grid side; `None` leaves coordinates unbounded.
    pub grid_size: Option<usize>,
    /// Required fleet composition.
    pub fleet: Vec<FleetEntry>,
}

impl BoardConfig {
    /// Classic fleet with no grid bounds.
    pub fn unbounded() -> Self {
        Self {
            grid_size: None,
            ..Self::default()
        }
    }

    /// Replace the fleet table, keeping the grid size.
    pub fn with_fleet<I>(mut self, fleet: I) -> Self
    where
        I: IntoIterator<Item = FleetEntry>,
    {
        self.fleet = fleet.into_iter().collect();
        self
    }

    /// Number of ships the fleet table requires.
    pub fn ship_count(&self) -> usize {
        self.fleet.iter().map(FleetEntry::count).sum()
    }

    /// Longest ship the fleet table allows, zero for an empty table.
    pub fn max_length(&self) -> usize {
        self.fleet.iter().map(FleetEntry::length).max().unwrap_or(0)
    }

    /// Required ships of `length`, zero when the table does not mention it.
    pub fn required(&self, length: usize) -> usize {
        self.fleet
            .iter()
            .filter(|e| e.length() == length)
            .map(FleetEntry::count)
            .sum()
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            grid_size: Some(BOARD_SIZE),
            fleet: FLEET.to_vec(),
        }
    }
}
