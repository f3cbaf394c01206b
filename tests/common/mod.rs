use fleet_board::ShipSpec;

/// Classic fleet laid out with at least one empty cell between ships.
pub fn standard_fleet() -> Vec<ShipSpec> {
    vec![
        ((0, 0), (0, 3)),
        ((2, 0), (2, 2)),
        ((0, 5), (0, 7)),
        ((4, 0), (4, 1)),
        ((2, 4), (2, 5)),
        ((2, 7), (2, 8)),
        ((6, 0), (6, 0)),
        ((6, 2), (6, 2)),
        ((6, 4), (6, 4)),
        ((6, 6), (6, 6)),
    ]
}
