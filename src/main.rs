#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use fleet_board::{init_logging, Board, BoardConfig, Coordinate, ShipSpec};
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use std::path::PathBuf;

/// Build a board from a layout file and replay shots against it.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// JSON array of ship endpoint pairs, e.g. [[[0,0],[0,3]], ...]
    #[arg(long)]
    layout: PathBuf,
    /// Target to fire at, as `row,col`. May be repeated.
    #[arg(long = "shot", value_parser = parse_coord)]
    shots: Vec<Coordinate>,
    /// Accept coordinates outside the 10x10 grid.
    #[arg(long)]
    unbounded: bool,
    /// Print the board after the last shot.
    #[arg(long)]
    show: bool,
}

#[cfg(feature = "std")]
fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let (row, col) = input
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{}`", input))?;
    let row = row.trim().parse().map_err(|e| format!("bad row: {}", e))?;
    let col = col.trim().parse().map_err(|e| format!("bad column: {}", e))?;
    Ok((row, col))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let raw = std::fs::read_to_string(&cli.layout)?;
    let specs: Vec<ShipSpec> = serde_json::from_str(&raw)?;
    let config = if cli.unbounded {
        BoardConfig::unbounded()
    } else {
        BoardConfig::default()
    };
    let mut board = Board::with_config(specs, &config)?;

    for target in cli.shots {
        let outcome = board.fire(target);
        println!("{}", json!({ "target": target, "outcome": outcome }));
    }
    println!(
        "{}",
        json!({
            "ships_remaining": board.ships_remaining(),
            "all_sunk": board.all_sunk(),
        })
    );
    if cli.show {
        println!("{}", board.snapshot());
    }
    Ok(())
}
