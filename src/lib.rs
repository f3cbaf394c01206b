//! Single-player Battleship board: fleet placement rules and shot resolution.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
mod deck;
#[cfg(feature = "std")]
mod logging;
mod ship;
mod snapshot;

pub use board::*;
pub use common::*;
pub use config::*;
pub use deck::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
pub use snapshot::*;
