//! Self-playing Battleship: two engine-driven sides trade shots on 8×8
//! grids until one fleet is destroyed. A match can be paused at any move
//! boundary, snapshotted to a fixed-layout byte buffer and resumed later.

mod bitgrid;
mod codec;
mod common;
mod config;
mod engine;
mod grid;
mod logging;
mod placement;
mod ship;
mod strategy;
mod tracker;

pub use bitgrid::{BitGrid, BitGridError};
pub use codec::*;
pub use common::*;
pub use config::*;
pub use engine::*;
pub use grid::*;
pub use logging::init_logging;
pub use placement::*;
pub use ship::*;
pub use strategy::*;
pub use tracker::*;
