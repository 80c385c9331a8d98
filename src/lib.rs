#![warn(clippy::return_self_not_must_use)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]

pub mod tables;

pub use torus_bitboard::BitBoard;
pub use torus_tablegen::{build_distance_table, distances_from, torus_neighbors, DistanceTable};
pub use torus_types::{Cell, CellError, Column, Row, CELL_COUNT, GRID_SIZE};
