use lazy_static::lazy_static;
use torus_bitboard::BitBoard;
use torus_tablegen::{build_distance_table, torus_adjacency_table, DistanceTable};
use torus_types::{Cell, CELL_COUNT};

lazy_static! {
    /// Shortest-path distance between every pair of cells on the torus.
    pub static ref DISTANCES: DistanceTable = build_distance_table();

    /// The four wraparound neighbors of every cell (right, left, down, up).
    pub static ref ADJACENT: [[Cell; 4]; CELL_COUNT] = torus_adjacency_table();
}

pub fn distance(from: Cell, to: Cell) -> u32 {
    DISTANCES.get(from, to)
}

pub fn neighbors(cell: Cell) -> &'static [Cell; 4] {
    &ADJACENT[cell]
}

/// All cells exactly `d` steps away from `source`.
pub fn cells_at_distance(source: Cell, d: u32) -> BitBoard {
    let mut ring = BitBoard::EMPTY;

    for (cell, &dist) in Cell::iter_all().zip(DISTANCES.row(source)) {
        if dist == d {
            ring.set(cell);
        }
    }

    ring
}
