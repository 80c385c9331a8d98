use bytemuck::{Pod, Zeroable};
use std::{collections::VecDeque, ops::Index};
use torus_bitboard::BitBoard;
use torus_types::{Cell, CELL_COUNT};

/// Offsets of the four orthogonal neighbors, in the order right, left, down, up.
const NEIGHBOR_OFFSETS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Returns the four neighbors of `cell` on the torus.
///
/// Coordinates wrap modulo 8, so edge and corner cells have neighbors on the
/// opposite side of the board. The order is always right, left, down, up.
pub fn torus_neighbors(cell: Cell) -> [Cell; 4] {
    NEIGHBOR_OFFSETS.map(|(dx, dy)| cell.wrapping_offset(dx, dy))
}

pub fn torus_adjacency_table() -> [[Cell; 4]; CELL_COUNT] {
    let mut table = [[Cell::MIN; 4]; CELL_COUNT];

    for (cell, neighbors) in Cell::iter_all().zip(table.iter_mut()) {
        *neighbors = torus_neighbors(cell);
    }

    table
}

/// Shortest-path distances on the torus, `table[from][to]`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Zeroable, Pod)]
#[repr(transparent)]
pub struct DistanceTable([[u32; CELL_COUNT]; CELL_COUNT]);

impl DistanceTable {
    pub fn get(&self, from: Cell, to: Cell) -> u32 {
        self.0[from][to]
    }

    pub fn row(&self, from: Cell) -> &[u32; CELL_COUNT] {
        &self.0[from]
    }

    /// The largest distance in the table, i.e. the diameter of the board.
    pub fn diameter(&self) -> u32 {
        self.0.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Row-major view of all entries, `flat[64 * from + to]`.
    pub fn as_flat(&self) -> &[u32; CELL_COUNT * CELL_COUNT] {
        bytemuck::cast_ref(&self.0)
    }
}

impl Index<(Cell, Cell)> for DistanceTable {
    type Output = u32;

    fn index(&self, (from, to): (Cell, Cell)) -> &Self::Output {
        &self.0[from][to]
    }
}

/// Breadth-first search from `source`, returning the distance to every cell.
///
/// # Panics
/// Panics if a cell is unreachable from `source`. The torus is connected, so
/// this only happens if the adjacency relation is broken.
pub fn distances_from(source: Cell) -> [u32; CELL_COUNT] {
    bfs_distances(source, torus_neighbors)
}

fn bfs_distances(source: Cell, adjacent: impl Fn(Cell) -> [Cell; 4]) -> [u32; CELL_COUNT] {
    let mut distance = [0; CELL_COUNT];
    let mut visited = BitBoard::from_cell(source);
    let mut queue = VecDeque::with_capacity(CELL_COUNT);
    queue.push_back(source);

    while let Some(cell) = queue.pop_front() {
        for neighbor in adjacent(cell) {
            if visited.get(neighbor) {
                continue;
            }

            visited.set(neighbor);
            distance[neighbor] = distance[cell] + 1;
            queue.push_back(neighbor);
        }
    }

    // Every entry of `distance` is only meaningful for visited cells.
    assert!(
        visited.is_full(),
        "cells {:?} are unreachable from {source}",
        visited.complement().iter_cells().map(Cell::index).collect::<Vec<_>>()
    );

    log::trace!("distances from {source}: {distance:?}");
    distance
}

pub fn build_distance_table() -> DistanceTable {
    let mut rows = [[0; CELL_COUNT]; CELL_COUNT];

    for (source, row) in Cell::iter_all().zip(rows.iter_mut()) {
        *row = distances_from(source);
    }

    let table = DistanceTable(rows);
    log::debug!("built {CELL_COUNT}x{CELL_COUNT} distance table, diameter {}", table.diameter());
    table
}

// ---------------------------------------------------------------------------------------------------------------------
// ---------------------------------------------------------------------------------------------------------------------
// # TESTS -------------------------------------------------------------------------------------------------------------
// ---------------------------------------------------------------------------------------------------------------------
// ---------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use torus_types::{Cell, Column, CELL_COUNT};

    use super::{bfs_distances, build_distance_table, distances_from, torus_adjacency_table, torus_neighbors, NEIGHBOR_OFFSETS};

    fn cell(i: usize) -> Cell {
        Cell::new(i).unwrap()
    }

    /// Number of cells at each distance 0..=4 from a point on an 8-cycle.
    fn cycle_histogram() -> [u32; 5] {
        let mut hist = [0; 5];
        for a in 0..8u32 {
            let d = a.min(8 - a);
            hist[d as usize] += 1;
        }
        hist
    }

    #[test]
    fn neighbors_of_origin() {
        let expected = [cell(1), cell(7), cell(8), cell(56)];
        assert_eq!(torus_neighbors(cell(0)), expected);
    }

    #[test]
    fn neighbors_are_distinct_and_in_range() {
        for c in Cell::iter_all() {
            let neighbors = torus_neighbors(c);

            for (i, a) in neighbors.iter().enumerate() {
                assert!(a.index() < CELL_COUNT);
                assert_ne!(*a, c);
                for b in &neighbors[i + 1..] {
                    assert_ne!(a, b, "duplicate neighbor of {c}");
                }
            }
        }
    }

    #[test]
    fn inverse_offset_returns_home() {
        for c in Cell::iter_all() {
            for (n, (dx, dy)) in torus_neighbors(c).into_iter().zip(NEIGHBOR_OFFSETS) {
                assert_eq!(n.wrapping_offset(-dx, -dy), c);
                assert!(torus_neighbors(n).contains(&c));
            }
        }
    }

    #[test]
    fn adjacency_table_matches_generator() {
        let table = torus_adjacency_table();
        for c in Cell::iter_all() {
            assert_eq!(table[c], torus_neighbors(c));
        }
    }

    #[test]
    fn concrete_distances_from_origin() {
        let row = distances_from(cell(0));
        assert_eq!(row[0], 0);
        assert_eq!(row[1], 1);
        assert_eq!(row[56], 1);
        assert_eq!(row[63], 2);
        assert_eq!(row[4], 4);
        assert_eq!(row[36], 8);
    }

    #[test]
    #[should_panic(expected = "are unreachable from 0(x0, y0)")]
    fn broken_adjacency_aborts() {
        // Only steps right and never wraps, so the search never leaves row 0.
        let right_only = |c: Cell| {
            let right = if c.column() == Column::C7 { c } else { c.wrapping_offset(1, 0) };
            [right; 4]
        };

        bfs_distances(cell(0), right_only);
    }

    #[test]
    fn bfs_with_torus_adjacency_matches_public_entry() {
        for c in Cell::iter_all() {
            assert_eq!(bfs_distances(c, torus_neighbors), distances_from(c));
        }
    }

    #[test]
    fn zero_diagonal_and_symmetry() {
        let table = build_distance_table();

        for a in Cell::iter_all() {
            assert_eq!(table.get(a, a), 0);
            for b in Cell::iter_all() {
                assert_eq!(table.get(a, b), table.get(b, a));
            }
        }
    }

    #[test]
    fn bounded_by_diameter() {
        let table = build_distance_table();
        assert_eq!(table.diameter(), 8);

        for a in Cell::iter_all() {
            for b in Cell::iter_all() {
                let dx = a.column().wrapping_distance(b.column());
                let dy = a.row().wrapping_distance(b.row());
                assert!(dx <= 4 && dy <= 4);
                assert_eq!(table[(a, b)], (dx + dy) as u32, "{a} -> {b}");
            }
        }
    }

    #[test]
    fn row_histogram() {
        // Distances split into independent wrapped axes, so the row histogram is
        // the convolution of the 8-cycle histogram with itself.
        let axis = cycle_histogram();
        assert_eq!(axis, [1, 2, 2, 2, 1]);

        let mut expected = [0u32; 9];
        for (dx, a) in axis.iter().enumerate() {
            for (dy, b) in axis.iter().enumerate() {
                expected[dx + dy] += a * b;
            }
        }
        assert_eq!(expected, [1, 4, 8, 12, 14, 12, 8, 4, 1]);

        let table = build_distance_table();
        for source in Cell::iter_all() {
            let mut hist = [0u32; 9];
            for &d in table.row(source) {
                hist[d as usize] += 1;
            }
            assert_eq!(hist, expected, "row {source}");
        }
    }

    #[test]
    fn neighbors_differ_by_exactly_one() {
        let table = build_distance_table();
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..1_000 {
            let a = cell(rng.gen_range(0..CELL_COUNT));
            let b = cell(rng.gen_range(0..CELL_COUNT));

            for n in torus_neighbors(b) {
                // The torus has even side length, so it is bipartite.
                assert_eq!(table.get(a, b).abs_diff(table.get(a, n)), 1);
            }
        }
    }

    #[test]
    fn triangle_inequality() {
        let table = build_distance_table();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1_000 {
            let a = cell(rng.gen_range(0..CELL_COUNT));
            let b = cell(rng.gen_range(0..CELL_COUNT));
            let c = cell(rng.gen_range(0..CELL_COUNT));
            assert!(table.get(a, c) <= table.get(a, b) + table.get(b, c));
        }
    }

    #[test]
    fn flat_view_is_row_major() {
        let table = build_distance_table();
        let flat = table.as_flat();

        for a in Cell::iter_all() {
            for b in Cell::iter_all() {
                assert_eq!(flat[a.index() * CELL_COUNT + b.index()], table.get(a, b));
            }
        }
    }

    #[test]
    fn build_is_deterministic() {
        let first = build_distance_table();
        let second = build_distance_table();
        assert_eq!(bytemuck::bytes_of(&first), bytemuck::bytes_of(&second));
    }
}
