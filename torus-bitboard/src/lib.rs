use bytemuck::{Pod, Zeroable};
use std::fmt::Display;
use torus_types::{Cell, Column, Row};

/// A set of cells, bit `i` standing for the cell with index `i`.
///
/// The directional shifts treat the board as a torus: cells pushed over an
/// edge re-enter on the opposite side instead of falling off.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Zeroable, Pod)]
#[repr(C)]
pub struct BitBoard(u64);

impl BitBoard {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self(u64::MAX);
    const COLUMN_0: Self = Self(0x0101010101010101);
    const COLUMN_7: Self = Self(0x8080808080808080);

    pub fn from_cell(cell: Cell) -> Self {
        let mut board = Self::EMPTY;
        board.set(cell);
        board
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn is_full(self) -> bool {
        self.0 == u64::MAX
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn complement(self) -> Self {
        Self(!self.0)
    }

    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn set(&mut self, cell: Cell) {
        self.0 |= 1u64 << cell.index();
    }

    pub fn clear(&mut self, cell: Cell) {
        self.0 &= !(1u64 << cell.index());
    }

    pub fn get(&self, cell: Cell) -> bool {
        (self.0 >> cell.index()) & 1 == 1
    }

    /// Clears the least significant 1-bit and returns its cell
    pub fn pop(&mut self) -> Option<Cell> {
        if self.is_empty() {
            return None;
        }

        let idx = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Cell::new(idx).ok()
    }

    pub fn iter_cells(self) -> impl Iterator<Item = Cell> {
        let mut b = self;
        std::iter::from_fn(move || b.pop())
    }

    pub fn cell_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Moves every cell one row up (`y + 1`), row 7 wrapping to row 0.
    #[must_use]
    pub fn shifted_north(self) -> Self {
        Self(self.0.rotate_left(8))
    }

    /// Moves every cell one row down (`y - 1`), row 0 wrapping to row 7.
    #[must_use]
    pub fn shifted_south(self) -> Self {
        Self(self.0.rotate_right(8))
    }

    /// Moves every cell one column right (`x + 1`), column 7 wrapping to column 0.
    #[must_use]
    pub fn shifted_east(self) -> Self {
        let stay = (self.0 & !Self::COLUMN_7.0) << 1;
        let wrap = (self.0 & Self::COLUMN_7.0) >> 7;
        Self(stay | wrap)
    }

    /// Moves every cell one column left (`x - 1`), column 0 wrapping to column 7.
    #[must_use]
    pub fn shifted_west(self) -> Self {
        let stay = (self.0 & !Self::COLUMN_0.0) >> 1;
        let wrap = (self.0 & Self::COLUMN_0.0) << 7;
        Self(stay | wrap)
    }

    /// All cells one toroidal step away from any cell of `self`.
    #[must_use]
    pub fn neighbors(self) -> Self {
        self.shifted_north()
            .union(self.shifted_south())
            .union(self.shifted_east())
            .union(self.shifted_west())
    }
}

impl Display for BitBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in Row::iter_all() {
            for column in Column::iter_all() {
                let cell = Cell::from_column_row(column, row);
                write!(f, "{} ", if self.get(cell) { "X" } else { "." })?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------------------------------------------------
// ---------------------------------------------------------------------------------------------------------------------
// # TESTS -------------------------------------------------------------------------------------------------------------
// ---------------------------------------------------------------------------------------------------------------------
// ---------------------------------------------------------------------------------------------------------------------
