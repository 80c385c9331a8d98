use std::{
    fmt::Display,
    ops::{Index, IndexMut},
};

pub use num_enum::{IntoPrimitive, TryFromPrimitive, UnsafeFromPrimitive};
use thiserror::Error;

/// Width and height of the board. Both axes wrap around at this size.
pub const GRID_SIZE: u8 = 8;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

macro_rules! impl_to_usize {
    ($type:ty, $repr:ty) => {
        impl From<$type> for usize {
            fn from(value: $type) -> usize {
                let value = <$repr>::from(value);
                value as usize
            }
        }
    };
}

macro_rules! impl_array_indexing {
    ($type:ty,  $len:expr) => {
        impl<T> Index<$type> for [T; $len] {
            type Output = T;

            fn index(&self, index: $type) -> &Self::Output {
                let index = usize::from(index);
                &self[index]
            }
        }

        impl<T> IndexMut<$type> for [T; $len] {
            fn index_mut(&mut self, index: $type) -> &mut Self::Output {
                let index = usize::from(index);
                &mut self[index]
            }
        }
    };
}

macro_rules! impl_axis {
    ($type:ident, $itertype:ident, $prefix:literal) => {
        impl $type {
            const MIN: Self = Self::from_wrapped(0);
            const MAX: Self = Self::from_wrapped(GRID_SIZE - 1);

            const fn from_wrapped(v: u8) -> Self {
                // Safety: the value is reduced modulo `GRID_SIZE`, which is the variant count.
                unsafe { std::mem::transmute::<u8, Self>(v % GRID_SIZE) }
            }

            /// Steps one place towards higher coordinates, wrapping from the last to the first.
            #[must_use]
            pub const fn wrapping_up(self) -> Self {
                Self::from_wrapped(self as u8 + 1)
            }

            /// Steps one place towards lower coordinates, wrapping from the first to the last.
            #[must_use]
            pub const fn wrapping_down(self) -> Self {
                Self::from_wrapped(self as u8 + GRID_SIZE - 1)
            }

            /// Number of steps between `self` and `other` along this axis,
            /// taking the shorter way around.
            pub const fn wrapping_distance(self, other: Self) -> u8 {
                let d = (self as u8).abs_diff(other as u8);
                if d > GRID_SIZE - d {
                    GRID_SIZE - d
                } else {
                    d
                }
            }

            pub fn range_inclusive(a: Self, b: Self) -> $itertype {
                let a = u8::from(a);
                let b = u8::from(b);

                $itertype { range: a..=b }
            }

            pub fn iter_all() -> $itertype {
                Self::range_inclusive(Self::MIN, Self::MAX)
            }
        }

        pub struct $itertype {
            range: std::ops::RangeInclusive<u8>,
        }

        impl Iterator for $itertype {
            type Item = $type;

            fn next(&mut self) -> Option<Self::Item> {
                self.range.next().map(|v| {
                    // Safety: `Self::range` always includes only valid values.
                    unsafe { <$type>::unchecked_transmute_from(v) }
                })
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.range.size_hint()
            }
        }

        impl DoubleEndedIterator for $itertype {
            fn next_back(&mut self) -> Option<Self::Item> {
                self.range.next_back().map(|v| {
                    // Safety: `Self::range` always includes only valid values.
                    unsafe { <$type>::unchecked_transmute_from(v) }
                })
            }
        }

        impl ExactSizeIterator for $itertype {}

        impl Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}{}", $prefix, u8::from(*self))
            }
        }

        impl_to_usize!($type, u8);
        impl_array_indexing!($type, 8);
    };
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum CellError {
    #[error("cell index {0} is out of range (expected 0..64)")]
    IndexOutOfRange(usize),

    #[error("coordinates ({x}, {y}) are out of range (expected 0..8 on both axes)")]
    CoordsOutOfRange { x: u8, y: u8 },
}

/// Horizontal coordinate (`x`).
#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, TryFromPrimitive, IntoPrimitive, UnsafeFromPrimitive, Hash,
)]
#[repr(u8)]
pub enum Column {
    C0,
    C1,
    C2,
    C3,
    C4,
    C5,
    C6,
    C7,
}

impl_axis!(Column, ColumnIter, 'x');

/// Vertical coordinate (`y`).
#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, TryFromPrimitive, IntoPrimitive, UnsafeFromPrimitive, Hash,
)]
#[repr(u8)]
pub enum Row {
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
}

impl_axis!(Row, RowIter, 'y');

/// A cell of the board, stored as its row-major index `8 * y + x`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Cell(u8);

impl_array_indexing!(Cell, 64);

impl From<Cell> for u8 {
    fn from(value: Cell) -> u8 {
        value.0
    }
}

impl From<Cell> for usize {
    fn from(value: Cell) -> usize {
        value.0 as usize
    }
}

impl TryFrom<usize> for Cell {
    type Error = CellError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u8> for Cell {
    type Error = CellError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as usize)
    }
}

impl Cell {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(CELL_COUNT as u8 - 1);

    pub fn new(index: usize) -> Result<Self, CellError> {
        if index < CELL_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(CellError::IndexOutOfRange(index))
        }
    }

    pub fn from_xy(x: u8, y: u8) -> Result<Self, CellError> {
        let column = Column::try_from_primitive(x).map_err(|_| CellError::CoordsOutOfRange { x, y })?;
        let row = Row::try_from_primitive(y).map_err(|_| CellError::CoordsOutOfRange { x, y })?;
        Ok(Self::from_column_row(column, row))
    }

    pub const fn from_column_row(column: Column, row: Row) -> Self {
        Self(row as u8 * GRID_SIZE + column as u8)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn column(self) -> Column {
        let x = self.0 % GRID_SIZE;
        // Safety: `x` is always lower than `GRID_SIZE`.
        unsafe { Column::unchecked_transmute_from(x) }
    }

    pub fn row(self) -> Row {
        let y = self.0 / GRID_SIZE;
        // Safety: `self.0` is lower than `CELL_COUNT`, so `y` is lower than `GRID_SIZE`.
        unsafe { Row::unchecked_transmute_from(y) }
    }

    pub fn xy(self) -> (u8, u8) {
        (self.column().into(), self.row().into())
    }

    /// Moves by `(dx, dy)`, wrapping around both axes.
    #[must_use]
    pub fn wrapping_offset(self, dx: i8, dy: i8) -> Self {
        let (x, y) = self.xy();
        let x = (x as i16 + dx as i16).rem_euclid(GRID_SIZE as i16) as u8;
        let y = (y as i16 + dy as i16).rem_euclid(GRID_SIZE as i16) as u8;
        Self(y * GRID_SIZE + x)
    }

    pub fn iter_all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..CELL_COUNT as u8).map(Self)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}, {})", self.0, self.column(), self.row())
    }
}
