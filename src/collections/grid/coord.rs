use std::fmt;
use std::fmt::Debug;

/// A `Coord` struct represents coordinates of an element in a `Grid`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord([usize; 2]);

impl Coord {
    pub fn new(col: usize, row: usize) -> Self {
        Self([col, row])
    }

    pub fn col(self) -> usize {
        self.0[0]
    }

    pub fn row(self) -> usize {
        self.0[1]
    }

    /// Moves the coordinate by an offset, returning `None` if it would leave a
    /// `width` x `height` area
    pub fn offset(self, d_col: isize, d_row: isize, width: usize, height: usize) -> Option<Coord> {
        let col = self.col() as isize + d_col;
        let row = self.row() as isize + d_row;
        if col < 0 || row < 0 || col as usize >= width || row as usize >= height {
            return None;
        }
        Some(Coord::new(col as usize, row as usize))
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col(), self.row())
    }
}
