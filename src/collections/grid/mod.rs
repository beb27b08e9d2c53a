//! A rectangular container for puzzle boards

mod coord;

pub use self::coord::Coord;

use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Deref, Index, IndexMut};

const ORTHOGONAL: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A value that can be converted to an element index given the grid width
pub trait AsGridIndex: Copy {
    fn as_grid_index(self, width: usize) -> usize;
}

impl AsGridIndex for usize {
    fn as_grid_index(self, _width: usize) -> usize {
        self
    }
}

impl AsGridIndex for Coord {
    fn as_grid_index(self, width: usize) -> usize {
        self.row() * width + self.col()
    }
}

/// A container of elements laid out in rows, stored in row-major order
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    elements: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a grid of the given size filled with the default value
    pub fn with_size(width: usize, height: usize) -> Self
    where
        T: Clone + Default,
    {
        Self::with_value(width, height, T::default())
    }

    /// Creates a square grid filled with the default value
    pub fn square(width: usize) -> Self
    where
        T: Clone + Default,
    {
        Self::with_size(width, width)
    }

    /// Creates a grid of the given size filled with a value
    pub fn with_value(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            height,
            elements: vec![value; width * height],
        }
    }

    /// Creates a grid from its rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, RaggedRows> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().position(|row| row.len() != width) {
            return Err(RaggedRows { row });
        }
        let elements = rows.into_iter().flatten().collect();
        Ok(Self {
            width,
            height,
            elements,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    pub fn coord_at(&self, index: usize) -> Coord {
        assert!(index < self.elements.len());
        Coord::new(index % self.width, index / self.width)
    }

    pub fn index_of(&self, coord: Coord) -> usize {
        assert!(coord.col() < self.width && coord.row() < self.height);
        coord.as_grid_index(self.width)
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        if coord.col() < self.width && coord.row() < self.height {
            Some(&self[coord])
        } else {
            None
        }
    }

    /// Returns an iterator over the rows of the grid
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.elements.chunks(self.width.max(1))
    }

    /// Returns an iterator over every element, paired with its `Coord`
    pub fn iter_coord(&self) -> impl Iterator<Item = (Coord, &T)> {
        let width = self.width;
        self.elements
            .iter()
            .enumerate()
            .map(move |(i, e)| (Coord::new(i % width, i / width), e))
    }

    /// The coordinates sharing an edge with `coord`
    pub fn orthogonal_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> {
        self.neighbors_in(coord, &ORTHOGONAL)
    }

    /// The coordinates sharing an edge or a corner with `coord`
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> {
        self.neighbors_in(coord, &ALL_DIRECTIONS)
    }

    fn neighbors_in(
        &self,
        coord: Coord,
        directions: &'static [(isize, isize)],
    ) -> impl Iterator<Item = Coord> {
        let (width, height) = (self.width, self.height);
        directions
            .iter()
            .filter_map(move |&(d_col, d_row)| coord.offset(d_col, d_row, width, height))
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            elements: self.elements.iter().map(f).collect(),
        }
    }
}

impl<T> Deref for Grid<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl<T, I: AsGridIndex> Index<I> for Grid<T> {
    type Output = T;

    fn index(&self, index: I) -> &Self::Output {
        &self.elements[index.as_grid_index(self.width)]
    }
}

impl<T, I: AsGridIndex> IndexMut<I> for Grid<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.elements[index.as_grid_index(self.width)]
    }
}

impl<T> Display for Grid<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let len = self
            .elements
            .iter()
            .map(|e| e.to_string().len())
            .max()
            .unwrap_or(0);
        for row in self.rows() {
            for (i, element) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>1$}", element, len)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(PartialEq)]
pub struct RaggedRows {
    row: usize,
}

impl RaggedRows {
    /// The 0-based index of the first row with a different length
    pub fn row(&self) -> usize {
        self.row
    }
}

impl Debug for RaggedRows {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Row {} has a different length than the first row", self.row)
    }
}
