use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::Path;

use itertools::Itertools;

use crate::collections::{Coord, Grid, ValueSet};
use crate::config::constants::SUDOKU_MAX_SIZE;
use crate::error::{
    InvalidPuzzle, ParseError, ParseErrorType, ParsePuzzleError, PuzzleFromFileError,
    UNEXPECTED_END,
};
use crate::file::read_to_string;

/// A cell value, with 0 for an empty cell
pub type Value = usize;

/// A Sudoku grid, partially or completely filled
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    box_width: usize,
    cells: Grid<Value>,
}

impl Board {
    pub fn new(cells: Grid<Value>) -> Result<Self, InvalidPuzzle> {
        let size = cells.width();
        if !cells.is_square() || size == 0 {
            return Err(InvalidPuzzle::new(format!(
                "Sudoku must be square, found {}x{}",
                cells.width(),
                cells.height()
            )));
        }
        if size > SUDOKU_MAX_SIZE {
            return Err(InvalidPuzzle::new(format!(
                "Sudoku size {} is more than {}",
                size, SUDOKU_MAX_SIZE
            )));
        }
        let box_width = box_width(size).ok_or_else(|| {
            InvalidPuzzle::new(format!("Sudoku size {} is not a square number", size))
        })?;
        if let Some(&value) = cells.iter().find(|&&value| value > size) {
            return Err(InvalidPuzzle::new(format!(
                "value {} is too big for a Sudoku of size {}",
                value, size
            )));
        }
        Ok(Self { box_width, cells })
    }

    /// An empty board
    pub fn empty(size: usize) -> Result<Self, InvalidPuzzle> {
        Self::new(Grid::square(size))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PuzzleFromFileError> {
        let board = Self::parse(&read_to_string(path)?)?;
        Ok(board)
    }

    /// Parses one line per row. Blanks are `.`, `0` or `_`. Spaces and the box
    /// separators `|`, `-` and `+` are ignored.
    pub fn parse(s: &str) -> Result<Self, ParsePuzzleError> {
        let mut rows = Vec::new();
        let mut row_lines = Vec::new();
        for (i, line) in s.lines().enumerate() {
            let row = parse_row(line, i + 1)?;
            if !row.is_empty() {
                rows.push(row);
                row_lines.push(i + 1);
            }
        }
        if rows.is_empty() {
            return Err(UNEXPECTED_END.into());
        }
        let cells = Grid::from_rows(rows).map_err(|e| {
            ParseError::at_line(ParseErrorType::RaggedGrid, row_lines[e.row()])
        })?;
        Ok(Self::new(cells)?)
    }

    pub fn size(&self) -> usize {
        self.cells.width()
    }

    pub fn box_width(&self) -> usize {
        self.box_width
    }

    pub fn cells(&self) -> &Grid<Value> {
        &self.cells
    }

    pub(crate) fn set(&mut self, index: usize, value: Value) {
        self.cells[index] = value;
    }

    /// The values that can go in a cell without repeating one in its row, column or box
    pub fn valid_numbers(&self, coord: Coord) -> ValueSet {
        let size = self.size();
        let mut valid = ValueSet::with_all(size);
        for k in 0..size {
            valid.remove(self.cells[Coord::new(k, coord.row())]);
            valid.remove(self.cells[Coord::new(coord.col(), k)]);
        }
        let col_start = coord.col() / self.box_width * self.box_width;
        let row_start = coord.row() / self.box_width * self.box_width;
        for row in row_start..row_start + self.box_width {
            for col in col_start..col_start + self.box_width {
                valid.remove(self.cells[Coord::new(col, row)]);
            }
        }
        valid
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value == 0).count()
    }

    /// Returns true if every cell is filled and no row, column or box repeats a value
    pub fn is_solved(&self) -> bool {
        if self.empty_count() > 0 {
            return false;
        }
        let units = Units::new(self.size(), self.box_width);
        units.units().iter().all(|unit| {
            let mut seen = ValueSet::new(self.size());
            unit.iter().all(|&i| seen.insert(self.cells[i]))
        })
    }
}

fn box_width(size: usize) -> Option<usize> {
    (1..=size).find(|w| w * w == size)
}

fn parse_row(line: &str, line_number: usize) -> Result<Vec<Value>, ParseError> {
    let mut row = Vec::new();
    for c in line.chars() {
        let value = match c {
            ' ' | '\t' | '|' | '-' | '+' => continue,
            '.' | '0' | '_' => 0,
            c => match c.to_digit(36) {
                Some(d) => d as Value,
                None => return Err(ParseError::new(ParseErrorType::InvalidCell, c, line_number)),
            },
        };
        row.push(value);
    }
    Ok(row)
}

fn value_char(value: Value) -> char {
    if value == 0 {
        return '.';
    }
    std::char::from_digit(value as u32, 36)
        .map_or('?', |c| c.to_ascii_uppercase())
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let bw = self.box_width;
        let separator = (0..bw)
            .map(|b| "-".repeat(2 * bw + 1 - usize::from(b == 0) - usize::from(b == bw - 1)))
            .join("+");
        for (i, row) in self.cells.rows().enumerate() {
            if i > 0 && i % bw == 0 {
                writeln!(f, "{}", separator)?;
            }
            let line = row
                .chunks(bw)
                .map(|chunk| chunk.iter().map(|&v| value_char(v)).join(" "))
                .join(" | ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// The rows, columns and boxes of a board, as cell indices
pub(crate) struct Units {
    units: Vec<Vec<usize>>,
    peers: Vec<Vec<usize>>,
}

impl Units {
    pub fn new(size: usize, box_width: usize) -> Self {
        let mut units: Vec<Vec<usize>> = Vec::with_capacity(size * 3);
        for i in 0..size {
            units.push((0..size).map(|col| i * size + col).collect());
            units.push((0..size).map(|row| row * size + i).collect());
        }
        for box_row in 0..box_width {
            for box_col in 0..box_width {
                let unit = (0..size)
                    .map(|k| {
                        let row = box_row * box_width + k / box_width;
                        let col = box_col * box_width + k % box_width;
                        row * size + col
                    })
                    .collect();
                units.push(unit);
            }
        }
        let peers = (0..size * size)
            .map(|cell| {
                units
                    .iter()
                    .filter(|unit: &&Vec<usize>| unit.contains(&cell))
                    .flatten()
                    .copied()
                    .filter(|&peer| peer != cell)
                    .sorted()
                    .dedup()
                    .collect()
            })
            .collect();
        Self { units, peers }
    }

    pub fn units(&self) -> &[Vec<usize>] {
        &self.units
    }

    pub fn peers(&self, cell: usize) -> &[usize] {
        &self.peers[cell]
    }
}

#[cfg(test)]
mod tests {
    use crate::collections::Coord;
    use crate::error::{ParseErrorType, ParsePuzzleError};
    use crate::games::sudoku::board::{Board, Units};

    const PUZZLE: &str = "\
        53..7....\n\
        6..195...\n\
        .98....6.\n\
        8...6...3\n\
        4..8.3..1\n\
        7...2...6\n\
        .6....28.\n\
        ...419..5\n\
        ....8..79\n";

    #[test]
    fn parse() {
        let board = Board::parse(PUZZLE).unwrap();
        assert_eq!(9, board.size());
        assert_eq!(3, board.box_width());
        assert_eq!(5, board.cells()[Coord::new(0, 0)]);
        assert_eq!(0, board.cells()[Coord::new(2, 0)]);
        assert_eq!(51, board.empty_count());
    }

    #[test]
    fn parse_with_separators() {
        let s = "1 . | . 4\n. 4 | 1 .\n----+----\n. 1 | 4 .\n4 . | . 1\n";
        let board = Board::parse(s).unwrap();
        assert_eq!(4, board.size());
        assert_eq!(2, board.box_width());
        assert_eq!(4, board.cells()[Coord::new(3, 0)]);
    }

    #[test]
    fn parse_invalid_cell() {
        match Board::parse("12\n3?\n") {
            Err(ParsePuzzleError::Parse(e)) => {
                assert_eq!(ParseErrorType::InvalidCell, e.error_type());
                assert_eq!(Some(2), e.line());
            }
            _ => panic!("expected a parse error"),
        }
    }

    #[test]
    fn parse_ragged() {
        match Board::parse("1234\n123\n") {
            Err(ParsePuzzleError::Parse(e)) => {
                assert_eq!(ParseErrorType::RaggedGrid, e.error_type())
            }
            _ => panic!("expected a parse error"),
        }
    }

    #[test]
    fn parse_not_square_number() {
        assert!(matches!(
            Board::parse("123\n231\n312\n"),
            Err(ParsePuzzleError::InvalidPuzzle(_))
        ));
    }

    #[test]
    fn valid_numbers() {
        let board = Board::parse(PUZZLE).unwrap();
        let valid: Vec<_> = board.valid_numbers(Coord::new(2, 0)).iter().collect();
        assert_eq!(vec![1, 2, 4], valid);
    }

    #[test]
    fn display() {
        let board = Board::parse("1...\n..2.\n.3..\n...4\n").unwrap();
        let expected = "\
            1 . | . .\n\
            . . | 2 .\n\
            ----+----\n\
            . 3 | . .\n\
            . . | . 4\n";
        assert_eq!(expected, board.to_string());
    }

    #[test]
    fn units() {
        let units = Units::new(4, 2);
        assert_eq!(12, units.units().len());
        assert_eq!(&[1, 2, 3, 4, 5, 8, 12], units.peers(0));
    }
}
