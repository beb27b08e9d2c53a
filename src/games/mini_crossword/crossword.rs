use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::Path;

use linked_hash_map::LinkedHashMap;

use crate::collections::{Coord, Grid};
use crate::error::{ParseError, ParseErrorType, ParsePuzzleError, PuzzleFromFileError, UNEXPECTED_END};
use crate::file::read_to_string;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cell {
    Block,
    Empty,
    /// A letter given in the puzzle, lowercase
    Letter(char),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    fn letter(self) -> char {
        match self {
            Direction::Across => 'A',
            Direction::Down => 'D',
        }
    }

    fn from_letter(c: char) -> Option<Direction> {
        match c.to_ascii_uppercase() {
            'A' => Some(Direction::Across),
            'D' => Some(Direction::Down),
            _ => None,
        }
    }
}

/// A run of two or more open cells that holds one answer
#[derive(Clone, Debug, PartialEq)]
pub struct Slot {
    number: usize,
    direction: Direction,
    cells: Vec<usize>,
}

impl Slot {
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// The clue label, such as `1A` or `4D`
    pub fn label(&self) -> String {
        format!("{}{}", self.number, self.direction.letter())
    }
}

/// A crossword grid with its numbered slots and any clues
pub struct Crossword {
    grid: Grid<Cell>,
    /// across slots first, each direction in number order
    slots: Vec<Slot>,
    /// clue text by slot label, in file order
    clues: LinkedHashMap<String, String>,
}

impl Crossword {
    pub fn new(grid: Grid<Cell>) -> Self {
        let slots = find_slots(&grid);
        Self {
            grid,
            slots,
            clues: LinkedHashMap::new(),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PuzzleFromFileError> {
        let crossword = Self::parse(&read_to_string(path)?)?;
        Ok(crossword)
    }

    /// Parses the grid, one row per line, then clue lines such as `1A: Flying mammal`.
    /// The clues may be separated from the grid by a blank line.
    pub fn parse(s: &str) -> Result<Self, ParsePuzzleError> {
        let mut lines = s.lines().enumerate().peekable();
        let mut rows = Vec::new();
        let mut row_lines = Vec::new();
        while let Some(&(i, line)) = lines.peek() {
            let line = line.trim();
            if line.is_empty() || line.contains(':') {
                break;
            }
            rows.push(parse_row(line, i + 1)?);
            row_lines.push(i + 1);
            lines.next();
        }
        if rows.is_empty() {
            return Err(UNEXPECTED_END.into());
        }
        let grid = Grid::from_rows(rows).map_err(|e| {
            ParseError::at_line(ParseErrorType::RaggedGrid, row_lines[e.row()])
        })?;
        let mut crossword = Self::new(grid);
        for (i, line) in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (label, clue) = parse_clue(line, i + 1)?;
            if crossword.slot(&label).is_none() {
                warn!("Clue {} does not match a slot in the grid", label);
            }
            crossword.clues.insert(label, clue);
        }
        Ok(crossword)
    }

    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, label: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.label() == label)
    }

    pub fn clue(&self, slot: &Slot) -> Option<&str> {
        self.clues.get(&slot.label()).map(String::as_str)
    }
}

fn parse_row(line: &str, line_number: usize) -> Result<Vec<Cell>, ParseError> {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '#' => Ok(Cell::Block),
            '.' | '_' => Ok(Cell::Empty),
            c if c.is_ascii_alphabetic() => Ok(Cell::Letter(c.to_ascii_lowercase())),
            c => Err(ParseError::new(ParseErrorType::InvalidCell, c, line_number)),
        })
        .collect()
}

/// Splits `12A: clue text` into a normalised label and the clue
fn parse_clue(line: &str, line_number: usize) -> Result<(String, String), ParseError> {
    let invalid = || ParseError::new(ParseErrorType::InvalidToken, line, line_number);
    let colon = line.find(':').ok_or_else(invalid)?;
    let label = line[..colon].trim();
    let direction = label
        .chars()
        .last()
        .and_then(Direction::from_letter)
        .ok_or_else(invalid)?;
    let number: usize = label[..label.len() - 1]
        .trim()
        .parse()
        .map_err(|_| invalid())?;
    let clue = line[colon + 1..].trim().to_string();
    Ok((format!("{}{}", number, direction.letter()), clue))
}

fn is_open(grid: &Grid<Cell>, coord: Option<Coord>) -> bool {
    coord.map_or(false, |coord| grid[coord] != Cell::Block)
}

/// Numbers the slots in reading order: a cell gets the next number if an across
/// or a down slot starts there
fn find_slots(grid: &Grid<Cell>) -> Vec<Slot> {
    let (width, height) = (grid.width(), grid.height());
    let mut across = Vec::new();
    let mut down = Vec::new();
    let mut number = 0;
    for (coord, &cell) in grid.iter_coord() {
        if cell == Cell::Block {
            continue;
        }
        let starts = |d_col: isize, d_row: isize| {
            !is_open(grid, coord.offset(-d_col, -d_row, width, height))
                && is_open(grid, coord.offset(d_col, d_row, width, height))
        };
        let (starts_across, starts_down) = (starts(1, 0), starts(0, 1));
        if !starts_across && !starts_down {
            continue;
        }
        number += 1;
        let run = |direction, d_col, d_row| {
            let mut cells = Vec::new();
            let mut next = Some(coord);
            while let Some(c) = next.filter(|&c| grid[c] != Cell::Block) {
                cells.push(grid.index_of(c));
                next = c.offset(d_col, d_row, width, height);
            }
            Slot {
                number,
                direction,
                cells,
            }
        };
        if starts_across {
            across.push(run(Direction::Across, 1, 0));
        }
        if starts_down {
            down.push(run(Direction::Down, 0, 1));
        }
    }
    across.extend(down);
    across
}

impl Display for Crossword {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Block => '#',
                    Cell::Empty => '.',
                    Cell::Letter(c) => c.to_ascii_uppercase(),
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{ParseErrorType, ParsePuzzleError};
    use crate::games::mini_crossword::{Cell, Crossword, Direction};

    #[test]
    fn numbering() {
        let crossword = Crossword::parse("#..\n...\n..#\n").unwrap();
        let slots: Vec<_> = crossword
            .slots()
            .iter()
            .map(|slot| (slot.label(), slot.len()))
            .collect();
        let expected = vec![("1A", 2), ("3A", 3), ("4A", 2), ("1D", 3), ("2D", 2), ("3D", 2)];
        let expected: Vec<_> = expected
            .into_iter()
            .map(|(label, len)| (label.to_string(), len))
            .collect();
        assert_eq!(expected, slots);
        let slot = crossword.slot("1D").unwrap();
        assert_eq!(Direction::Down, slot.direction());
        assert_eq!(&[1, 4, 7], slot.cells());
    }

    #[test]
    fn clues() {
        let crossword = Crossword::parse(".a.\n...\n...\n\n1A: Flying mammal\n 5a : Got married\n").unwrap();
        assert_eq!(Cell::Letter('a'), crossword.grid()[1]);
        let slot = crossword.slot("1A").unwrap();
        assert_eq!(Some("Flying mammal"), crossword.clue(slot));
        let slot = crossword.slot("5A").unwrap();
        assert_eq!(Some("Got married"), crossword.clue(slot));
        assert_eq!(None, crossword.clue(crossword.slot("1D").unwrap()));
        assert_eq!(".A.\n...\n...\n", crossword.to_string());
    }

    #[test]
    fn clues_without_blank_line() {
        let crossword = Crossword::parse("..\n..\n1D: First\n").unwrap();
        assert_eq!(2, crossword.grid().height());
        assert_eq!(Some("First"), crossword.clue(crossword.slot("1D").unwrap()));
    }

    #[test]
    fn errors() {
        match Crossword::parse("..\n.?\n") {
            Err(ParsePuzzleError::Parse(e)) => {
                assert_eq!(ParseErrorType::InvalidCell, e.error_type());
                assert_eq!(Some(2), e.line());
            }
            _ => panic!("expected a parse error"),
        }
        match Crossword::parse("..\n.\n") {
            Err(ParsePuzzleError::Parse(e)) => assert_eq!(ParseErrorType::RaggedGrid, e.error_type()),
            _ => panic!("expected a parse error"),
        }
        match Crossword::parse("..\n..\n\nA1 clue\n") {
            Err(ParsePuzzleError::Parse(e)) => {
                assert_eq!(ParseErrorType::InvalidToken, e.error_type());
                assert_eq!(Some(4), e.line());
            }
            _ => panic!("expected a parse error"),
        }
    }
}
