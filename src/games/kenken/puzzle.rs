use std::fmt;
use std::fmt::Display;
use std::path::Path;

use crate::collections::{Coord, Grid, ValueSet};
use crate::config::constants::KENKEN_MAX_SIZE;
use crate::error::{InvalidPuzzle, ParsePuzzleError, PuzzleFromFileError};
use crate::file::read_to_string;
use crate::games::kenken::parse::parse_puzzle;
use crate::games::kenken::{Cage, CageId, Value};

/// Cage IDs are written as the letters A-Z
const MAX_CAGES: usize = 26;

/// An unsolved KenKen puzzle
#[derive(Debug, PartialEq)]
pub struct Puzzle {
    /// the width and height of the puzzle
    width: usize,
    /// contains all cages in the puzzle
    cages: Vec<Cage>,
    /// the cage of every cell
    cage_map: Grid<CageId>,
}

impl Puzzle {
    /// creates a puzzle with a specified width and set of cages
    pub fn new(width: usize, cages: Vec<Cage>) -> Result<Self, InvalidPuzzle> {
        if width == 0 || width > KENKEN_MAX_SIZE {
            return Err(InvalidPuzzle::new(format!(
                "puzzle width must be between 1 and {}, found {}",
                KENKEN_MAX_SIZE, width
            )));
        }
        if cages.len() > MAX_CAGES {
            return Err(InvalidPuzzle::new(format!(
                "puzzle has {} cages, no more than {} are allowed",
                cages.len(),
                MAX_CAGES
            )));
        }
        let cage_map = cage_map(width, &cages)?;
        Ok(Self {
            width,
            cages,
            cage_map,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PuzzleFromFileError> {
        let puzzle = Self::parse(&read_to_string(path)?)?;
        Ok(puzzle)
    }

    pub fn parse(s: &str) -> Result<Self, ParsePuzzleError> {
        parse_puzzle(s)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cell_count(&self) -> usize {
        self.width.pow(2)
    }

    pub fn cages(&self) -> &[Cage] {
        &self.cages
    }

    pub fn cage_map(&self) -> &Grid<CageId> {
        &self.cage_map
    }

    /// Returns true if `solution` is a latin square that satisfies every cage
    pub fn verify_solution(&self, solution: &Grid<Value>) -> bool {
        if solution.width() != self.width || !solution.is_square() {
            return false;
        }
        if !solution.iter().all(|&v| v >= 1 && v <= self.width) {
            return false;
        }
        let latin = (0..self.width).all(|i| {
            let mut row = ValueSet::new(self.width);
            let mut col = ValueSet::new(self.width);
            (0..self.width).all(|j| {
                row.insert(solution[Coord::new(j, i)]) && col.insert(solution[Coord::new(i, j)])
            })
        });
        latin
            && self.cages.iter().all(|cage| {
                let values: Vec<Value> = cage.cell_ids().iter().map(|&id| solution[id]).collect();
                cage.is_satisfied(&values)
            })
    }
}

/// Create a grid where each value is the index of the cage containing that cell
fn cage_map(width: usize, cages: &[Cage]) -> Result<Grid<CageId>, InvalidPuzzle> {
    let mut cage_map: Grid<Option<CageId>> = Grid::square(width);
    for (i, cage) in cages.iter().enumerate() {
        for &cell in cage.cell_ids() {
            if cell >= cage_map.len() {
                return Err(InvalidPuzzle::new(format!(
                    "cell {} is outside a puzzle of width {}",
                    cell, width
                )));
            }
            if cage_map[cell].replace(i).is_some() {
                return Err(InvalidPuzzle::new(format!(
                    "cell {} is in more than one cage",
                    cell
                )));
            }
        }
    }
    if let Some(cell) = cage_map.iter().position(Option::is_none) {
        return Err(InvalidPuzzle::new(format!("cell {} is not in a cage", cell)));
    }
    Ok(cage_map.map(|cage| cage.unwrap_or_default()))
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.width)?;
        for row in self.cage_map.rows() {
            for &cage in row {
                write!(f, "{}", (b'A' + cage as u8) as char)?;
            }
            writeln!(f)?;
        }
        for cage in &self.cages {
            write!(f, "{}", cage.target())?;
            if let Some(s) = cage.operator().symbol() {
                write!(f, "{}", s)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::collections::Grid;
    use crate::games::kenken::{Cage, Operator, Puzzle};

    const PUZZLE: &str = "\
        4\n\
        AABC\n\
        DEBC\n\
        DFFG\n\
        HIIG\n\
        3+ 2- 2/ 12* 4 5+ 2- 2 4*\n";

    fn solution() -> Grid<usize> {
        Grid::from_rows(vec![
            vec![1, 2, 3, 4],
            vec![3, 4, 1, 2],
            vec![4, 3, 2, 1],
            vec![2, 1, 4, 3],
        ])
        .unwrap()
    }

    #[test]
    fn verify_solution() {
        let puzzle = Puzzle::parse(PUZZLE).unwrap();
        assert!(puzzle.verify_solution(&solution()));
        let mut wrong = solution();
        wrong[0] = 2;
        wrong[1] = 1;
        assert!(!puzzle.verify_solution(&wrong));
        assert!(!puzzle.verify_solution(&Grid::square(4)));
    }

    #[test]
    fn display_round_trip() {
        let puzzle = Puzzle::parse(PUZZLE).unwrap();
        let s = puzzle.to_string();
        assert!(s.starts_with("4\nAABC\nDEBC\nDFFG\nHIIG\n3+\n2-\n"));
        assert_eq!(puzzle, Puzzle::parse(&s).unwrap());
    }

    #[test]
    fn cells_must_be_covered_once() {
        let overlapping = vec![
            Cage::new(vec![0, 1], Operator::Add, 3).unwrap(),
            Cage::new(vec![1, 2, 3], Operator::Add, 6).unwrap(),
        ];
        assert!(Puzzle::new(2, overlapping).is_err());
        let missing = vec![Cage::new(vec![0, 1, 2], Operator::Add, 4).unwrap()];
        assert!(Puzzle::new(2, missing).is_err());
        let outside = vec![Cage::new(vec![0, 1, 2, 3, 4], Operator::Add, 6).unwrap()];
        assert!(Puzzle::new(2, outside).is_err());
    }
}
