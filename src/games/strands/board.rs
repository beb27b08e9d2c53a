use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::Path;

use linked_hash_map::LinkedHashMap;

use crate::collections::{Coord, Grid};
use crate::config::constants::STRANDS_MAX_CELLS;
use crate::dictionary::Dictionary;
use crate::error::{
    InvalidPuzzle, ParseError, ParseErrorType, ParsePuzzleError, PuzzleFromFileError,
    UNEXPECTED_END,
};
use crate::file::read_to_string;

/// Cell indices of a word traced on the board, in letter order
pub type WordPath = Vec<usize>;

/// A Strands board of lowercase letters
#[derive(Debug)]
pub struct Board {
    letters: Grid<char>,
    hint: Option<String>,
}

impl Board {
    pub fn new(letters: Grid<char>) -> Result<Self, InvalidPuzzle> {
        if letters.is_empty() {
            return Err(InvalidPuzzle::new("Strands board is empty".into()));
        }
        if letters.len() > STRANDS_MAX_CELLS {
            return Err(InvalidPuzzle::new(format!(
                "Strands board has {} cells, no more than {} are allowed",
                letters.len(),
                STRANDS_MAX_CELLS
            )));
        }
        Ok(Self {
            letters,
            hint: None,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PuzzleFromFileError> {
        let board = Self::parse(&read_to_string(path)?)?;
        Ok(board)
    }

    /// Parses one row of letters per line. A line with a colon, such as
    /// `hint: Fly me to the moon`, is the theme hint.
    pub fn parse(s: &str) -> Result<Self, ParsePuzzleError> {
        let mut rows = Vec::new();
        let mut row_lines = Vec::new();
        let mut hint = None;
        for (i, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(colon) = line.find(':') {
                hint = Some(line[colon + 1..].trim().to_string());
                continue;
            }
            let row = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| {
                    if c.is_ascii_alphabetic() {
                        Ok(c.to_ascii_lowercase())
                    } else {
                        Err(ParseError::new(ParseErrorType::InvalidCell, c, i + 1))
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
            row_lines.push(i + 1);
        }
        if rows.is_empty() {
            return Err(UNEXPECTED_END.into());
        }
        let letters = Grid::from_rows(rows).map_err(|e| {
            ParseError::at_line(ParseErrorType::RaggedGrid, row_lines[e.row()])
        })?;
        let mut board = Self::new(letters)?;
        board.hint = hint;
        Ok(board)
    }

    pub fn letters(&self) -> &Grid<char> {
        &self.letters
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Every dictionary word of at least `min_len` letters that can be traced through
    /// touching cells without using a cell twice, with every path that traces it
    pub fn find_words(&self, dictionary: &Dictionary, min_len: usize) -> LinkedHashMap<String, Vec<WordPath>> {
        let mut finder = WordFinder {
            letters: &self.letters,
            dictionary,
            min_len,
            used: vec![false; self.letters.len()],
            path: Vec::new(),
            word: String::new(),
            found: LinkedHashMap::new(),
        };
        for cell in 0..self.letters.len() {
            finder.visit(cell);
        }
        debug!("Found {} words on the board", finder.found.len());
        finder.found
    }

    /// Returns true if the path touches two opposite sides of the board
    pub fn is_spangram(&self, path: &[usize]) -> bool {
        let coords: Vec<Coord> = path.iter().map(|&i| self.letters.coord_at(i)).collect();
        let (width, height) = (self.letters.width(), self.letters.height());
        let spans_columns = coords.iter().any(|c| c.col() == 0)
            && coords.iter().any(|c| c.col() == width - 1);
        let spans_rows = coords.iter().any(|c| c.row() == 0)
            && coords.iter().any(|c| c.row() == height - 1);
        spans_columns || spans_rows
    }
}

struct WordFinder<'a> {
    letters: &'a Grid<char>,
    dictionary: &'a Dictionary,
    min_len: usize,
    used: Vec<bool>,
    path: WordPath,
    word: String,
    found: LinkedHashMap<String, Vec<WordPath>>,
}

impl WordFinder<'_> {
    fn visit(&mut self, cell: usize) {
        self.used[cell] = true;
        self.path.push(cell);
        self.word.push(self.letters[cell]);
        if self.word.len() >= self.min_len && self.dictionary.contains(&self.word) {
            self.found
                .entry(self.word.clone())
                .or_insert_with(Vec::new)
                .push(self.path.clone());
        }
        if self.dictionary.is_prefix(&self.word) {
            let coord = self.letters.coord_at(cell);
            for next in self.letters.neighbors(coord) {
                let next = self.letters.index_of(next);
                if !self.used[next] {
                    self.visit(next);
                }
            }
        }
        self.word.pop();
        self.path.pop();
        self.used[cell] = false;
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.letters.rows() {
            let line: Vec<String> = row.iter().map(|c| c.to_ascii_uppercase().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        if let Some(hint) = &self.hint {
            writeln!(f, "Hint: {}", hint)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::dictionary::Dictionary;
    use crate::error::{ParseErrorType, ParsePuzzleError};
    use crate::games::strands::Board;

    #[test]
    fn find_words() {
        let board = Board::parse("wolf\nrain\nsnow\n").unwrap();
        let dictionary = Dictionary::from_words(vec![
            "wolf", "rain", "snow", "lion", "rail", "nail", "sown", "wars", "loin", "fair", "oil",
        ]);
        let found = board.find_words(&dictionary, 4);
        let words: Vec<_> = found.keys().map(String::as_str).collect();
        assert_eq!(
            vec!["wolf", "wars", "loin", "lion", "rail", "rain", "snow", "nail"],
            words
        );
        assert_eq!(&vec![vec![0, 1, 2, 3]], &found["wolf"]);
        assert_eq!(2, found["rain"].len());
    }

    #[test]
    fn spangram() {
        let board = Board::parse("abc\ndef\nghi\n").unwrap();
        assert!(!board.is_spangram(&[0, 1]));
        assert!(board.is_spangram(&[0, 1, 2]));
        assert!(board.is_spangram(&[1, 4, 7]));
        assert!(!board.is_spangram(&[4, 5, 8]));
    }

    #[test]
    fn parse() {
        let board = Board::parse("hint: Animals\nw o l f\nr a i n\n").unwrap();
        assert_eq!(Some("Animals"), board.hint());
        assert_eq!('n', board.letters()[7]);
        assert_eq!("W O L F\nR A I N\nHint: Animals\n", board.to_string());
        match Board::parse("wolf\nra1n\n") {
            Err(ParsePuzzleError::Parse(e)) => {
                assert_eq!(ParseErrorType::InvalidCell, e.error_type());
                assert_eq!(Some(2), e.line());
            }
            _ => panic!("expected a parse error"),
        }
        let big = "abcdefghi\n".repeat(8);
        assert!(matches!(Board::parse(&big), Err(ParsePuzzleError::InvalidPuzzle(_))));
    }
}
