use std::path::PathBuf;

use crate::games::GameKind;

const WORDS: &str = "words.txt";
const DICTIONARY: &str = "dictionary.txt";
const CATEGORIES: &str = "categories.txt";

/// Locations of the files the games read
#[derive(Clone, Debug)]
pub struct Paths {
    data_dir: PathBuf,
    input: Option<(GameKind, PathBuf)>,
}

impl Paths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            input: None,
        }
    }

    /// Reads the puzzle for one game from `path` instead of the data directory
    pub fn with_input(mut self, kind: GameKind, path: impl Into<PathBuf>) -> Self {
        self.input = Some((kind, path.into()));
        self
    }

    /// The Wordle word list
    pub fn words(&self) -> PathBuf {
        self.data_dir.join(WORDS)
    }

    /// The word list used to fill crosswords and find Strands words
    pub fn dictionary(&self) -> PathBuf {
        self.data_dir.join(DICTIONARY)
    }

    /// Known Connections categories
    pub fn categories(&self) -> PathBuf {
        self.data_dir.join(CATEGORIES)
    }

    /// The puzzle (or game state) file of a game
    pub fn puzzle(&self, kind: GameKind) -> PathBuf {
        match &self.input {
            Some((input_kind, path)) if *input_kind == kind => path.clone(),
            _ => self.data_dir.join(puzzle_file_name(kind)),
        }
    }
}

fn puzzle_file_name(kind: GameKind) -> &'static str {
    match kind {
        GameKind::Connections => "connections.txt",
        GameKind::KenKen => "kenken.txt",
        GameKind::MiniCrossword => "mini_crossword.txt",
        GameKind::Strands => "strands.txt",
        GameKind::Sudoku => "sudoku.txt",
        GameKind::Wordle => "wordle.txt",
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::Paths;
    use crate::games::GameKind;

    #[test]
    fn input_overrides_one_game() {
        let paths = Paths::new("data").with_input(GameKind::Sudoku, "today.txt");
        assert_eq!(PathBuf::from("today.txt"), paths.puzzle(GameKind::Sudoku));
        assert_eq!(PathBuf::from("data/kenken.txt"), paths.puzzle(GameKind::KenKen));
        assert_eq!(PathBuf::from("data/words.txt"), paths.words());
    }
}
