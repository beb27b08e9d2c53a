//! Sudoku: fill the grid so that every row, column and box holds each value once

pub use self::board::{Board, Value};
pub use self::generate::generate;
pub use self::solve::solve;

use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;

use crate::config::constants::{SUDOKU_PERCENT_TO_REMOVE, SUDOKU_SIZE};
use crate::config::dialogue;
use crate::config::Paths;
use crate::error::PuzzleFromFileError;
use crate::games::{report_solve_result, Console, Game, GameInfo, GameKind};

mod board;
mod generate;
mod solve;

/// Solves the Sudoku in the puzzle file, or a generated one if there is no file
pub struct Sudoku {
    info: GameInfo,
    puzzle_path: PathBuf,
    size: usize,
    percent_to_remove: f64,
    rng: StdRng,
}

impl Sudoku {
    pub fn new(paths: &Paths, rng: StdRng) -> Self {
        Self {
            info: GameInfo::new(&dialogue::SUDOKU),
            puzzle_path: paths.puzzle(GameKind::Sudoku),
            size: SUDOKU_SIZE,
            percent_to_remove: SUDOKU_PERCENT_TO_REMOVE,
            rng,
        }
    }

    fn load_or_generate(&mut self) -> Result<Board> {
        match Board::from_file(&self.puzzle_path) {
            Ok(board) => Ok(board),
            Err(PuzzleFromFileError::Read(e)) if e.is_not_found() => {
                info!("No Sudoku file, generating a puzzle");
                generate(self.size, self.percent_to_remove, &mut self.rng)
            }
            Err(e) => Err(e).with_context(|| {
                format!("failed to load Sudoku from {}", self.puzzle_path.display())
            }),
        }
    }
}

impl Game for Sudoku {
    fn info(&self) -> &GameInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut GameInfo {
        &mut self.info
    }

    fn run(&mut self, console: &mut Console<'_>) -> Result<Option<u32>> {
        let board = self.load_or_generate()?;
        console.say("Puzzle:")?;
        console.say(&board)?;
        let result = solve(&board);
        report_solve_result(console, &result, |console, solution| {
            console.say(solution)?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::Paths;
    use crate::games::{Console, Game, Sudoku};

    #[test]
    fn play_from_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("sudoku.txt"),
            "1 . | . .\n. . | . .\n----+----\n. . | . .\n. . | . .\n",
        )
        .unwrap();
        let mut sudoku = Sudoku::new(&Paths::new(dir.path()), StdRng::seed_from_u64(0));
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        sudoku.play(&mut Console::new(&mut input, &mut output)).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Puzzle has multiple solutions"), "{}", output);
        assert_eq!(None, sudoku.score());
    }

    #[test]
    fn play_generated() {
        let dir = tempfile::tempdir().unwrap();
        let mut sudoku = Sudoku::new(&Paths::new(dir.path()), StdRng::seed_from_u64(3));
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        sudoku.play(&mut Console::new(&mut input, &mut output)).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Puzzle solved"), "{}", output);
        assert!(sudoku.score().is_some());
    }
}
