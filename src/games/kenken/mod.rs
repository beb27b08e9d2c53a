//! KenKen puzzles

pub use self::cage::{Cage, Operator};
pub use self::puzzle::Puzzle;
pub use self::solve::solve;

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::dialogue;
use crate::config::Paths;
use crate::games::{report_solve_result, Console, Game, GameInfo, GameKind};

mod cage;
mod parse;
mod puzzle;
mod solve;

pub type CageId = usize;
pub type CellId = usize;
pub type Value = usize;

/// Solves the KenKen in the puzzle file
pub struct KenKen {
    info: GameInfo,
    puzzle_path: PathBuf,
}

impl KenKen {
    pub fn new(paths: &Paths) -> Self {
        Self {
            info: GameInfo::new(&dialogue::KENKEN),
            puzzle_path: paths.puzzle(GameKind::KenKen),
        }
    }
}

impl Game for KenKen {
    fn info(&self) -> &GameInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut GameInfo {
        &mut self.info
    }

    fn run(&mut self, console: &mut Console<'_>) -> Result<Option<u32>> {
        let puzzle = Puzzle::from_file(&self.puzzle_path).with_context(|| {
            format!("failed to load KenKen from {}", self.puzzle_path.display())
        })?;
        console.say("Puzzle:")?;
        console.say(&puzzle)?;
        let result = solve(&puzzle);
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

    use crate::config::Paths;
    use crate::games::{Console, Game, KenKen};

    #[test]
    fn play() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("kenken.txt"), "2\nAB\nCC\n1 2 3+\n").unwrap();
        let mut kenken = KenKen::new(&Paths::new(dir.path()));
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        kenken.play(&mut Console::new(&mut input, &mut output)).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Puzzle solved\n1 2\n2 1\n"), "{}", output);
        assert_eq!(Some(0), kenken.score());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut kenken = KenKen::new(&Paths::new(dir.path()));
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(kenken.play(&mut Console::new(&mut input, &mut output)).is_err());
        assert_eq!(None, kenken.score());
    }
}
