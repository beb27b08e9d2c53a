//! Connections: sort sixteen words into four groups of four

pub use self::puzzle::{Category, Puzzle, WORD_COUNT};
pub use self::solve::{candidate_groups, solve, Group};

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::dialogue;
use crate::config::Paths;
use crate::games::{report_solve_result, Console, Game, GameInfo, GameKind};

mod puzzle;
mod solve;

pub struct Connections {
    info: GameInfo,
    puzzle_path: PathBuf,
    categories_path: PathBuf,
}

impl Connections {
    pub fn new(paths: &Paths) -> Self {
        Self {
            info: GameInfo::new(&dialogue::CONNECTIONS),
            puzzle_path: paths.puzzle(GameKind::Connections),
            categories_path: paths.categories(),
        }
    }
}

impl Game for Connections {
    fn info(&self) -> &GameInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut GameInfo {
        &mut self.info
    }

    fn run(&mut self, console: &mut Console<'_>) -> Result<Option<u32>> {
        let puzzle = Puzzle::from_file(&self.puzzle_path).with_context(|| {
            format!("failed to load Connections puzzle from {}", self.puzzle_path.display())
        })?;
        let categories = Category::from_file(&self.categories_path).with_context(|| {
            format!("failed to load categories from {}", self.categories_path.display())
        })?;
        console.say(&puzzle)?;
        let result = solve(&puzzle, &categories);
        report_solve_result(console, &result, |console, groups| {
            for group in groups {
                console.say(group)?;
            }
            Ok(())
        })
    }
}
