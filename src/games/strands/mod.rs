//! Strands: find the theme words that use every letter on the board once

pub use self::board::{Board, WordPath};
pub use self::cover::{cover, Placement};

use std::path::PathBuf;

use anyhow::{Context, Result};
use itertools::Itertools;

use crate::config::constants::STRANDS_MIN_WORD_LENGTH;
use crate::config::dialogue;
use crate::config::Paths;
use crate::dictionary::Dictionary;
use crate::games::{report_solve_result, Console, Game, GameInfo, GameKind};

mod board;
mod cover;

pub struct Strands {
    info: GameInfo,
    puzzle_path: PathBuf,
    dictionary_path: PathBuf,
}

impl Strands {
    pub fn new(paths: &Paths) -> Self {
        Self {
            info: GameInfo::new(&dialogue::STRANDS),
            puzzle_path: paths.puzzle(GameKind::Strands),
            dictionary_path: paths.dictionary(),
        }
    }
}

impl Game for Strands {
    fn info(&self) -> &GameInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut GameInfo {
        &mut self.info
    }

    fn run(&mut self, console: &mut Console<'_>) -> Result<Option<u32>> {
        let board = Board::from_file(&self.puzzle_path).with_context(|| {
            format!("failed to load Strands board from {}", self.puzzle_path.display())
        })?;
        let dictionary = Dictionary::from_file(&self.dictionary_path).with_context(|| {
            format!("failed to load dictionary from {}", self.dictionary_path.display())
        })?;
        console.say(&board)?;
        let found = board.find_words(&dictionary, STRANDS_MIN_WORD_LENGTH);
        console.say(format_args!(
            "Words found ({}): {}",
            found.len(),
            found.keys().join(", ")
        ))?;
        let spangrams = found
            .iter()
            .filter(|(_, paths)| paths.iter().any(|path| board.is_spangram(path)))
            .map(|(word, _)| word)
            .join(", ");
        console.say(format_args!("Spangram candidates: {}", spangrams))?;
        let result = cover(&board, &found);
        report_solve_result(console, &result, |console, placements| {
            for placement in placements {
                let marker = if placement.spangram { " (spangram)" } else { "" };
                console.say(format_args!("{}{}", placement.word.to_uppercase(), marker))?;
            }
            Ok(())
        })
    }
}
