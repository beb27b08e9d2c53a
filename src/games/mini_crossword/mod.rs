//! Mini Crossword: fill a small grid with words that agree where they cross

pub use self::crossword::{Cell, Crossword, Direction, Slot};
pub use self::fill::{fill, Filled};

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::dialogue;
use crate::config::Paths;
use crate::dictionary::Dictionary;
use crate::games::{report_solve_result, Console, Game, GameInfo, GameKind};

mod crossword;
mod fill;

pub struct MiniCrossword {
    info: GameInfo,
    puzzle_path: PathBuf,
    dictionary_path: PathBuf,
}

impl MiniCrossword {
    pub fn new(paths: &Paths) -> Self {
        Self {
            info: GameInfo::new(&dialogue::MINI_CROSSWORD),
            puzzle_path: paths.puzzle(GameKind::MiniCrossword),
            dictionary_path: paths.dictionary(),
        }
    }
}

impl Game for MiniCrossword {
    fn info(&self) -> &GameInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut GameInfo {
        &mut self.info
    }

    fn run(&mut self, console: &mut Console<'_>) -> Result<Option<u32>> {
        let crossword = Crossword::from_file(&self.puzzle_path).with_context(|| {
            format!("failed to load crossword from {}", self.puzzle_path.display())
        })?;
        let dictionary = Dictionary::from_file(&self.dictionary_path).with_context(|| {
            format!("failed to load dictionary from {}", self.dictionary_path.display())
        })?;
        console.say("Puzzle:")?;
        console.say(&crossword)?;
        let result = fill(&crossword, &dictionary);
        report_solve_result(console, &result, |console, filled| {
            console.say(show_filled(&crossword, filled))?;
            for (slot, word) in crossword.slots().iter().zip(&filled.words) {
                match crossword.clue(slot) {
                    Some(clue) => console.say(format_args!(
                        "{}: {} ({})",
                        slot.label(),
                        word.to_uppercase(),
                        clue
                    ))?,
                    None => console.say(format_args!("{}: {}", slot.label(), word.to_uppercase()))?,
                }
            }
            Ok(())
        })
    }
}

fn show_filled(crossword: &Crossword, filled: &Filled) -> String {
    let mut s = String::new();
    for (cells, letters) in crossword.grid().rows().zip(filled.letters.rows()) {
        for (cell, letter) in cells.iter().zip(letters) {
            s.push(match (cell, letter) {
                (Cell::Block, _) => '#',
                (_, Some(letter)) => letter.to_ascii_uppercase(),
                (_, None) => '.',
            });
        }
        s.push('\n');
    }
    s
}
