//! The daily games and what they have in common

pub use self::connections::Connections;
pub use self::console::Console;
pub use self::kenken::KenKen;
pub use self::mini_crossword::MiniCrossword;
pub use self::strands::Strands;
pub use self::sudoku::Sudoku;
pub use self::wordle::Wordle;

use std::fmt;
use std::fmt::{Display, Formatter};

use anyhow::Result;
use enum_dispatch::enum_dispatch;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::dialogue::{self, GameDialogue};
use crate::config::Paths;
use crate::solve::SolveResult;

pub mod connections;
mod console;
pub mod kenken;
pub mod mini_crossword;
pub mod strands;
pub mod sudoku;
pub mod wordle;

/// The name, description and instructions of a game, and its last score
pub struct GameInfo {
    name: &'static str,
    description: &'static str,
    instructions: &'static str,
    score: Option<u32>,
}

impl GameInfo {
    pub fn new(dialogue: &GameDialogue) -> Self {
        Self {
            name: dialogue.name,
            description: dialogue.description,
            instructions: dialogue.instructions,
            score: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn instructions(&self) -> &'static str {
        self.instructions
    }

    pub fn score(&self) -> Option<u32> {
        self.score
    }

    /// The name, description and instructions
    pub fn details(&self) -> String {
        format!(
            "{}: {}\n--------\n\nInstructions: {}",
            self.name, self.description, self.instructions
        )
    }
}

impl Display for GameInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

#[enum_dispatch]
pub trait Game {
    fn info(&self) -> &GameInfo;

    fn info_mut(&mut self) -> &mut GameInfo;

    /// Runs one round of the game and returns its score, if it produced one
    fn run(&mut self, console: &mut Console<'_>) -> Result<Option<u32>>;

    fn name(&self) -> &'static str {
        self.info().name()
    }

    fn score(&self) -> Option<u32> {
        self.info().score()
    }

    /// Introduces the game, runs it and records the score
    fn play(&mut self, console: &mut Console<'_>) -> Result<()> {
        info!("Playing the {} game.", self.name());
        console.say(self.info())?;
        console.say(format_args!("Instructions: {}", self.info().instructions()))?;
        self.info_mut().score = None;
        let score = self.run(console)?;
        self.info_mut().score = score;
        Ok(())
    }
}

/// Any of the daily games
#[enum_dispatch(Game)]
pub enum Daily {
    Wordle,
    Sudoku,
    Connections,
    MiniCrossword,
    Strands,
    KenKen,
}

impl Daily {
    /// Creates a game reading its files from `paths`.
    /// Returns `None` if the game cannot be played without a missing file.
    pub fn load(kind: GameKind, paths: &Paths, seed: Option<u64>) -> Result<Option<Self>> {
        let game: Daily = match kind {
            GameKind::Connections => Connections::new(paths).into(),
            GameKind::KenKen => KenKen::new(paths).into(),
            GameKind::MiniCrossword => MiniCrossword::new(paths).into(),
            GameKind::Strands => Strands::new(paths).into(),
            GameKind::Sudoku => Sudoku::new(paths, new_rng(seed)).into(),
            GameKind::Wordle => match Wordle::load(paths, new_rng(seed))? {
                Some(wordle) => wordle.into(),
                None => return Ok(None),
            },
        };
        Ok(Some(game))
    }
}

pub(crate) fn new_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKind {
    Wordle,
    Sudoku,
    Connections,
    MiniCrossword,
    Strands,
    KenKen,
}

impl GameKind {
    /// Every game, in menu order
    pub const ALL: [GameKind; 6] = [
        GameKind::Wordle,
        GameKind::Sudoku,
        GameKind::Connections,
        GameKind::MiniCrossword,
        GameKind::Strands,
        GameKind::KenKen,
    ];

    pub fn name(self) -> &'static str {
        let dialogue = match self {
            GameKind::Connections => &dialogue::CONNECTIONS,
            GameKind::KenKen => &dialogue::KENKEN,
            GameKind::MiniCrossword => &dialogue::MINI_CROSSWORD,
            GameKind::Strands => &dialogue::STRANDS,
            GameKind::Sudoku => &dialogue::SUDOKU,
            GameKind::Wordle => &dialogue::WORDLE,
        };
        dialogue.name
    }

    /// Finds a game by name, ignoring case, spaces, dashes and underscores
    pub fn from_name(name: &str) -> Option<GameKind> {
        let simplify = |s: &str| {
            s.chars()
                .filter(|c| !matches!(c, ' ' | '-' | '_'))
                .collect::<String>()
                .to_lowercase()
        };
        let name = simplify(name);
        Self::ALL
            .iter()
            .copied()
            .find(|kind| simplify(kind.name()) == name)
    }
}

/// Prints the outcome of a solver and returns the score for it
pub(crate) fn report_solve_result<S>(
    console: &mut Console<'_>,
    result: &SolveResult<S>,
    mut show: impl FnMut(&mut Console<'_>, &S) -> Result<()>,
) -> Result<Option<u32>> {
    match result {
        SolveResult::Unsolvable => {
            console.say(dialogue::UNSOLVABLE)?;
            Ok(None)
        }
        SolveResult::Solved(data) => {
            console.say(dialogue::SOLVED)?;
            show(console, &data.solution)?;
            Ok(Some(data.guesses))
        }
        SolveResult::MultipleSolutions(solutions) => {
            console.say(dialogue::MULTIPLE_SOLUTIONS)?;
            if let Some(solution) = solutions.first() {
                console.say("One of them:")?;
                show(console, solution)?;
            }
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::dialogue;
    use crate::games::{GameInfo, GameKind};

    #[test]
    fn game_kind_from_name() {
        assert_eq!(Some(GameKind::MiniCrossword), GameKind::from_name("mini-crossword"));
        assert_eq!(Some(GameKind::MiniCrossword), GameKind::from_name("Mini Crossword"));
        assert_eq!(Some(GameKind::KenKen), GameKind::from_name("kenken"));
        assert_eq!(None, GameKind::from_name("chess"));
    }

    #[test]
    fn info_display() {
        let info = GameInfo::new(&dialogue::SUDOKU);
        assert_eq!(
            format!("Sudoku: {}", dialogue::SUDOKU.description),
            info.to_string()
        );
        assert!(info.details().contains("Instructions: "));
        assert_eq!(None, info.score());
    }
}
