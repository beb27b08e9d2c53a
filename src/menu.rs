//! The menu that lists the games, plays them and shows their scores

use anyhow::Result;

use crate::config::dialogue;
use crate::config::Paths;
use crate::games::{Console, Daily, Game, GameKind};

/// A game in the menu, which is `None` when it could not be loaded
pub struct MenuEntry {
    name: &'static str,
    game: Option<Daily>,
}

impl MenuEntry {
    pub fn new(name: &'static str, game: Option<Daily>) -> Self {
        Self { name, game }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_available(&self) -> bool {
        self.game.is_some()
    }

    /// The leaderboard line for this game
    pub fn score_line(&self) -> String {
        match &self.game {
            Some(game) => match game.score() {
                Some(score) => format!("{}: {}", self.name, score),
                None => format!("{}: {}", self.name, dialogue::UNAVAILABLE),
            },
            None => dialogue::UNAVAILABLE.to_string(),
        }
    }
}

enum Selection {
    Game(usize),
    Leaderboard,
    Quit,
}

pub struct Menu {
    entries: Vec<MenuEntry>,
}

impl Menu {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    /// Loads every game. A game that fails to load is listed as not available.
    pub fn load(paths: &Paths, seed: Option<u64>) -> Self {
        let entries = GameKind::ALL
            .iter()
            .map(|&kind| {
                let game = Daily::load(kind, paths, seed).unwrap_or_else(|e| {
                    warn!("{} is not available: {:#}", kind.name(), e);
                    None
                });
                MenuEntry::new(kind.name(), game)
            })
            .collect();
        Self::new(entries)
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Shows the menu until the user quits or the input ends
    pub fn run(&mut self, console: &mut Console<'_>) -> Result<()> {
        loop {
            self.show(console)?;
            let line = match console.prompt(dialogue::PROMPT)? {
                Some(line) => line,
                None => {
                    info!("End of input.");
                    return Ok(());
                }
            };
            match self.selection(&line) {
                Some(Selection::Game(i)) => self.play(i, console)?,
                Some(Selection::Leaderboard) => self.show_leaderboard(console)?,
                Some(Selection::Quit) => {
                    info!("User quit.");
                    return Ok(());
                }
                None => console.say(dialogue::INVALID_SELECTION)?,
            }
        }
    }

    fn show(&self, console: &mut Console<'_>) -> Result<()> {
        console.say(dialogue::MENU_TITLE)?;
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.is_available() {
                console.say(format_args!("{}. {}", i + 1, entry.name))?;
            } else {
                console.say(format_args!("{}. {} {}", i + 1, entry.name, dialogue::NOT_AVAILABLE))?;
            }
        }
        let n = self.entries.len();
        console.say(format_args!("{}. {}", n + 1, dialogue::VIEW_LEADERBOARD))?;
        console.say(format_args!("{}. {}", n + 2, dialogue::QUIT))?;
        Ok(())
    }

    fn selection(&self, line: &str) -> Option<Selection> {
        let n = self.entries.len();
        match line.trim().parse::<usize>().ok()? {
            i if (1..=n).contains(&i) => Some(Selection::Game(i - 1)),
            i if i == n + 1 => Some(Selection::Leaderboard),
            i if i == n + 2 => Some(Selection::Quit),
            _ => None,
        }
    }

    fn play(&mut self, index: usize, console: &mut Console<'_>) -> Result<()> {
        let entry = &mut self.entries[index];
        let game = match &mut entry.game {
            Some(game) => game,
            None => {
                console.say(format_args!("{} {}", entry.name, dialogue::NOT_AVAILABLE))?;
                return Ok(());
            }
        };
        if let Err(e) = game.play(console) {
            error!("{} failed: {:#}", entry.name, e);
            console.say(format_args!("Error: {:#}", e))?;
        }
        Ok(())
    }

    fn show_leaderboard(&self, console: &mut Console<'_>) -> Result<()> {
        console.say(dialogue::LEADERBOARD_TITLE)?;
        for entry in &self.entries {
            console.say(entry.score_line())?;
        }
        Ok(())
    }
}
