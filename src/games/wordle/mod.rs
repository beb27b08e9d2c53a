//! Wordle: guess a five letter word in six tries

pub use self::assist::{candidates, parse_guesses, suggest, Guess};
pub use self::pattern::{Feedback, Pattern};

use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::config::constants::{KEYBOARD_ROWS, WORDLE_ATTEMPTS, WORD_LENGTH};
use crate::config::dialogue;
use crate::config::Paths;
use crate::dictionary::normalize;
use crate::file::{read_lines, read_to_string};
use crate::games::{Console, Game, GameInfo, GameKind};

mod assist;
mod pattern;

/// How many candidates are listed in assist mode
const CANDIDATES_SHOWN: usize = 20;

/// Plays Wordle, or helps with the guesses recorded in the Wordle file
pub struct Wordle {
    info: GameInfo,
    /// allowed guesses and answers, sorted
    words: Vec<String>,
    state_path: PathBuf,
    rng: StdRng,
}

impl Wordle {
    /// Loads the word list. Returns `None` if there is no word list.
    pub fn load(paths: &Paths, rng: StdRng) -> Result<Option<Self>> {
        let path = paths.words();
        let lines = match read_lines(&path) {
            Ok(lines) => lines,
            Err(e) if e.is_not_found() => {
                warn!("Wordle is not available without {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let words: Vec<String> = lines
            .iter()
            .filter_map(|line| normalize(line))
            .filter(|word| word.len() == WORD_LENGTH)
            .sorted()
            .dedup()
            .collect();
        if words.is_empty() {
            warn!("No {} letter words in {}", WORD_LENGTH, path.display());
            return Ok(None);
        }
        debug!("Loaded {} Wordle words", words.len());
        Ok(Some(Self::with_words(words, paths.puzzle(GameKind::Wordle), rng)))
    }

    /// `words` must be sorted lowercase words of `WORD_LENGTH` letters
    pub fn with_words(words: Vec<String>, state_path: PathBuf, rng: StdRng) -> Self {
        Self {
            info: GameInfo::new(&dialogue::WORDLE),
            words,
            state_path,
            rng,
        }
    }

    fn is_word(&self, word: &str) -> bool {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }

    /// Lists the words still possible after the recorded guesses and suggests the next guess
    fn assist(&self, console: &mut Console<'_>, guesses: &[Guess]) -> Result<Option<u32>> {
        for guess in guesses {
            console.say(guess.pattern.tiles(&guess.word))?;
        }
        if let Some(last) = guesses.last() {
            if last.pattern.is_correct() {
                console.say(format_args!(
                    "{} {}",
                    dialogue::YOU_WIN,
                    last.word.to_uppercase()
                ))?;
                return Ok(Some(guesses.len() as u32));
            }
        }
        let candidates = candidates(&self.words, guesses);
        if candidates.is_empty() {
            console.say("No word in the list matches these guesses")?;
            return Ok(None);
        }
        console.say(format_args!(
            "{} possible words: {}",
            candidates.len(),
            candidates.iter().take(CANDIDATES_SHOWN).join(", ")
        ))?;
        if let Some(word) = suggest(&candidates, &self.words) {
            console.say(format_args!("Suggested guess: {}", word.to_uppercase()))?;
        }
        Ok(None)
    }

    /// Plays against `target`, returning the number of attempts used, won or lost
    fn play_target(&self, console: &mut Console<'_>, target: &str) -> Result<Option<u32>> {
        let mut keyboard = Keyboard::default();
        for attempt in 1..=WORDLE_ATTEMPTS {
            let guess = loop {
                let prompt = format!("Guess {}/{}: ", attempt, WORDLE_ATTEMPTS);
                let line = match console.prompt(prompt)? {
                    Some(line) => line,
                    None => {
                        info!("Wordle input ended");
                        console.say(format_args!(
                            "{} {}",
                            dialogue::GAME_OVER,
                            target.to_uppercase()
                        ))?;
                        return Ok(Some(attempt - 1));
                    }
                };
                match normalize(&line) {
                    Some(word) if self.is_word(&word) => break word,
                    _ => console.say(dialogue::INVALID_WORD)?,
                }
            };
            let pattern = Pattern::score(&guess, target);
            keyboard.update(&guess, pattern);
            console.say(pattern.tiles(&guess))?;
            console.say(&keyboard)?;
            if pattern.is_correct() {
                console.say(format_args!("{} {}", dialogue::YOU_WIN, target.to_uppercase()))?;
                return Ok(Some(attempt));
            }
        }
        console.say(format_args!("{} {}", dialogue::GAME_OVER, target.to_uppercase()))?;
        Ok(Some(WORDLE_ATTEMPTS))
    }
}

impl Game for Wordle {
    fn info(&self) -> &GameInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut GameInfo {
        &mut self.info
    }

    fn run(&mut self, console: &mut Console<'_>) -> Result<Option<u32>> {
        match read_to_string(&self.state_path) {
            Ok(text) => {
                let guesses = parse_guesses(&text).with_context(|| {
                    format!("failed to read Wordle guesses from {}", self.state_path.display())
                })?;
                self.assist(console, &guesses)
            }
            Err(e) if e.is_not_found() => {
                let target = self
                    .words
                    .choose(&mut self.rng)
                    .cloned()
                    .context("the Wordle word list is empty")?;
                debug!("Wordle target chosen");
                self.play_target(console, &target)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// The best feedback seen for each letter
#[derive(Default)]
struct Keyboard {
    letters: [Option<Feedback>; 26],
}

impl Keyboard {
    fn update(&mut self, guess: &str, pattern: Pattern) {
        for (letter, feedback) in guess.bytes().zip(pattern.feedback().iter().copied()) {
            if let Some(slot) = self.letters.get_mut(usize::from(letter.wrapping_sub(b'a'))) {
                if slot.map_or(true, |old| feedback > old) {
                    *slot = Some(feedback);
                }
            }
        }
    }

    fn feedback(&self, letter: char) -> Option<Feedback> {
        let index = (letter as u32).wrapping_sub('a' as u32) as usize;
        self.letters.get(index).copied().flatten()
    }
}

/// Unused letters are lowercase, letters in the word uppercase and absent letters `_`
impl Display for Keyboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
            write!(f, "{}", " ".repeat(i))?;
            for letter in row.chars() {
                let key = match self.feedback(letter) {
                    None => letter.to_string().normal(),
                    Some(Feedback::Absent) => {
                        let (r, g, b) = Feedback::Absent.colour();
                        "_".truecolor(r, g, b)
                    }
                    Some(feedback) => {
                        let (r, g, b) = feedback.colour();
                        letter.to_ascii_uppercase().to_string().truecolor(r, g, b).bold()
                    }
                };
                write!(f, "{} ", key)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::Paths;
    use crate::games::wordle::{Keyboard, Pattern};
    use crate::games::{Console, Game, Wordle};

    fn wordle(words: &[&str]) -> Wordle {
        let words = words.iter().map(|w| w.to_string()).collect();
        Wordle::with_words(words, PathBuf::from("missing"), StdRng::seed_from_u64(0))
    }

    fn play_target(wordle: &Wordle, input: &str, target: &str) -> (Option<u32>, String) {
        let mut input = Cursor::new(input.to_string());
        let mut output = Vec::new();
        let score = wordle
            .play_target(&mut Console::new(&mut input, &mut output), target)
            .unwrap();
        (score, String::from_utf8(output).unwrap())
    }

    #[test]
    fn win() {
        let wordle = wordle(&["crane", "slate"]);
        let (score, output) = play_target(&wordle, "xyzzy\ncrane\nSLATE\n", "slate");
        assert_eq!(Some(2), score);
        assert!(output.contains("Invalid word"));
        assert!(output.contains("You Win! The word was: SLATE"));
    }

    #[test]
    fn lose() {
        let wordle = wordle(&["abide", "crane"]);
        let (score, output) = play_target(&wordle, &"crane\n".repeat(6), "abide");
        assert_eq!(Some(6), score);
        assert!(output.contains("Game Over! The word was: ABIDE"));
        assert!(!output.contains("Guess 7/6"));
    }

    #[test]
    fn input_ends() {
        let wordle = wordle(&["abide", "crane"]);
        let (score, output) = play_target(&wordle, "crane\n", "abide");
        assert_eq!(Some(1), score);
        assert!(output.contains("Game Over!"));
    }

    #[test]
    fn keyboard_keeps_best_feedback() {
        let mut keyboard = Keyboard::default();
        keyboard.update("speed", Pattern::score("speed", "abide"));
        keyboard.update("abide", Pattern::score("abide", "abide"));
        colored::control::set_override(false);
        let keys = keyboard.to_string();
        assert!(keys.starts_with("q w E r t y u I o _ \n"), "{}", keys);
    }

    #[test]
    fn assist_from_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("words.txt"),
            "crane\nGRATE\nirate\nplate\nslate\nlong word\n",
        )
        .unwrap();
        fs::write(dir.path().join("wordle.txt"), "crane BBGBG\n").unwrap();
        let paths = Paths::new(dir.path());
        let mut wordle = Wordle::load(&paths, StdRng::seed_from_u64(0))
            .unwrap()
            .unwrap();
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        wordle.play(&mut Console::new(&mut input, &mut output)).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("2 possible words: plate, slate"), "{}", output);
        assert!(output.contains("Suggested guess: PLATE"), "{}", output);
    }

    #[test]
    fn unavailable_without_word_list() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::new(dir.path());
        assert!(Wordle::load(&paths, StdRng::seed_from_u64(0)).unwrap().is_none());
    }
}
