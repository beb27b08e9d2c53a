//! The sixteen words of a Connections board and the categories they may belong to

use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::Path;

use ahash::AHashSet;
use itertools::Itertools;

use crate::config::constants::{CONNECTIONS_GROUP_COUNT, CONNECTIONS_GROUP_SIZE};
use crate::error::{ParseError, ParseErrorType, PuzzleFromFileError, UNEXPECTED_END};
use crate::file::read_to_string;

pub const WORD_COUNT: usize = CONNECTIONS_GROUP_SIZE * CONNECTIONS_GROUP_COUNT;

/// The words on the board, lowercase and in the order they were read
#[derive(Clone, Debug, PartialEq)]
pub struct Puzzle {
    words: Vec<String>,
}

impl Puzzle {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PuzzleFromFileError> {
        Ok(Self::parse(&read_to_string(path)?)?)
    }

    /// Parses words separated by newlines or commas
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let mut words: Vec<String> = Vec::with_capacity(WORD_COUNT);
        let mut last_line = 0;
        for (i, line) in s.lines().enumerate() {
            for word in line.split(',').map(str::trim).filter(|w| !w.is_empty()) {
                let word = normalize(word)
                    .ok_or_else(|| ParseError::new(ParseErrorType::InvalidWord, word, i + 1))?;
                if words.contains(&word) {
                    return Err(ParseError::new(ParseErrorType::InvalidWord, word, i + 1));
                }
                words.push(word);
                last_line = i + 1;
            }
        }
        if words.is_empty() {
            return Err(UNEXPECTED_END);
        }
        if words.len() != WORD_COUNT {
            return Err(ParseError::new(
                ParseErrorType::WrongWordCount,
                words.len(),
                last_line,
            ));
        }
        Ok(Self { words })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = self.words.iter().map(String::len).max().unwrap_or(0);
        for row in &self.words.iter().chunks(CONNECTIONS_GROUP_SIZE) {
            let line = row
                .map(|word| format!("{:<width$}", word.to_uppercase(), width = width))
                .join("  ");
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// A named set of words that can form a group
#[derive(Clone, Debug)]
pub struct Category {
    name: String,
    words: AHashSet<String>,
}

impl Category {
    pub fn new<I, S>(name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            words: words
                .into_iter()
                .filter_map(|word| normalize(word.as_ref()))
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Vec<Self>, PuzzleFromFileError> {
        Ok(Self::parse_all(&read_to_string(path)?)?)
    }

    /// Parses one category per line, `NAME: word, word, ...`. Blank lines are skipped.
    pub fn parse_all(s: &str) -> Result<Vec<Self>, ParseError> {
        let mut categories = Vec::new();
        for (i, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (name, words) = match line.find(':') {
                Some(pos) => (line[..pos].trim(), &line[pos + 1..]),
                None => return Err(ParseError::new(ParseErrorType::InvalidCategory, line, i + 1)),
            };
            if name.is_empty() {
                return Err(ParseError::new(ParseErrorType::InvalidCategory, line, i + 1));
            }
            let words = words
                .split(',')
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(|word| {
                    normalize(word)
                        .ok_or_else(|| ParseError::new(ParseErrorType::InvalidWord, word, i + 1))
                })
                .collect::<Result<_, _>>()?;
            categories.push(Category {
                name: name.to_string(),
                words,
            });
        }
        debug!("Parsed {} categories", categories.len());
        Ok(categories)
    }
}

/// Lowercases a word or phrase. Letters, spaces, hyphens and apostrophes are allowed.
fn normalize(word: &str) -> Option<String> {
    let word = word.trim();
    let valid = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_alphabetic() || matches!(c, ' ' | '-' | '\''));
    if valid {
        Some(word.to_lowercase())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ParseErrorType;
    use crate::games::connections::{Category, Puzzle};

    const WORDS: &str = "\
        Bass, Trout, Pike, Sole\n\
        Drum, Flute, Harp, Oboe\n\
        Mercury, Venus, Mars, Saturn\n\
        Red, Blue, Green, Yellow\n";

    #[test]
    fn parse_commas_and_lines() {
        let puzzle = Puzzle::parse(WORDS).unwrap();
        assert_eq!(16, puzzle.words().len());
        assert_eq!("bass", puzzle.words()[0]);
        assert_eq!("yellow", puzzle.words()[15]);
        let one_per_line = WORDS.replace(", ", "\n");
        assert_eq!(puzzle, Puzzle::parse(&one_per_line).unwrap());
    }

    #[test]
    fn duplicate_word() {
        let s = WORDS.replace("Sole", "BASS");
        let e = Puzzle::parse(&s).unwrap_err();
        assert_eq!(ParseErrorType::InvalidWord, e.error_type());
        assert_eq!(Some(1), e.line());
    }

    #[test]
    fn wrong_word_count() {
        let e = Puzzle::parse("a, b, c\n").unwrap_err();
        assert_eq!(ParseErrorType::WrongWordCount, e.error_type());
        assert_eq!("Wrong number of words: \"3\" at line 1", e.to_string());
    }

    #[test]
    fn display() {
        let puzzle = Puzzle::parse(WORDS).unwrap();
        let first = puzzle.to_string().lines().next().unwrap().to_string();
        assert_eq!("BASS     TROUT    PIKE     SOLE", first);
    }

    #[test]
    fn parse_categories() {
        let categories = Category::parse_all("FISH: bass, Trout\n\nUS States: New York\n").unwrap();
        assert_eq!(2, categories.len());
        assert_eq!("FISH", categories[0].name());
        assert!(categories[0].contains("trout"));
        assert!(categories[1].contains("new york"));
    }

    #[test]
    fn category_without_name() {
        let e = Category::parse_all("FISH: bass\nno colon here\n").unwrap_err();
        assert_eq!(ParseErrorType::InvalidCategory, e.error_type());
        assert_eq!(Some(2), e.line());
        let e = Category::parse_all(": bass\n").unwrap_err();
        assert_eq!(ParseErrorType::InvalidCategory, e.error_type());
    }
}
