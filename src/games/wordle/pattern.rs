use std::fmt;
use std::fmt::{Display, Formatter};

use colored::Colorize;

use crate::config::constants::{
    CORRECT_COLOUR, FONT_COLOUR, POSITION_COLOUR, WORD_LENGTH, WRONG_COLOUR,
};
use crate::error::{ParseError, ParseErrorType};

/// What a guess reveals about one of its letters
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    /// Not in the word, or not as many times as guessed
    Absent,
    /// In the word at another position
    Present,
    /// In the word at this position
    Correct,
}

impl Feedback {
    /// Reads `G`, `Y` or `B`, or the digits `2`, `1` or `0`. `.` also means absent.
    pub fn from_char(c: char) -> Option<Feedback> {
        let feedback = match c.to_ascii_uppercase() {
            'B' | '0' | '.' => Feedback::Absent,
            'Y' | '1' => Feedback::Present,
            'G' | '2' => Feedback::Correct,
            _ => return None,
        };
        Some(feedback)
    }

    pub fn to_char(self) -> char {
        match self {
            Feedback::Absent => 'B',
            Feedback::Present => 'Y',
            Feedback::Correct => 'G',
        }
    }

    pub fn colour(self) -> (u8, u8, u8) {
        match self {
            Feedback::Absent => WRONG_COLOUR,
            Feedback::Present => POSITION_COLOUR,
            Feedback::Correct => CORRECT_COLOUR,
        }
    }
}

/// The feedback for every letter of a guess
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pattern([Feedback; WORD_LENGTH]);

impl Pattern {
    pub const CORRECT: Pattern = Pattern([Feedback::Correct; WORD_LENGTH]);

    /// The feedback for `guess` when the answer is `answer`. Both must be
    /// lowercase words of `WORD_LENGTH` letters.
    ///
    /// Exact matches are marked first. A letter elsewhere in the answer is then
    /// marked present only as many times as the answer has it left over.
    pub fn score(guess: &str, answer: &str) -> Self {
        let guess = guess.as_bytes();
        let answer = answer.as_bytes();
        debug_assert_eq!(WORD_LENGTH, guess.len());
        debug_assert_eq!(WORD_LENGTH, answer.len());
        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        let mut remaining = [0u8; 26];
        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                feedback[i] = Feedback::Correct;
            } else {
                remaining[letter_index(answer[i])] += 1;
            }
        }
        for i in 0..WORD_LENGTH {
            if feedback[i] == Feedback::Correct {
                continue;
            }
            let count = &mut remaining[letter_index(guess[i])];
            if *count > 0 {
                feedback[i] = Feedback::Present;
                *count -= 1;
            }
        }
        Pattern(feedback)
    }

    pub fn parse(s: &str, line: usize) -> Result<Self, ParseError> {
        let invalid = || ParseError::new(ParseErrorType::InvalidPattern, s, line);
        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        let mut chars = s.chars();
        for slot in &mut feedback {
            *slot = chars.next().and_then(Feedback::from_char).ok_or_else(invalid)?;
        }
        if chars.next().is_some() {
            return Err(invalid());
        }
        Ok(Pattern(feedback))
    }

    pub fn feedback(self) -> [Feedback; WORD_LENGTH] {
        self.0
    }

    pub fn is_correct(self) -> bool {
        self == Self::CORRECT
    }

    /// A number in `0..3^WORD_LENGTH` that is unique to the pattern
    pub fn code(self) -> usize {
        self.0
            .iter()
            .rev()
            .fold(0, |code, &feedback| code * 3 + feedback as usize)
    }

    /// The guess as coloured tiles followed by the pattern
    pub fn tiles(self, guess: &str) -> String {
        let (r, g, b) = FONT_COLOUR;
        let tiles: String = guess
            .chars()
            .zip(self.0.iter())
            .map(|(c, feedback)| {
                let (br, bg, bb) = feedback.colour();
                format!(" {} ", c.to_ascii_uppercase())
                    .truecolor(r, g, b)
                    .on_truecolor(br, bg, bb)
                    .bold()
                    .to_string()
            })
            .collect();
        format!("{}  {}", tiles, self)
    }
}

fn letter_index(letter: u8) -> usize {
    usize::from(letter.to_ascii_lowercase().wrapping_sub(b'a')) % 26
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for feedback in &self.0 {
            write!(f, "{}", feedback.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ParseErrorType;
    use crate::games::wordle::{Feedback, Pattern};

    fn score(guess: &str, answer: &str) -> String {
        Pattern::score(guess, answer).to_string()
    }

    #[test]
    fn repeated_letters() {
        assert_eq!("BBYBY", score("speed", "abide"));
        assert_eq!("YBYBB", score("eerie", "after"));
        assert_eq!("GBBBB", score("sassy", "shine"));
    }

    #[test]
    fn simple() {
        assert_eq!("BBGBG", score("crane", "slate"));
        assert_eq!("GGGGG", score("slate", "slate"));
        assert!(Pattern::score("slate", "slate").is_correct());
    }

    #[test]
    fn parse() {
        let pattern = Pattern::parse("gy.20", 1).unwrap();
        assert_eq!(
            [
                Feedback::Correct,
                Feedback::Present,
                Feedback::Absent,
                Feedback::Correct,
                Feedback::Absent,
            ],
            pattern.feedback()
        );
        assert_eq!("GYBGB", pattern.to_string());
        let error = Pattern::parse("GYBG", 3).unwrap_err();
        assert_eq!(ParseErrorType::InvalidPattern, error.error_type());
        assert_eq!(Some(3), error.line());
        assert!(Pattern::parse("GYBGBB", 1).is_err());
        assert!(Pattern::parse("GYXGB", 1).is_err());
    }

    #[test]
    fn code() {
        assert_eq!(0, Pattern::parse("BBBBB", 1).unwrap().code());
        assert_eq!(242, Pattern::CORRECT.code());
        assert_eq!(1, Pattern::parse("YBBBB", 1).unwrap().code());
        assert_eq!(2 * 81, Pattern::parse("BBBBG", 1).unwrap().code());
    }
}
