//! Help with a game in progress: which words are still possible, and what to guess next

use std::cmp::Reverse;

use ahash::AHashSet;

use crate::config::constants::WORD_LENGTH;
use crate::dictionary::normalize;
use crate::error::{ParseError, ParseErrorType};
use crate::games::wordle::Pattern;

/// A guess already made, with the feedback it got
#[derive(Clone, Debug, PartialEq)]
pub struct Guess {
    pub word: String,
    pub pattern: Pattern,
}

/// Parses the guesses so far, one `word PATTERN` per line. Blank lines are skipped.
pub fn parse_guesses(s: &str) -> Result<Vec<Guess>, ParseError> {
    let mut guesses = Vec::new();
    for (i, line) in s.lines().enumerate() {
        let line_number = i + 1;
        let mut tokens = line.split_whitespace();
        let word = match tokens.next() {
            Some(word) => word,
            None => continue,
        };
        let word = normalize(word)
            .filter(|word| word.len() == WORD_LENGTH)
            .ok_or_else(|| ParseError::new(ParseErrorType::InvalidWord, word, line_number))?;
        let pattern = tokens.next().ok_or_else(|| {
            ParseError::at_line(ParseErrorType::UnexpectedEnd, line_number)
        })?;
        let pattern = Pattern::parse(pattern, line_number)?;
        if let Some(token) = tokens.next() {
            return Err(ParseError::new(ParseErrorType::UnexpectedToken, token, line_number));
        }
        guesses.push(Guess { word, pattern });
    }
    Ok(guesses)
}

/// The words that would have produced every recorded pattern
pub fn candidates<'a>(words: &'a [String], guesses: &[Guess]) -> Vec<&'a str> {
    words
        .iter()
        .map(String::as_str)
        .filter(|&word| {
            guesses
                .iter()
                .all(|guess| Pattern::score(&guess.word, word) == guess.pattern)
        })
        .collect()
}

/// The guess that splits the candidates into the most groups by feedback.
/// Ties go to a word that could be the answer, then to the first alphabetically.
pub fn suggest<'a>(candidates: &[&'a str], words: &'a [String]) -> Option<&'a str> {
    if candidates.len() <= 2 {
        return candidates.first().copied();
    }
    let possible: AHashSet<&str> = candidates.iter().copied().collect();
    let best = words
        .iter()
        .map(String::as_str)
        .max_by_key(|&word| {
            let patterns: AHashSet<usize> = candidates
                .iter()
                .map(|answer| Pattern::score(word, answer).code())
                .collect();
            (patterns.len(), possible.contains(word), Reverse(word))
        })?;
    debug!("Suggesting {} for {} candidates", best, candidates.len());
    Some(best)
}

#[cfg(test)]
mod tests {
    use crate::error::ParseErrorType;
    use crate::games::wordle::assist::{candidates, parse_guesses, suggest};

    fn words(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn narrow_candidates() {
        let words = words(&["crane", "grate", "irate", "plate", "slate"]);
        let guesses = parse_guesses("crane BBGBG\n\n").unwrap();
        assert_eq!(vec!["plate", "slate"], candidates(&words, &guesses));
        let guesses = parse_guesses("Crane bbgbg\nplate BGGGG\n").unwrap();
        assert_eq!(vec!["slate"], candidates(&words, &guesses));
    }

    #[test]
    fn suggest_best_split() {
        let words = words(&["baked", "baker", "bakes", "dross"]);
        let candidates = vec!["baked", "baker", "bakes"];
        assert_eq!(Some("dross"), suggest(&candidates, &words));
        assert_eq!(Some("baker"), suggest(&["baker", "bakes"], &words));
        assert_eq!(None, suggest(&[], &words));
    }

    #[test]
    fn parse_errors() {
        let error = parse_guesses("crane BBGBG\ncran BBGBG").unwrap_err();
        assert_eq!(ParseErrorType::InvalidWord, error.error_type());
        assert_eq!(Some(2), error.line());
        let error = parse_guesses("crane").unwrap_err();
        assert_eq!(ParseErrorType::UnexpectedEnd, error.error_type());
        let error = parse_guesses("crane BBGBG x").unwrap_err();
        assert_eq!(ParseErrorType::UnexpectedToken, error.error_type());
        let error = parse_guesses("crane BBQBG").unwrap_err();
        assert_eq!(ParseErrorType::InvalidPattern, error.error_type());
    }
}
