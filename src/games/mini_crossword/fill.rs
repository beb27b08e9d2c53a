use ahash::AHashSet;

use crate::collections::Grid;
use crate::dictionary::Dictionary;
use crate::games::mini_crossword::{Cell, Crossword};
use crate::solve::{self, PropagateResult, Search, SolveResult};

/// A completed crossword
#[derive(Clone, Debug, PartialEq)]
pub struct Filled {
    /// the letter of every open cell
    pub letters: Grid<Option<char>>,
    /// the answer of every slot, in slot order
    pub words: Vec<String>,
}

/// Fills every slot with a different dictionary word, agreeing at every crossing
pub fn fill(crossword: &Crossword, dictionary: &Dictionary) -> SolveResult<Filled> {
    solve::solve(FillState::new(crossword, dictionary))
}

#[derive(Clone)]
struct FillState<'a> {
    crossword: &'a Crossword,
    letters: Vec<Option<char>>,
    /// the word of every filled slot
    words: Vec<Option<&'a str>>,
    /// the words that still fit every open slot
    candidates: Vec<Vec<&'a str>>,
}

impl<'a> FillState<'a> {
    fn new(crossword: &'a Crossword, dictionary: &'a Dictionary) -> Self {
        let letters = crossword
            .grid()
            .iter()
            .map(|cell| match cell {
                Cell::Letter(c) => Some(*c),
                _ => None,
            })
            .collect();
        let candidates = crossword
            .slots()
            .iter()
            .map(|slot| {
                dictionary
                    .words_of_len(slot.len())
                    .iter()
                    .map(String::as_str)
                    .collect()
            })
            .collect();
        Self {
            crossword,
            letters,
            words: vec![None; crossword.slots().len()],
            candidates,
        }
    }

    fn fits(&self, slot: usize, word: &str) -> bool {
        self.crossword.slots()[slot]
            .cells()
            .iter()
            .zip(word.chars())
            .all(|(&cell, c)| self.letters[cell].map_or(true, |letter| letter == c))
    }

    /// Returns false if the word clashes with a letter already placed
    fn place(&mut self, slot: usize, word: &'a str) -> bool {
        for (&cell, c) in self.crossword.slots()[slot].cells().iter().zip(word.chars()) {
            match self.letters[cell] {
                Some(letter) if letter != c => return false,
                _ => self.letters[cell] = Some(c),
            }
        }
        self.words[slot] = Some(word);
        self.candidates[slot].clear();
        true
    }

    /// Narrows the candidates of open slots and fills slots with one candidate left.
    /// Returns `None` if a slot has no candidates.
    fn propagate_once(&mut self) -> Option<bool> {
        let used: AHashSet<&str> = self.words.iter().flatten().copied().collect();
        let mut changed = false;
        for slot in 0..self.candidates.len() {
            if self.words[slot].is_some() {
                continue;
            }
            let mut candidates = std::mem::take(&mut self.candidates[slot]);
            let before = candidates.len();
            candidates.retain(|word| !used.contains(word) && self.fits(slot, word));
            changed |= candidates.len() != before;
            match candidates.len() {
                0 => return None,
                1 => {
                    if !self.place(slot, candidates[0]) {
                        return None;
                    }
                    // the used words have changed
                    return Some(true);
                }
                _ => self.candidates[slot] = candidates,
            }
        }
        Some(changed)
    }
}

impl<'a> Search for FillState<'a> {
    type Guess = (usize, &'a str);
    type Solution = Filled;

    fn propagate(&mut self) -> PropagateResult<Filled> {
        loop {
            match self.propagate_once() {
                Some(true) => continue,
                Some(false) => break,
                None => return PropagateResult::Invalid,
            }
        }
        let words: Option<Vec<String>> = self
            .words
            .iter()
            .map(|word| word.map(String::from))
            .collect();
        match words {
            Some(words) => {
                let mut letters = self.letters.iter();
                let letters = self.crossword.grid().map(|_| letters.next().copied().flatten());
                PropagateResult::Solved(Filled { letters, words })
            }
            None => PropagateResult::Unsolved,
        }
    }

    fn guesses(&self) -> Vec<(usize, &'a str)> {
        self.candidates
            .iter()
            .enumerate()
            .filter(|&(slot, _)| self.words[slot].is_none())
            .min_by_key(|(_, candidates)| candidates.len())
            .map_or_else(Vec::new, |(slot, candidates)| {
                candidates.iter().map(|&word| (slot, word)).collect()
            })
    }

    fn apply_guess(&mut self, (slot, word): (usize, &'a str)) {
        if !self.place(slot, word) {
            // an impossible guess leaves the slot without candidates
            self.words[slot] = None;
            self.candidates[slot].clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dictionary::Dictionary;
    use crate::games::mini_crossword::{fill, Crossword};
    use crate::solve::SolveResult;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(vec!["bat", "ore", "wed", "bow", "are", "ted", "ox"])
    }

    #[test]
    fn unique_fill() {
        let crossword = Crossword::parse(".a.\n...\n...\n").unwrap();
        let result = fill(&crossword, &dictionary());
        let filled = &result.solved().unwrap().solution;
        let answers: Vec<_> = crossword
            .slots()
            .iter()
            .map(|slot| slot.label())
            .zip(filled.words.iter().cloned())
            .collect();
        let expected: Vec<_> = vec![
            ("1A", "bat"),
            ("4A", "ore"),
            ("5A", "wed"),
            ("1D", "bow"),
            ("2D", "are"),
            ("3D", "ted"),
        ]
        .into_iter()
        .map(|(label, word)| (label.to_string(), word.to_string()))
        .collect();
        assert_eq!(expected, answers);
        assert_eq!(Some('o'), filled.letters[3]);
    }

    #[test]
    fn no_fill() {
        let crossword = Crossword::parse("z..\n...\n...\n").unwrap();
        assert!(matches!(fill(&crossword, &dictionary()), SolveResult::Unsolvable));
    }

    #[test]
    fn several_fills() {
        let crossword = Crossword::parse("..\n").unwrap();
        let dictionary = Dictionary::from_words(vec!["ox", "at"]);
        assert!(matches!(
            fill(&crossword, &dictionary),
            SolveResult::MultipleSolutions(_)
        ));
    }

    #[test]
    fn word_used_once() {
        let crossword = Crossword::parse("..\n..\n").unwrap();
        let dictionary = Dictionary::from_words(vec!["aa"]);
        assert!(matches!(fill(&crossword, &dictionary), SolveResult::Unsolvable));
    }
}
