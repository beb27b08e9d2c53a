//! A word list for the word games

use std::path::Path;

use ahash::{AHashMap, AHashSet};

use crate::error::ReadError;
use crate::file::read_lines;

/// Lowercase words with fast word and prefix lookup
#[derive(Default)]
pub struct Dictionary {
    words: AHashSet<String>,
    prefixes: AHashSet<String>,
    by_len: AHashMap<usize, Vec<String>>,
}

impl Dictionary {
    /// Builds a dictionary, skipping entries that are not purely alphabetic
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        for word in words {
            if let Some(word) = normalize(word.as_ref()) {
                dictionary.insert(word);
            }
        }
        for words in dictionary.by_len.values_mut() {
            words.sort_unstable();
        }
        dictionary
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReadError> {
        let dictionary = Self::from_words(read_lines(path)?);
        debug!("Loaded {} dictionary words", dictionary.len());
        Ok(dictionary)
    }

    fn insert(&mut self, word: String) {
        if self.words.contains(&word) {
            return;
        }
        for (i, _) in word.char_indices().skip(1) {
            self.prefixes.insert(word[..i].to_string());
        }
        self.by_len
            .entry(word.len())
            .or_insert_with(Vec::new)
            .push(word.clone());
        self.words.insert(word);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns true if some longer word starts with `prefix`
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix)
    }

    /// The words of a length, sorted
    pub fn words_of_len(&self, len: usize) -> &[String] {
        self.by_len.get(&len).map_or(&[][..], Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Trims and lowercases a word, rejecting anything but ASCII letters
pub fn normalize(word: &str) -> Option<String> {
    let word = word.trim();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(word.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use crate::dictionary::Dictionary;

    #[test]
    fn lookup() {
        let dictionary = Dictionary::from_words(vec!["Cat", "cart", " dog ", "o'clock", ""]);
        assert_eq!(3, dictionary.len());
        assert!(dictionary.contains("cat"));
        assert!(!dictionary.contains("o'clock"));
        assert!(dictionary.is_prefix("ca"));
        assert!(dictionary.is_prefix("car"));
        assert!(!dictionary.is_prefix("cat"));
        assert!(!dictionary.is_prefix("x"));
    }

    #[test]
    fn words_of_len() {
        let dictionary = Dictionary::from_words(vec!["dog", "cat", "cart", "cat"]);
        assert_eq!(&["cat".to_string(), "dog".to_string()], dictionary.words_of_len(3));
        assert!(dictionary.words_of_len(7).is_empty());
    }
}
