use crate::results::HangmanError;
use std::collections::HashSet;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::sync::Arc;

/// Contains all the words that may be used in a game.
///
/// Words keep the order in which they were first read, which makes letter selection by the
/// [`AutomaticGuesser`](crate::AutomaticGuesser) deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word will be trimmed and converted to
    /// lower case. Blank lines and repeated words are skipped.
    pub fn from_reader<R: BufRead>(word_reader: &mut R) -> Result<Self, HangmanError> {
        let lines = word_reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;
        WordBank::from_iterator(lines)
    }

    /// Constructs a new `WordBank` using the words from the given iterator.
    ///
    /// Each word will be trimmed and converted to lower case. Empty and repeated words are
    /// skipped.
    pub fn from_iterator<S, I>(words: I) -> Result<Self, HangmanError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut seen: HashSet<Arc<str>> = HashSet::new();
        let mut all_words: Vec<Arc<str>> = Vec::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            if word.contains(char::is_whitespace) {
                return Err(HangmanError::InvalidWord(Box::from(word)));
            }
            let word: Arc<str> = Arc::from(word.to_lowercase().as_str());
            if seen.insert(Arc::clone(&word)) {
                all_words.push(word);
            }
        }
        Ok(WordBank { all_words })
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Retrieves every word with exactly `length` letters, in word bank order.
    pub fn words_with_length(&self, length: usize) -> Vec<Arc<str>> {
        self.all_words
            .iter()
            .filter(|word| word.chars().count() == length)
            .map(Arc::clone)
            .collect()
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}
