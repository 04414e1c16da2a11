use crate::board::Board;
use crate::data::WordBank;
use crate::engine::{Guesser, Referee};
use crate::results::HangmanError;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::collections::HashSet;
use std::result::Result;
use std::sync::Arc;

/// Guesses the letter that appears in the most words that could still be the secret word.
///
/// After each response, every candidate word that disagrees with it is discarded, so the secret
/// word (if it is in the word bank) always remains a candidate.
///
/// Ties go to the letter that was first encountered when reading through the candidate words in
/// word bank order. For example, with the candidates `["cat", "bat", "cab"]` and `'a'` already
/// revealed, `'c'`, `'t'` and `'b'` all appear in two words, and `'c'` is chosen.
#[derive(Debug, Clone)]
pub struct AutomaticGuesser {
    bank: WordBank,
    word_length: usize,
    candidates: Vec<Arc<str>>,
}

impl AutomaticGuesser {
    pub fn new(bank: WordBank) -> AutomaticGuesser {
        AutomaticGuesser {
            bank,
            word_length: 0,
            candidates: Vec::new(),
        }
    }

    /// The words that are still consistent with every response so far, in word bank order.
    pub fn candidates(&self) -> &[Arc<str>] {
        &self.candidates
    }

    /// Counts the number of candidate words that contain each letter not yet shown on the board.
    ///
    /// Letters are listed in the order they are first encountered in the candidate words.
    pub fn letter_counts(&self, board: &Board) -> Vec<(char, u32)> {
        let revealed: HashSet<char> = board.revealed_letters().into_iter().collect();
        let mut index_per_letter: HashMap<char, usize> = HashMap::new();
        let mut counts: Vec<(char, u32)> = Vec::new();
        let mut letters_in_word: HashSet<char> = HashSet::new();
        for word in &self.candidates {
            letters_in_word.clear();
            for letter in word.chars() {
                if revealed.contains(&letter) || !letters_in_word.insert(letter) {
                    continue;
                }
                match index_per_letter.entry(letter) {
                    Entry::Occupied(entry) => counts[*entry.get()].1 += 1,
                    Entry::Vacant(entry) => {
                        entry.insert(counts.len());
                        counts.push((letter, 1));
                    }
                }
            }
        }
        counts
    }
}

impl Guesser for AutomaticGuesser {
    fn register_secret_length(&mut self, length: usize) -> Result<(), HangmanError> {
        self.word_length = length;
        self.candidates = self.bank.words_with_length(length);
        if self.candidates.is_empty() {
            return Err(HangmanError::NoCandidates {
                word_length: length,
            });
        }
        Ok(())
    }

    fn guess(&mut self, board: &Board) -> Result<char, HangmanError> {
        if self.candidates.is_empty() {
            return Err(HangmanError::NoCandidates {
                word_length: self.word_length,
            });
        }
        most_common_letter(&self.letter_counts(board)).ok_or(HangmanError::NoLettersLeft)
    }

    fn handle_response(&mut self, letter: char, positions: &[usize]) -> Result<(), HangmanError> {
        self.candidates = self
            .candidates
            .par_iter()
            .filter(|word| letter_is_exactly_at(word, letter, positions))
            .cloned()
            .collect();
        Ok(())
    }
}

/// Returns the first letter with the highest count. `Iterator::max_by_key` would return the last.
fn most_common_letter(counts: &[(char, u32)]) -> Option<char> {
    let mut best: Option<(char, u32)> = None;
    for &(letter, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((letter, count));
        }
    }
    best.map(|(letter, _)| letter)
}

/// Returns `true` iff `letter` occurs in `word` at exactly the given ascending positions, and
/// nowhere else. With no positions, this means the letter is not in the word.
fn letter_is_exactly_at(word: &str, letter: char, positions: &[usize]) -> bool {
    word.chars()
        .enumerate()
        .filter(|(_, other)| *other == letter)
        .map(|(index, _)| index)
        .eq(positions.iter().copied())
}

/// Picks a random secret word from a word bank.
#[derive(Debug, Clone)]
pub struct AutomaticReferee<R = ThreadRng> {
    bank: WordBank,
    rng: R,
    secret: Option<Arc<str>>,
}

impl AutomaticReferee<ThreadRng> {
    pub fn new(bank: WordBank) -> AutomaticReferee<ThreadRng> {
        AutomaticReferee::with_rng(bank, rand::thread_rng())
    }
}

impl<R: Rng> AutomaticReferee<R> {
    /// Constructs a referee that picks secret words using the given random number generator.
    pub fn with_rng(bank: WordBank, rng: R) -> AutomaticReferee<R> {
        AutomaticReferee {
            bank,
            rng,
            secret: None,
        }
    }

    /// The current secret word, if one has been picked.
    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }
}

impl<R: Rng> Referee for AutomaticReferee<R> {
    fn pick_secret_word(&mut self) -> Result<usize, HangmanError> {
        let secret = self
            .bank
            .choose(&mut self.rng)
            .ok_or(HangmanError::EmptyWordBank)?;
        let length = secret.chars().count();
        self.secret = Some(Arc::clone(secret));
        Ok(length)
    }

    fn check_guess(&mut self, letter: char) -> Result<Vec<usize>, HangmanError> {
        let secret = self.secret.as_ref().ok_or(HangmanError::NoSecret)?;
        Ok(secret
            .chars()
            .enumerate()
            .filter(|(_, other)| *other == letter)
            .map(|(index, _)| index)
            .collect())
    }

    fn require_secret(&mut self) -> Result<Box<str>, HangmanError> {
        self.secret
            .as_deref()
            .map(Box::from)
            .ok_or(HangmanError::NoSecret)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn most_common_letter_prefers_first_of_tied_letters() {
        assert_eq!(most_common_letter(&[('t', 1), ('b', 1)]), Some('t'));
        assert_eq!(most_common_letter(&[('t', 1), ('b', 2), ('c', 2)]), Some('b'));
        assert_eq!(most_common_letter(&[]), None);
    }

    #[test]
    fn letter_is_exactly_at_requires_every_occurrence() {
        assert!(letter_is_exactly_at("banana", 'a', &[1, 3, 5]));
        assert!(!letter_is_exactly_at("banana", 'a', &[1, 3]));
        assert!(!letter_is_exactly_at("banana", 'a', &[1, 3, 4, 5]));
        assert!(letter_is_exactly_at("banana", 'z', &[]));
        assert!(!letter_is_exactly_at("banana", 'n', &[]));
    }
}
