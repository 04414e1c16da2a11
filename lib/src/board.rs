use crate::results::Violation;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The character shown for letters that have not been revealed yet.
pub const PLACEHOLDER: char = '_';

/// The partially revealed secret word.
///
/// Only the [`Game`](crate::Game) mutates the board. Guessers get a shared reference to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    slots: Vec<Option<char>>,
}

impl Board {
    /// Constructs a board with `length` unrevealed slots.
    pub fn new(length: usize) -> Board {
        Board {
            slots: vec![None; length],
        }
    }

    /// The number of letters in the secret word.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The revealed letter in each slot, or `None` for placeholders.
    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    /// Returns `true` iff no placeholder slots remain.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Returns `true` iff the letter has been revealed in at least one slot.
    pub fn contains(&self, letter: char) -> bool {
        self.slots.contains(&Some(letter))
    }

    /// The distinct revealed letters, in the order they appear on the board.
    pub fn revealed_letters(&self) -> Vec<char> {
        let mut letters = Vec::new();
        for letter in self.slots.iter().flatten() {
            if !letters.contains(letter) {
                letters.push(*letter);
            }
        }
        letters
    }

    /// Renders the board, showing [`PLACEHOLDER`] for unrevealed slots.
    pub fn render(&self) -> String {
        self.slots
            .iter()
            .map(|slot| slot.unwrap_or(PLACEHOLDER))
            .collect()
    }

    /// Shows `letter` at each of the given positions.
    ///
    /// The whole response is checked before the board changes, so an invalid response leaves the
    /// board untouched. Positions must be strictly ascending and inside the board, and a slot that
    /// already shows a different letter cannot be overwritten.
    pub fn reveal(&mut self, letter: char, positions: &[usize]) -> Result<(), Violation> {
        self.check_reveal(letter, positions)?;
        for &position in positions {
            self.slots[position] = Some(letter);
        }
        Ok(())
    }

    fn check_reveal(&self, letter: char, positions: &[usize]) -> Result<(), Violation> {
        if !is_guessable(letter) {
            return Err(Violation::InvalidLetter(letter));
        }
        if positions.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(Violation::UnorderedPositions(positions.to_vec()));
        }
        for &position in positions {
            match self.slots.get(position) {
                None => {
                    return Err(Violation::PositionOutOfRange {
                        position,
                        length: self.len(),
                    })
                }
                Some(Some(revealed)) if *revealed != letter => {
                    return Err(Violation::ConflictingReveal {
                        position,
                        revealed: *revealed,
                        letter,
                    })
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Whether the given character may be used as a guess.
pub fn is_guessable(letter: char) -> bool {
    letter != PLACEHOLDER && !letter.is_whitespace() && !letter.is_control()
}
