use crate::board::Board;
use std::io;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of a single turn: the letter that was guessed, and every zero-based position at
/// which the referee reported it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GuessRecord {
    pub letter: char,
    /// Strictly ascending. Empty iff the letter is not in the secret word.
    pub positions: Vec<usize>,
}

impl GuessRecord {
    pub fn new(letter: char, positions: Vec<usize>) -> GuessRecord {
        GuessRecord { letter, positions }
    }

    /// Whether the letter was found in the secret word.
    pub fn is_hit(&self) -> bool {
        !self.positions.is_empty()
    }
}

/// Where a [`Game`](crate::Game) is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// The secret word has not been chosen yet.
    Setup,
    /// The guesser is still guessing.
    Playing,
    /// Every letter of the secret word was revealed.
    Won,
    /// The guess budget ran out before the word was revealed.
    Lost,
}

impl GameStatus {
    /// Returns `true` iff the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    /// The guesser revealed the whole word.
    Won {
        board: Board,
        guesses: Vec<GuessRecord>,
        /// How many misses the guesser could still have afforded.
        guesses_remaining: u32,
    },
    /// The guesser ran out of guesses. The referee disclosed the secret word.
    Lost {
        board: Board,
        guesses: Vec<GuessRecord>,
        secret: Box<str>,
    },
}

impl GameResult {
    pub fn is_won(&self) -> bool {
        matches!(self, GameResult::Won { .. })
    }

    /// The board as it was when the game ended.
    pub fn board(&self) -> &Board {
        match self {
            GameResult::Won { board, .. } | GameResult::Lost { board, .. } => board,
        }
    }

    /// Every turn of the game, in order.
    pub fn guesses(&self) -> &[GuessRecord] {
        match self {
            GameResult::Won { guesses, .. } | GameResult::Lost { guesses, .. } => guesses,
        }
    }

    /// The number of turns whose letter was not in the secret word.
    pub fn num_misses(&self) -> usize {
        self.guesses().iter().filter(|record| !record.is_hit()).count()
    }
}

/// A response from one of the roles that breaks the rules of the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("the secret word must contain at least one letter")]
    EmptySecret,
    #[error("{0:?} cannot be guessed")]
    InvalidLetter(char),
    #[error("position {position} is outside of a word with {length} letters")]
    PositionOutOfRange { position: usize, length: usize },
    #[error("positions must be strictly ascending, but got {0:?}")]
    UnorderedPositions(Vec<usize>),
    #[error("position {position} already shows {revealed:?}, so it cannot be {letter:?}")]
    ConflictingReveal {
        position: usize,
        revealed: char,
        letter: char,
    },
}

/// Indicates that an error occurred while setting up or playing a game.
#[derive(Debug, Error)]
pub enum HangmanError {
    /// The word bank contains no words.
    #[error("the word bank is empty")]
    EmptyWordBank,
    /// A word in the word list contains whitespace.
    #[error("invalid word {0:?} in the word list")]
    InvalidWord(Box<str>),
    /// No word in the guesser's word list is consistent with the responses so far. Either the
    /// secret word is not in the word list, or the referee gave inconsistent responses.
    #[error("no words with {word_length} letters are consistent with the responses so far")]
    NoCandidates { word_length: usize },
    /// Every letter of every remaining candidate is already on the board.
    #[error("every letter of the remaining candidate words has already been revealed")]
    NoLettersLeft,
    /// The referee was asked about a secret word before picking one.
    #[error("no secret word has been picked")]
    NoSecret,
    /// The game was driven out of order, e.g. a turn was taken after the game ended.
    #[error("cannot do that while the game is in the {0:?} state")]
    InvalidState(GameStatus),
    #[error("protocol violation: {0}")]
    ProtocolViolation(#[from] Violation),
    #[error(transparent)]
    Io(#[from] io::Error),
}
