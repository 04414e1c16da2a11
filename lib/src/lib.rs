//! Play Hangman-style word guessing games.
//!
//! A [`Game`] is played between a [`Referee`], who holds the secret word, and a [`Guesser`],
//! who reconstructs it one letter at a time. The [`AutomaticGuesser`] narrows a [`WordBank`]
//! down to the words that are consistent with every response, and guesses the letter that
//! appears in the most of them.
//!
//! ```
//! use rs_hangman::*;
//!
//! let bank = WordBank::from_iterator(["cat", "dog", "bat", "cab"])?;
//! let referee = AutomaticReferee::new(WordBank::from_iterator(["cat"])?);
//! let result = play_game(AutomaticGuesser::new(bank), referee, MAX_GUESSES)?;
//!
//! assert!(result.is_won());
//! assert_eq!(result.board().render(), "cat");
//! # Ok::<(), HangmanError>(())
//! ```

mod automatic;
mod board;
mod data;
mod engine;
mod human;
mod results;

pub use automatic::*;
pub use board::*;
pub use data::WordBank;
pub use engine::*;
pub use human::*;
pub use results::*;
