use crate::board::Board;
use crate::results::*;
use std::result::Result;

/// The number of missed guesses allowed before the guesser loses.
pub const MAX_GUESSES: u32 = 8;

/// Holds the secret word and answers questions about it.
pub trait Referee {
    /// Chooses the secret word for this game, and returns its length.
    fn pick_secret_word(&mut self) -> Result<usize, HangmanError>;

    /// Returns every zero-based position at which `letter` occurs in the secret word, in
    /// ascending order. Empty if the letter is not in the word.
    fn check_guess(&mut self, letter: char) -> Result<Vec<usize>, HangmanError>;

    /// Discloses the secret word. Only used once the game is over.
    fn require_secret(&mut self) -> Result<Box<str>, HangmanError>;
}

/// Tries to reconstruct the secret word one letter at a time.
pub trait Guesser {
    /// Called once per game, before the first guess.
    fn register_secret_length(&mut self, length: usize) -> Result<(), HangmanError>;

    /// Chooses the next letter to guess, given the current board.
    fn guess(&mut self, board: &Board) -> Result<char, HangmanError>;

    /// Tells the guesser where its latest guess was found. `positions` is empty if the letter is
    /// not in the word.
    fn handle_response(&mut self, letter: char, positions: &[usize]) -> Result<(), HangmanError>;
}

impl<R: Referee + ?Sized> Referee for Box<R> {
    fn pick_secret_word(&mut self) -> Result<usize, HangmanError> {
        (**self).pick_secret_word()
    }

    fn check_guess(&mut self, letter: char) -> Result<Vec<usize>, HangmanError> {
        (**self).check_guess(letter)
    }

    fn require_secret(&mut self) -> Result<Box<str>, HangmanError> {
        (**self).require_secret()
    }
}

impl<R: Referee + ?Sized> Referee for &mut R {
    fn pick_secret_word(&mut self) -> Result<usize, HangmanError> {
        (**self).pick_secret_word()
    }

    fn check_guess(&mut self, letter: char) -> Result<Vec<usize>, HangmanError> {
        (**self).check_guess(letter)
    }

    fn require_secret(&mut self) -> Result<Box<str>, HangmanError> {
        (**self).require_secret()
    }
}

impl<G: Guesser + ?Sized> Guesser for &mut G {
    fn register_secret_length(&mut self, length: usize) -> Result<(), HangmanError> {
        (**self).register_secret_length(length)
    }

    fn guess(&mut self, board: &Board) -> Result<char, HangmanError> {
        (**self).guess(board)
    }

    fn handle_response(&mut self, letter: char, positions: &[usize]) -> Result<(), HangmanError> {
        (**self).handle_response(letter, positions)
    }
}

impl<G: Guesser + ?Sized> Guesser for Box<G> {
    fn register_secret_length(&mut self, length: usize) -> Result<(), HangmanError> {
        (**self).register_secret_length(length)
    }

    fn guess(&mut self, board: &Board) -> Result<char, HangmanError> {
        (**self).guess(board)
    }

    fn handle_response(&mut self, letter: char, positions: &[usize]) -> Result<(), HangmanError> {
        (**self).handle_response(letter, positions)
    }
}

/// Runs a single game between a guesser and a referee.
///
/// The guess budget is only charged when the referee reports that a letter is not in the word.
/// Repeated guesses are not rejected.
pub struct Game<G: Guesser, R: Referee> {
    guesser: G,
    referee: R,
    board: Board,
    guesses_remaining: u32,
    guesses: Vec<GuessRecord>,
    status: GameStatus,
}

impl<G: Guesser, R: Referee> Game<G, R> {
    /// Constructs a game that allows [`MAX_GUESSES`] misses.
    pub fn new(guesser: G, referee: R) -> Game<G, R> {
        Game::with_max_guesses(guesser, referee, MAX_GUESSES)
    }

    /// Constructs a game that allows `max_guesses` misses.
    pub fn with_max_guesses(guesser: G, referee: R, max_guesses: u32) -> Game<G, R> {
        Game {
            guesser,
            referee,
            board: Board::new(0),
            guesses_remaining: max_guesses,
            guesses: Vec::new(),
            status: GameStatus::Setup,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn guesses_remaining(&self) -> u32 {
        self.guesses_remaining
    }

    /// Every turn taken so far, in order.
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    pub fn guesser(&self) -> &G {
        &self.guesser
    }

    pub fn referee(&self) -> &R {
        &self.referee
    }

    /// Has the referee pick a secret word, tells the guesser its length, and lays out the board.
    ///
    /// Returns the length of the secret word.
    pub fn setup(&mut self) -> Result<usize, HangmanError> {
        if self.status != GameStatus::Setup {
            return Err(HangmanError::InvalidState(self.status));
        }
        let length = self.referee.pick_secret_word()?;
        if length == 0 {
            return Err(Violation::EmptySecret.into());
        }
        self.guesser.register_secret_length(length)?;
        self.board = Board::new(length);
        self.status = if self.guesses_remaining == 0 {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };
        Ok(length)
    }

    /// Plays one round: the guesser guesses, the referee answers, and the board, guess budget,
    /// status and turn history are updated before the guesser hears the response.
    ///
    /// A protocol violation leaves the game unchanged, so the turn can be retried.
    pub fn take_turn(&mut self) -> Result<&GuessRecord, HangmanError> {
        if self.status != GameStatus::Playing {
            return Err(HangmanError::InvalidState(self.status));
        }
        let letter = self.guesser.guess(&self.board)?;
        let positions = self.referee.check_guess(letter)?;
        self.board.reveal(letter, &positions)?;
        if positions.is_empty() {
            self.guesses_remaining -= 1;
        }
        if self.board.is_complete() {
            self.status = GameStatus::Won;
        } else if self.guesses_remaining == 0 {
            self.status = GameStatus::Lost;
        }
        self.guesses.push(GuessRecord::new(letter, positions));

        let record = &self.guesses[self.guesses.len() - 1];
        self.guesser
            .handle_response(record.letter, &record.positions)?;
        Ok(record)
    }

    /// Plays the game through to the end, setting it up first if necessary.
    ///
    /// If the guesser loses, the referee is asked to disclose the secret word.
    pub fn play(&mut self) -> Result<GameResult, HangmanError> {
        if self.status == GameStatus::Setup {
            self.setup()?;
        }
        while !self.status.is_over() {
            self.take_turn()?;
        }
        self.result()
    }

    /// Builds the result of a finished game.
    pub fn result(&mut self) -> Result<GameResult, HangmanError> {
        match self.status {
            GameStatus::Won => Ok(GameResult::Won {
                board: self.board.clone(),
                guesses: self.guesses.clone(),
                guesses_remaining: self.guesses_remaining,
            }),
            GameStatus::Lost => Ok(GameResult::Lost {
                board: self.board.clone(),
                guesses: self.guesses.clone(),
                secret: self.referee.require_secret()?,
            }),
            status => Err(HangmanError::InvalidState(status)),
        }
    }
}

/// Plays a whole game between the given guesser and referee, allowing `max_guesses` misses.
pub fn play_game<G: Guesser, R: Referee>(
    guesser: G,
    referee: R,
    max_guesses: u32,
) -> Result<GameResult, HangmanError> {
    Game::with_max_guesses(guesser, referee, max_guesses).play()
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_matches::assert_matches;

    struct FixedReferee(&'static str);

    impl Referee for FixedReferee {
        fn pick_secret_word(&mut self) -> Result<usize, HangmanError> {
            Ok(self.0.chars().count())
        }

        fn check_guess(&mut self, letter: char) -> Result<Vec<usize>, HangmanError> {
            Ok(self
                .0
                .chars()
                .enumerate()
                .filter(|(_, c)| *c == letter)
                .map(|(i, _)| i)
                .collect())
        }

        fn require_secret(&mut self) -> Result<Box<str>, HangmanError> {
            Ok(Box::from(self.0))
        }
    }

    struct AlphabetGuesser(std::ops::RangeInclusive<char>);

    impl Guesser for AlphabetGuesser {
        fn register_secret_length(&mut self, _length: usize) -> Result<(), HangmanError> {
            Ok(())
        }

        fn guess(&mut self, _board: &Board) -> Result<char, HangmanError> {
            self.0.next().ok_or(HangmanError::NoLettersLeft)
        }

        fn handle_response(&mut self, _: char, _: &[usize]) -> Result<(), HangmanError> {
            Ok(())
        }
    }

    #[test]
    fn take_turn_before_setup_fails() {
        let mut game = Game::new(AlphabetGuesser('a'..='z'), FixedReferee("cab"));

        assert_matches!(
            game.take_turn(),
            Err(HangmanError::InvalidState(GameStatus::Setup))
        );
    }

    #[test]
    fn zero_budget_loses_immediately() {
        let mut game = Game::with_max_guesses(AlphabetGuesser('a'..='z'), FixedReferee("cab"), 0);

        assert_eq!(game.setup().unwrap(), 3);
        assert_eq!(game.status(), GameStatus::Lost);
        assert_matches!(game.play(), Ok(GameResult::Lost { secret, .. }) if &*secret == "cab");
    }

    #[test]
    fn play_alphabetically() {
        let result = play_game(AlphabetGuesser('a'..='z'), FixedReferee("cab"), MAX_GUESSES);

        assert_matches!(
            result,
            Ok(GameResult::Won {
                guesses_remaining: MAX_GUESSES,
                ..
            })
        );
    }
}
