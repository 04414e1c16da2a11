use crate::board::{is_guessable, Board};
use crate::engine::{Guesser, Referee};
use crate::results::HangmanError;
use std::cell::RefCell;
use std::io;
use std::io::BufRead;
use std::io::Write;
use std::rc::Rc;
use std::result::Result;

/// Input that both interactive players read from, one line at a time.
pub type SharedInput<R> = Rc<RefCell<R>>;

/// Wraps the given reader so that it can be handed to several players.
pub fn shared_input<R: BufRead>(input: R) -> SharedInput<R> {
    Rc::new(RefCell::new(input))
}

/// Reads one line, without its line ending. Fails if the input has ended.
fn read_line<R: BufRead>(input: &SharedInput<R>) -> Result<String, HangmanError> {
    let mut buffer = String::new();
    if input.borrow_mut().read_line(&mut buffer)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input ended mid-game").into());
    }
    Ok(buffer.trim().to_string())
}

/// Parses a list of positions such as `"0, 2"`, or `"none"` for no positions.
///
/// The returned positions are sorted and de-duplicated.
fn parse_positions(input: &str) -> Option<Vec<usize>> {
    if input.eq_ignore_ascii_case("none") {
        return Some(Vec::new());
    }
    let mut positions = input
        .split(',')
        .map(|position| position.trim().parse::<usize>().ok())
        .collect::<Option<Vec<usize>>>()?;
    positions.sort_unstable();
    positions.dedup();
    Some(positions)
}

/// A referee that asks a person about their secret word.
pub struct HumanReferee<R: BufRead, W: Write> {
    input: SharedInput<R>,
    output: W,
}

impl<R: BufRead, W: Write> HumanReferee<R, W> {
    pub fn new(input: R, output: W) -> HumanReferee<R, W> {
        HumanReferee::with_shared_input(shared_input(input), output)
    }

    /// Constructs a player that reads from input that may also be used by the other player.
    pub fn with_shared_input(input: SharedInput<R>, output: W) -> HumanReferee<R, W> {
        HumanReferee { input, output }
    }
}

impl<R: BufRead, W: Write> Referee for HumanReferee<R, W> {
    fn pick_secret_word(&mut self) -> Result<usize, HangmanError> {
        writeln!(self.output, "Think of a secret word. How long?")?;
        loop {
            match read_line(&self.input)?.parse::<usize>() {
                Ok(length) if length > 0 => return Ok(length),
                _ => writeln!(self.output, "Enter a valid length!")?,
            }
        }
    }

    fn check_guess(&mut self, letter: char) -> Result<Vec<usize>, HangmanError> {
        writeln!(self.output, "Player guessed {}", letter)?;
        writeln!(
            self.output,
            "What positions does that occur at? If none, enter none!"
        )?;
        loop {
            if let Some(positions) = parse_positions(&read_line(&self.input)?) {
                return Ok(positions);
            }
            writeln!(
                self.output,
                "Enter comma separated positions, starting from 0, or none!"
            )?;
        }
    }

    fn require_secret(&mut self) -> Result<Box<str>, HangmanError> {
        writeln!(self.output, "What word were you thinking of?")?;
        Ok(Box::from(read_line(&self.input)?.as_str()))
    }
}

/// A guesser that asks a person for each letter.
pub struct HumanGuesser<R: BufRead, W: Write> {
    input: SharedInput<R>,
    output: W,
}

impl<R: BufRead, W: Write> HumanGuesser<R, W> {
    pub fn new(input: R, output: W) -> HumanGuesser<R, W> {
        HumanGuesser::with_shared_input(shared_input(input), output)
    }

    /// Constructs a player that reads from input that may also be used by the other player.
    pub fn with_shared_input(input: SharedInput<R>, output: W) -> HumanGuesser<R, W> {
        HumanGuesser { input, output }
    }
}

impl<R: BufRead, W: Write> Guesser for HumanGuesser<R, W> {
    fn register_secret_length(&mut self, length: usize) -> Result<(), HangmanError> {
        writeln!(
            self.output,
            "The length of secret word is {} letters long.",
            length
        )?;
        Ok(())
    }

    fn guess(&mut self, board: &Board) -> Result<char, HangmanError> {
        writeln!(self.output, "{}", board)?;
        loop {
            write!(self.output, "Input guess: ")?;
            self.output.flush()?;
            let line = read_line(&self.input)?.to_lowercase();
            let mut letters = line.chars();
            match (letters.next(), letters.next()) {
                (Some(letter), None) if is_guessable(letter) => return Ok(letter),
                _ => writeln!(self.output, "Guess a single letter!")?,
            }
        }
    }

    fn handle_response(&mut self, letter: char, positions: &[usize]) -> Result<(), HangmanError> {
        if positions.is_empty() {
            writeln!(self.output, "There is no {} in the word.", letter)?;
        } else {
            writeln!(self.output, "Found {} at positions {:?}", letter, positions)?;
        }
        Ok(())
    }
}
