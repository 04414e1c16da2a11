#[macro_use]
extern crate assert_matches;

use rs_hangman::*;

use std::fs::File;
use std::io;
use std::io::Cursor;
use std::result::Result;
use std::sync::Arc;

macro_rules! assert_arc_eq {
    ($arc_vec:expr, $non_arc_vec:expr) => {
        assert_eq!(
            $arc_vec as &[Arc<str>],
            $non_arc_vec
                .iter()
                .map(|thing| Arc::from(*thing))
                .collect::<Vec<Arc<_>>>()
        );
    };
}

#[test]
fn word_bank_from_reader_succeeds() -> Result<(), HangmanError> {
    let mut cursor = Cursor::new(String::from("\n\ncat\n dog\nApple \n"));

    let word_bank = WordBank::from_reader(&mut cursor)?;

    assert_eq!(word_bank.len(), 3);
    assert_arc_eq!(&word_bank, &["cat", "dog", "apple"]);
    Ok(())
}

#[test]
fn word_bank_from_iterator_skips_repeated_words() -> Result<(), HangmanError> {
    let word_bank = WordBank::from_iterator(vec!["", "cat", "Dog", "CAT", "dog "])?;

    assert_arc_eq!(&word_bank, &["cat", "dog"]);
    Ok(())
}

#[test]
fn word_bank_from_string_iterator_succeeds() -> Result<(), HangmanError> {
    let word_bank = WordBank::from_iterator(vec!["cat".to_string(), "cab".to_string()])?;

    assert_arc_eq!(&word_bank, &["cat", "cab"]);
    Ok(())
}

#[test]
fn word_bank_rejects_words_with_spaces() {
    assert_matches!(
        WordBank::from_iterator(vec!["cat", "hot dog"]),
        Err(HangmanError::InvalidWord(word)) if &*word == "hot dog"
    );
}

#[test]
fn word_bank_from_reader_invalid_utf8_fails() {
    let mut cursor = Cursor::new(vec![b'c', b'a', 0xff, b'\n']);

    assert_matches!(
        WordBank::from_reader(&mut cursor),
        Err(HangmanError::Io(_))
    );
}

#[test]
fn words_with_length_keeps_bank_order() -> Result<(), HangmanError> {
    let word_bank = WordBank::from_iterator(vec!["zebra", "cat", "apple", "dog", "naïve"])?;

    assert_arc_eq!(&word_bank.words_with_length(3), &["cat", "dog"]);
    assert_arc_eq!(&word_bank.words_with_length(5), &["zebra", "apple", "naïve"]);
    assert!(word_bank.words_with_length(4).is_empty());
    Ok(())
}

#[test]
fn word_bank_from_data_file() -> Result<(), HangmanError> {
    let mut words = io::BufReader::new(File::open("../data/words.txt")?);

    let word_bank = WordBank::from_reader(&mut words)?;

    assert!(word_bank.len() > 500);
    assert!(word_bank.iter().all(|word| word.chars().all(|c| c.is_ascii_lowercase())));
    Ok(())
}
