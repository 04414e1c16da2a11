use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use rs_hangman::*;
use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::rc::Rc;
use std::time::Instant;

/// Simple program to play Hangman, where either side may be played by the computer.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[arg(short = 'f', long)]
    words_file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an interactive game.
    Play {
        /// Who guesses the secret word.
        #[arg(long, value_enum, default_value_t = Player::Computer)]
        guesser: Player,
        /// Who picks the secret word.
        #[arg(long, value_enum, default_value_t = Player::Human)]
        referee: Player,
        /// The number of missed guesses allowed.
        #[arg(long, default_value_t = MAX_GUESSES)]
        max_guesses: u32,
    },
    /// Have the computer guess the given word.
    Single {
        word: String,
        /// The number of missed guesses allowed.
        #[arg(long, default_value_t = MAX_GUESSES)]
        max_guesses: u32,
    },
    /// Have the computer guess every word in the words file.
    Benchmark {
        /// The number of missed guesses allowed.
        #[arg(long, default_value_t = MAX_GUESSES)]
        max_guesses: u32,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Player {
    Human,
    Computer,
}

fn main() -> Result<(), HangmanError> {
    let start_time = Instant::now();
    let args = Args::parse();

    let mut words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let word_bank = WordBank::from_reader(&mut words_reader)?;
    eprintln!("File: {} ({} words)", args.words_file, word_bank.len());

    match args.command {
        Command::Play {
            guesser,
            referee,
            max_guesses,
        } => play_interactive_game(&word_bank, guesser, referee, max_guesses)?,
        Command::Single { word, max_guesses } => {
            play_single_game(&word, &word_bank, max_guesses)?
        }
        Command::Benchmark { max_guesses } => run_benchmark(&word_bank, max_guesses)?,
    }

    eprintln!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn play_interactive_game(
    word_bank: &WordBank,
    guesser_kind: Player,
    referee_kind: Player,
    max_guesses: u32,
) -> Result<(), HangmanError> {
    let input = shared_input(io::stdin().lock());
    let guesser: Box<dyn Guesser> = match guesser_kind {
        Player::Human => Box::new(HumanGuesser::with_shared_input(
            Rc::clone(&input),
            io::stdout(),
        )),
        Player::Computer => Box::new(AutomaticGuesser::new(word_bank.clone())),
    };
    let referee: Box<dyn Referee> = match referee_kind {
        Player::Human => Box::new(HumanReferee::with_shared_input(
            Rc::clone(&input),
            io::stdout(),
        )),
        Player::Computer => Box::new(AutomaticReferee::new(word_bank.clone())),
    };
    // A human guesser is shown the board and told about misses by the guesser itself.
    let report_turns = guesser_kind == Player::Computer;

    println!("Welcome to Hangman!");
    let mut game = Game::with_max_guesses(guesser, referee, max_guesses);
    game.setup()?;
    while !game.status().is_over() {
        if report_turns {
            println!("{}", game.board());
        }
        match game.take_turn() {
            Ok(record) => {
                if report_turns && !record.is_hit() {
                    println!("There is no {} in the word.", record.letter);
                }
            }
            Err(HangmanError::ProtocolViolation(violation)) => {
                println!("{}. Let's try that turn again.", violation);
                continue;
            }
            Err(error) => return Err(error),
        }
        println!("You have {} guesses left!", game.guesses_remaining());
    }

    match game.result()? {
        GameResult::Won { board, .. } => {
            println!("{}", board);
            println!("Guesser wins!");
        }
        GameResult::Lost { secret, .. } => {
            println!("Secret word is {}!", secret);
            println!("Guesser loses!");
        }
    }
    Ok(())
}

fn play_single_game(word: &str, word_bank: &WordBank, max_guesses: u32) -> Result<(), HangmanError> {
    let referee = AutomaticReferee::new(WordBank::from_iterator([word])?);
    let result = play_game(
        AutomaticGuesser::new(word_bank.clone()),
        referee,
        max_guesses,
    )?;
    let mut board = Board::new(result.board().len());
    for record in result.guesses() {
        board.reveal(record.letter, &record.positions)?;
        println!("\t{} -> {}", record.letter, board);
    }
    match result {
        GameResult::Won { guesses, .. } => {
            println!("Solved it! It took me {} guesses.", guesses.len());
        }
        GameResult::Lost { guesses, .. } => {
            println!(
                "I still couldn't solve it after {} guesses :(",
                guesses.len()
            );
        }
    }
    Ok(())
}

fn run_benchmark(word_bank: &WordBank, max_guesses: u32) -> Result<(), HangmanError> {
    let results = word_bank[..]
        .par_iter()
        .map(|word| {
            let referee = AutomaticReferee::new(WordBank::from_iterator([word])?);
            play_game(
                AutomaticGuesser::new(word_bank.clone()),
                referee,
                max_guesses,
            )
        })
        .collect::<Result<Vec<GameResult>, HangmanError>>()?;
    println!("Played {} words. Results:", results.len());

    let mut num_games_per_miss_count: BTreeMap<usize, u32> = BTreeMap::new();
    for result in results.iter() {
        *(num_games_per_miss_count
            .entry(result.num_misses())
            .or_insert(0)) += 1;
    }

    println!("|Num misses|Num games|");
    println!("|----------|---------|");
    for (num_misses, num_games) in num_games_per_miss_count.iter() {
        println!("|{}|{}|", num_misses, num_games);
    }

    let num_won = results.iter().filter(|result| result.is_won()).count();
    let average: f64 = results
        .iter()
        .map(|result| result.guesses().len())
        .sum::<usize>() as f64
        / results.len().max(1) as f64;
    println!(
        "\n**Won:** {} of {} ({:.1}%)",
        num_won,
        results.len(),
        100.0 * num_won as f64 / results.len().max(1) as f64
    );
    println!("**Average number of guesses:** {:.2}", average);
    Ok(())
}
