//! Wordpool CLI
//!
//! Interactive command-line interface for the letter-pool word game.

use std::io::{self, BufRead, Write};
use std::process;

use rand::thread_rng;
use wordpool::{load_dictionary, top_words, Dictionary, GameSession, LetterPool, QUIT_COMMAND};

const BANNER_TEXT: &str = include_str!("text/banner.txt");
const USAGE_TEXT: &str = include_str!("text/usage.txt");

fn print_banner() {
    for line in BANNER_TEXT.lines().take(6) {
        println!("{}", line);
    }
}

fn load_dictionary_or_exit() -> Dictionary {
    match load_dictionary() {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!("Fatal: {}", e);
            process::exit(1);
        }
    }
}

fn pool_from_arg_or_exit(letters: &str) -> LetterPool {
    match LetterPool::from_letters(&letters.to_lowercase()) {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn print_standings(session: &GameSession) {
    let standings = session.standings();
    if standings.is_empty() {
        return;
    }
    println!("High scores:");
    for (i, entry) in standings.iter().enumerate() {
        println!("{:>4}. {:<14} {:>3}", i + 1, entry.word, entry.score);
    }
}

fn run_interactive(pool: LetterPool) {
    print_banner();

    println!("Loading dictionary...");
    let dictionary = load_dictionary_or_exit();
    println!("Loaded {} words.", dictionary.len());
    println!();

    let mut session = GameSession::new(pool, dictionary);
    println!("Your letters: {}", session.pool());
    println!(
        "Spell words from your letters. Each scores its length. '{}' ends the game.",
        QUIT_COMMAND
    );
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            break;
        }

        let word = line.trim().to_lowercase();
        if word == QUIT_COMMAND {
            break;
        }

        if word.is_empty() {
            println!("Nothing entered - 0 points.");
            println!();
            continue;
        }

        let already_placed = session.standings().iter().any(|e| e.word == word);
        let points = session.submit_word(&word);
        if points > 0 {
            println!("\"{}\" is good! {} points.", word, points);
            print_standings(&session);
        } else if already_placed {
            println!("\"{}\" has already been played - 0 points.", word);
        } else {
            println!("\"{}\" doesn't work - 0 points.", word);
        }
        println!();
    }

    println!();
    println!("Final standings:");
    if session.standings().is_empty() {
        println!("  (no scoring words this game)");
    } else {
        print_standings(&session);
    }
    println!("Goodbye!");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                println!("{}", USAGE_TEXT);
            }
            "play" => {
                if args.len() < 3 {
                    eprintln!("Usage: wordpool play <letters>");
                    process::exit(1);
                }

                let pool = pool_from_arg_or_exit(&args[2]);
                run_interactive(pool);
            }
            "best" => {
                if args.len() < 3 {
                    eprintln!("Usage: wordpool best <letters>");
                    process::exit(1);
                }

                let pool = pool_from_arg_or_exit(&args[2]);
                let dictionary = load_dictionary_or_exit();

                let ranked = top_words(&pool, &dictionary, 10);
                if ranked.is_empty() {
                    println!("No dictionary words can be made from '{}'.", pool.letters());
                } else {
                    println!("Best words for '{}':", pool.letters());
                    for (i, (word, score)) in ranked.iter().enumerate() {
                        println!("{:>4}. {:<14} {:>3}", i + 1, word, score);
                    }
                }
            }
            _ => {
                eprintln!("Unknown command: {}", args[1]);
                eprintln!("Use --help for usage information.");
                process::exit(1);
            }
        }
    } else {
        let pool = LetterPool::generate(&mut thread_rng());
        run_interactive(pool);
    }
}
