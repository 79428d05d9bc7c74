//! Wordle Sieve - CLI
//!
//! Play the five-letter word game in a TUI or on the command line, let the
//! solver play it, or have the solver assist with a game running elsewhere.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_sieve::{
    WordleError,
    commands::{
        BenchmarkConfig, SolveConfig, run_assist, run_benchmark, run_simple, select_targets,
        solve_word,
    },
    core::Word,
    game::GameSession,
    logging::init_logger,
    output::{print_benchmark_result, print_solve_result},
    scoring::{LetterStatistics, WordScorer},
    solver::{CandidateSet, DEFAULT_TRIES},
    wordlists::loader::{default_dictionary, default_letters, load_dictionary, load_letters},
};

#[derive(Parser)]
#[command(
    name = "wordle_sieve",
    about = "Five-letter word game with a letter-frequency solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file (whitespace-delimited words); defaults to the built-in list
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Letter weight file (`letter,weight` entries); defaults to the built-in table
    #[arg(short, long, global = true)]
    letters: Option<PathBuf>,

    /// Number of tries per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_TRIES)]
    tries: usize,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play {
        /// Play against this word instead of a random one
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Line-based game without the TUI
    Simple {
        /// Play against this word instead of a random one
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Let the solver play against a word
    Solve {
        /// The target word to solve; random when omitted
        word: Option<String>,

        /// Show candidate counts and scores for each turn
        #[arg(long)]
        details: bool,
    },

    /// Suggest guesses for a game played elsewhere
    Assist,

    /// Benchmark solver performance
    Benchmark {
        /// Number of words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Sample words at random with this seed instead of taking the first N
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if cli.tries == 0 {
        bail!("--tries must be at least 1");
    }

    let dictionary = load_words(cli.dictionary.as_ref())?;
    let stats = load_stats(cli.letters.as_ref())?;
    let candidates = CandidateSet::new(&dictionary, &WordScorer::new(&stats))
        .context("failed to score the dictionary")?;
    log::info!(
        "{} words scored with {} letter weights",
        candidates.len(),
        stats.len()
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { secret: None });

    match command {
        Commands::Play { secret } => {
            let session = new_session(secret, &dictionary, cli.tries)?;
            run_play_command(&dictionary, &candidates, session)
        }
        Commands::Simple { secret } => {
            let mut session = new_session(secret, &dictionary, cli.tries)?;
            run_simple_command(&mut session, &candidates)
        }
        Commands::Solve { word, details } => {
            let mut config = SolveConfig::new(word);
            config.max_guesses = cli.tries;
            let result = solve_word(config, &dictionary, &candidates, &mut rand::rng())?;
            print_solve_result(&result, details || cli.verbose);
            Ok(())
        }
        Commands::Assist => {
            let stdin = io::stdin();
            run_assist(&candidates, cli.tries, &mut stdin.lock(), &mut io::stdout())?;
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&dictionary, &candidates, count, seed, cli.tries);
            Ok(())
        }
    }
}

fn load_words(path: Option<&PathBuf>) -> Result<Vec<Word>> {
    let words = match path {
        Some(path) => load_dictionary(path)
            .with_context(|| format!("failed to read dictionary {}", path.display()))?,
        None => default_dictionary(),
    };
    if words.is_empty() {
        return Err(WordleError::EmptyDictionary).context("no five-letter words were loaded");
    }
    log::info!("loaded {} dictionary words", words.len());
    Ok(words)
}

fn load_stats(path: Option<&PathBuf>) -> Result<LetterStatistics> {
    match path {
        Some(path) => load_letters(path)
            .with_context(|| format!("failed to read letter weights {}", path.display())),
        None => default_letters().context("built-in letter table is malformed"),
    }
}

fn new_session(secret: Option<String>, dictionary: &[Word], tries: usize) -> Result<GameSession> {
    match secret {
        Some(text) => {
            let word = Word::new(&text).with_context(|| format!("invalid secret '{text}'"))?;
            Ok(GameSession::new(word, tries))
        }
        None => Ok(GameSession::random(dictionary, tries, &mut rand::rng())?),
    }
}

fn run_simple_command(session: &mut GameSession, candidates: &CandidateSet) -> Result<()> {
    let stdin = io::stdin();
    match run_simple(session, Some(candidates), &mut stdin.lock(), &mut io::stdout()) {
        Ok(status) => {
            log::info!("game finished: {status:?}");
            Ok(())
        }
        Err(WordleError::Aborted) => {
            println!(
                "\nGave up. The word was {}.",
                session.secret().text().to_uppercase()
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn run_benchmark_command(
    dictionary: &[Word],
    candidates: &CandidateSet,
    count: usize,
    seed: Option<u64>,
    tries: usize,
) {
    match seed {
        Some(seed) => println!("Running benchmark on {count} random words (seed {seed})..."),
        None => println!("Running benchmark on the first {count} words..."),
    }

    let config = BenchmarkConfig {
        count,
        seed,
        tries,
        show_progress: true,
    };
    let targets = select_targets(dictionary, config.count, config.seed);
    let result = run_benchmark(candidates, &targets, &config);
    print_benchmark_result(&result);
}

fn run_play_command(
    dictionary: &[Word],
    candidates: &CandidateSet,
    session: GameSession,
) -> Result<()> {
    use wordle_sieve::interactive::{App, run_tui};

    // stderr output would draw over the alternate screen
    log::set_max_level(log::LevelFilter::Off);

    let app = App::new(dictionary, candidates, session);
    run_tui(app)
}
