//! Wordle Advisor - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_advisor::{
    commands::{recommend, run_benchmark, sample_words, solve_word},
    core::{Feedback, Word},
    output::{
        benchmark_progress_bar, print_benchmark_result, print_feedback, print_recommendation,
        print_solve_result,
    },
    session::AdvisorConfig,
    wordlists::{
        ANSWERS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Wordle advisor: filters candidates from feedback and recommends the guess eliminating the most words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Scoring threads: 0 = all cores, negative = all cores minus n
    #[arg(
        short = 'j',
        long,
        global = true,
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    jobs: isize,

    /// Opening guess; 'none' scores the first guess too
    #[arg(short = 'o', long, global = true)]
    opening: Option<String>,

    /// Number of ranked guesses to show
    #[arg(short = 't', long, global = true, default_value_t = 5)]
    top: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend the next guess from the guesses made so far
    Recommend {
        /// A guess and its feedback, e.g. raise:bybbg (repeatable, in order)
        #[arg(short, long = "guess")]
        guesses: Vec<String>,
    },

    /// Show the feedback a guess gets against a solution
    Feedback {
        guess: String,
        solution: String,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play simulated games over random dictionary words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(ANSWERS)),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read wordlist '{path}'"))?;
            anyhow::ensure!(!words.is_empty(), "Wordlist '{path}' has no valid words");
            Ok(words)
        }
    }
}

fn build_config(cli: &Cli) -> Result<AdvisorConfig> {
    let opening = match cli.opening.as_deref() {
        None => AdvisorConfig::default().opening,
        Some("none") => None,
        Some(word) => {
            Some(Word::new(word).with_context(|| format!("Invalid opening word '{word}'"))?)
        }
    };

    Ok(AdvisorConfig::default()
        .with_workers(cli.jobs)
        .with_opening(opening)
        .with_top(cli.top))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    match &cli.command {
        Commands::Recommend { guesses } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let result = recommend(dictionary, config, guesses)?;
            print_recommendation(&result);
        }
        Commands::Feedback { guess, solution } => {
            let guess = Word::new(guess).context("Invalid guess")?;
            let solution = Word::new(solution).context("Invalid solution")?;
            print_feedback(&guess, &solution, &Feedback::compute(&guess, &solution));
        }
        Commands::Solve { word, verbose } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let result = solve_word(word, dictionary, config)?;
            print_solve_result(&result, *verbose);
        }
        Commands::Benchmark { count, seed } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let targets = sample_words(&dictionary, *count, *seed);
            println!("Running benchmark on {} random words...", targets.len());

            let progress = benchmark_progress_bar(targets.len());
            let result = run_benchmark(&dictionary, &targets, &config, &progress)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
