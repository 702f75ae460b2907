//! Display functions for command results

use super::formatters::{score_bar, tile_row};
use crate::commands::{BenchmarkResult, Recommendation, SolveResult};
use crate::core::{Feedback, Word};
use crate::session::MAX_GUESSES;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Print the feedback a guess would receive
pub fn print_feedback(guess: &Word, solution: &Word, feedback: &Feedback) {
    println!(
        "{} vs {}: {}  {}  {}",
        guess.text().to_uppercase().bold(),
        solution.text().to_uppercase().bold(),
        tile_row(guess, feedback),
        feedback.to_emoji(),
        feedback.to_string().bright_black()
    );
}

/// Print the state of a game and the ranked next guesses
pub fn print_recommendation(result: &Recommendation) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Status: {}  |  {} candidates  |  {} guesses left",
        result.status.state.to_string().bright_yellow().bold(),
        result.status.remaining,
        result.status.guesses_left()
    );
    println!("{}", "─".repeat(60).cyan());

    for record in &result.history {
        println!("  {}", tile_row(&record.word, &record.feedback));
    }

    if result.status.is_stuck() {
        println!(
            "\n{}",
            "No dictionary word matches this feedback".red().bold()
        );
        return;
    }

    if !result.candidates.is_empty() {
        let listed: Vec<String> = result.candidates.iter().map(Word::text).collect();
        println!("\nCandidates: {}", listed.join(", "));
    }

    if !result.ranked.is_empty() {
        println!("\n🎯 {}", "Best guesses:".bright_cyan().bold());
        for (i, entry) in result.ranked.iter().enumerate() {
            let bar = score_bar(entry.score, result.status.remaining, 30);
            println!(
                "  {}. {} [{}] {}",
                i + 1,
                entry.word.text().to_uppercase().bold(),
                bar.green(),
                format!("{:.2} eliminated", entry.score).bright_yellow()
            );
        }
    }

    match result.next {
        Some(word) => println!(
            "\nNext guess: {}",
            word.text().to_uppercase().bright_green().bold()
        ),
        None if result.status.state.is_terminal() => {
            println!("\n{}", format!("Game over: {}", result.status.state).bold());
        }
        None => {}
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.report.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            tile_row(&step.word, &step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                println!(
                    "  Reduction:  {:.1}x",
                    step.candidates_before as f64 / step.candidates_after as f64
                );
            }
        }
    }

    println!();
    if result.report.is_won() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.report.guesses())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Failed to solve in {} guesses ({:?})",
                result.report.guesses(),
                result.report.outcome
            )
            .red()
            .bold()
        );
    }
}

/// Progress bar for a benchmark over `len` words
#[must_use]
pub fn benchmark_progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    )
    .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for guess_count in 1..=MAX_GUESSES {
            let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failed.is_empty() {
        let failed: Vec<String> = result.failed.iter().map(Word::text).collect();
        println!(
            "\n❌ {} {}",
            "Failed:".red().bold(),
            failed.join(", ")
        );
    }
}
