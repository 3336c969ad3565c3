//! Display functions for command results

use super::formatters::{colored_code, create_progress_bar, feedback_to_pegs};
use crate::commands::{AnalysisResult, SolveResult, Suggestion};
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let length = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", colored_code(&result.secret));
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}  ({})",
            i + 1,
            colored_code(&step.guess),
            feedback_to_pegs(step.feedback, length),
            step.feedback
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Worst case: {} candidates", step.worst_case);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else if let Some(failure) = &result.failure {
        println!("{}", format!("❌ {failure}").red().bold());
    }
}

/// Print the partition table of a guess
pub fn print_analysis_result(result: &AnalysisResult) {
    let length = result.guess.len();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "MINIMAX ANALYSIS:".bright_cyan().bold(),
        colored_code(&result.guess)
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against all {} codes:", result.total_candidates);
    for row in &result.outcomes {
        let bar = create_progress_bar(row.count as f64, result.largest_bucket as f64, 30);
        let line = format!(
            "   {} ({})  [{}] {:5}",
            feedback_to_pegs(row.feedback, length),
            row.feedback,
            bar,
            row.count
        );
        if row.count == 0 {
            println!("{}", line.bright_black());
        } else {
            println!("{line}");
        }
    }

    println!(
        "\n   Outcomes:      {} of {} possible",
        result.non_empty_outcomes(),
        result.outcomes.len()
    );
    println!("   Largest bucket: {}", result.largest_bucket.to_string().yellow());
    println!(
        "   Minimax score:  {} guesses",
        result.minimax_score.to_string().bright_yellow().bold()
    );
    println!("   Memo entries:   {}", result.memo_entries);
}

/// Print a next-guess suggestion
pub fn print_suggestion(suggestion: &Suggestion) {
    println!(
        "\nTurn {}: {} candidates remaining",
        suggestion.turn, suggestion.candidates_remaining
    );
    println!(
        "📊 Suggested guess: {}",
        colored_code(&suggestion.guess)
    );
    println!("   Worst case:       {} candidates", suggestion.worst_case);

    if !suggestion.sample.is_empty() {
        let shown = suggestion.sample.len();
        if shown < suggestion.candidates_remaining {
            println!("\nFirst {shown} candidates:");
        } else {
            println!("\nRemaining candidates:");
        }
        for code in &suggestion.sample {
            println!("  • {}", colored_code(code));
        }
    }
}
