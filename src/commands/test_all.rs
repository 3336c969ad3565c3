//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every code of the space and generates statistics.

use crate::core::Code;
use crate::error::SolveError;
use crate::output::formatters::{colored_code, create_progress_bar};
use crate::solver::{Solver, Strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: Code,
    pub guesses_used: usize,
    pub success: bool,
    pub failure: Option<SolveError>,
    pub duration: Duration,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// Solved secrets that took the most guesses, worst first
    pub hardest: Vec<(Code, usize)>,
    pub failures: Vec<(Code, SolveError)>,
}

/// Solve one secret and time it
fn test_secret<S: Strategy>(solver: &Solver<S>, secret: &Code) -> SecretTestResult {
    let start = Instant::now();

    let (guesses_used, failure) = match solver.solve(secret) {
        Ok(record) => (record.guesses_used, record.failure),
        Err(e) => (0, Some(e)),
    };

    if let Some(e) = &failure {
        warn!("failed on {secret}: {e}");
    }

    SecretTestResult {
        secret: secret.clone(),
        guesses_used,
        success: failure.is_none(),
        failure,
        duration: start.elapsed(),
    }
}

/// Run solver on every secret (or the first `limit` of them)
///
/// Secrets are solved in parallel on the rayon pool; results are reported in
/// enumeration order.
pub fn run_test_all<S: Strategy + Sync>(
    solver: &Solver<S>,
    limit: Option<usize>,
    show_progress: bool,
) -> TestAllStatistics {
    let codes = solver.space().codes();
    let secrets = &codes[..limit.unwrap_or(codes.len()).min(codes.len())];

    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let total_start = Instant::now();

    let results: Vec<SecretTestResult> = secrets
        .par_iter()
        .map(|secret| {
            let result = test_secret(solver, secret);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&results, total_start.elapsed())
}

fn summarize(results: &[SecretTestResult], total_time: Duration) -> TestAllStatistics {
    let solved: Vec<&SecretTestResult> = results.iter().filter(|r| r.success).collect();

    let mut guess_distribution = BTreeMap::new();
    for r in &solved {
        *guess_distribution.entry(r.guesses_used).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|r| r.guesses_used).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let max_guesses = solved.iter().map(|r| r.guesses_used).max().unwrap_or(0);
    let min_guesses = solved.iter().map(|r| r.guesses_used).min().unwrap_or(0);

    let mut hardest: Vec<(Code, usize)> = solved
        .iter()
        .filter(|r| r.guesses_used + 1 >= max_guesses)
        .map(|r| (r.secret.clone(), r.guesses_used))
        .collect();
    hardest.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest.truncate(10);

    let failures = results
        .iter()
        .filter_map(|r| r.failure.clone().map(|e| (r.secret.clone(), e)))
        .collect();

    TestAllStatistics {
        total_secrets: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        hardest,
        failures,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_secrets.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:      {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:      {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Best / worst case:    {} / {}",
        stats.min_guesses.to_string().green(),
        stats.max_guesses.to_string().yellow()
    );
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per secret:      {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for (&guesses, &count) in &stats.guess_distribution {
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("  {guesses:2} guesses: {} {count:4} ({percentage:5.1}%)", bar.green());
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, guesses) in stats.hardest.iter().take(5) {
            println!("  {} ({guesses} guesses)", colored_code(secret));
        }
    }

    if !stats.failures.is_empty() {
        println!("\n❌ {}", "Failures".red().bold());
        for (secret, error) in stats.failures.iter().take(10) {
            println!("  {}: {error}", colored_code(secret));
        }
    }
}
