//! Mastermind Solver - CLI
//!
//! Breaks Mastermind codes with a memoized, depth-bounded minimax search.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use mastermind_minimax::{
    commands::{
        analyze_guess, parse_history, print_test_all_statistics, random_secret, run_test_all,
        solve_code, suggest_next,
    },
    config::{GameConfig, SearchLimits},
    core::{Code, CodeSpace},
    logging,
    output::{print_analysis_result, print_solve_result, print_suggestion},
    solver::{Solver, Strategy, StrategyType},
};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaker using recursive minimax search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Number of colors (K)
    #[arg(short = 'k', long, global = true, default_value = "6")]
    colors: usize,

    /// Code length (L)
    #[arg(short, long, global = true, default_value = "4")]
    length: usize,

    /// Guess limit per game
    #[arg(short = 'g', long, global = true, default_value = "10")]
    max_guesses: usize,

    /// Recursion depth before bucket sizes are estimated
    #[arg(short = 'd', long, global = true, default_value = "5")]
    max_depth: u32,

    /// Strategy: recursive (default) or knuth
    #[arg(
        short,
        long,
        global = true,
        default_value = "recursive",
        value_parser = ["recursive", "knuth"]
    )]
    strategy: String,

    /// Score top-level guesses in parallel
    #[arg(long, global = true)]
    parallel: bool,

    /// Wall-clock budget per guess selection, in milliseconds
    #[arg(long, global = true)]
    time_budget_ms: Option<u64>,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific secret code
    Solve {
        /// The secret, as color letters (e.g. RGBY)
        #[arg(required_unless_present = "random")]
        secret: Option<String>,

        /// Pick a random secret instead
        #[arg(long, conflicts_with = "secret")]
        random: bool,

        /// Show candidate counts for each turn
        #[arg(long)]
        detailed: bool,
    },

    /// Suggest the next guess for a game played so far
    Suggest {
        /// History entries as GUESS=EXACT,COLOR (e.g. RRGG=1,1)
        history: Vec<String>,
    },

    /// Show how a guess partitions the code space
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// Test solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose).context("failed to install logger")?;

    let config = GameConfig::new(cli.colors, cli.length, cli.max_guesses)?;
    let limits = SearchLimits {
        max_depth: cli.max_depth,
        parallel: cli.parallel,
        time_budget: cli.time_budget_ms.map(Duration::from_millis),
        ..SearchLimits::default()
    };
    limits.validate()?;

    let space = CodeSpace::generate(config)?;
    let strategy = StrategyType::from_name(&cli.strategy, limits);
    info!(
        "{} strategy over {} codes ({} colors, length {})",
        strategy.name(),
        space.len(),
        config.alphabet_size,
        config.code_length
    );
    let solver = Solver::new(strategy, &space);

    match cli.command {
        Commands::Solve {
            secret,
            random,
            detailed,
        } => run_solve_command(&solver, secret.as_deref(), random, detailed),
        Commands::Suggest { history } => run_suggest_command(&solver, &history),
        Commands::Analyze { guess } => run_analyze_command(&space, &guess, &limits),
        Commands::TestAll { limit } => {
            run_test_all_command(&solver, &cli.strategy, limit);
            Ok(())
        }
    }
}

fn run_solve_command<S: Strategy>(
    solver: &Solver<S>,
    secret: Option<&str>,
    random: bool,
    detailed: bool,
) -> Result<()> {
    let secret = match secret {
        Some(text) if !random => Code::parse(text, solver.config())?,
        _ => random_secret(solver.space())
            .context("code space is empty")?
            .clone(),
    };

    let result = solve_code(&secret, solver)?;
    print_solve_result(&result, detailed);
    Ok(())
}

fn run_suggest_command<S: Strategy>(solver: &Solver<S>, entries: &[String]) -> Result<()> {
    let history = parse_history(entries, solver.config())?;
    let suggestion = suggest_next(solver, &history)?;
    print_suggestion(&suggestion);
    Ok(())
}

fn run_analyze_command(space: &CodeSpace, guess: &str, limits: &SearchLimits) -> Result<()> {
    let guess = Code::parse(guess, space.config())?;
    let result = analyze_guess(&guess, space, limits)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_test_all_command<S: Strategy + Sync>(
    solver: &Solver<S>,
    strategy_name: &str,
    limit: Option<usize>,
) {
    let config = solver.config();

    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible secrets ({} colors, length {})",
        limit.map_or(solver.space().len(), |n| n.min(solver.space().len())),
        config.alphabet_size,
        config.code_length
    );
    println!("Strategy: {strategy_name}");
    println!();

    let stats = run_test_all(solver, limit, true);
    print_test_all_statistics(&stats);
}
