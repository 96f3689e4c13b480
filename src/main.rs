//! Pancake Flip Solver
//!
//! Reads a puzzle such as `2w1w4w3w-b` (four pancakes, each a size and a
//! `w`/`b` side, then `b` for BFS or `a` for A*) and prints the flips that
//! sort the stack into `1w2w3w4w`.

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pancake::input::{parse_puzzle, Algorithm};
use pancake::stack::Stack;
use pancake::SearchOps;

/// Solves the four-pancake flipping puzzle.
#[derive(Parser)]
#[command(name = "pancake")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Puzzle as `<state>-<algorithm>`; read from stdin when omitted.
    puzzle: Option<String>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print search counters after the solution.
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let line = match cli.puzzle {
        Some(puzzle) => puzzle,
        None => match read_line() {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read puzzle from stdin: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let (start, algorithm) = match parse_puzzle(&line) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Invalid input format: {}", e);
            return ExitCode::FAILURE;
        }
    };

    run_search(start, algorithm, cli.stats);
    ExitCode::SUCCESS
}

/// Installs a stderr subscriber; `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

/// Solves and prints the trace, or a no-solution message.
fn run_search(start: Stack, algorithm: Algorithm, show_stats: bool) {
    let (stats, lines) = algorithm.solve_with_stats(start);

    match lines {
        Some(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        None => println!("No solution found using {}.", algorithm),
    }

    if show_stats {
        println!("expanded {}, generated {}", stats.expanded, stats.generated);
    }
}
