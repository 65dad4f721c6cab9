mod render;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::Parser;
use eight_puzzle::{Board, Outcome, Search, SearchConfig};

/// Finds a shortest sequence of moves that solves an 8-puzzle.
#[derive(Parser, Debug)]
#[command(name = "eight-puzzle", version)]
struct Args {
    /// Text file with the starting board: the first 9 digits, row by row,
    /// 0 for the blank. Everything else in the file is ignored.
    path: PathBuf,

    /// Stop after expanding this many boards.
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Print only the summary, not every board along the way.
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let bytes = fs::read(&args.path)
        .with_context(|| format!("could not open {}", args.path.display()))?;
    let initial: Board = String::from_utf8_lossy(&bytes)
        .parse()
        .with_context(|| format!("no valid board in {}", args.path.display()))?;
    let goal = Board::solved();

    if !initial.is_solvable_to(&goal) {
        log::warn!("starting board has the wrong parity, expect no solution");
    }

    let config = SearchConfig::default().with_max_expansions(args.max_expansions);

    let now = Instant::now();
    let report = Search::new(initial, goal, config)?.run()?;
    let elapsed = now.elapsed();

    match report.outcome {
        Outcome::Solved(solution) => {
            if !args.quiet {
                let mut out = io::stdout().lock();
                for step in solution.steps() {
                    render::step(&mut out, step, &goal)?;
                }
            }
            println!("Solved in {} moves", solution.cost());
            println!("Took {:?} ({})", elapsed, report.stats);
            Ok(())
        }
        Outcome::Exhausted => bail!(
            "no solution: all {} reachable boards were explored in {:?}",
            report.stats.closed_len,
            elapsed
        ),
        Outcome::LimitReached { expanded } => bail!(
            "gave up after expanding {} boards in {:?}",
            expanded,
            elapsed
        ),
    }
}
