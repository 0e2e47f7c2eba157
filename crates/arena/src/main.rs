//! Arena CLI
//!
//! Play a game between two agents, or count move-generation leaves.

use std::env;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use arena::{play_game, AgentSpec, ArenaConfig};
use othello_core::{perft, Board, Side, STANDARD_SIZE};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Othello Arena");
    println!();
    println!("Usage:");
    println!("  arena play [--config FILE] [--black SPEC] [--white SPEC] [--size N] [--json]");
    println!("  arena perft [--size N] [--depth D]");
    println!();
    println!("Engines:");
    println!("  minimax       - Fixed depth-3 minimax, positional table");
    println!("  alpha-beta    - Alpha-beta with adaptive depth, feature-composite eval");
    println!("  random        - Uniform random legal move");
    println!("  random:SEED   - Reproducible random player");
    println!();
    println!("Examples:");
    println!("  arena play --black alpha-beta --white random:7");
    println!("  arena perft --depth 6");
}

/// Value following `flag`, if present.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>> {
    match args.iter().position(|a| a == flag) {
        Some(i) => match args.get(i + 1) {
            Some(v) => Ok(Some(v.as_str())),
            None => bail!("{flag} needs a value"),
        },
        None => Ok(None),
    }
}

fn run_play(args: &[String]) -> Result<()> {
    let mut config = match flag_value(args, "--config")? {
        Some(path) => ArenaConfig::load(path).with_context(|| format!("loading {path}"))?,
        None => ArenaConfig::default(),
    };
    if let Some(spec) = flag_value(args, "--black")? {
        config.black = AgentSpec::parse(spec)?;
    }
    if let Some(spec) = flag_value(args, "--white")? {
        config.white = AgentSpec::parse(spec)?;
    }
    if let Some(size) = flag_value(args, "--size")? {
        config.board_size = size.parse().with_context(|| format!("bad --size {size}"))?;
    }
    let json = args.iter().any(|a| a == "--json");

    let board = config.starting_board()?;
    let mut black = config.black.build().context("building black agent")?;
    let mut white = config.white.build().context("building white agent")?;

    let record = play_game(black.as_mut(), white.as_mut(), board)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        for row in &record.final_board {
            println!("{row}");
        }
        println!();
        println!("{}", record.summary());
    }
    Ok(())
}

fn run_perft(args: &[String]) -> Result<()> {
    let size = match flag_value(args, "--size")? {
        Some(s) => s.parse().with_context(|| format!("bad --size {s}"))?,
        None => STANDARD_SIZE,
    };
    let depth: u32 = match flag_value(args, "--depth")? {
        Some(d) => d.parse().with_context(|| format!("bad --depth {d}"))?,
        None => 5,
    };

    let board = Board::new(size)?;
    for d in 1..=depth {
        let start = Instant::now();
        let nodes = perft(&board, Side::Black, d);
        println!("depth {d}: {nodes} ({:.3}s)", start.elapsed().as_secs_f64());
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "play" => run_play(&args[2..]),
        "perft" => run_perft(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}
