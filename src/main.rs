use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use broadside::{init_logging, load_state, save_state, MatchEngine, Side, Signal};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

/// Run an automated Battleship match between two engine players.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fix the RNG seed for a reproducible match.
    #[arg(long)]
    seed: Option<u64>,
    /// Resume from a saved state file; a missing file starts fresh.
    #[arg(long)]
    load: Option<PathBuf>,
    /// Write the final (or paused) state to this file.
    #[arg(long)]
    save: Option<PathBuf>,
    /// Pause after this many moves instead of playing to the end.
    #[arg(long)]
    max_moves: Option<usize>,
    /// Delay between moves in milliseconds.
    #[arg(long, default_value_t = 0)]
    interval_ms: u64,
    /// Print the full move log as JSON.
    #[arg(long)]
    dump_log: bool,
    /// Print both final boards.
    #[arg(long)]
    show_boards: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::seed_from_u64(rand::rng().random()),
    };

    let mut engine = match &cli.load {
        Some(path) => match std::fs::read(path) {
            Ok(bytes) => {
                let state = load_state(&bytes)
                    .with_context(|| format!("corrupt save file {}", path.display()))?;
                log::info!("resumed match from {}", path.display());
                MatchEngine::from_state(state)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("no saved match at {}, starting fresh", path.display());
                MatchEngine::new_match(&mut rng)?
            }
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", path.display()))
            }
        },
        None => MatchEngine::new_match(&mut rng)?,
    };

    loop {
        if cli
            .max_moves
            .is_some_and(|max| engine.move_log().len() >= max)
        {
            log::info!("pausing after {} moves", engine.move_log().len());
            break;
        }
        if engine.advance(&mut rng)? == Signal::Halted {
            break;
        }
        if cli.interval_ms > 0 {
            std::thread::sleep(Duration::from_millis(cli.interval_ms));
        }
    }

    if let Some(path) = &cli.save {
        std::fs::write(path, save_state(engine.state()))
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("state saved to {}", path.display());
    }

    let winner = if engine.is_over() {
        if !engine.state().grid(Side::B).has_ship_cells() {
            Some(Side::A)
        } else if !engine.state().grid(Side::A).has_ship_cells() {
            Some(Side::B)
        } else {
            None
        }
    } else {
        None
    };

    let summary = json!({
        "moves": engine.move_log().len(),
        "over": engine.is_over(),
        "winner": winner.map(|side| format!("{:?}", side)),
    });
    println!("{}", summary);

    if cli.dump_log {
        println!("{}", serde_json::to_string(engine.move_log())?);
    }

    if cli.show_boards {
        for side in [Side::A, Side::B] {
            println!("side {:?}:\n{}", side, engine.state().grid(side));
        }
    }
    Ok(())
}
