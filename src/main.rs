use std::error::Error;

use chess_rules_engine::console::console_top::{run_stdio_loop, ConsoleConfig};
use chess_rules_engine::game_state::board::Board;
use chess_rules_engine::game_state::chess_types::Color;
use chess_rules_engine::turn_control::turn_controller::TurnController;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Two players at one terminal, moving by clicking squares.
#[derive(Debug, Parser)]
#[command(name = "chess_rules_engine", version, about)]
struct Args {
    /// Log filter used when RUST_LOG is unset (for example `debug`).
    #[arg(long, default_value = "warn")]
    log_filter: String,

    /// Draw pieces with FEN letters instead of Unicode glyphs.
    #[arg(long)]
    ascii: bool,

    /// Start from a FEN piece-placement field instead of the standard layout.
    #[arg(long)]
    placement: Option<String>,

    /// Give the first move to dark.
    #[arg(long)]
    dark_to_move: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let board = match &args.placement {
        Some(placement) => Board::from_placement(placement)?,
        None => Board::new_game(),
    };
    let turn = if args.dark_to_move {
        Color::Dark
    } else {
        Color::Light
    };

    let controller = TurnController::from_position(board, turn, None);
    run_stdio_loop(
        controller,
        ConsoleConfig {
            unicode: !args.ascii,
        },
    )?;
    Ok(())
}
