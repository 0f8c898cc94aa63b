//! 4x4 Tic-Tac-Toe GUI
//!
//! Play against the alpha-beta AI. `RUST_LOG=debug` shows every move,
//! the default level prints the per-move search diagnostics.

use clap::Parser;
use tictactoe4::ui::TicTacToeApp;
use tictactoe4::{Difficulty, FirstMover, GameConfig};

#[derive(Parser, Debug)]
#[command(name = "tictactoe4", version, about = "4x4 tic-tac-toe against an alpha-beta AI")]
struct Args {
    /// easy, medium or hard
    #[arg(short, long, default_value = "hard")]
    difficulty: Difficulty,

    /// Custom node budget, overrides --difficulty
    #[arg(short, long)]
    budget: Option<u64>,

    /// Who opens the first game: human (1) or computer (2)
    #[arg(short, long, default_value = "human")]
    first: FirstMover,

    /// Display name of the human player
    #[arg(long, default_value = "Player")]
    name: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut config = GameConfig::new(args.difficulty, args.first);
    config.human_name = args.name;
    if let Some(nodes) = args.budget {
        config = config.with_budget(nodes)?;
    }
    log::info!(
        "starting: budget {} ({}), {:?} moves first",
        config.budget,
        config.difficulty().map_or("custom", Difficulty::name),
        config.first_mover
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 520.0])
            .with_min_inner_size([560.0, 400.0])
            .with_title("Tic-Tac-Toe 4x4"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe 4x4",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, &config)))),
    )?;
    Ok(())
}
