mod config;
mod terminal;

use std::process::ExitCode;

use clap::Parser;
use snake_engine::{log, logger, Game, GameRng};

use config::get_config_manager;
use terminal::TerminalBoard;

#[derive(Parser)]
#[command(name = "snake_console")]
struct Args {
    /// Config file, defaults to snake_console.yaml next to the executable
    #[arg(long)]
    config: Option<String>,

    /// Seed for food placement, random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Log file, overrides the config
    #[arg(long)]
    log_file: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log!("Fatal: {}", e);
            eprintln!("snake_console: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = get_config_manager(args.config.as_deref()).get_config()?;

    let prefix = if args.use_log_prefix || config.logging.use_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    let log_file = args.log_file.unwrap_or_else(|| config.logging.file.clone());
    logger::init_file_logger(prefix, &log_file)?;

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_random(),
    };
    log!("Starting with {}x{} grid", config.game.grid.rows, config.game.grid.cols);

    let mut board = TerminalBoard::open(&config.game)?;
    Game::new(&mut board, &config.game, rng).run()?;
    Ok(())
}
