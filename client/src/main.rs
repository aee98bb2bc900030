mod app;
mod command;
mod config;
mod render;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use common::config::Validate;
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, GameMode, Mark};
use common::{log, logger};

use app::App;
use config::{Config, get_config_manager, get_config_path};
use theme::{AnimationSpeed, ThemeType};

#[derive(Parser, Debug)]
#[command(name = "tictactoe_client", version, about = "Tic-tac-toe in the terminal")]
struct Args {
    /// Config file, defaults to tictactoe_client_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// human or ai
    #[arg(long)]
    mode: Option<GameMode>,

    /// easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Mark played by the human in Human vs AI games
    #[arg(long)]
    play_as: Option<Mark>,

    /// neon, elegance or modern
    #[arg(long)]
    theme: Option<ThemeType>,

    /// slow, normal or fast
    #[arg(long)]
    speed: Option<AnimationSpeed>,

    #[arg(long)]
    ai_delay_ms: Option<u64>,

    /// Seed for the AI's random choices, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to stderr
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(mode) = args.mode {
        config.session.mode = mode;
    }
    if let Some(difficulty) = args.difficulty {
        config.session.difficulty = difficulty;
    }
    if let Some(mark) = args.play_as {
        config.session.human_mark = mark;
    }
    if let Some(ai_delay_ms) = args.ai_delay_ms {
        config.session.ai_delay_ms = ai_delay_ms;
    }
    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    if let Some(speed) = args.speed {
        config.animation_speed = speed;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some("Client".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let config_path = args.config.clone().unwrap_or_else(get_config_path);
    let config_manager = get_config_manager(config_path.clone());
    let mut config = config_manager.get_config()?;
    apply_overrides(&mut config, &args);
    config.validate()?;
    log!("Loaded config from {}", config_path.display());

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let app = App::new(config, config_manager, config_path, rng)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(app.run());
    // A blocking stdin read can't be cancelled, so don't wait for it.
    runtime.shutdown_background();
    result?;

    Ok(())
}
