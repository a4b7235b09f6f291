use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use clap::Parser;
use log::{error, info};
use retro_snake::config::{FRAME_INTERVAL, GridGeometry};
use retro_snake::error::AppError;
use retro_snake::game::GameSession;
use retro_snake::input::{GameInput, InputHandler};
use retro_snake::logging::init_logging;
use retro_snake::renderer;
use retro_snake::settings::{Settings, default_log_path, load_settings, settings_path};
use retro_snake::sound::{Muted, SoundPlayer, TerminalBell};
use retro_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use retro_snake::timer::TickTimer;

#[derive(Debug, Parser)]
#[command(version, about = "Retro snake in the terminal")]
struct Cli {
    /// Settings file to read instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed food placement for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Do not ring the terminal bell.
    #[arg(long)]
    mute: bool,

    /// Write the log here instead of the default location.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match start(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("retro-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn start(cli: Cli) -> Result<(), AppError> {
    let settings = resolve_settings(&cli)?;
    let log_path = settings.log_file.clone().unwrap_or_else(default_log_path);
    init_logging(&log_path, settings.level_filter()?)?;
    info!("starting retro-snake with {settings:?}");

    install_panic_hook();

    let result = run(&settings);
    match &result {
        Ok(()) => info!("shutting down"),
        Err(error) => error!("terminal error: {error}"),
    }
    result
}

fn resolve_settings(cli: &Cli) -> Result<Settings, AppError> {
    let path = cli.config.clone().unwrap_or_else(settings_path);
    let mut settings = load_settings(&path)?;

    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if cli.mute {
        settings.mute = true;
    }
    if cli.log_file.is_some() {
        settings.log_file = cli.log_file.clone();
    }

    Ok(settings)
}

fn run(settings: &Settings) -> Result<(), AppError> {
    let geometry = GridGeometry::default();
    let mut session = match settings.seed {
        Some(seed) => GameSession::new_with_seed(geometry, seed),
        None => GameSession::new(geometry),
    };
    let mut sound: Box<dyn SoundPlayer> = if settings.mute {
        Box::new(Muted)
    } else {
        Box::new(TerminalBell::stdout())
    };
    let mut input = InputHandler::new();
    let mut timer = TickTimer::new(settings.tick_interval(), Instant::now());

    let mut terminal_session = TerminalSession::enter()?;

    loop {
        if timer.trigger(Instant::now()) {
            for event in session.tick() {
                sound.play(event);
            }
        }

        for game_input in input.poll_inputs()? {
            match game_input {
                GameInput::Quit => return Ok(()),
                GameInput::Direction(direction) => {
                    let was_running = session.is_running();
                    if session.steer(direction) && !was_running {
                        info!("resumed heading {direction:?}");
                    }
                }
            }
        }

        terminal_session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &session))?;

        thread::sleep(FRAME_INTERVAL);
    }
}
