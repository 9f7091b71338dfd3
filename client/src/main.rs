use std::{
    io::{stdout, BufWriter},
    num::NonZeroU32,
    path::PathBuf,
    process::ExitCode,
    time::{Duration, Instant},
};

use clap::Parser;
use cpong_shared::{
    game_state::{GameState, Score, TARGET_FPS},
    GAME_TITLE,
};
use error::ClientError;
use frame_pacer::FramePacer;
use keyboard::{poll_events, KeyboardState, LoopControl};
use rand::{rngs::StdRng, SeedableRng};
use renderer::TerminalRenderer;
use terminal::TerminalGuard;
use tracing::info;

mod error;
mod frame_pacer;
mod keyboard;
mod logging;
mod renderer;
mod terminal;

const DEFAULT_FPS: NonZeroU32 = match NonZeroU32::new(TARGET_FPS) {
    Some(fps) => fps,
    None => panic!("TARGET_FPS must not be zero"),
};

#[derive(Parser)]
#[command(version, about = GAME_TITLE)]
struct Cli {
    /// Frames per second to run the game at
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: NonZeroU32,
    /// Seed for the ball's serve directions, random if not given
    #[arg(long)]
    seed: Option<u64>,
    /// How long a key counts as held after its last press, for terminals without key release events.
    /// Values below the keyboard's auto-repeat delay make a held key stutter, larger values make the
    /// paddle coast for longer after the key is let go
    #[arg(long, default_value_t = 500)]
    key_hold_ms: u64,
    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Log debug events too
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init(cli.log_file.as_deref(), cli.verbose) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    match run(&cli) {
        Ok(score) => {
            info!(%score, "game closed");
            println!("final score: {score}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("error occurred: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Score, ClientError> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let guard = TerminalGuard::enter()?;
    let (cols, rows) = crossterm::terminal::size()?;
    let mut renderer = TerminalRenderer::new(BufWriter::new(stdout()), cols, rows);
    let mut keyboard = KeyboardState::new(if guard.reports_key_releases() {
        None
    } else {
        Some(Duration::from_millis(cli.key_hold_ms))
    });
    let pacer = FramePacer::new(cli.fps);
    let mut game = GameState::new(&mut rng);
    info!(
        cols,
        rows,
        fps = cli.fps.get(),
        seed = ?cli.seed,
        "game started"
    );

    loop {
        let frame = pacer.begin_frame();
        if poll_events(&mut keyboard, &mut renderer)? == LoopControl::Quit {
            break;
        }
        let input = keyboard.snapshot(Instant::now());
        if let Some(side) = game.step(&input, &mut rng) {
            info!(%side, score = %game.score, "goal");
        }
        renderer.draw(&game.scene())?;
        frame.finish();
    }
    Ok(game.score)
}
