use std::fs::File;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use simplelog::{Config, WriteLogger};
use wrap_snake::clock::TickTimer;
use wrap_snake::config::{GridSize, TICK_INTERVAL_MS};
use wrap_snake::error::Result;
use wrap_snake::game::{GameState, TickOutcome};
use wrap_snake::input::{GameInput, InputSource};
use wrap_snake::renderer::{self, BoardView};
use wrap_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use wrap_snake::ui::menu::render_game_over_menu;

/// Longest the loop sleeps between frames while waiting for the next tick.
const MAX_FRAME_SLEEP: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for food placement; a random seed is used when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path [default: wrap-snake.log in the temp directory].
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log verbosity: off, error, warn, info, debug, trace.
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    let state = GameState::new(GridSize::reference(), StdRng::seed_from_u64(seed))?;
    info!(
        "starting session: {}x{} grid, seed {seed}, tick {TICK_INTERVAL_MS} ms",
        state.bounds().width,
        state.bounds().height,
    );

    install_panic_hook();
    let game_over = {
        let mut session = TerminalSession::enter()?;
        run(&mut session, state)?
    };

    if game_over {
        println!("Game Over");
    }
    info!("session closed");
    Ok(())
}

fn init_logging(cli: &Cli) -> Result<()> {
    let path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("wrap-snake.log"));

    WriteLogger::init(cli.log_level, Config::default(), File::create(path)?)?;
    Ok(())
}

/// Runs the session until the player quits. Returns whether the game ended.
fn run(session: &mut TerminalSession, mut state: GameState) -> Result<bool> {
    let input = InputSource::spawn()?;
    let mut timer = TickTimer::new(Duration::from_millis(TICK_INTERVAL_MS), Instant::now());
    let mut game_over = false;

    loop {
        session.terminal_mut().draw(|frame| {
            let board = renderer::render(frame, BoardView::of(&state));
            if game_over {
                render_game_over_menu(frame, board);
            }
        })?;

        for game_input in input.drain() {
            match game_input {
                GameInput::Quit => return Ok(game_over),
                GameInput::Direction(direction) => {
                    state.set_direction(direction);
                }
            }
        }

        let now = Instant::now();
        if timer.is_due(now) {
            timer.mark_ticked(now);
            if state.advance() == TickOutcome::GameOver {
                timer.stop();
                game_over = true;
            }
        }

        let wait = timer
            .time_until_due(Instant::now())
            .map_or(MAX_FRAME_SLEEP, |until_due| until_due.min(MAX_FRAME_SLEEP));
        thread::sleep(wait);
    }
}
