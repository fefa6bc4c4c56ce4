use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal;

use esnake::config::{FRAME_INTERVAL, THEME_CLASSIC, TICK_INTERVAL, WINDOW_TITLE};
use esnake::error::Error;
use esnake::game::GameState;
use esnake::grid::Grid;
use esnake::input::{self, GameInput};
use esnake::renderer;
use esnake::terminal_runtime::{TerminalSession, install_panic_hook};
use esnake::tick::TickGate;

#[derive(Debug, Parser)]
#[command(name = "esnake", about = "Classic fixed-grid snake game")]
struct Cli {
    /// Seed the RNG for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("esnake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let grid = Grid::standard();
    ensure_terminal_fits(grid)?;

    install_panic_hook();
    let mut session = TerminalSession::enter(WINDOW_TITLE)?;

    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(grid, seed),
        None => GameState::new(grid),
    };
    let mut gate = TickGate::new(TICK_INTERVAL);

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, &THEME_CLASSIC))?;

        // Drain everything queued since the last frame; directional inputs
        // apply in arrival order, so the last one in a frame wins.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                match input::map_key_event(key) {
                    Some(GameInput::Quit) => return Ok(()),
                    Some(GameInput::Direction(direction)) => state.steer(direction),
                    None => {}
                }
            }
        }

        if gate.ready(Instant::now()) {
            state.update();
        }

        thread::sleep(FRAME_INTERVAL);
    }
}

fn ensure_terminal_fits(grid: Grid) -> Result<(), Error> {
    let (actual_cols, actual_rows) = terminal::size()?;
    let needed_cols = grid.window_width();
    let needed_rows = grid.window_height();

    if actual_cols < needed_cols || actual_rows < needed_rows {
        return Err(Error::TerminalTooSmall {
            needed_cols,
            needed_rows,
            actual_cols,
            actual_rows,
        });
    }

    Ok(())
}
