mod app;
mod config;
mod input;
mod logging;
mod persist;
mod sim;
mod ui;

use anyhow::Result;
use app::{App, Flow};
use clap::Parser;
use config::Cli;
use crossterm::event::{Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use persist::{load_game, save_game};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sim::game::Game;
use std::io;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_file, &cli.log_level)?;
    let save_path = cli.save_path();
    info!(save = %save_path.display(), format = ?cli.format, "starting pie maker");

    let loaded = if cli.fresh {
        None
    } else {
        load_game(&save_path, cli.format)?
    };
    let mut game = match loaded {
        Some(state) => {
            let mut game = Game::from_state(state);
            game.add_message("Loaded save state.");
            game
        }
        None => {
            let mut game = Game::fresh();
            game.add_message("Welcome to Pie Maker Idle.");
            game
        }
    };

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut game, &cli).await;
    restore_terminal(&mut terminal)?;
    if let Err(err) = &result {
        error!(error = %err, "game loop failed");
    }

    if !cli.no_save {
        save_game(&game.state, &save_path, cli.format)?;
    }
    result
}

/// One tick is Input -> Simulate -> Render, then a sleep until the next tick.
async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut Game,
    cli: &Cli,
) -> Result<()> {
    let mut app = App::new();

    let (input_tx, mut input_rx) = mpsc::unbounded_channel();
    tokio::spawn(input::pump_events(input_tx, input::poll_terminal));

    let tick_rate = cli.tick_rate();
    let mut last_tick = Instant::now();

    loop {
        while let Ok(event) = input_rx.try_recv() {
            match handle_event(event, &mut app, game, cli.debug_keys) {
                Flow::Continue => {}
                Flow::Redraw => terminal.clear()?,
                Flow::Quit => {
                    info!("quit requested");
                    return Ok(());
                }
            }
        }

        let delta = last_tick.elapsed();
        last_tick = Instant::now();
        if app.simulating() {
            game.update(delta);
        } else {
            game.advance_timers(delta);
        }
        app.observe(game);

        terminal.draw(|f| ui::render(f, &app, game))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        tokio::time::sleep(timeout).await;
    }
}

fn handle_event(event: Event, app: &mut App, game: &mut Game, debug_keys: bool) -> Flow {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            match input::command_for(key, app.mode(), debug_keys) {
                Some(command) => app.dispatch(command, game),
                None => Flow::Continue,
            }
        }
        Event::Resize(_, _) => Flow::Continue,
        _ => Flow::Continue,
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
