#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, error, info};
use ratatui::{Terminal, prelude::*};

use blockdock::Time;
use blockdock::app::{App, AppResult};
use blockdock::components::{Board, Cursor, Dock, GameState};
use blockdock::systems::PlacementOutcome;
use blockdock::{config, effects, systems, ui};

fn main() -> AppResult<()> {
    // Create log file and redirect stderr to it, so logging never scribbles
    // over the alternate screen
    let log_path = "blockdock.log";
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .expect("Failed to create log file");

    let stderr_handle = std::io::stderr();
    let stderr_fd = stderr_handle.as_raw_fd();
    let log_file_fd = log_file.as_raw_fd();

    // Safety: We're redirecting stderr to our log file using standard POSIX operations
    unsafe {
        libc::dup2(log_file_fd, stderr_fd);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting blockdock");

    if let Err(e) = config::loader::load_config_from_file() {
        error!("Failed to load configuration: {e}");
        // Continue with default configuration
    } else {
        info!("Configuration loaded successfully");
    }

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(33); // ~30 FPS
    let app = App::new();
    let res = run_app(&mut terminal, app, tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Game error: {err:?}");
    }

    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> AppResult<()> {
    let mut last_tick = Instant::now();

    // Flush any input events buffered before the game started
    while event::poll(Duration::from_millis(0))? {
        let _ = event::read()?;
    }

    loop {
        terminal.draw(|f| ui::render(f, &mut app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                debug!("Key event: {key:?}");
                handle_key(&mut app, key.code);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            let delta_seconds = {
                let mut time = app.world.resource_mut::<Time>();
                time.update();
                time.delta_seconds()
            };
            effects::update_floating_scores(&mut app.world, delta_seconds);
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('r') => {
            app.reset();
            return;
        }
        KeyCode::Char('t') => {
            let mut cfg = config::current();
            cfg.theme = cfg.theme.next();
            if let Err(e) = config::loader::save_config_to_file(&cfg) {
                error!("Failed to save configuration: {e}");
            }
            config::replace(cfg);
            return;
        }
        _ => {}
    }

    // Everything below is gameplay input; only restart and quit make sense
    // once the session is over
    if app.world.resource::<GameState>().game_over {
        return;
    }

    let board_size = app.world.resource::<Board>().size;
    let dock_len = app.world.resource::<Dock>().len();

    match code {
        KeyCode::Char(c @ ('1' | '2' | '3')) => {
            let index = c as usize - '1' as usize;
            if index < dock_len {
                app.world.resource_mut::<Cursor>().selected = index;
            }
        }
        KeyCode::Tab => {
            app.world.resource_mut::<Cursor>().select_next(dock_len);
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.world.resource_mut::<Cursor>().move_by(0, -1, board_size);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.world.resource_mut::<Cursor>().move_by(0, 1, board_size);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.world.resource_mut::<Cursor>().move_by(-1, 0, board_size);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.world.resource_mut::<Cursor>().move_by(1, 0, board_size);
        }
        KeyCode::Enter | KeyCode::Char(' ') => attempt_placement(app),
        _ => {}
    }
}

fn attempt_placement(app: &mut App) {
    let (piece_id, row, col) = {
        let cursor = app.world.resource::<Cursor>();
        let dock = app.world.resource::<Dock>();
        let Some(piece) = dock.pieces().get(cursor.selected) else {
            return;
        };
        (piece.id, cursor.row, cursor.col)
    };

    match systems::try_place(&mut app.world, piece_id, row, col) {
        PlacementOutcome::Rejected => {
            // Normal outcome of aiming at a bad spot; the piece stays docked
            debug!("Placement rejected at ({row}, {col})");
        }
        PlacementOutcome::Accepted { clears, .. } => {
            if clears.total() > 0 {
                effects::spawn_score_popups(&mut app.world, &clears);
            }
            app.persist_best();

            // Keep the dock selection on a piece that still exists
            let dock_len = app.world.resource::<Dock>().len();
            let mut cursor = app.world.resource_mut::<Cursor>();
            if cursor.selected >= dock_len {
                cursor.selected = 0;
            }
        }
    }
}
