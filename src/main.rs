mod app;
mod cli;
mod input;
mod ui;

use app::App;
use clap::Parser;
use cli::{Cli, Command};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

const TICK_RATE: Duration = Duration::from_millis(33); // ~30 fps

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    if let Some(Command::Stars { seed }) = cli.command {
        return print_stars(seed);
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "terminal loop failed");
        eprintln!("Error: {}", e);
    }

    Ok(())
}

/// `daybreak stars [SEED]`: print the star field as JSON.
fn print_stars(seed: Option<i64>) -> Result<(), Box<dyn std::error::Error>> {
    let seed = seed.unwrap_or_else(|| daybreak::config::load_config().seed);
    let field = daybreak::generate(seed);
    println!("{}", serde_json::to_string_pretty(&field)?);
    Ok(())
}

/// Log to a file; the terminal belongs to the UI. Set `DAYBREAK_DEBUG` for verbose output.
fn init_tracing() {
    let Some(dir) = dirs::data_local_dir().map(|d| d.join("daybreak")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("daybreak.log"))
    {
        Ok(file) => file,
        Err(_) => return,
    };

    let level = if std::env::var_os("DAYBREAK_DEBUG").is_some() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .init();
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();
    let mut last_tick = Instant::now();

    loop {
        // Pick up transitions announced since the last frame.
        app.poll_changes();

        // Render
        terminal.draw(|f| {
            app.viewport = f.area();
            ui::draw(f, &app);
        })?;

        // Poll for events with timeout to maintain tick rate
        let timeout = TICK_RATE
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release/repeat
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }

                    // Ctrl+C always quits
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c')
                    {
                        app.should_quit = true;
                    } else {
                        input::handle_key(&mut app, key);
                    }
                }
                Event::Mouse(mouse) => input::handle_mouse(&mut app, mouse),
                _ => {}
            }
        }

        // Tick update
        if last_tick.elapsed() >= TICK_RATE {
            app.tick = app.tick.wrapping_add(1);
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(transitions = app.toggle.transitions(), "toggle unmounted");
    Ok(())
}
