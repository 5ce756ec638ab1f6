//! Radar Visualizer - Terminal UI for the simulated whale feed
//!
//! Shows the radar sweep, whale summary, filterable transaction feed and
//! exchange flows, refreshed from the live feed task.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use whale_radar_dashboard::bin_common::{load_config_from_env, ConfigType};
use whale_radar_dashboard::whale_radar::application::visualizer::{ui, App};
use whale_radar_dashboard::whale_radar::RadarConfig;

fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Note: Logging is disabled for TUI - it would corrupt the alternate screen display

    let config = RadarConfig::load_or_default(load_config_from_env(ConfigType::Radar))?;

    // Create tokio runtime
    let runtime = tokio::runtime::Runtime::new()?;

    // Start the feed on the runtime and take the first snapshot
    let mut app = App::initialize(runtime.handle(), &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Stop the feed task
    runtime.block_on(app.shutdown());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.refresh();

        // Draw UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle input with 10ms timeout (keeps the sweep smooth)
        if event::poll(Duration::from_millis(10))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Tab | KeyCode::Right => {
                            app.next_filter();
                        }
                        KeyCode::BackTab | KeyCode::Left => {
                            app.prev_filter();
                        }
                        KeyCode::Char(c @ '1'..='5') => {
                            app.select_filter(c as usize - '1' as usize);
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
