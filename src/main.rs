mod app;
mod clipboard;
mod config;
mod error;
mod events;
mod log;
mod money;
mod tui;
mod wheel;

use anyhow::Result;
use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, EventStream,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;

use app::{App, InputMode};
use config::Config;
use events::{Action, EventHandler};

/// One display frame: scroll bursts within this window coalesce into a
/// single wheel evaluation.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut initial_price: Option<String> = None;
    let mut quiet = false;

    for arg in &args[1..] {
        match arg.as_str() {
            "--quiet" | "-q" => quiet = true,
            arg if !arg.starts_with('-') => {
                // A starting price, e.g. `rebaja 19,99`
                initial_price = Some(arg.to_string());
            }
            _ => {
                // Unknown flag, ignore
            }
        }
    }

    let config = Config::load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(&config, initial_price, quiet);

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Event stream for keyboard and mouse
    let mut event_stream = EventStream::new();

    // Frame ticks drain the wheel's pending evaluation and expire the toast
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        tokio::select! {
            // Terminal events (keyboard, mouse, paste)
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    // Handle paste events (e.g. a price copied from a shop page)
                    if let Event::Paste(text) = &event {
                        if app.input_mode == InputMode::Normal {
                            app.enter_insert_mode();
                        }
                        if app.input_mode == InputMode::Insert {
                            for c in text.chars().filter(|c| !c.is_control()) {
                                app.input_char(c);
                            }
                        }
                        continue;
                    }

                    let action = EventHandler::handle_event(app, &event);
                    if apply_action(app, action) {
                        return Ok(());
                    }
                }
            }

            // Frame boundary
            _ = frames.tick() => {
                app.on_frame();
            }
        }
    }
}

/// Apply a dispatched action to the app. Returns `true` when the app should
/// quit.
fn apply_action(app: &mut App, action: Action) -> bool {
    match action {
        Action::Quit => return true,

        Action::EnterInsertMode => app.enter_insert_mode(),
        Action::ExitInsertMode => app.exit_insert_mode(),
        Action::OpenHelp => app.open_help(),
        Action::CloseHelp => app.close_help(),

        Action::InputChar(c) => app.input_char(c),
        Action::InputBackspace => app.input_backspace(),
        Action::InputDelete => app.input_delete(),
        Action::InputLeft => app.input_left(),
        Action::InputRight => app.input_right(),
        Action::InputHome => app.input_home(),
        Action::InputEnd => app.input_end(),
        Action::ClearInput => app.clear_input(),

        Action::WheelScroll(delta) => app.wheel_scroll(delta),
        Action::WheelDragMove(row) => app.wheel_drag_to(row),
        Action::WheelDragEnd => app.end_wheel_drag(),
        Action::QuickSelect(pct) => app.quick_select(pct),

        Action::CopyFinalPrice => app.copy_final_price(),

        Action::None => {}
    }
    false
}
