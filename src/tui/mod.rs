pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, Theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Buffer stderr while TUI is active to prevent output corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let mut events = EventHandler::new(250); // 250ms tick drives flash expiry

    tracing::debug!(candidates = app.dataset.len(), "dashboard started");

    // Main loop
    let result: anyhow::Result<()> = loop {
        // Draw UI
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &mut app)) {
            break Err(e.into());
        }

        // Handle events
        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
            Event::Resize => {}
        }

        // Clipboard writes go straight to the terminal, outside the frame buffer
        if let Some(text) = app.take_pending_copy() {
            if let Err(e) = crate::share::copy_to_clipboard(&mut std::io::stdout(), &text) {
                tracing::warn!(error = %e, "clipboard copy failed");
                app.show_flash(format!("Failed to copy profile: {}", e));
            }
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    ratatui::restore();

    // Flush buffered stderr messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    result
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Ctrl-C quits from every mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.input_mode {
        app::InputMode::Normal => match key.code {
            // Quit
            KeyCode::Char('q') => app.should_quit = true,

            // Navigation
            KeyCode::Char('j') | KeyCode::Down => app.next_row(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_row(),
            KeyCode::Tab => app.toggle_focus(),

            // Candidate profile
            KeyCode::Enter => app.open_detail(),

            // Filter and sort
            KeyCode::Char('/') => app.start_search(),
            KeyCode::Char('s') => app.cycle_sort(true),
            KeyCode::Char('S') => app.cycle_sort(false),
            KeyCode::Char('c') => app.reset(),

            // Help
            KeyCode::Char('?') => app.show_help(),

            _ => {}
        },
        app::InputMode::Search => match key.code {
            KeyCode::Enter => app.confirm_search(),
            KeyCode::Esc => app.cancel_search(),
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Char(c) => app.push_search_char(c),
            // Ignore all other keys (don't propagate to Normal mode)
            _ => {}
        },
        app::InputMode::Detail => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_detail(),
            KeyCode::Char('y') => app.copy_profile(),
            _ => {}
        },
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}
