mod api;
mod app;
mod config;
mod controller;
mod events;
mod length;
mod models;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*};
use std::fs::OpenOptions;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use api::{FunctionsClient, RephraseService};
use app::App;
use events::AppEvent;

/// Log to a file; stdout belongs to the terminal UI.
fn init_tracing() -> Result<()> {
    let log_path = config::get_log_path()?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let config = config::load_config()?;
    let client = FunctionsClient::from_config(&config)?;

    // Check reachability in the background so the UI comes up straight away
    let checker = client.clone();
    tokio::spawn(async move {
        if checker.health_check().await {
            info!(url = %checker.function_url(), "functions host reachable");
        } else {
            warn!(url = %checker.function_url(), "functions host unreachable at startup");
        }
    });

    let service: Arc<dyn RephraseService> = Arc::new(client);
    let mut app = App::new(config.toast_duration());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    let res = run_app(&mut terminal, &mut app, &service, &tx, &mut rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "terminal loop failed");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

const fn handle_help_keys(app: &mut App, key: KeyCode, modifiers: KeyModifiers) -> bool {
    if !app.show_help {
        return false;
    }

    match key {
        KeyCode::Char('h') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.toggle_help();
        }
        KeyCode::Esc => {
            app.show_help = false;
        }
        _ => {}
    }
    true
}

fn cancel_pending(app: &mut App, pending: &mut Option<JoinHandle<()>>) {
    if let Some(handle) = pending.take() {
        handle.abort();
    }
    app.cancel_submission();
}

fn handle_keyboard_input(
    app: &mut App,
    key: KeyCode,
    modifiers: KeyModifiers,
    service: &Arc<dyn RephraseService>,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
    pending: &mut Option<JoinHandle<()>>,
) {
    match key {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            if app.exit_pending {
                app.quit();
            } else {
                app.exit_pending = true;
            }
            return;
        }
        KeyCode::Esc => {
            if app.exit_pending {
                app.exit_pending = false;
            } else if app.is_loading {
                cancel_pending(app, pending);
            }
            return;
        }
        _ if app.exit_pending => {
            // Any other key cancels pending exit, then is processed normally
            app.exit_pending = false;
        }
        _ => {}
    }

    match key {
        KeyCode::Char('q') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
        }
        KeyCode::Char('h') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.toggle_help();
        }
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_buffer.clear();
        }
        KeyCode::Backspace => {
            app.input_buffer.pop();
        }
        KeyCode::Enter if !app.is_loading => {
            if let Some(handle) = controller::spawn_submission(app, Arc::clone(service), event_tx) {
                *pending = Some(handle);
            }
        }
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_buffer.push(c);
        }
        _ => {}
    }
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    service: &Arc<dyn RephraseService>,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
    event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    let mut pending: Option<JoinHandle<()>> = None;

    loop {
        app.prune_toasts(Instant::now());
        terminal.draw(|f| ui::render(f, app))?;

        while let Ok(app_event) = event_rx.try_recv() {
            controller::handle_app_event(app, app_event);
            if !app.is_loading {
                pending = None;
            }
        }

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if handle_help_keys(app, key.code, key.modifiers) {
                        continue;
                    }

                    handle_keyboard_input(
                        app,
                        key.code,
                        key.modifiers,
                        service,
                        event_tx,
                        &mut pending,
                    );
                }
            }
        }

        if app.should_quit {
            cancel_pending(app, &mut pending);
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockRephraseService;

    fn fixture() -> (
        App,
        Arc<dyn RephraseService>,
        mpsc::UnboundedSender<AppEvent>,
        mpsc::UnboundedReceiver<AppEvent>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::default(), Arc::new(MockRephraseService::new()), tx, rx)
    }

    #[test]
    fn test_typing_and_backspace() {
        let (mut app, service, tx, _rx) = fixture();
        let mut pending = None;

        for c in "नई".chars() {
            handle_keyboard_input(&mut app, KeyCode::Char(c), KeyModifiers::NONE, &service, &tx, &mut pending);
        }
        assert_eq!(app.input_buffer, "नई");

        handle_keyboard_input(&mut app, KeyCode::Backspace, KeyModifiers::NONE, &service, &tx, &mut pending);
        assert_eq!(app.input_buffer, "न");

        handle_keyboard_input(&mut app, KeyCode::Char('u'), KeyModifiers::CONTROL, &service, &tx, &mut pending);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn test_ctrl_c_needs_two_presses() {
        let (mut app, service, tx, _rx) = fixture();
        let mut pending = None;

        handle_keyboard_input(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL, &service, &tx, &mut pending);
        assert!(app.exit_pending);
        assert!(!app.should_quit);

        handle_keyboard_input(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL, &service, &tx, &mut pending);
        assert!(app.should_quit);
    }

    #[test]
    fn test_other_key_disarms_exit_and_still_types() {
        let (mut app, service, tx, _rx) = fixture();
        let mut pending = None;

        handle_keyboard_input(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL, &service, &tx, &mut pending);
        handle_keyboard_input(&mut app, KeyCode::Char('a'), KeyModifiers::NONE, &service, &tx, &mut pending);

        assert!(!app.exit_pending);
        assert_eq!(app.input_buffer, "a");
    }

    #[test]
    fn test_enter_with_blank_input_does_not_submit() {
        let (mut app, service, tx, _rx) = fixture();
        let mut pending = None;
        app.input_buffer = "  ".to_string();

        handle_keyboard_input(&mut app, KeyCode::Enter, KeyModifiers::NONE, &service, &tx, &mut pending);

        assert!(!app.is_loading);
        assert!(pending.is_none());
    }

    #[tokio::test]
    async fn test_esc_cancels_pending_submission() {
        let (mut app, service, tx, _rx) = fixture();
        let mut pending = None;
        app.input_buffer = "खबर".to_string();

        handle_keyboard_input(&mut app, KeyCode::Enter, KeyModifiers::NONE, &service, &tx, &mut pending);
        assert!(app.is_loading);
        assert!(pending.is_some());

        handle_keyboard_input(&mut app, KeyCode::Esc, KeyModifiers::NONE, &service, &tx, &mut pending);
        assert!(!app.is_loading);
        assert!(pending.is_none());
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_help_keys() {
        let mut app = App::default();
        assert!(!handle_help_keys(&mut app, KeyCode::Esc, KeyModifiers::NONE));

        app.show_help = true;
        assert!(handle_help_keys(&mut app, KeyCode::Esc, KeyModifiers::NONE));
        assert!(!app.show_help);
    }
}
