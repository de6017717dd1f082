// File: ./src/tui/mod.rs
// Terminal setup, the event loop, and teardown.
pub mod handlers;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::context::{AppContext, StandardContext};
use crate::reminder::{self, ReminderMessage};
use crate::tui::state::AppState;
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// The TUI owns stdout, so debug logging goes to a file in the data dir and
/// only when explicitly requested.
fn init_logging(ctx: &dyn AppContext) {
    if std::env::var("NUDGE_DEBUG").is_err() {
        return;
    }
    if let Some(path) = ctx.get_log_file_path()
        && let Ok(file) = std::fs::File::create(&path)
    {
        let _ = simplelog::WriteLogger::init(
            log::LevelFilter::Debug,
            simplelog::Config::default(),
            file,
        );
    }
}

pub async fn run(override_root: Option<PathBuf>) -> Result<()> {
    // Panic Hook
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("nudge_panic.log")
        {
            let _ = writeln!(file, "PANIC: {info:?}");
        }
        default_hook(info);
    }));

    let ctx: Arc<dyn AppContext> = Arc::new(StandardContext::new(override_root));
    init_logging(ctx.as_ref());

    let cfg = match Config::load(ctx.as_ref()) {
        Ok(c) => c,
        Err(e) => {
            // A syntax or permission error should be reported, not silently
            // papered over with defaults.
            if !Config::is_missing_config_error(&e) {
                eprintln!("Could not load the configuration:\n{}", e);
                std::process::exit(1);
            }

            // First run: write the defaults so there is a file to edit.
            let new_config = Config::default();
            if let Err(e) = new_config.save(ctx.as_ref()) {
                eprintln!("Warning: failed to write the default config: {}", e);
            } else if let Ok(path) = Config::get_path_string(ctx.as_ref()) {
                log::info!("Created default config at {}", path);
            }
            new_config
        }
    };

    // --- TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // --- STATE INIT ---
    let mut app_state = AppState::new_with_ctx(ctx.clone());
    app_state.theme = cfg.theme;

    // --- START REMINDER ACTOR ---
    let (ui_tx, mut ui_rx) = tokio::sync::mpsc::channel(10);
    let reminder_tx = reminder::spawn_reminder_actor(
        Duration::from_secs(reminder::SCAN_INTERVAL_SECS),
        cfg.desktop_notifications,
        ui_tx,
    );
    app_state.reminder_tx = Some(reminder_tx);
    // Arm the actor with the (empty) initial list.
    app_state.sync_reminders();

    // --- UI LOOP ---
    loop {
        app_state.prune_toasts();
        terminal.draw(|f| draw(f, &mut app_state))?;

        // A. Reminder Signals
        while let Ok(ReminderMessage::DueSoon(text)) = ui_rx.try_recv() {
            log::info!("Task due soon: {}", text);
            app_state.push_toast(reminder::warning_text(&text));
        }

        // B. Input Events
        if event::poll(Duration::from_millis(50))? {
            let ev = event::read()?;
            match ev {
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => handlers::handle_scroll(&mut app_state, true),
                    MouseEventKind::ScrollUp => handlers::handle_scroll(&mut app_state, false),
                    _ => {}
                },
                Event::Key(key) => {
                    // Windows reports releases too; acting on them would
                    // double every keypress.
                    if key.kind == event::KeyEventKind::Release {
                        continue;
                    }
                    if handlers::handle_key_event(key, &mut app_state) {
                        break;
                    }
                }
                _ => {}
            }
        }
    }

    // Dropping the state closes the snapshot channel, which stops the
    // reminder actor.
    drop(app_state);

    // --- CLEANUP ---
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
