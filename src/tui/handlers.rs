// File: src/tui/handlers.rs
// Handles keyboard and scroll input for the TUI.
use crate::config::Config;
use crate::tui::state::{AppState, Mode, TaskForm};
use crossterm::event::{KeyCode, KeyEvent};

/// Handles one key press. Returns true when the app should quit.
pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> bool {
    match state.mode {
        Mode::Normal => handle_normal_key(key, state),
        Mode::Adding(_) => handle_form_key(key, state),
        Mode::Moving { source, dest } => handle_moving_key(key, state, source, dest),
    }
}

/// Mouse wheel: moves the selection, or the drop position while a task is
/// grabbed.
pub fn handle_scroll(state: &mut AppState, down: bool) {
    match state.mode {
        Mode::Moving { source, dest } => shift_dest(state, source, dest, down),
        _ => {
            if down {
                state.next()
            } else {
                state.previous()
            }
        }
    }
}

fn handle_normal_key(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => state.show_full_help = !state.show_full_help,
        KeyCode::Esc => state.show_full_help = false,
        KeyCode::Char('a') => {
            state.mode = Mode::Adding(TaskForm::default());
            state.message = "New task: Enter adds, Tab switches fields, Esc closes.".to_string();
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(task) = state.get_selected_task() {
                let id = task.id.clone();
                let text = task.text.clone();
                if state.tasks.delete(&id) {
                    log::info!("Deleted task {}", id);
                    state.clamp_selection();
                    state.sync_reminders();
                    state.message = format!("Deleted \"{}\".", text);
                }
            }
        }
        KeyCode::Char('t') => {
            state.theme = state.theme.toggle();
            // Working copy changed; write the preference back to disk.
            let mut cfg = Config::load(state.ctx.as_ref()).unwrap_or_default();
            cfg.theme = state.theme;
            if let Err(e) = cfg.save(state.ctx.as_ref()) {
                log::warn!("Could not persist theme choice: {}", e);
            }
            state.message = format!("Theme: {}.", state.theme);
        }
        KeyCode::Char(' ') | KeyCode::Char('g') => {
            if let Some(i) = state.list_state.selected()
                && i < state.tasks.len()
            {
                state.mode = Mode::Moving { source: i, dest: i };
                state.message =
                    "Moving: j/k choose the position, Enter drops, Esc cancels.".to_string();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => state.next(),
        KeyCode::Up | KeyCode::Char('k') => state.previous(),
        _ => {}
    }
    false
}

fn handle_form_key(key: KeyEvent, state: &mut AppState) -> bool {
    let mut close_form = false;
    // Take the form out of the mode so the rest of the state stays reachable.
    let mut mode = std::mem::replace(&mut state.mode, Mode::Normal);
    if let Mode::Adding(form) = &mut mode {
        match key.code {
            KeyCode::Esc => {
                close_form = true;
                state.message = "Ready.".to_string();
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => form.cycle_field(),
            KeyCode::Enter => {
                if let Some(id) = state.tasks.add(&form.text.value, &form.deadline.value) {
                    log::info!("Added task {}", id);
                    form.reset();
                    state.clamp_selection();
                    state.sync_reminders();
                    state.message = format!("Task added ({} total).", state.tasks.len());
                }
                // Blank text or blank deadline: nothing happens, the form
                // keeps what was typed.
            }
            KeyCode::Char(c) => form.focused_mut().enter_char(c),
            KeyCode::Backspace => form.focused_mut().delete_char(),
            KeyCode::Left => form.focused_mut().move_cursor_left(),
            KeyCode::Right => form.focused_mut().move_cursor_right(),
            _ => {}
        }
    }
    state.mode = if close_form { Mode::Normal } else { mode };
    false
}

fn handle_moving_key(key: KeyEvent, state: &mut AppState, source: usize, dest: usize) -> bool {
    match key.code {
        KeyCode::Esc => {
            // Cancelled gesture: the list keeps its original order.
            state.mode = Mode::Normal;
            state.list_state.select(Some(source));
            state.message = "Move cancelled.".to_string();
        }
        KeyCode::Down | KeyCode::Char('j') => shift_dest(state, source, dest, true),
        KeyCode::Up | KeyCode::Char('k') => shift_dest(state, source, dest, false),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('g') => {
            state.mode = Mode::Normal;
            if state.tasks.reorder(source, dest) {
                state.list_state.select(Some(dest));
                state.sync_reminders();
                state.message = "Task moved.".to_string();
            } else {
                state.clamp_selection();
            }
        }
        _ => {}
    }
    false
}

fn shift_dest(state: &mut AppState, source: usize, dest: usize, down: bool) {
    if state.tasks.is_empty() {
        return;
    }
    let max = state.tasks.len() - 1;
    let new_dest = if down {
        if dest >= max { 0 } else { dest + 1 }
    } else if dest == 0 {
        max
    } else {
        dest - 1
    };
    state.mode = Mode::Moving {
        source,
        dest: new_dest,
    };
    state.list_state.select(Some(new_dest));
}
