// File: ./src/tui/state.rs
// Everything the TUI draws from: the task list, cursor, mode and toasts.
use crate::context::SharedContext;
use crate::model::{Task, TaskList};
use crate::theme::Theme;
use ratatui::widgets::ListState;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// How long a reminder toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Text,
    Deadline,
}

/// One editable text field with a char-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValue {
    pub value: String,
    pub cursor_position: usize,
}

impl FieldValue {
    // --- INPUT HELPERS ---
    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.clamp_cursor(self.cursor_position.saturating_sub(1));
    }
    pub fn move_cursor_right(&mut self) {
        self.cursor_position = self.clamp_cursor(self.cursor_position.saturating_add(1));
    }
    pub fn enter_char(&mut self, new_char: char) {
        // The cursor is char-indexed; translate to a byte offset first.
        let byte_index = self
            .value
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.value.len());

        self.value.insert(byte_index, new_char);
        self.move_cursor_right();
    }
    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let target = self.value.char_indices().nth(self.cursor_position - 1);
        if let Some((byte_index, _)) = target {
            self.value.remove(byte_index);
            self.move_cursor_left();
        }
    }
    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor_position = 0;
    }
    fn clamp_cursor(&self, pos: usize) -> usize {
        pos.min(self.value.chars().count())
    }
}

/// The two-field add form: task text plus deadline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub text: FieldValue,
    pub deadline: FieldValue,
    pub field: FormField,
}

impl TaskForm {
    pub fn focused_mut(&mut self) -> &mut FieldValue {
        match self.field {
            FormField::Text => &mut self.text,
            FormField::Deadline => &mut self.deadline,
        }
    }

    /// With only two fields, forward and backward are the same flip.
    pub fn cycle_field(&mut self) {
        self.field = match self.field {
            FormField::Text => FormField::Deadline,
            FormField::Deadline => FormField::Text,
        };
    }

    pub fn reset(&mut self) {
        self.text.reset();
        self.deadline.reset();
        self.field = FormField::Text;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// The add-task form is open.
    Adding(TaskForm),
    /// A row is grabbed; `dest` is the previewed drop position.
    Moving { source: usize, dest: usize },
}

/// A transient on-screen notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub created: Instant,
}

pub struct AppState {
    // Data
    pub ctx: SharedContext,
    pub tasks: TaskList,
    pub theme: Theme,

    // UI State
    pub list_state: ListState,
    pub mode: Mode,
    pub message: String,
    pub toasts: Vec<Toast>,
    pub show_full_help: bool,

    // Channel to the background reminder actor
    pub reminder_tx: Option<mpsc::Sender<Vec<Task>>>,
}

impl AppState {
    /// State wired to the real platform directories.
    pub fn new() -> Self {
        let ctx = Arc::new(crate::context::StandardContext::new(None));
        Self::new_with_ctx(ctx)
    }

    /// State over a caller-chosen context, which is how tests stay off the
    /// real config directory.
    pub fn new_with_ctx(ctx: SharedContext) -> Self {
        Self {
            ctx,
            tasks: TaskList::new(),
            theme: Theme::default(),
            list_state: ListState::default(),
            mode: Mode::Normal,
            message: "Press 'a' to add your first task.".to_string(),
            toasts: Vec::new(),
            show_full_help: false,
            reminder_tx: None,
        }
    }

    pub fn next(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.tasks.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + self.tasks.len() - 1) % self.tasks.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn get_selected_task(&self) -> Option<&Task> {
        self.list_state.selected().and_then(|i| self.tasks.get(i))
    }

    /// Re-snaps the selection after the list length changed.
    pub fn clamp_selection(&mut self) {
        if self.tasks.is_empty() {
            self.list_state.select(None);
        } else {
            let i = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some(i.min(self.tasks.len() - 1)));
        }
    }

    /// Tasks in the order the list should be drawn. While a row is grabbed
    /// this previews the pending move without touching the real list.
    pub fn display_tasks(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().collect();
        if let Mode::Moving { source, dest } = self.mode
            && source < tasks.len()
            && dest < tasks.len()
        {
            let grabbed = tasks.remove(source);
            tasks.insert(dest, grabbed);
        }
        tasks
    }

    pub fn push_toast(&mut self, text: String) {
        self.toasts.push(Toast {
            text,
            created: Instant::now(),
        });
    }

    /// Drops toasts that have outlived their display window.
    pub fn prune_toasts(&mut self) {
        let now = Instant::now();
        self.toasts
            .retain(|t| now.duration_since(t.created) < TOAST_TTL);
    }

    /// Pushes a fresh snapshot to the reminder actor, restarting its scan
    /// countdown.
    pub fn sync_reminders(&self) {
        if let Some(tx) = &self.reminder_tx {
            let _ = tx.try_send(self.tasks.snapshot());
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
