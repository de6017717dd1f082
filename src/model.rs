// File: ./src/model.rs
// Core data model: a task with a deadline, and the ordered list holding them.
use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone, Utc};
use std::fmt;
use uuid::Uuid;

/// Opaque task identifier. Generated once at creation, never reused.
pub type TaskId = String;

fn default_id() -> TaskId {
    Uuid::new_v4().to_string()
}

/// Input shapes accepted for deadlines. The `T`-separated ones match what a
/// datetime picker emits; the space-separated ones are easier to type.
const DEADLINE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// A task deadline. Input that fails to parse is kept verbatim instead of
/// being rejected: the task still shows up, it just never becomes due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deadline {
    At(DateTime<Utc>),
    Invalid(String),
}

impl Deadline {
    /// Parses user input as local wall-clock time and stores it in UTC.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        for fmt in DEADLINE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
                return match Local.from_local_datetime(&naive) {
                    LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
                        Deadline::At(dt.with_timezone(&Utc))
                    }
                    // DST gap: this wall-clock time does not exist locally.
                    LocalResult::None => Deadline::Invalid(trimmed.to_string()),
                };
            }
        }
        Deadline::Invalid(trimmed.to_string())
    }

    /// Signed time remaining. `None` for invalid deadlines, which keeps them
    /// out of every due-soon / overdue comparison.
    pub fn time_left(&self, now: DateTime<Utc>) -> Option<chrono::Duration> {
        match self {
            Deadline::At(at) => Some(*at - now),
            Deadline::Invalid(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Deadline::At(_))
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deadline::At(dt) => {
                write!(f, "{}", dt.with_timezone(&Local).format("%Y-%m-%d %H:%M"))
            }
            Deadline::Invalid(raw) => write!(f, "{}", raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub deadline: Deadline,
    /// No completion action exists yet, so this stays false for now.
    pub completed: bool,
}

impl Task {
    fn new(text: String, deadline: Deadline) -> Self {
        Self {
            id: default_id(),
            text,
            deadline,
            completed: false,
        }
    }
}

/// The ordered task collection. Insertion order is display order; only
/// `reorder` may change it.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new task and returns its id. Blank text or a blank deadline
    /// (after trimming) makes this a silent no-op, signalled by `None` so the
    /// caller knows not to clear its input fields.
    pub fn add(&mut self, text: &str, deadline_input: &str) -> Option<TaskId> {
        let text = text.trim();
        let deadline_input = deadline_input.trim();
        if text.is_empty() || deadline_input.is_empty() {
            return None;
        }
        let task = Task::new(text.to_string(), Deadline::parse(deadline_input));
        let id = task.id.clone();
        self.tasks.push(task);
        Some(id)
    }

    /// Removes the task with the given id, keeping the rest in order.
    /// Unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Splice move: the task at `source` is removed, then re-inserted at
    /// `dest` in the shortened sequence. Out-of-range indices behave like a
    /// cancelled drag and leave the list untouched.
    pub fn reorder(&mut self, source: usize, dest: usize) -> bool {
        if source >= self.tasks.len() || dest >= self.tasks.len() {
            return false;
        }
        if source == dest {
            return true;
        }
        let task = self.tasks.remove(source);
        self.tasks.insert(dest, task);
        true
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Owned copy of the current tasks, for handing to the reminder actor.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_picker_style_input() {
        assert!(Deadline::parse("2099-06-01T14:30").is_valid());
        assert!(Deadline::parse("2099-06-01T14:30:15").is_valid());
    }

    #[test]
    fn parses_spaced_input_with_padding() {
        assert!(Deadline::parse("  2099-06-01 14:30  ").is_valid());
    }

    #[test]
    fn keeps_garbage_verbatim() {
        let d = Deadline::parse("next tuesday-ish");
        assert_eq!(d, Deadline::Invalid("next tuesday-ish".to_string()));
        assert_eq!(d.to_string(), "next tuesday-ish");
    }

    #[test]
    fn invalid_deadline_has_no_time_left() {
        let d = Deadline::parse("whenever");
        assert_eq!(d.time_left(Utc::now()), None);
    }

    #[test]
    fn time_left_is_signed() {
        let now = Utc::now();
        let future = Deadline::At(now + chrono::Duration::minutes(10));
        let past = Deadline::At(now - chrono::Duration::minutes(10));
        assert!(future.time_left(now).unwrap() > chrono::Duration::zero());
        assert!(past.time_left(now).unwrap() < chrono::Duration::zero());
    }
}
