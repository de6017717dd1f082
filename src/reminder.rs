// File: ./src/reminder.rs
// Background deadline scan: periodically warns about tasks that are about
// to become due.
use crate::model::Task;
use chrono::{DateTime, Duration, Utc};
use notify_rust::Notification;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

/// Seconds between scans of the task list.
pub const SCAN_INTERVAL_SECS: u64 = 60;
/// A task is "due soon" when its deadline is less than this many minutes away.
pub const DUE_SOON_WINDOW_MINS: i64 = 5;

#[derive(Debug, Clone)]
pub enum ReminderMessage {
    DueSoon(String), // Task text
}

/// Warning wording shared by toasts and OS notifications.
pub fn warning_text(task_text: &str) -> String {
    format!("⏳ Reminder: Task \"{}\" is due soon!", task_text)
}

/// Tasks whose deadline lies strictly between `now` and the warning window.
/// Both bounds are exclusive: a deadline exactly now is already late, one
/// exactly at the window edge gets caught on a later scan. Past and invalid
/// deadlines never match.
pub fn due_soon(tasks: &[Task], now: DateTime<Utc>) -> Vec<&Task> {
    let window = Duration::minutes(DUE_SOON_WINDOW_MINS);
    tasks
        .iter()
        .filter(|t| {
            t.deadline
                .time_left(now)
                .is_some_and(|left| left > Duration::zero() && left < window)
        })
        .collect()
}

/// Spawns the background reminder actor.
///
/// The actor holds the latest task snapshot and rescans it on every tick,
/// firing one warning per due-soon task per tick. There is deliberately no
/// de-duplication: a task inside the window keeps nagging on every scan
/// until it is past due or gone. Sending a new snapshot restarts the timer;
/// dropping the returned sender shuts the actor down.
/// returns: Sender to update the task list.
pub fn spawn_reminder_actor(
    tick: std::time::Duration,
    desktop_notifications: bool,
    ui_sender: mpsc::Sender<ReminderMessage>,
) -> mpsc::Sender<Vec<Task>> {
    let (tx, mut rx) = mpsc::channel::<Vec<Task>>(10);

    tokio::spawn(async move {
        let mut tasks: Vec<Task> = Vec::new();
        // interval_at so the first tick lands a full interval from now;
        // a plain interval would fire immediately on startup.
        let mut ticker = time::interval_at(time::Instant::now() + tick, tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let now = Utc::now();
                    for task in due_soon(&tasks, now) {
                        log::debug!("Reminder fired for task {}", task.id);

                        // 1. Notify UI
                        let _ = ui_sender
                            .send(ReminderMessage::DueSoon(task.text.clone()))
                            .await;

                        // 2. OS Notification
                        if desktop_notifications {
                            let summary = task.text.clone();
                            let body =
                                format!("Due in the next {} minutes.", DUE_SOON_WINDOW_MINS);
                            std::thread::spawn(move || {
                                let _ = Notification::new()
                                    .summary(&summary)
                                    .body(&body)
                                    .appname("Nudge")
                                    .show();
                            });
                        }
                    }
                }
                update = rx.recv() => {
                    match update {
                        Some(new_list) => {
                            tasks = new_list;
                            // List changed: restart the countdown to the
                            // next scan from scratch.
                            ticker = time::interval_at(time::Instant::now() + tick, tick);
                            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                        }
                        None => {
                            // Channel closed, exit actor
                            break;
                        }
                    }
                }
            }
        }
    });

    tx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Deadline;

    fn task_due_in(minutes: i64, now: DateTime<Utc>) -> Task {
        Task {
            id: format!("t-{}", minutes),
            text: format!("due in {} min", minutes),
            deadline: Deadline::At(now + Duration::minutes(minutes)),
            completed: false,
        }
    }

    #[test]
    fn warns_inside_window() {
        let now = Utc::now();
        let tasks = vec![task_due_in(4, now)];
        let due = due_soon(&tasks, now);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].text, "due in 4 min");
    }

    #[test]
    fn silent_for_distant_deadline() {
        let now = Utc::now();
        let tasks = vec![task_due_in(10, now)];
        assert!(due_soon(&tasks, now).is_empty());
    }

    #[test]
    fn silent_for_past_deadline() {
        let now = Utc::now();
        let tasks = vec![task_due_in(-2, now)];
        assert!(due_soon(&tasks, now).is_empty());
    }

    #[test]
    fn window_bounds_are_exclusive() {
        let now = Utc::now();
        // Exactly now and exactly at the window edge both fall outside.
        let tasks = vec![task_due_in(0, now), task_due_in(DUE_SOON_WINDOW_MINS, now)];
        assert!(due_soon(&tasks, now).is_empty());
    }

    #[test]
    fn invalid_deadline_is_never_due() {
        let now = Utc::now();
        let tasks = vec![Task {
            id: "bad".to_string(),
            text: "fuzzy deadline".to_string(),
            deadline: Deadline::Invalid("soonish".to_string()),
            completed: false,
        }];
        assert!(due_soon(&tasks, now).is_empty());
    }

    #[test]
    fn no_dedup_across_scans() {
        let now = Utc::now();
        let tasks = vec![task_due_in(3, now)];
        // Same list scanned twice warns twice.
        assert_eq!(due_soon(&tasks, now).len(), 1);
        assert_eq!(due_soon(&tasks, now + Duration::seconds(60)).len(), 1);
    }

    #[test]
    fn warning_text_quotes_the_task() {
        assert_eq!(
            warning_text("Water plants"),
            "⏳ Reminder: Task \"Water plants\" is due soon!"
        );
    }
}
