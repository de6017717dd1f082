// File: tests/task_list.rs
// Behavior of the in-memory task list: adding, deleting, reordering.
use nudge::model::{Deadline, TaskList};

fn seeded_list(names: &[&str]) -> TaskList {
    let mut list = TaskList::new();
    for name in names {
        list.add(name, "2099-01-01 12:00")
            .expect("seed add should succeed");
    }
    list
}

fn order(list: &TaskList) -> Vec<String> {
    list.iter().map(|t| t.text.clone()).collect()
}

#[test]
fn add_appends_in_order_with_fresh_ids() {
    let mut list = TaskList::new();
    let a = list.add("Write report", "2099-03-14 09:00").unwrap();
    let b = list.add("Send report", "2099-03-14 17:00").unwrap();

    assert_eq!(list.len(), 2);
    assert_ne!(a, b, "Each task gets its own id");
    assert_eq!(order(&list), vec!["Write report", "Send report"]);
    assert!(list.iter().all(|t| !t.completed));
}

#[test]
fn add_trims_text_but_keeps_inner_whitespace() {
    let mut list = TaskList::new();
    list.add("  buy oat milk  ", "2099-01-01 08:00").unwrap();
    assert_eq!(list.get(0).unwrap().text, "buy oat milk");
}

#[test]
fn blank_text_is_rejected_silently() {
    let mut list = TaskList::new();
    assert!(list.add("", "2099-01-01 08:00").is_none());
    assert!(list.add("   ", "2099-01-01 08:00").is_none());
    assert!(list.is_empty());
}

#[test]
fn blank_deadline_is_rejected_silently() {
    let mut list = TaskList::new();
    assert!(list.add("stretch", "").is_none());
    assert!(list.add("stretch", "   ").is_none());
    assert!(list.is_empty());
}

#[test]
fn unparsable_deadline_is_still_accepted() {
    let mut list = TaskList::new();
    let id = list.add("call the bank", "at some point").unwrap();

    let task = list.get(0).unwrap();
    assert_eq!(task.id, id);
    assert_eq!(
        task.deadline,
        Deadline::Invalid("at some point".to_string()),
        "Junk input is kept verbatim instead of being rejected"
    );
}

#[test]
fn delete_removes_only_the_matching_task() {
    let mut list = seeded_list(&["A", "B", "C"]);
    let b_id = list.get(1).unwrap().id.clone();

    assert!(list.delete(&b_id));
    assert_eq!(order(&list), vec!["A", "C"]);
}

#[test]
fn delete_unknown_id_is_a_noop() {
    let mut list = seeded_list(&["A", "B"]);
    assert!(!list.delete("no-such-id"));
    assert_eq!(order(&list), vec!["A", "B"]);
}

#[test]
fn add_then_delete_restores_the_original_list() {
    let mut list = seeded_list(&["A", "B"]);
    let before = order(&list);

    let id = list.add("transient", "2099-05-05 05:05").unwrap();
    assert!(list.delete(&id));

    assert_eq!(order(&list), before);
}

#[test]
fn reorder_moves_first_to_last() {
    let mut list = seeded_list(&["A", "B", "C"]);
    assert!(list.reorder(0, 2));
    assert_eq!(order(&list), vec!["B", "C", "A"]);
}

#[test]
fn reorder_moves_last_to_first() {
    let mut list = seeded_list(&["A", "B", "C"]);
    assert!(list.reorder(2, 0));
    assert_eq!(order(&list), vec!["C", "A", "B"]);
}

#[test]
fn reorder_to_same_slot_changes_nothing() {
    let mut list = seeded_list(&["A", "B", "C"]);
    assert!(list.reorder(1, 1));
    assert_eq!(order(&list), vec!["A", "B", "C"]);
}

#[test]
fn out_of_range_reorder_is_a_cancelled_gesture() {
    let mut list = seeded_list(&["A", "B", "C"]);
    assert!(!list.reorder(5, 0));
    assert!(!list.reorder(0, 5));
    assert_eq!(order(&list), vec!["A", "B", "C"]);
}

#[test]
fn reorder_keeps_ids_attached_to_their_tasks() {
    let mut list = seeded_list(&["A", "B", "C"]);
    let a_id = list.get(0).unwrap().id.clone();

    list.reorder(0, 2);
    assert_eq!(list.get(2).unwrap().id, a_id);
}

#[test]
fn snapshot_is_detached_from_the_list() {
    let mut list = seeded_list(&["A"]);
    let snap = list.snapshot();

    list.add("B", "2099-01-02 10:00").unwrap();

    assert_eq!(snap.len(), 1);
    assert_eq!(list.len(), 2);
}
