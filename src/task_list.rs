//! Task List
//!
//! In-memory ordered task collection. Every operation is total: unknown ids
//! and blank text are no-ops.

use crate::config::SEED_TASKS;
use crate::models::{Task, TaskId};

/// Tasks in insertion order plus the id counter
///
/// Ids are issued from a monotonic counter that starts above every id already
/// present, so they are unique for the lifetime of the list and never reused.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    tasks: Vec<Task>,
    last_id: TaskId,
}

impl TodoList {
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let last_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        Self { tasks, last_id }
    }

    /// List shown when the to-do page opens
    pub fn seeded() -> Self {
        Self::from_tasks(
            SEED_TASKS
                .iter()
                .map(|&(id, text, completed)| Task {
                    id,
                    text: text.to_string(),
                    completed,
                })
                .collect(),
        )
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// Append a task with the trimmed text; blank text adds nothing
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.last_id += 1;
        let id = self.last_id;
        self.tasks.push(Task::new(id, text));
        Some(id)
    }

    /// Flip `completed` on the matching task
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the matching task
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Remove every completed task, returning how many went
    pub fn delete_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn task(id: TaskId, completed: bool) -> Task {
        Task {
            id,
            text: format!("Task {}", id),
            completed,
        }
    }

    #[test]
    fn test_seeded() {
        let list = TodoList::seeded();
        let texts: Vec<_> = list.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Hello", "This", "Good"]);
        assert_eq!(list.completed_count(), 1);
        assert_eq!(list.remaining_count(), 2);
    }

    #[test]
    fn test_add_appends_incomplete_task() {
        let mut list = TodoList::seeded();
        let n = list.len();
        let id = list.add("Buy milk").unwrap();

        assert_eq!(list.len(), n + 1);
        let last = list.tasks().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.text, "Buy milk");
        assert!(!last.completed);
    }

    #[test]
    fn test_add_trims_text() {
        let mut list = TodoList::default();
        list.add("  Buy milk \n");
        assert_eq!(list.tasks()[0].text, "Buy milk");
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = TodoList::seeded();
        let before = list.clone();
        assert_eq!(list.add("   "), None);
        assert_eq!(list.add(""), None);
        assert_eq!(list, before);
    }

    #[test]
    fn test_new_ids_start_above_existing() {
        let mut list = TodoList::from_tasks(vec![task(7, false), task(3, false)]);
        assert_eq!(list.add("next"), Some(8));
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut list = TodoList::from_tasks(vec![task(1, false), task(2, true), task(3, false)]);
        assert!(list.toggle(2));
        let flags: Vec<_> = list.tasks().iter().map(|t| t.completed).collect();
        assert_eq!(flags, [false, false, false]);

        assert!(list.toggle(1));
        let flags: Vec<_> = list.tasks().iter().map(|t| t.completed).collect();
        assert_eq!(flags, [true, false, false]);
    }

    #[test]
    fn test_toggle_missing_is_noop() {
        let mut list = TodoList::seeded();
        let before = list.clone();
        assert!(!list.toggle(99));
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete() {
        let mut list = TodoList::seeded();
        assert!(list.delete(2));
        let ids: Vec<_> = list.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut list = TodoList::seeded();
        let before = list.clone();
        assert!(!list.delete(42));
        assert!(!list.delete(42));
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete_completed() {
        let mut list = TodoList::from_tasks(vec![task(1, true), task(2, false), task(3, true)]);
        assert_eq!(list.delete_completed(), 2);
        assert_eq!(list.tasks(), &[task(2, false)]);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut list = TodoList::default();
        let a = list.add("a").unwrap();
        list.delete(a);
        let b = list.add("b").unwrap();
        assert_ne!(a, b);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(String),
        Toggle(usize),
        Delete(usize),
        DeleteCompleted,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[ a-z]{0,8}".prop_map(Op::Add),
            (0usize..16).prop_map(Op::Toggle),
            (0usize..16).prop_map(Op::Delete),
            Just(Op::DeleteCompleted),
        ]
    }

    proptest! {
        #[test]
        fn prop_ids_stay_unique(ops in proptest::collection::vec(op(), 0..64)) {
            let mut list = TodoList::seeded();
            for op in ops {
                match op {
                    Op::Add(text) => { list.add(&text); }
                    Op::Toggle(i) => {
                        let id = list.tasks().get(i).map(|t| t.id).unwrap_or(1000);
                        list.toggle(id);
                    }
                    Op::Delete(i) => {
                        let id = list.tasks().get(i).map(|t| t.id).unwrap_or(1000);
                        list.delete(id);
                    }
                    Op::DeleteCompleted => { list.delete_completed(); }
                }
                let ids: HashSet<_> = list.tasks().iter().map(|t| t.id).collect();
                prop_assert_eq!(ids.len(), list.len());
                prop_assert!(list.tasks().iter().all(|t| !t.text.trim().is_empty()));
            }
        }

        #[test]
        fn prop_toggle_touches_one_task(
            flags in proptest::collection::vec(any::<bool>(), 1..12),
            pick in any::<proptest::sample::Index>(),
        ) {
            let tasks: Vec<_> = flags.iter().enumerate()
                .map(|(i, &c)| task(i as TaskId + 1, c))
                .collect();
            let mut list = TodoList::from_tasks(tasks.clone());
            let target = pick.index(tasks.len());
            list.toggle(tasks[target].id);
            for (i, (before, after)) in tasks.iter().zip(list.tasks()).enumerate() {
                if i == target {
                    prop_assert_eq!(after.completed, !before.completed);
                } else {
                    prop_assert_eq!(after, before);
                }
            }
        }
    }
}
