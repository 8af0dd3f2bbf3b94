//! Frontend Models
//!
//! Data structures held in page state.

pub type TaskId = u64;

/// To-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}
