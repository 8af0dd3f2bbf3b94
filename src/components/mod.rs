//! UI Components
//!
//! Reusable Leptos components.

mod form_field;
mod navbar;
mod new_task_form;
mod task_row;

pub use form_field::{SelectField, TextAreaField, TextField};
pub use navbar::Navbar;
pub use new_task_form::NewTaskForm;
pub use task_row::TaskRow;
