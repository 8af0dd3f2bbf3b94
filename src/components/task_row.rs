//! Task Row Component
//!
//! A single task in the to-do list.

use leptos::prelude::*;

use crate::models::Task;
use crate::store::{store_delete_task, store_toggle_task, use_todo_store};

/// One task: checkbox, label, and either a done mark or a delete control
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let store = use_todo_store();

    let id = task.id;
    let completed = task.completed;

    view! {
        <div class=if completed { "task-row completed" } else { "task-row" }>
            <label class="task-label">
                <input
                    type="checkbox"
                    prop:checked=completed
                    on:change=move |_| store_toggle_task(&store, id)
                />
                <span class="task-text">{task.text}</span>
            </label>

            // Completed tasks leave only through "Delete Selected"
            {if completed {
                view! { <span class="task-done" title="Completed">"✓"</span> }.into_any()
            } else {
                view! {
                    <button
                        class="task-delete"
                        title="Delete task"
                        on:click=move |_| store_delete_task(&store, id)
                    >
                        "✗"
                    </button>
                }.into_any()
            }}
        </div>
    }
}
