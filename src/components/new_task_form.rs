//! New Task Form Component

use leptos::prelude::*;

use crate::store::{store_add_draft, use_todo_store, TodoStateStoreFields};

/// Text input plus "Add Todo"; Enter submits too
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_todo_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_add_draft(&store);
    };

    view! {
        <form class="new-task-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Add a new task"
                prop:value=move || store.draft().get()
                on:input=move |ev| store.draft().set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn-primary">"Add Todo"</button>
        </form>
    }
}
