//! To-Do Page
//!
//! Owns the task store for as long as the page is mounted.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Navbar, NewTaskForm, TaskRow};
use crate::store::{store_delete_completed, TodoState, TodoStateStoreFields};

#[component]
pub fn TodoPage() -> impl IntoView {
    let store = Store::new(TodoState::seeded());
    provide_context(store);

    view! {
        <div class="todo-layout">
            <Navbar />

            <div class="page-center">
                <div class="card todo-card">
                    <div class="card-header">
                        <h2 class="todo-title">"To Do"</h2>
                    </div>

                    <div class="card-body stack">
                        <NewTaskForm />

                        <div class="task-list">
                            <Show when=move || store.list().read().is_empty()>
                                <p class="task-empty">"Nothing to do"</p>
                            </Show>
                            <For
                                each=move || store.list().read().tasks().to_vec()
                                key=|task| (task.id, task.completed)
                                children=|task| view! { <TaskRow task=task /> }
                            />
                        </div>
                    </div>

                    <div class="card-footer row-center">
                        <p class="task-count">
                            {move || {
                                let remaining = store.list().read().remaining_count();
                                format!("{} remaining", remaining)
                            }}
                        </p>
                        <button
                            class="btn btn-danger"
                            on:click=move |_| store_delete_completed(&store)
                        >
                            "Delete Selected"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
