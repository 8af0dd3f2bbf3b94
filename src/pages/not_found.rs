//! Not Found Page
//!
//! Fallback for unknown paths.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::SIGNIN_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page-center">
            <div class="page-header">
                <h1>"Page not found"</h1>
                <p><A href=SIGNIN_PATH>"Back to sign in"</A></p>
            </div>
        </div>
    }
}
