//! Square Frontend App
//!
//! Router mapping paths to screens.

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    StaticSegment,
};

use crate::config::SIGNIN_PATH;
use crate::pages::{NotFoundPage, RegisterPage, SignInPage, TodoPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=SIGNIN_PATH /> } />
                    <Route path=StaticSegment("register") view=RegisterPage />
                    <Route path=StaticSegment("signin") view=SignInPage />
                    // Older cross-links point at /login
                    <Route path=StaticSegment("login") view=SignInPage />
                    <Route path=StaticSegment("todo") view=TodoPage />
                </Routes>
            </main>
        </Router>
    }
}
