//! Navbar Component
//!
//! Static top bar with a search box and the user avatar.

use leptos::prelude::*;

use crate::config::AVATAR_URL;

#[component]
pub fn Navbar() -> impl IntoView {
    let (avatar_failed, set_avatar_failed) = signal(false);

    view! {
        <nav class="navbar">
            <div class="navbar-search">
                <span class="navbar-star">"★"</span>
                <input type="text" placeholder="Search (Ctrl+/)" />
            </div>

            <div class="navbar-user">
                <span class="navbar-user-name">"User"</span>
                <span class="avatar">
                    <Show
                        when=move || !avatar_failed.get()
                        fallback=|| view! { <span class="avatar-fallback">"U"</span> }
                    >
                        <img src=AVATAR_URL alt="user" on:error=move |_| set_avatar_failed.set(true) />
                    </Show>
                </span>
            </div>
        </nav>
    }
}
