//! Square Frontend Entry Point

mod app;
mod components;
mod config;
mod form_state;
mod models;
mod pages;
mod schema;
mod store;
mod task_list;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    mount_to_body(App);
}
