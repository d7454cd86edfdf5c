//! Food Menu Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod controller;
mod forms;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    mount_to_body(App);
}
