//! Repair Vision Web App (Leptos + WASM)

mod api;
mod app;
mod components;
mod config;
mod selected_image;

use wasm_bindgen::prelude::*;

/// ブラウザコンソールへ出すログレベル
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log_level()) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
    }
    leptos::mount::mount_to_body(app::App);
}
