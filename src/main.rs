//! Todo Items Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod edit_state;
mod error;
mod models;
mod order;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    wasm_tracing::set_as_global_default();

    tracing::info!("starting todo items frontend");
    mount_to_body(App);
}
