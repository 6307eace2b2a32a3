/// Bookmark Groups - Chrome Extension for grouped bookmarks
/// Built with Rust + WASM + Yew

pub mod chrome;
pub mod commands;
pub mod config;
pub mod model;
pub mod state;
pub mod storage;
pub mod ui;
pub mod view;

use wasm_bindgen::prelude::*;

// Set up panic hook and console logging
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(config::logger_config());
}

// Mount the bookmark page into #app, or <body> when the page has no such element
#[wasm_bindgen]
pub fn start_bookmarks() {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("app"));

    match root {
        Some(root) => yew::Renderer::<ui::app::App>::with_root(root).render(),
        None => yew::Renderer::<ui::app::App>::new().render(),
    };
}
