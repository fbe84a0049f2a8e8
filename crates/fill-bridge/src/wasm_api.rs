//! WASM entry points.
//!
//! Only compiled for the `wasm32` target. JavaScript passes JSON requests in
//! and receives JSON responses back.

use std::cell::Cell;

use wasm_bindgen::prelude::*;

use stone_layout::LayoutConfig;

use crate::dispatch;

// Single-threaded in the web worker. Guarded until the host overrides the cap.
thread_local! {
    static CONFIG: Cell<LayoutConfig> = Cell::new(LayoutConfig::guarded());
}

/// Install the panic hook. Call once before any other function.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Override the grid size guard for subsequent requests.
#[wasm_bindgen]
pub fn set_max_placements(limit: usize) {
    CONFIG.with(|cell| cell.set(cell.get().with_max_placements(limit)));
}

/// Process a JSON `Request` and return a JSON `Response`.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    let config = CONFIG.with(Cell::get);
    dispatch::process_json(&config, json_input)
}
