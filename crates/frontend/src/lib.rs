pub mod app;
pub mod domain;
pub mod shared;
pub mod store;

use wasm_bindgen::prelude::wasm_bindgen;

/// Mount the catalog admin: subcategory screen plus the global toast layer.
#[wasm_bindgen]
pub fn hydrate() {
    // store actions are logged from the first render on
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
