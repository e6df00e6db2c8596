// Wasm backend for the Aeonis page: the canvas particle backdrop plus the
// scroll, observer, and widget wiring the page used to do in plain JS.
// Every component degrades to a no-op when its element is missing, so the
// same module serves pages that only carry a subset of the markup.

pub mod backdrop;
pub mod chrome;
pub mod color;
mod dom;
pub mod field;
pub mod nav;
pub mod observers;
pub mod options;
pub mod particle;
pub mod surface;
pub mod tabs;
pub mod tilt;
mod utils;
pub mod wiki;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

// Wires every interaction against the current document. The returned
// handle, when present, stops the backdrop's animation loop.
#[wasm_bindgen]
pub fn start() -> Result<Option<backdrop::BackdropHandle>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let handle = backdrop::start(&window, &document)?;
    chrome::wire(&window, &document)?;
    observers::wire(&window, &document)?;
    tabs::wire(&document)?;
    nav::wire(&document)?;
    tilt::wire(&document)?;
    wiki::wire(&document)?;

    Ok(handle)
}
