// Mobile navigation: the hamburger toggles the menu and freezes body
// scroll while it's open; picking any link closes it again.

use crate::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

fn set_body_scroll_lock(document: &Document, locked: bool) {
    if let Some(body) = document.body() {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

pub fn wire(document: &Document) -> Result<(), JsValue> {
    let toggle = document.get_element_by_id("navToggle");
    let menu = document.get_element_by_id("navMenu");
    let (toggle, menu) = match (toggle, menu) {
        (Some(toggle), Some(menu)) => (toggle, menu),
        _ => return Ok(()),
    };

    {
        let document = document.clone();
        let menu = menu.clone();
        let on_click = Closure::wrap(Box::new(move || {
            let open = menu.class_list().toggle("open").unwrap_or(false);
            set_body_scroll_lock(&document, open);
        }) as Box<dyn FnMut()>);
        toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    let links = menu.query_selector_all(".nav-link")?;
    for link in dom::elements(&links) {
        let document = document.clone();
        let menu = menu.clone();
        let on_click = Closure::wrap(Box::new(move || {
            let _ = menu.class_list().remove_1("open");
            set_body_scroll_lock(&document, false);
        }) as Box<dyn FnMut()>);
        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}
