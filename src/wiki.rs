// Wiki panel: live text filter over the entries plus an exclusive
// accordion, so at most one entry sits open at a time.

use crate::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDetailsElement, HtmlInputElement};

// An entry matches when the trimmed, case-folded query is empty or appears
// anywhere in its text.
pub fn matches_query(text: &str, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || text.to_lowercase().contains(&query)
}

// Queries this short filter but don't yank entries open.
pub fn auto_opens(query: &str) -> bool {
    query.trim().chars().count() > 1
}

pub fn wire(document: &Document) -> Result<(), JsValue> {
    let items = document.query_selector_all(".wiki-item")?;

    let search = document
        .get_element_by_id("wikiSearch")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    if items.length() > 0 {
        if let Some(search) = search {
            let document2 = document.clone();
            let input = search.clone();
            let on_input = Closure::wrap(Box::new(move || {
                let query = input.value();
                let items = match document2.query_selector_all(".wiki-item") {
                    Ok(items) => items,
                    Err(_) => return,
                };
                for item in dom::elements(&items) {
                    let text = item.text_content().unwrap_or_default();
                    let matched = matches_query(&text, &query);
                    let _ = item.class_list().toggle_with_force("wiki-hidden", !matched);
                    if matched && auto_opens(&query) {
                        if let Some(details) = item.dyn_ref::<HtmlDetailsElement>() {
                            details.set_open(true);
                        }
                    }
                }
            }) as Box<dyn FnMut()>);
            search.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
            on_input.forget();
        }
    }

    // Opening one entry closes the rest. Closing an already-closed entry
    // fires toggle too, so the handler bails unless its own entry is open.
    for item in dom::elements(&items) {
        let details: HtmlDetailsElement = match item.dyn_into() {
            Ok(details) => details,
            Err(_) => continue,
        };
        let document2 = document.clone();
        let opened = details.clone();
        let on_toggle = Closure::wrap(Box::new(move || {
            if !opened.open() {
                return;
            }
            let items = match document2.query_selector_all(".wiki-item") {
                Ok(items) => items,
                Err(_) => return,
            };
            for other in dom::elements(&items) {
                if let Some(other) = other.dyn_ref::<HtmlDetailsElement>() {
                    if !js_sys::Object::is(other.as_ref(), opened.as_ref()) {
                        other.set_open(false);
                    }
                }
            }
        }) as Box<dyn FnMut()>);
        details.add_event_listener_with_callback("toggle", on_toggle.as_ref().unchecked_ref())?;
        on_toggle.forget();
    }
    Ok(())
}
