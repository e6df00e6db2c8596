// Loadout tab strip: one active button, one active pane. The pane's id is
// "tab-" plus the button's data-tab value.

use crate::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

pub fn wire(document: &Document) -> Result<(), JsValue> {
    let buttons = document.query_selector_all(".tab-btn")?;
    for button in dom::elements(&buttons) {
        let document = document.clone();
        let clicked = button.clone();
        let on_click = Closure::wrap(Box::new(move || {
            let tab_id = clicked.get_attribute("data-tab").unwrap_or_default();

            if let Ok(buttons) = document.query_selector_all(".tab-btn") {
                for other in dom::elements(&buttons) {
                    let _ = other.class_list().remove_1("active");
                }
            }
            if let Ok(panes) = document.query_selector_all(".tab-content") {
                for pane in dom::elements(&panes) {
                    let _ = pane.class_list().remove_1("active");
                }
            }

            let _ = clicked.class_list().add_1("active");
            if let Some(pane) = document.get_element_by_id(&format!("tab-{}", tab_id)) {
                let _ = pane.class_list().add_1("active");
            }
        }) as Box<dyn FnMut()>);
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}
