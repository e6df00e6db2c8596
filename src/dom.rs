// Small helpers over web-sys node lists.

use wasm_bindgen::JsCast;
use web_sys::{Element, NodeList};

// Walk a query_selector_all result as Elements, skipping anything else.
pub fn elements(list: &NodeList) -> impl Iterator<Item = Element> + '_ {
    (0..list.length()).filter_map(move |i| {
        list.item(i)
            .and_then(|node| node.dyn_into::<Element>().ok())
    })
}
