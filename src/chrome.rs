// Scroll-linked page chrome: the navbar's scrolled state, the reading
// progress bar, the back-to-top button, and smooth scrolling for in-page
// anchor links. Every element is optional; whatever the page has gets
// wired, the rest is skipped.

use crate::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions, Window,
};

const NAV_SCROLLED_AT: f64 = 50.0;
const BACK_TO_TOP_AT: f64 = 500.0;
const ANCHOR_OFFSET: f64 = 80.0;

// Page scroll progress in percent; 0 when the document doesn't overflow
// the viewport.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, inner_height: f64) -> f64 {
    let track = scroll_height - inner_height;
    if track > 0.0 {
        (scroll_y / track) * 100.0
    } else {
        0.0
    }
}

fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn wire(window: &Window, document: &Document) -> Result<(), JsValue> {
    let navbar = document.get_element_by_id("navbar");
    let progress = document
        .get_element_by_id("scrollProgress")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let back_to_top = document.get_element_by_id("backToTop");

    {
        let window_cb = window.clone();
        let document = document.clone();
        let navbar = navbar.clone();
        let back_to_top = back_to_top.clone();
        let on_scroll = Closure::wrap(Box::new(move || {
            let scroll_y = window_cb.scroll_y().unwrap_or(0.0);
            let scroll_height = document
                .document_element()
                .map(|el| el.scroll_height() as f64)
                .unwrap_or(0.0);
            let inner_height = window_cb
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);

            if let Some(navbar) = &navbar {
                let _ = navbar
                    .class_list()
                    .toggle_with_force("scrolled", scroll_y > NAV_SCROLLED_AT);
            }
            if let Some(progress) = &progress {
                let percent = scroll_progress(scroll_y, scroll_height, inner_height);
                let _ = progress
                    .style()
                    .set_property("width", &format!("{}%", percent));
            }
            if let Some(back) = &back_to_top {
                let _ = back
                    .class_list()
                    .toggle_with_force("visible", scroll_y > BACK_TO_TOP_AT);
            }
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
        on_scroll.forget();
    }

    if let Some(back) = back_to_top {
        let window = window.clone();
        let on_click = Closure::wrap(Box::new(move || {
            smooth_scroll_to(&window, 0.0);
        }) as Box<dyn FnMut()>);
        back.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    wire_anchors(window, document)?;

    Ok(())
}

// Clicks on in-page anchors scroll to the target, stopping short of the
// fixed header.
fn wire_anchors(window: &Window, document: &Document) -> Result<(), JsValue> {
    let anchors = document.query_selector_all("a[href^=\"#\"]")?;
    for anchor in dom::elements(&anchors) {
        let window = window.clone();
        let document = document.clone();
        let link: Element = anchor.clone();
        let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
            let href = link.get_attribute("href").unwrap_or_default();
            if href == "#" {
                return;
            }
            if let Ok(Some(target)) = document.query_selector(&href) {
                event.prevent_default();
                let top = target.get_bounding_client_rect().top()
                    + window.scroll_y().unwrap_or(0.0)
                    - ANCHOR_OFFSET;
                smooth_scroll_to(&window, top);
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}
