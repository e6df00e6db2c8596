// IntersectionObserver-driven effects: reveal-on-scroll, the stat counters,
// and the attack-rating bar fills. Each element is observed until its first
// intersection and then released.

use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    console, Document, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, Window,
};

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";
const REVEAL_STAGGER_MS: i32 = 80;
const COUNTER_THRESHOLD: f64 = 0.5;
const COUNTER_DURATION_MS: f64 = 2000.0;
const BAR_THRESHOLD: f64 = 0.3;

pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

// Text for a counter element `elapsed_ms` into its run; eases out toward
// the goal and parks there once the duration is up.
pub fn counter_display(elapsed_ms: f64, duration_ms: f64, goal: f64) -> String {
    let progress = (elapsed_ms / duration_ms).min(1.0);
    format!("{}", (ease_out_quart(progress) * goal).round())
}

pub fn wire(window: &Window, document: &Document) -> Result<(), JsValue> {
    // Old engines without IntersectionObserver keep every element visible
    // from the start, same as the page behaves with scripting disabled.
    if !js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))? {
        console::log_1(&"IntersectionObserver unavailable, scroll effects disabled".into());
        return Ok(());
    }

    wire_reveals(window, document)?;
    wire_counters(window, document)?;
    wire_bars(document)?;
    Ok(())
}

fn observe_all(observer: &IntersectionObserver, elements: &NodeList) {
    for element in dom::elements(elements) {
        observer.observe(&element);
    }
}

fn wire_reveals(window: &Window, document: &Document) -> Result<(), JsValue> {
    let elements = document.query_selector_all(".reveal")?;
    if elements.length() == 0 {
        return Ok(());
    }

    let window = window.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for (index, entry) in entries.iter().enumerate() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);

                // Stagger a batch of reveals by their position in it.
                let delay = index as i32 * REVEAL_STAGGER_MS;
                let show = Closure::once_into_js(move || {
                    let _ = target.class_list().add_1("visible");
                });
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    show.unchecked_ref(),
                    delay,
                );
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    observe_all(&observer, &elements);
    Ok(())
}

fn wire_counters(window: &Window, document: &Document) -> Result<(), JsValue> {
    let elements = document.query_selector_all("[data-count]")?;
    if elements.length() == 0 {
        return Ok(());
    }

    let window = window.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                let goal = target
                    .get_attribute("data-count")
                    .and_then(|v| v.trim().parse::<f64>().ok())
                    .unwrap_or(0.0);
                run_counter(&window, target, goal);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(COUNTER_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    observe_all(&observer, &elements);
    Ok(())
}

// Animation-frame loop counting the element's text up from zero. Runs off
// performance.now() so the count lands on the goal after two seconds no
// matter the display's refresh rate.
fn run_counter(window: &Window, target: Element, goal: f64) {
    let performance = match window.performance() {
        Some(performance) => performance,
        None => {
            target.set_text_content(Some(&format!("{}", goal)));
            return;
        }
    };
    let start = performance.now();

    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = frame.clone();
    {
        let frame = frame.clone();
        let window = window.clone();
        *first.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let elapsed = performance.now() - start;
            target.set_text_content(Some(&counter_display(elapsed, COUNTER_DURATION_MS, goal)));
            if elapsed < COUNTER_DURATION_MS {
                window
                    .request_animation_frame(
                        frame.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                    )
                    .expect("failed to schedule animation frame");
            }
        }) as Box<dyn FnMut()>));
    }
    let _ = window
        .request_animation_frame(first.borrow().as_ref().unwrap().as_ref().unchecked_ref());
}

fn wire_bars(document: &Document) -> Result<(), JsValue> {
    let elements = document.query_selector_all(".bar-fill")?;
    if elements.length() == 0 {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1("animated");
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(BAR_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    observe_all(&observer, &elements);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_both_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
    }

    #[test]
    fn easing_is_monotonic_and_front_loaded() {
        let mut last = 0.0;
        for step in 1..=100 {
            let value = ease_out_quart(step as f64 / 100.0);
            assert!(value >= last);
            last = value;
        }
        // Ease-out covers most of the distance in the first half.
        assert!(ease_out_quart(0.5) > 0.9);
    }

    #[test]
    fn counter_starts_at_zero_and_parks_on_the_goal() {
        assert_eq!(counter_display(0.0, 2000.0, 1200.0), "0");
        assert_eq!(counter_display(2000.0, 2000.0, 1200.0), "1200");
        assert_eq!(counter_display(5000.0, 2000.0, 1200.0), "1200");
    }

    #[test]
    fn counter_midpoint_follows_the_easing_curve() {
        // t = 0.5 -> 1 - 0.5^4 = 0.9375
        assert_eq!(counter_display(1000.0, 2000.0, 400.0), "375");
    }
}
