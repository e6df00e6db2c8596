//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use aeonis_interactions::field::ParticleField;
use aeonis_interactions::options::FieldOptions;
use aeonis_interactions::surface::CanvasSurface;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn field_renders_onto_a_real_canvas() {
    let canvas: HtmlCanvasElement = document()
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_width(400);
    canvas.set_height(300);
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();

    let mut rng = rand::thread_rng();
    let mut field = ParticleField::new(400.0, 300.0, FieldOptions::default(), &mut rng);
    let mut surface = CanvasSurface::new(context);
    for _ in 0..10 {
        field.advance(&mut rng);
        field.render(&mut surface);
    }
}

#[wasm_bindgen_test]
fn start_without_any_page_markup_is_a_no_op() {
    aeonis_interactions::initialize();
    let handle = aeonis_interactions::start().unwrap();
    // No #particleCanvas in the harness page, so no animation loop either.
    assert!(handle.is_none());
}

#[wasm_bindgen_test]
fn backdrop_starts_and_stops_when_the_canvas_exists() {
    let doc = document();
    let canvas = doc.create_element("canvas").unwrap();
    canvas.set_id("particleCanvas");
    doc.body().unwrap().append_child(&canvas).unwrap();

    let window = web_sys::window().unwrap();
    let handle = aeonis_interactions::backdrop::start(&window, &doc)
        .unwrap()
        .expect("backdrop should start with the canvas present");
    assert!(handle.is_running());
    handle.stop();
    assert!(!handle.is_running());

    doc.body().unwrap().remove_child(&canvas).unwrap();
}
