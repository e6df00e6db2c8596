// The animated particle backdrop: canvas lookup and sizing, the resize
// hook that rebuilds the field, and the self-re-arming animation-frame
// loop. Each frame advances the field before painting it; the loop runs
// until the page goes away or the returned handle stops it.

use crate::field::ParticleField;
use crate::options::FieldOptions;
use crate::surface::CanvasSurface;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

pub const CANVAS_ID: &str = "particleCanvas";

struct Backdrop {
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
    field: ParticleField,
}

impl Backdrop {
    fn frame(&mut self) {
        let mut rng = rand::thread_rng();
        self.field.advance(&mut rng);
        self.field.render(&mut self.surface);
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        let mut rng = rand::thread_rng();
        self.field.resize(width, height, &mut rng);
    }
}

// Lets the embedding page shut the animation loop down; dropping the handle
// without calling stop() leaves the loop running for the page's lifetime.
#[wasm_bindgen]
pub struct BackdropHandle {
    running: Rc<Cell<bool>>,
}

#[wasm_bindgen]
impl BackdropHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

pub fn start(window: &Window, document: &Document) -> Result<Option<BackdropHandle>, JsValue> {
    // Pages without the backdrop canvas just skip the whole effect.
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok());
    let canvas = match canvas {
        Some(canvas) => canvas,
        None => {
            console::log_1(&format!("#{} not found, backdrop disabled", CANVAS_ID).into());
            return Ok(None);
        }
    };

    let (width, height) = viewport_size(window)?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let mut rng = rand::thread_rng();
    let field = ParticleField::new(width, height, FieldOptions::default(), &mut rng);
    let backdrop = Rc::new(RefCell::new(Backdrop {
        canvas,
        surface: CanvasSurface::new(context),
        field,
    }));

    // Match the canvas bitmap to the viewport and re-seed the pool whenever
    // the window changes size.
    {
        let backdrop = backdrop.clone();
        let window_cb = window.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            if let Ok((width, height)) = viewport_size(&window_cb) {
                backdrop.borrow_mut().resize(width, height);
            }
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
    }

    let running = Rc::new(Cell::new(true));

    // The closure re-arms itself through `frame`; holding the Option in an
    // Rc lets the closure reach its own handle.
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = frame.clone();

    {
        let frame = frame.clone();
        let running = running.clone();
        let backdrop = backdrop.clone();
        let window = window.clone();
        *first.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running.get() {
                return;
            }
            backdrop.borrow_mut().frame();
            window
                .request_animation_frame(
                    frame.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                )
                .expect("failed to schedule animation frame");
        }) as Box<dyn FnMut()>));
    }

    window.request_animation_frame(first.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;

    Ok(Some(BackdropHandle { running }))
}
