// Pointer-tracking tilt for [data-tilt] cards. The cursor's offset from
// the card center maps linearly onto a rotation, full deflection at the
// edges; leaving the card drops the inline transform so the stylesheet
// takes back over.

use crate::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

pub const MAX_TILT_DEG: f64 = 5.0;

// Rotation pair for a cursor at (x, y) inside a width x height card.
// Vertical offset tips the card away from the cursor, horizontal toward it.
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let rotate_x = ((y - center_y) / center_y) * -MAX_TILT_DEG;
    let rotate_y = ((x - center_x) / center_x) * MAX_TILT_DEG;
    (rotate_x, rotate_y)
}

pub fn tilt_transform(rotate_x: f64, rotate_y: f64) -> String {
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-4px)",
        rotate_x, rotate_y
    )
}

pub fn wire(document: &Document) -> Result<(), JsValue> {
    let cards = document.query_selector_all("[data-tilt]")?;
    for card in dom::elements(&cards) {
        let card: HtmlElement = match card.dyn_into() {
            Ok(card) => card,
            Err(_) => continue,
        };

        {
            let move_card = card.clone();
            let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
                let rect = move_card.get_bounding_client_rect();
                let x = event.client_x() as f64 - rect.left();
                let y = event.client_y() as f64 - rect.top();
                let (rotate_x, rotate_y) = tilt_angles(x, y, rect.width(), rect.height());
                let _ = move_card
                    .style()
                    .set_property("transform", &tilt_transform(rotate_x, rotate_y));
            }) as Box<dyn FnMut(MouseEvent)>);
            card.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
            on_move.forget();
        }

        {
            let leave_card = card.clone();
            let on_leave = Closure::wrap(Box::new(move || {
                let _ = leave_card.style().remove_property("transform");
            }) as Box<dyn FnMut()>);
            card.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
            on_leave.forget();
        }
    }
    Ok(())
}
