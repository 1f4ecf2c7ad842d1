// Translates primary-button clicks into explosions inserted into the model.
// Coordinates are relative to the canvas itself, not the window.

use crate::model::Model;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};

// Surface-relative click coordinate, or None when the event is not a mouse
// event and so carries no usable position.
pub fn click_position(event: &Event) -> Option<(f64, f64)> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some((mouse.offset_x() as f64, mouse.offset_y() as f64))
}

// A click with no usable coordinate is silently ignored.
pub fn on_click(model: &mut Model, event: &Event) {
    if let Some((x, y)) = click_position(event) {
        spawn_at(model, x, y);
    }
}

pub fn spawn_at(model: &mut Model, x: f64, y: f64) {
    let explosion = model.create_explosion(x, y);
    model.add_explosion(explosion);
    log::debug!("explosion spawned at ({}, {})", x, y);
}
