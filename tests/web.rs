// Browser-side checks for the one seam native tests cannot construct: pulling
// a surface-relative coordinate out of a real DOM event.

#![cfg(target_arch = "wasm32")]

use rust_canvas_fireworks::controller;
use wasm_bindgen_test::*;
use web_sys::{Event, MouseEvent};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn plain_event_carries_no_click_position() {
    let event = Event::new("click").unwrap();
    assert!(controller::click_position(&event).is_none());
}

#[wasm_bindgen_test]
fn mouse_event_yields_surface_coordinates() {
    let event = MouseEvent::new("click").unwrap();
    assert_eq!(controller::click_position(&event), Some((0.0, 0.0)));
}
