// Canvas-backed drawing surface: grabs the fixed-size 2d context off the DOM
// and turns Surface calls into context primitives.

use crate::color::Color;
use crate::view::Surface;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub const WIDTH: u32 = 640;
    pub const HEIGHT: u32 = 400;

    // Looks up the canvas element by id and acquires its 2d context. Both
    // are startup preconditions; failures propagate to the embedder.
    pub fn from_element_id(canvas_id: &str) -> Result<CanvasSurface, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str("canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas.set_width(CanvasSurface::WIDTH);
        canvas.set_height(CanvasSurface::HEIGHT);
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(CanvasSurface { canvas, context })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    // set_fill_style with a JsValue is the one spelling available across the
    // whole web-sys 0.3 range; newer point releases deprecate it in favor of
    // a str variant that older ones lack.
    #[allow(deprecated)]
    fn clear(&mut self, background: Color) {
        self.context
            .set_fill_style(&JsValue::from_str(&background.to_css()));
        self.context.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        self.context.begin_path();
        // arc only fails on non-finite input, which the simulation never produces
        let _ = self
            .context
            .arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        self.context.close_path();
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css()));
        self.context.fill();
    }
}
