pub mod canvas;
pub mod color;
pub mod config;
pub mod controller;
pub mod driver;
pub mod explosion;
pub mod model;
pub mod particle;
mod utils;
pub mod view;

use crate::canvas::CanvasSurface;
use crate::config::Config;
use crate::driver::{AnimationFrameTicks, Driver, FrameTimer, TickSource};
use crate::model::Model;
use crate::view::View;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Composition root: builds the model, view and driver exactly once and owns
// them behind the two platform callbacks (canvas clicks and animation
// frames). There is no other shared state.
#[wasm_bindgen]
pub struct Fireworks {
    driver: Rc<RefCell<Driver<CanvasSurface>>>,
    canvas: HtmlCanvasElement,
}

#[wasm_bindgen]
impl Fireworks {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<Fireworks, JsValue> {
        utils::set_panic_hook();
        // A second Fireworks on the same page would re-register the logger;
        // that is not an error.
        let _ = console_log::init_with_level(log::Level::Debug);

        let config = Config::default();
        let surface = CanvasSurface::from_element_id(canvas_id)?;
        let canvas = surface.canvas().clone();
        let model = Model::new(config);
        let view = View::new(surface, config.background);
        let timer = FrameTimer::new(config.fps);
        let driver = Rc::new(RefCell::new(Driver::new(model, view, timer)));

        log::info!("fireworks bound to canvas '{}'", canvas_id);
        Ok(Fireworks { driver, canvas })
    }

    // Attaches the click listener and starts the frame loop; runs until the
    // page is torn down.
    pub fn start(&self) -> Result<(), JsValue> {
        let driver = self.driver.clone();
        let on_click = Closure::wrap(Box::new(move |event: web_sys::Event| {
            controller::on_click(driver.borrow_mut().model_mut(), &event);
        }) as Box<dyn FnMut(web_sys::Event)>);
        self.canvas
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        // The listener lives for the page's lifetime.
        on_click.forget();

        let driver = self.driver.clone();
        AnimationFrameTicks.start(Box::new(move |now| {
            driver.borrow_mut().frame(now);
        }));
        Ok(())
    }

    // Programmatic burst, same path a click takes.
    pub fn spawn_at(&self, x: f64, y: f64) {
        controller::spawn_at(self.driver.borrow_mut().model_mut(), x, y);
    }

    pub fn explosion_count(&self) -> usize {
        self.driver.borrow().model().explosion_count()
    }

    pub fn particle_count(&self) -> usize {
        self.driver.borrow().model().particle_count()
    }
}
