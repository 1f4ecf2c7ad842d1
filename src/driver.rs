// Fixed-timestep driver: one update+render step whenever enough wall-clock
// time has passed, fed timestamps by a TickSource. The simulation never
// touches requestAnimationFrame directly.

use crate::model::Model;
use crate::view::{Surface, View};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

// Delivers a monotonically increasing high-resolution timestamp (ms) to the
// callback once per display refresh, forever.
pub trait TickSource {
    fn start(self, callback: Box<dyn FnMut(f64)>);
}

pub struct FrameTimer {
    interval: f64,
    last: f64,
}

impl FrameTimer {
    pub fn new(fps: u32) -> FrameTimer {
        FrameTimer {
            interval: 1000.0 / fps as f64,
            last: 0.0,
        }
    }

    // True when a step is due. The division remainder carries into `last`
    // so the effective rate tracks the target fps even when callbacks
    // arrive off-cadence.
    pub fn should_step(&mut self, now: f64) -> bool {
        let delta = now - self.last;
        if delta >= self.interval {
            self.last = now - (delta % self.interval);
            true
        } else {
            false
        }
    }
}

// Composes model and view; enters its single running state at startup and
// never stops itself.
pub struct Driver<S: Surface> {
    model: Model,
    view: View<S>,
    timer: FrameTimer,
}

impl<S: Surface> Driver<S> {
    pub fn new(model: Model, view: View<S>, timer: FrameTimer) -> Driver<S> {
        Driver { model, view, timer }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    // One frame callback: at most one update+render step.
    pub fn frame(&mut self, now: f64) {
        if self.timer.should_step(now) {
            self.model.update();
            self.view.render(self.model.explosions());
        }
    }
}

// requestAnimationFrame-backed tick source. Re-registers itself before every
// callback returns, so the loop runs until the page is torn down.
pub struct AnimationFrameTicks;

impl TickSource for AnimationFrameTicks {
    fn start(self, mut callback: Box<dyn FnMut(f64)>) {
        let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let inner = slot.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            callback(now);
            if let Some(closure) = inner.borrow().as_ref() {
                request_animation_frame(closure);
            }
        }) as Box<dyn FnMut(f64)>));
        let borrowed = slot.borrow();
        if let Some(closure) = borrowed.as_ref() {
            request_animation_frame(closure);
        }
    }
}

fn request_animation_frame(closure: &Closure<dyn FnMut(f64)>) {
    let func: &js_sys::Function = closure.as_ref().unchecked_ref();
    web_sys::window()
        .expect("no window")
        .request_animation_frame(func)
        .expect("failed to schedule animation frame");
}
