use crate::constants::REVEALED_CLASS;
use crate::core::{Layer, ParallaxRig};
use crate::dom;
use crate::snowfall::SnowOverlay;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub rig: ParallaxRig,
    pub layers: Vec<(Layer, web::HtmlElement)>,
    pub snow: Option<SnowOverlay>,
    pub resize_pending: Rc<Cell<bool>>,
    pub greeting: Option<web::Element>,
    pub greeting_revealed: bool,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let scroll_y = dom::scroll_y();
        let offsets = self.rig.step(scroll_y, dt_sec);
        for (layer, el) in &self.layers {
            dom::set_translate_y(el, offsets.get(*layer));
        }

        if let Some(snow) = &mut self.snow {
            if self.resize_pending.replace(false) {
                snow.resize();
            }
            snow.frame(dt_sec);
        }

        if !self.greeting_revealed {
            if let Some(el) = &self.greeting {
                if dom::is_in_viewport(el) {
                    dom::add_class(el, REVEALED_CLASS);
                    self.greeting_revealed = true;
                    log::debug!("[frame] greeting revealed at scroll_y={:.0}", scroll_y);
                }
            }
        }
    }
}

/// Handle to a running requestAnimationFrame loop. Stopping (or dropping)
/// cancels the pending frame and releases the callback.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn stop(&mut self) {
        if self.stopped.replace(true) {
            return;
        }
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to itself
        self.tick.borrow_mut().take();
        log::debug!("[frame] loop stopped");
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let tick_ref = tick.borrow();
    let cb = tick_ref.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));
    let stopped = Rc::new(Cell::new(false));

    let tick_clone = tick.clone();
    let pending_tick = pending.clone();
    let stopped_tick = stopped.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if stopped_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        pending_tick.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));

    pending.set(request_frame(&tick));
    FrameLoop {
        pending,
        stopped,
        tick,
    }
}
