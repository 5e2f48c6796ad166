use crate::surface::Canvas2d;
use ribbon_core::{Animator, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedAnimator = Rc<RefCell<Animator<Canvas2d, RafScheduler>>>;

/// Slot holding the per-frame callback handed to `requestAnimationFrame`.
pub type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` scheduler. Keeps the id of the outstanding frame
/// so a stop can cancel it instead of waiting for one more callback.
pub struct RafScheduler {
    window: web::Window,
    tick: Tick,
    handle: Option<i32>,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            tick: Rc::new(RefCell::new(None)),
            handle: None,
        }
    }

    pub fn tick(&self) -> Tick {
        self.tick.clone()
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        if self.handle.is_some() {
            return;
        }
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            log::warn!("[frame] no tick installed; frame not scheduled");
            return;
        };
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.handle = Some(id),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel_frame(&mut self) {
        if let Some(id) = self.handle.take() {
            _ = self.window.cancel_animation_frame(id);
        }
    }

    fn is_pending(&self) -> bool {
        self.handle.is_some()
    }

    fn frame_started(&mut self) {
        self.handle = None;
    }
}

/// Point the scheduler's tick at `animator`. The closure only holds a weak
/// reference, so dropping the animator also frees the callback.
pub fn install_tick(animator: &SharedAnimator, tick: &Tick) {
    let weak = Rc::downgrade(animator);
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(animator) = weak.upgrade() {
            animator.borrow_mut().on_frame();
        }
    }) as Box<dyn FnMut()>));
}
