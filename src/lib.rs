#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::events::Listener;
use crate::frame::{RafScheduler, SharedAnimator};
use crate::surface::Canvas2d;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ribbon_core::{Animator, Params};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod surface;

/// Handle to one animated canvas. Dropping it (or calling `destroy`)
/// removes its listeners and stops the loop; the canvas keeps its last frame.
#[wasm_bindgen]
pub struct CanvasAnimation {
    animator: SharedAnimator,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl CanvasAnimation {
    pub fn stop(&self) {
        self.animator.borrow_mut().stop();
    }

    /// Continue after `stop`. Returns false if already running.
    pub fn resume(&self) -> bool {
        self.animator.borrow_mut().resume()
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.animator.borrow().is_running()
    }

    pub fn frame(&self) -> f64 {
        self.animator.borrow().frame() as f64
    }

    pub fn destroy(self) {}
}

impl Drop for CanvasAnimation {
    fn drop(&mut self) {
        self.listeners.clear();
        // cancel the pending frame before the tick closure goes away with the animator
        if let Ok(mut animator) = self.animator.try_borrow_mut() {
            animator.stop();
        }
    }
}

/// Mount the ribbon on `canvas`. Resolves to `undefined` when the browser
/// can't provide a 2D context; the canvas is then left untouched.
#[wasm_bindgen]
pub fn render_canvas(canvas: web::HtmlCanvasElement) -> Result<Option<CanvasAnimation>, JsValue> {
    mount(canvas).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).ok();
    log::info!("ribbon-web starting");

    if let Err(e) = auto_mount() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn auto_mount() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(el) = document.get_element_by_id(CANVAS_ELEMENT_ID) else {
        log::debug!("no #{} element; waiting for render_canvas", CANVAS_ELEMENT_ID);
        return Ok(());
    };
    if el.has_attribute(MANUAL_ATTR) {
        return Ok(());
    }
    let canvas: web::HtmlCanvasElement = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if let Some(animation) = mount(canvas)? {
        // the auto-mounted ribbon lives as long as the page
        std::mem::forget(animation);
    }
    Ok(())
}

fn mount(canvas: web::HtmlCanvasElement) -> anyhow::Result<Option<CanvasAnimation>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let ctx = match canvas.get_context("2d") {
        Ok(Some(obj)) => obj
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?,
        _ => {
            log::warn!("2d context unavailable; ribbon disabled");
            return Ok(None);
        }
    };

    let params = load_params(&canvas);
    let scheduler = RafScheduler::new(window.clone());
    let tick = scheduler.tick();
    let animator: SharedAnimator = Rc::new(RefCell::new(Animator::new(
        Canvas2d::new(canvas, ctx),
        scheduler,
        params,
        StdRng::from_entropy(),
    )));
    frame::install_tick(&animator, &tick);

    let listeners = events::wire_input_handlers(&animator, &window, &document)?;
    animator.borrow_mut().start(dom::viewport(&window));

    Ok(Some(CanvasAnimation {
        animator,
        listeners,
    }))
}

fn load_params(canvas: &web::HtmlCanvasElement) -> Params {
    let overrides = dom::param_overrides(canvas);
    let mut params = Params::default();
    if let Err(e) = params.apply_overrides(overrides.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    {
        log::warn!("[params] ignoring canvas overrides: {}", e);
    }
    params
}
