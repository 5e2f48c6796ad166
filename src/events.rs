use crate::constants::*;
use crate::frame::SharedAnimator;
use crate::input;
use ribbon_core::InputEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    /// Like `attach`, but non-passive so the handler may call `preventDefault`
    /// on touch moves.
    pub fn attach_active(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

fn dispatch(animator: &SharedAnimator, event: InputEvent) {
    animator.borrow_mut().handle_input(event);
}

pub fn wire_input_handlers(
    animator: &SharedAnimator,
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::with_capacity(7);
    listeners.push(wire_mousemove(animator, document)?);
    listeners.push(wire_touchstart(animator, document)?);
    listeners.push(wire_touchmove(animator, document)?);
    listeners.extend(wire_viewport(animator, window, document)?);
    listeners.extend(wire_focus(animator, window)?);
    Ok(listeners)
}

fn wire_mousemove(animator: &SharedAnimator, document: &web::Document) -> anyhow::Result<Listener> {
    let animator = animator.clone();
    Listener::attach(document, EV_MOUSE_MOVE, move |ev: web::Event| {
        if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
            dispatch(&animator, input::mouse_move(mouse));
            ev.prevent_default();
        }
    })
}

fn wire_touchstart(animator: &SharedAnimator, document: &web::Document) -> anyhow::Result<Listener> {
    let animator = animator.clone();
    Listener::attach(document, EV_TOUCH_START, move |ev: web::Event| {
        if let Some(touch) = ev.dyn_ref::<web::TouchEvent>().and_then(input::touch_start) {
            dispatch(&animator, touch);
        }
    })
}

fn wire_touchmove(animator: &SharedAnimator, document: &web::Document) -> anyhow::Result<Listener> {
    let animator = animator.clone();
    Listener::attach_active(document, EV_TOUCH_MOVE, move |ev: web::Event| {
        if let Some(touch) = ev.dyn_ref::<web::TouchEvent>().and_then(input::touch_move) {
            dispatch(&animator, touch);
            ev.prevent_default();
        }
    })
}

fn wire_viewport(
    animator: &SharedAnimator,
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<Vec<Listener>> {
    let mut out = Vec::with_capacity(2);

    let a = animator.clone();
    let w = window.clone();
    out.push(Listener::attach(window, EV_RESIZE, move |_| {
        dispatch(&a, input::resize(&w));
    })?);

    if let Some(body) = document.body() {
        let a = animator.clone();
        let w = window.clone();
        out.push(Listener::attach(&body, EV_ORIENTATION_CHANGE, move |_| {
            dispatch(&a, input::orientation_change(&w));
        })?);
    }
    Ok(out)
}

fn wire_focus(animator: &SharedAnimator, window: &web::Window) -> anyhow::Result<Vec<Listener>> {
    let a = animator.clone();
    let focus = Listener::attach(window, EV_FOCUS, move |_| dispatch(&a, InputEvent::Focus))?;
    let a = animator.clone();
    let blur = Listener::attach(window, EV_BLUR, move |_| dispatch(&a, InputEvent::Blur))?;
    Ok(vec![focus, blur])
}
