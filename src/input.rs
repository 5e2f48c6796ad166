use crate::dom;
use ribbon_core::InputEvent;
use web_sys as web;

// ---------------- DOM event -> InputEvent ----------------
#[inline]
pub fn mouse_move(ev: &web::MouseEvent) -> InputEvent {
    InputEvent::PointerMove {
        x: ev.client_x() as f64,
        y: ev.client_y() as f64,
    }
}

#[inline]
fn first_touch(ev: &web::TouchEvent) -> Option<(f64, f64)> {
    ev.touches()
        .get(0)
        .map(|t| (t.page_x() as f64, t.page_y() as f64))
}

pub fn touch_start(ev: &web::TouchEvent) -> Option<InputEvent> {
    let touches = ev.touches().length();
    first_touch(ev).map(|(x, y)| InputEvent::TouchStart { touches, x, y })
}

pub fn touch_move(ev: &web::TouchEvent) -> Option<InputEvent> {
    first_touch(ev).map(|(x, y)| InputEvent::TouchMove { x, y })
}

#[inline]
pub fn resize(window: &web::Window) -> InputEvent {
    InputEvent::Resize(dom::viewport(window))
}

#[inline]
pub fn orientation_change(window: &web::Window) -> InputEvent {
    InputEvent::OrientationChange(dom::viewport(window))
}
