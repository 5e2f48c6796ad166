use glam::DVec2;
use std::cell::Cell;
use std::rc::Rc;

/// Shared pointer coordinate. Clones observe the same cell.
#[derive(Clone, Debug, Default)]
pub struct PointerTarget(Rc<Cell<DVec2>>);

impl PointerTarget {
    pub fn new(pos: DVec2) -> Self {
        Self(Rc::new(Cell::new(pos)))
    }

    #[inline]
    pub fn get(&self) -> DVec2 {
        self.0.get()
    }

    #[inline]
    pub fn set(&self, pos: DVec2) {
        self.0.set(pos);
    }
}

/// Writer side of the pointer target.
///
/// Tracks whether any pointer input has arrived since the last reset so the
/// owner can rebuild its chains on the pointer instead of at the origin.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    target: PointerTarget,
    activated: bool,
    // moved while the owner wasn't ready to activate
    deferred: bool,
}

impl PointerTracker {
    pub fn new(initial: DVec2) -> Self {
        Self {
            target: PointerTarget::new(initial),
            activated: false,
            deferred: false,
        }
    }

    pub fn target(&self) -> PointerTarget {
        self.target.clone()
    }

    pub fn position(&self) -> DVec2 {
        self.target.get()
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Overwrite the position. Returns `true` on the first move after a reset.
    pub fn move_to(&mut self, pos: DVec2) -> bool {
        self.target.set(pos);
        self.deferred = false;
        !std::mem::replace(&mut self.activated, true)
    }

    /// Overwrite the position without consuming the first activation; it is
    /// handed out later by `take_deferred_activation`.
    pub fn move_deferred(&mut self, pos: DVec2) {
        self.target.set(pos);
        if !self.activated {
            self.deferred = true;
        }
    }

    /// `true` once if a deferred move is still waiting to activate.
    pub fn take_deferred_activation(&mut self) -> bool {
        if std::mem::take(&mut self.deferred) {
            self.activated = true;
            return true;
        }
        false
    }

    pub fn reset_activation(&mut self) {
        self.activated = false;
        self.deferred = false;
    }
}

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Canvas backing size for this viewport: full height, width less `margin`.
    #[inline]
    pub fn canvas_size(&self, margin: u32) -> (u32, u32) {
        (self.width.saturating_sub(margin).max(1), self.height.max(1))
    }
}

/// Input the animator reacts to, already reduced to coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse or pointer move, client coordinates.
    PointerMove { x: f64, y: f64 },
    /// Touch start; only single-finger touches move the target.
    TouchStart { touches: u32, x: f64, y: f64 },
    /// Touch move, page coordinates of the first touch.
    TouchMove { x: f64, y: f64 },
    Resize(Viewport),
    OrientationChange(Viewport),
    Focus,
    Blur,
}
