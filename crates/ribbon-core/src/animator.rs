//! Per-canvas animation context and its run-state machine.
//!
//! An [`Animator`] owns everything one animated canvas needs: the drawing
//! surface, the frame scheduler, the pointer tracker, the chain pool and the
//! hue oscillator. Nothing is process-wide, so independent canvases never
//! share state.

use crate::params::Params;
use crate::pointer::{InputEvent, PointerTarget, PointerTracker, Viewport};
use crate::pool::ChainPool;
use crate::schedule::FrameScheduler;
use crate::stats::FrameStats;
use crate::surface::{CompositeMode, DrawSurface};
use crate::wave::{hsla, HueOscillator};
use glam::DVec2;
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

pub struct Animator<S: DrawSurface, F: FrameScheduler> {
    surface: S,
    scheduler: F,
    params: Params,
    rng: StdRng,
    pointer: PointerTracker,
    wave: HueOscillator,
    pool: ChainPool,
    state: RunState,
    frame: u64,
    // set by blur, cleared by an explicit stop
    resume_on_focus: bool,
    stats: FrameStats,
}

impl<S: DrawSurface, F: FrameScheduler> Animator<S, F> {
    /// Invalid `params` are logged and replaced by the defaults.
    pub fn new(surface: S, scheduler: F, params: Params, rng: StdRng) -> Self {
        let params = match params.validate() {
            Ok(()) => params,
            Err(e) => {
                log::warn!("[animator] {}; using default parameters", e);
                Params::default()
            }
        };
        let wave = HueOscillator::new(params.wave, 0.0);
        Self {
            surface,
            scheduler,
            params,
            rng,
            pointer: PointerTracker::new(DVec2::ZERO),
            wave,
            pool: ChainPool::default(),
            state: RunState::Stopped,
            frame: 0,
            resume_on_focus: false,
            stats: FrameStats::new(),
        }
    }

    /// Stopped -> Running: size the surface, reseed the oscillator, build a
    /// fresh pool on the pointer and schedule the first frame.
    pub fn start(&mut self, viewport: Viewport) {
        if self.state == RunState::Running {
            return;
        }
        self.resize(viewport);
        self.wave = HueOscillator::with_random_phase(self.params.wave, &mut self.rng);
        self.pool = ChainPool::new(&self.params, self.pointer.position(), &mut self.rng);
        self.pointer.reset_activation();
        self.frame = 1;
        self.state = RunState::Running;
        self.resume_on_focus = false;
        self.stats.reset();
        let (w, h) = self.surface.size();
        log::info!(
            "[animator] start {}x{} trails={} size={} phase={:.3}",
            w,
            h,
            self.pool.len(),
            self.params.size,
            self.wave.phase()
        );
        self.scheduler.request_frame();
    }

    /// Running -> Stopped. The surface keeps its last frame.
    pub fn stop(&mut self) {
        self.resume_on_focus = false;
        if self.state == RunState::Stopped {
            return;
        }
        self.state = RunState::Stopped;
        self.scheduler.cancel_frame();
        log::info!("[animator] stop at frame {}", self.frame);
    }

    /// Stop until the window regains focus.
    pub fn suspend(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Stopped;
            self.scheduler.cancel_frame();
            self.resume_on_focus = true;
            log::debug!("[animator] suspended at frame {}", self.frame);
        }
    }

    /// Continue a stopped loop with its existing chains and oscillator.
    /// Returns `false` if already running or never started.
    pub fn resume(&mut self) -> bool {
        if self.state == RunState::Running || self.frame == 0 {
            return false;
        }
        self.state = RunState::Running;
        self.resume_on_focus = false;
        self.stats.reset();
        if self.pointer.take_deferred_activation() {
            self.rebuild_on_pointer();
        }
        log::debug!("[animator] resume at frame {}", self.frame);
        self.scheduler.request_frame();
        true
    }

    /// Render one frame and schedule the next. No-op while stopped.
    pub fn on_frame(&mut self) {
        self.scheduler.frame_started();
        if self.state != RunState::Running {
            return;
        }

        self.surface.set_composite(CompositeMode::SourceOver);
        self.surface.clear();
        self.surface.set_composite(CompositeMode::Lighter);
        let hue = self.wave.advance();
        self.surface
            .set_stroke_style(&hsla(hue, self.params.stroke_alpha));
        self.surface.set_line_width(self.params.line_width);

        self.pool.update(self.pointer.position());
        self.pool.draw(&mut self.surface);

        self.frame += 1;
        if self.params.debug {
            if let Some(mean_ms) = self.stats.record() {
                log::info!(
                    "[animator] frame {} mean {:.2}ms ({:.1} fps)",
                    self.frame,
                    mean_ms,
                    1000.0 / mean_ms.max(1e-6)
                );
            }
        }
        self.scheduler.request_frame();
    }

    /// Run the outstanding frame, if any. Lets a host step the loop by hand.
    pub fn run_pending_frame(&mut self) -> bool {
        if !self.scheduler.is_pending() {
            return false;
        }
        self.on_frame();
        true
    }

    /// Fit the surface to the viewport. Chains are left where they are.
    pub fn resize(&mut self, viewport: Viewport) {
        let (w, h) = viewport.canvas_size(self.params.canvas_margin);
        if self.surface.size() != (w, h) {
            self.surface.set_size(w, h);
            log::debug!("[animator] resize {}x{}", w, h);
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } | InputEvent::TouchMove { x, y } => {
                self.pointer_moved(DVec2::new(x, y));
            }
            InputEvent::TouchStart { touches, x, y } => {
                if touches == 1 {
                    self.pointer_moved(DVec2::new(x, y));
                }
            }
            InputEvent::Resize(vp) | InputEvent::OrientationChange(vp) => self.resize(vp),
            InputEvent::Focus => {
                if self.resume_on_focus {
                    self.resume();
                }
            }
            InputEvent::Blur => self.suspend(),
        }
    }

    fn pointer_moved(&mut self, pos: DVec2) {
        if self.state != RunState::Running {
            self.pointer.move_deferred(pos);
            return;
        }
        if self.pointer.move_to(pos) {
            self.rebuild_on_pointer();
        }
    }

    // rebuild on the pointer so the ribbon doesn't sweep in from the origin
    fn rebuild_on_pointer(&mut self) {
        let pos = self.pointer.position();
        self.pool = ChainPool::new(&self.params, pos, &mut self.rng);
        log::debug!("[animator] pointer activated at ({:.0},{:.0})", pos.x, pos.y);
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn pool(&self) -> &ChainPool {
        &self.pool
    }

    pub fn oscillator(&self) -> &HueOscillator {
        &self.wave
    }

    pub fn pointer(&self) -> PointerTarget {
        self.pointer.target()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }
}
