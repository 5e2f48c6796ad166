//! Spring chains: a head point elastically tied to the pointer and a tail of
//! points each tied to its predecessor.

use crate::constants::MIN_CHAIN_LEN;
use crate::params::Params;
use crate::surface::DrawSurface;
use glam::DVec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub pos: DVec2,
    pub vel: DVec2,
}

impl Point {
    pub fn at(pos: DVec2) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
        }
    }
}

/// Coefficients shared by every chain in a pool.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coupling {
    /// Fraction of the predecessor's velocity added to each successor.
    pub dampening: f64,
    /// Spring decay per step away from the head.
    pub tension: f64,
}

impl Coupling {
    pub fn from_params(params: &Params) -> Self {
        Self {
            dampening: params.dampening,
            tension: params.tension,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpringChain {
    points: Vec<Point>,
    spring: f64,
    friction: f64,
    coupling: Coupling,
}

impl SpringChain {
    /// All points start at rest on `origin`. `len` is raised to
    /// `MIN_CHAIN_LEN` so a chain always has a head and a tail.
    pub fn new(len: usize, origin: DVec2, spring: f64, friction: f64, coupling: Coupling) -> Self {
        Self {
            points: vec![Point::at(origin); len.max(MIN_CHAIN_LEN)],
            spring,
            friction,
            coupling,
        }
    }

    /// Build a chain whose spring and friction are offset by a small centred
    /// random amount so neighbouring chains drift apart.
    pub fn jittered<R: Rng + ?Sized>(
        params: &Params,
        origin: DVec2,
        spring: f64,
        rng: &mut R,
    ) -> Self {
        let spring = spring + params.spring_jitter * rng.gen::<f64>() - params.spring_jitter * 0.5;
        let friction =
            params.friction + params.friction_jitter * rng.gen::<f64>() - params.friction_jitter * 0.5;
        Self::new(params.size, origin, spring, friction, Coupling::from_params(params))
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn head(&self) -> &Point {
        &self.points[0]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn spring(&self) -> f64 {
        self.spring
    }

    pub fn friction(&self) -> f64 {
        self.friction
    }

    pub fn coupling(&self) -> Coupling {
        self.coupling
    }
}

/// Advance `chain` one frame towards `target`.
pub fn update_chain(chain: &mut SpringChain, target: DVec2) {
    let Coupling { dampening, tension } = chain.coupling;
    let friction = chain.friction;
    let mut spring = chain.spring;
    let mut prev: Option<Point> = None;

    for point in chain.points.iter_mut() {
        match prev {
            None => point.vel += (target - point.pos) * spring,
            Some(p) => {
                point.vel += (p.pos - point.pos) * spring;
                point.vel += p.vel * dampening;
            }
        }
        point.vel *= friction;
        point.pos += point.vel;
        spring *= tension;
        prev = Some(*point);
    }
}

/// Stroke one smoothed path through the chain's points.
///
/// Interior points act as quadratic control points with the curve passing
/// through the midpoints between neighbours; the final segment ends exactly
/// on the last point. Composite mode, style and width are the caller's.
pub fn draw_chain<S: DrawSurface + ?Sized>(chain: &SpringChain, surface: &mut S) {
    let pts = &chain.points;
    let n = pts.len();
    if n < 2 {
        return;
    }

    surface.begin_path();
    surface.move_to(pts[0].pos.x, pts[0].pos.y);
    for i in 1..n.saturating_sub(2) {
        let curr = pts[i].pos;
        let mid = (curr + pts[i + 1].pos) * 0.5;
        surface.quadratic_curve_to(curr.x, curr.y, mid.x, mid.y);
    }
    let ctrl = pts[n - 2].pos;
    let last = pts[n - 1].pos;
    surface.quadratic_curve_to(ctrl.x, ctrl.y, last.x, last.y);
    surface.stroke();
}
