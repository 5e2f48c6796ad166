use crate::chain::{draw_chain, update_chain, Point, SpringChain};
use crate::params::Params;
use crate::surface::DrawSurface;
use glam::DVec2;
use rand::Rng;

/// Fixed set of spring chains chasing the same target.
///
/// Chain `i` gets spring constant `spring_base + i / trails * spring_spread`
/// before jitter, so the strands fan out into a ribbon.
#[derive(Clone, Debug, Default)]
pub struct ChainPool {
    chains: Vec<SpringChain>,
}

impl ChainPool {
    pub fn new<R: Rng + ?Sized>(params: &Params, origin: DVec2, rng: &mut R) -> Self {
        let count = params.trails;
        let chains = (0..count)
            .map(|i| {
                let spring = params.spring_base + (i as f64 / count as f64) * params.spring_spread;
                SpringChain::jittered(params, origin, spring, rng)
            })
            .collect();
        Self { chains }
    }

    pub fn update(&mut self, target: DVec2) {
        for chain in &mut self.chains {
            update_chain(chain, target);
        }
    }

    /// Paint chains in construction order; later chains land on top.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for chain in &self.chains {
            draw_chain(chain, surface);
        }
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn chains(&self) -> &[SpringChain] {
        &self.chains
    }

    pub fn heads(&self) -> impl Iterator<Item = &Point> + '_ {
        self.chains.iter().map(|c| c.head())
    }
}
