use crate::params::WaveParams;
use rand::Rng;
use std::f64::consts::TAU;

/// Sine oscillator driving the stroke hue.
///
/// Each `advance` steps the phase by `frequency` and returns
/// `offset + amplitude * sin(phase)`. At the default settings one full hue
/// cycle takes roughly 70 seconds at 60 frames per second.
#[derive(Clone, Debug, PartialEq)]
pub struct HueOscillator {
    phase: f64,
    frequency: f64,
    amplitude: f64,
    offset: f64,
}

impl HueOscillator {
    pub fn new(params: WaveParams, phase: f64) -> Self {
        Self {
            phase,
            frequency: params.frequency,
            amplitude: params.amplitude,
            offset: params.offset,
        }
    }

    /// Start somewhere uniformly random on the cycle so every mount gets a
    /// different opening colour.
    pub fn with_random_phase<R: Rng + ?Sized>(params: WaveParams, rng: &mut R) -> Self {
        Self::new(params, rng.gen::<f64>() * TAU)
    }

    pub fn advance(&mut self) -> f64 {
        self.phase += self.frequency;
        self.value()
    }

    /// Current output without stepping the phase.
    pub fn value(&self) -> f64 {
        self.offset + self.amplitude * self.phase.sin()
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Lowest and highest hue the oscillator can produce.
    pub fn bounds(&self) -> (f64, f64) {
        let a = self.amplitude.abs();
        (self.offset - a, self.offset + a)
    }
}

/// Canvas colour string for a fully saturated, mid-lightness hue.
#[inline]
pub fn hsla(hue: f64, alpha: f64) -> String {
    format!("hsla({},100%,50%,{})", hue.round(), alpha)
}
