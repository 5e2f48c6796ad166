//! Simulation parameters and per-canvas overrides.
//!
//! Defaults come from `constants.rs`. A host may override individual fields
//! with string key/value pairs (the web front-end reads them from
//! `data-ribbon-*` attributes), which are parsed and range-checked here.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("unknown parameter `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("`{key}` out of range: {reason}")]
    OutOfRange { key: &'static str, reason: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    pub frequency: f64,
    pub amplitude: f64,
    pub offset: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            frequency: WAVE_FREQUENCY,
            amplitude: WAVE_AMPLITUDE,
            offset: WAVE_OFFSET,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub trails: usize,
    pub size: usize,
    pub friction: f64,
    pub friction_jitter: f64,
    pub dampening: f64,
    pub tension: f64,
    pub spring_base: f64,
    pub spring_spread: f64,
    pub spring_jitter: f64,
    pub line_width: f64,
    pub stroke_alpha: f64,
    pub canvas_margin: u32,
    pub wave: WaveParams,
    pub debug: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            trails: TRAILS,
            size: CHAIN_SIZE,
            friction: FRICTION,
            friction_jitter: FRICTION_JITTER,
            dampening: DAMPENING,
            tension: TENSION,
            spring_base: SPRING_BASE,
            spring_spread: SPRING_SPREAD,
            spring_jitter: SPRING_JITTER,
            line_width: LINE_WIDTH,
            stroke_alpha: STROKE_ALPHA,
            canvas_margin: CANVAS_MARGIN,
            wave: WaveParams::default(),
            debug: false,
        }
    }
}

impl Params {
    /// Check the ranges the physics relies on to stay bounded.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.size < MIN_CHAIN_LEN {
            return Err(ParamsError::OutOfRange {
                key: "size",
                reason: "a chain needs at least two points",
            });
        }
        let max_friction = self.friction + self.friction_jitter.abs() * 0.5;
        let min_friction = self.friction - self.friction_jitter.abs() * 0.5;
        if !(min_friction > 0.0 && max_friction < 1.0) {
            return Err(ParamsError::OutOfRange {
                key: "friction",
                reason: "jittered friction must stay inside (0, 1)",
            });
        }
        if !(self.tension > 0.0 && self.tension <= 1.0) {
            return Err(ParamsError::OutOfRange {
                key: "tension",
                reason: "must be in (0, 1]",
            });
        }
        if !(0.0..1.0).contains(&self.dampening) {
            return Err(ParamsError::OutOfRange {
                key: "dampening",
                reason: "must be in [0, 1)",
            });
        }
        if self.spring_base - self.spring_jitter.abs() * 0.5 <= 0.0 {
            return Err(ParamsError::OutOfRange {
                key: "spring",
                reason: "jittered spring constant must stay positive",
            });
        }
        if !(0.0..=1.0).contains(&self.stroke_alpha) {
            return Err(ParamsError::OutOfRange {
                key: "alpha",
                reason: "must be in [0, 1]",
            });
        }
        if !(self.line_width > 0.0) {
            return Err(ParamsError::OutOfRange {
                key: "line-width",
                reason: "must be positive",
            });
        }
        let w = &self.wave;
        if !(w.frequency.is_finite() && w.amplitude.is_finite() && w.offset.is_finite()) {
            return Err(ParamsError::OutOfRange {
                key: "wave",
                reason: "oscillator settings must be finite",
            });
        }
        Ok(())
    }

    /// Apply string overrides on top of `self`, then validate the result.
    ///
    /// Keys use the attribute spelling (`trails`, `line-width`,
    /// `wave-frequency`, ...). On error `self` is left untouched.
    pub fn apply_overrides<'a, I>(&mut self, overrides: I) -> Result<(), ParamsError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut next = self.clone();
        for (key, value) in overrides {
            next.set(key.trim(), value.trim())?;
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ParamsError> {
        match key {
            "trails" => self.trails = parse(key, value)?,
            "size" => self.size = parse(key, value)?,
            "friction" => self.friction = parse(key, value)?,
            "friction-jitter" => self.friction_jitter = parse(key, value)?,
            "dampening" => self.dampening = parse(key, value)?,
            "tension" => self.tension = parse(key, value)?,
            "spring" => self.spring_base = parse(key, value)?,
            "spring-spread" => self.spring_spread = parse(key, value)?,
            "spring-jitter" => self.spring_jitter = parse(key, value)?,
            "line-width" => self.line_width = parse(key, value)?,
            "alpha" => self.stroke_alpha = parse(key, value)?,
            "margin" => self.canvas_margin = parse(key, value)?,
            "wave-frequency" => self.wave.frequency = parse(key, value)?,
            "wave-amplitude" => self.wave.amplitude = parse(key, value)?,
            "wave-offset" => self.wave.offset = parse(key, value)?,
            // a bare `data-ribbon-debug` attribute has an empty value
            "debug" => self.debug = value.is_empty() || parse::<bool>(key, value)?,
            _ => return Err(ParamsError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ParamsError> {
    value.parse().map_err(|_| ParamsError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
