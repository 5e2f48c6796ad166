// Ribbon tuning constants. `Params::default()` is built from these.

// Pool layout
pub const TRAILS: usize = 80; // chains per pool
pub const CHAIN_SIZE: usize = 50; // points per chain
pub const MIN_CHAIN_LEN: usize = 2; // head plus one tail point

// Chain physics
pub const FRICTION: f64 = 0.5; // velocity kept per frame
pub const FRICTION_JITTER: f64 = 0.01; // centred per-chain friction offset range
pub const DAMPENING: f64 = 0.025; // share of predecessor velocity carried down the chain
pub const TENSION: f64 = 0.99; // spring decay per step away from the head

// Spring constants across the pool: base + i / trails * spread, then jittered
pub const SPRING_BASE: f64 = 0.45;
pub const SPRING_SPREAD: f64 = 0.025;
pub const SPRING_JITTER: f64 = 0.1;

// Hue oscillator
pub const WAVE_FREQUENCY: f64 = 0.0015; // radians per frame
pub const WAVE_AMPLITUDE: f64 = 85.0;
pub const WAVE_OFFSET: f64 = 285.0;

// Stroke
pub const LINE_WIDTH: f64 = 10.0;
pub const STROKE_ALPHA: f64 = 0.025; // low so overlapping strokes build a glow

// Canvas sizing
pub const CANVAS_MARGIN: u32 = 20; // subtracted from viewport width

// Debug frame statistics
pub const STATS_INTERVAL_FRAMES: u64 = 300;
