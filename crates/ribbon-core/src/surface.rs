//! Drawing seam between the simulation and whatever paints it.
//!
//! The web front-end implements [`DrawSurface`] over a canvas 2D context;
//! [`RecordingSurface`] keeps the calls in memory for headless use.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositeMode {
    SourceOver,
    /// Additive blending: overlapping strokes brighten instead of occluding.
    Lighter,
}

impl CompositeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CompositeMode::SourceOver => "source-over",
            CompositeMode::Lighter => "lighter",
        }
    }
}

pub trait DrawSurface {
    /// Backing size in pixels.
    fn size(&self) -> (u32, u32);
    fn set_size(&mut self, width: u32, height: u32);
    /// Clear the whole surface.
    fn clear(&mut self);
    fn set_composite(&mut self, mode: CompositeMode);
    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
    fn stroke(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Resize(u32, u32),
    Clear,
    Composite(CompositeMode),
    StrokeStyle(String),
    LineWidth(f64),
    BeginPath,
    MoveTo(f64, f64),
    QuadTo { cpx: f64, cpy: f64, x: f64, y: f64 },
    Stroke,
}

/// In-memory surface that logs every call.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn stroke_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == DrawOp::Stroke).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.ops.push(DrawOp::Resize(width, height));
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        self.ops.push(DrawOp::Composite(mode));
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.ops.push(DrawOp::StrokeStyle(style.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::LineWidth(width));
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo(x, y));
    }

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        self.ops.push(DrawOp::QuadTo { cpx, cpy, x, y });
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }
}
