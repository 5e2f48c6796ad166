pub mod animator;
pub mod chain;
pub mod constants;
pub mod params;
pub mod pointer;
pub mod pool;
pub mod schedule;
pub mod stats;
pub mod surface;
pub mod wave;

pub use animator::*;
pub use chain::*;
pub use params::*;
pub use pointer::*;
pub use pool::*;
pub use schedule::*;
pub use surface::*;
pub use wave::*;
