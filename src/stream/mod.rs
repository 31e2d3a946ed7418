mod scaling;
pub use scaling::*;
mod source;
pub use source::*;
mod visualizer;
pub use visualizer::*;
mod driver;
pub use driver::*;
