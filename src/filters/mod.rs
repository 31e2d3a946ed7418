mod filter;
pub use filter::*;
mod lowpass;
pub use lowpass::*;
mod cascade;
pub use cascade::*;
