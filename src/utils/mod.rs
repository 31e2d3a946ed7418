mod errors;
pub use errors::*;
mod logger;
pub use logger::*;
mod utils;
pub use utils::*;
