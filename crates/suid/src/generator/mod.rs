mod atomic;
mod registry;

pub use atomic::*;
pub use registry::*;
