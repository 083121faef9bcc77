mod decode;
mod suid;

pub use decode::*;
pub use suid::*;
