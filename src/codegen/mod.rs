pub mod escape;
pub mod target;

pub use escape::*;
pub use target::*;
