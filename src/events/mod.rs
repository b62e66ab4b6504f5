pub mod pointer;
pub mod touch;

pub use pointer::*;
pub use touch::*;
