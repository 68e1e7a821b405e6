mod base;
mod creation;
mod resize;

pub use base::*;
pub use creation::*;
pub use resize::*;
