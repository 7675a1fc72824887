//! Typed records returned by the admin APIs

mod capture;
mod earning;
mod reference;

pub use capture::*;
pub use earning::*;
pub use reference::*;
