//! REST endpoint operations

mod captures;
mod earnings;
mod reference;
pub mod query;

pub use captures::*;
pub use earnings::*;
