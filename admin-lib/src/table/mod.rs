//! Table state, fetch orchestration, and row formatting.
//!
//! The flow for one table: a state change on [`TableController`] produces a
//! [`FetchRequest`]; a [`TableSource`] performs the fetch; the result is
//! applied back (stale generations discarded); [`join_tags`] and [`Lookup`]
//! resolve foreign keys; [`format_capture_cell`] / [`format_earning_cell`]
//! turn each row into display cells.

pub(crate) mod column;
mod controller;
mod format;
mod join;
mod lookup;

pub use column::Column;
pub use column::NOT_TOKENIZED;
pub use column::TOKENIZED;
pub use column::capture_columns;
pub use column::date_string;
pub use column::earning_columns;
pub use controller::ApplyOutcome;
pub use controller::FetchRequest;
pub use controller::TableController;
pub use controller::TableSource;
pub use format::CellValue;
pub use format::LinkKind;
pub use format::MISSING_VALUE;
pub use format::format_capture_cell;
pub use format::format_earning_cell;
pub use join::TagSource;
pub use join::join_tags;
pub use lookup::Lookup;
