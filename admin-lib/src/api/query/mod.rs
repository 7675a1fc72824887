//! Query state for the paginated list endpoints.
//!
//! Everything one fetch depends on lives in [`PageState`]: page index and
//! size, optional [`SortBy`], and a typed filter. Sorting and filtering are
//! delegated to the server as query parameters; nothing is re-sorted or
//! re-filtered client-side.

mod filter;
mod order;
mod page;

pub use filter::CaptureFilter;
pub use filter::DateRange;
pub use filter::EarningsFilter;
pub use filter::TableFilter;
pub use order::Direction;
pub use order::SortBy;
pub use page::DEFAULT_ROWS_PER_PAGE;
pub use page::Page;
pub use page::PageState;
pub use page::ROWS_PER_PAGE_OPTIONS;
