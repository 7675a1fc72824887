//! Sort ordering for list queries

/// Sort direction for ordering results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the query-parameter value for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// The column and direction a list query is sorted by.
///
/// # Example
///
/// ```
/// use admin_lib::api::query::{Direction, SortBy};
///
/// let sort = SortBy::asc("grower");
/// let sort = SortBy::toggled(Some(&sort), "grower");
/// assert_eq!(sort.direction, Direction::Desc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortBy {
    /// Server-side attribute name to sort on.
    pub field: String,
    /// Sort direction.
    pub direction: Direction,
}

impl SortBy {
    /// Creates an ascending sort on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending sort on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }

    /// Computes the sort that results from clicking a column header.
    ///
    /// Clicking the already-active ascending column flips it to descending;
    /// clicking anything else sorts that column ascending.
    pub fn toggled(current: Option<&SortBy>, field: &str) -> Self {
        match current {
            Some(sort) if sort.field == field && sort.direction == Direction::Asc => {
                Self::desc(field)
            }
            _ => Self::asc(field),
        }
    }
}
