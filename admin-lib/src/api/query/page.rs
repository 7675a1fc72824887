//! Pagination state and paginated results

use super::SortBy;
use super::TableFilter;

/// Page sizes the UI may request. The limit sent to the server is always
/// one of these, enforced here at the input boundary.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 5] = [25, 50, 100, 250, 500];

/// Page size used until the caller picks one.
pub const DEFAULT_ROWS_PER_PAGE: usize = 25;

/// The full set of parameters that determine one list fetch.
///
/// State is only mutated through the setters, which maintain two
/// invariants: the page index resets to 0 whenever the filter or the page
/// size changes, and the page size is always one of
/// [`ROWS_PER_PAGE_OPTIONS`].
#[derive(Debug, Clone, PartialEq)]
pub struct PageState<F> {
    page: usize,
    rows_per_page: usize,
    sort: Option<SortBy>,
    filter: F,
}

impl<F: TableFilter> PageState<F> {
    /// Creates the initial state: page 0, default page size, no sort.
    pub fn new(filter: F) -> Self {
        Self {
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            sort: None,
            filter,
        }
    }

    /// Current 0-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Current page size.
    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    /// Current sort, if any. The server defines the order when absent.
    pub fn sort(&self) -> Option<&SortBy> {
        self.sort.as_ref()
    }

    /// Current filter.
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Row offset of the current page.
    pub fn offset(&self) -> usize {
        self.page * self.rows_per_page
    }

    /// Moves to the given page.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changes the page size and resets to the first page.
    ///
    /// Requests outside [`ROWS_PER_PAGE_OPTIONS`] are clamped to the largest
    /// allowed size that does not exceed them (or the smallest size overall).
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = ROWS_PER_PAGE_OPTIONS
            .iter()
            .rev()
            .copied()
            .find(|option| *option <= rows_per_page)
            .unwrap_or(ROWS_PER_PAGE_OPTIONS[0]);
        self.page = 0;
    }

    /// Replaces the filter and resets to the first page.
    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
        self.page = 0;
    }

    /// Sets the sort.
    pub fn set_sort(&mut self, sort: SortBy) {
        self.sort = Some(sort);
    }

    /// Applies the header-click toggle to the given column attribute.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = Some(SortBy::toggled(self.sort.as_ref(), field));
    }

    /// Returns all query parameters for this state: `offset`, `limit`,
    /// `sort_by`/`order` when sorted, and the filter fields.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("offset".to_string(), self.offset().to_string()),
            ("limit".to_string(), self.rows_per_page.to_string()),
        ];
        if let Some(sort) = &self.sort {
            pairs.push(("sort_by".to_string(), sort.field.clone()));
            pairs.push(("order".to_string(), sort.direction.as_str().to_string()));
        }
        pairs.extend(self.filter.query_pairs());
        pairs
    }
}

impl<F: TableFilter + Default> Default for PageState<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

/// One page of list results, together with the size of the full
/// filtered set. Fully replaces the previous result on every fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    rows: Vec<R>,
    total_count: usize,
}

impl<R> Page<R> {
    /// Creates a page from fetched rows and the server-reported total.
    pub fn new(rows: Vec<R>, total_count: usize) -> Self {
        Self { rows, total_count }
    }

    /// Creates an empty page.
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total_count: 0,
        }
    }

    /// The rows of this page.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Consumes the page and returns its rows.
    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }

    /// Size of the full filtered set, independent of the page.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Number of rows in this page.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if this page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
