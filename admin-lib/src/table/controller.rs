//! Table state and fetch orchestration

use async_trait::async_trait;

use super::Column;
use crate::api::query::Page;
use crate::api::query::PageState;
use crate::api::query::SortBy;
use crate::api::query::TableFilter;
use crate::error::Error;

/// Fetches one page of rows for a table.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Row type the source produces.
    type Row: Send;
    /// Filter type the source accepts.
    type Filter: TableFilter;

    /// Fetches the page described by the given state.
    async fn fetch(&self, state: &PageState<Self::Filter>) -> Result<Page<Self::Row>, Error>;
}

/// A snapshot handed to a fetcher: the state to fetch under, tagged with
/// the generation it was issued at.
#[derive(Debug, Clone)]
pub struct FetchRequest<F> {
    /// Generation the request was issued at.
    pub generation: u64,
    /// State snapshot to fetch with.
    pub state: PageState<F>,
}

/// What happened when a fetch result was handed back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The result matched the current generation and was installed.
    Applied,
    /// The state changed after the request was issued; the result was
    /// discarded.
    Stale,
}

/// Owns the pagination, sort, and filter state of one table, plus the
/// latest fetched rows.
///
/// Setters are synchronous state updates; they never fetch. Every setter
/// bumps a monotonically increasing generation and marks a fetch pending.
/// The driving loop takes the pending [`FetchRequest`], performs the I/O,
/// and hands the result back through [`apply`](Self::apply), which discards
/// it if the generation moved on in the meantime. That guarantees the table
/// never shows rows belonging to anything but the current state.
///
/// # Example
///
/// ```ignore
/// let mut table = TableController::new(CaptureFilter::default());
/// let source = CaptureSource::new(client);
///
/// table.refresh(&source).await;          // initial page
/// table.set_page(2);
/// table.refresh(&source).await;          // page 3
/// ```
pub struct TableController<R, F> {
    state: PageState<F>,
    generation: u64,
    pending: bool,
    rows: Vec<R>,
    total_count: usize,
    loading: bool,
}

impl<R: Send, F: TableFilter> TableController<R, F> {
    /// Creates a controller with default page state and an initial fetch
    /// already pending.
    pub fn new(filter: F) -> Self {
        Self {
            state: PageState::new(filter),
            generation: 0,
            pending: true,
            rows: Vec::new(),
            total_count: 0,
            loading: true,
        }
    }

    /// Current page state.
    pub fn state(&self) -> &PageState<F> {
        &self.state
    }

    /// Rows of the most recently applied fetch.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Size of the full filtered set reported by the last applied fetch.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns `true` while a fetch is pending or in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn touch(&mut self) {
        self.generation += 1;
        self.pending = true;
        self.loading = true;
    }

    /// Moves to the given page.
    pub fn set_page(&mut self, page: usize) {
        self.state.set_page(page);
        self.touch();
    }

    /// Changes the page size (clamped to the allowed options) and resets to
    /// the first page.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.state.set_rows_per_page(rows_per_page);
        self.touch();
    }

    /// Replaces the filter and resets to the first page.
    pub fn set_filter(&mut self, filter: F) {
        self.state.set_filter(filter);
        self.touch();
    }

    /// Applies a header click on the given column.
    ///
    /// Returns `false` without touching the state when the column is not
    /// sortable.
    pub fn toggle_sort(&mut self, column: &Column<R>) -> bool {
        if !column.sortable {
            return false;
        }
        self.state.toggle_sort(column.attr);
        self.touch();
        true
    }

    /// Sets an explicit sort.
    pub fn set_sort(&mut self, sort: SortBy) {
        self.state.set_sort(sort);
        self.touch();
    }

    /// Takes the pending fetch request, if any.
    ///
    /// Consecutive state changes coalesce into a single request carrying
    /// the latest state and generation.
    pub fn take_request(&mut self) -> Option<FetchRequest<F>> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        Some(FetchRequest {
            generation: self.generation,
            state: self.state.clone(),
        })
    }

    /// Hands the result of a fetch back to the controller.
    ///
    /// A result issued under an older generation is discarded. A fetch
    /// error is logged and surfaces as an empty table; stale rows from a
    /// previous state are never kept.
    pub fn apply(
        &mut self,
        generation: u64,
        result: Result<Page<R>, Error>,
    ) -> ApplyOutcome {
        if generation != self.generation {
            log::debug!(
                "discarding stale table response (generation {generation}, current {})",
                self.generation
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(page) => {
                self.total_count = page.total_count();
                self.rows = page.into_rows();
            }
            Err(err) => {
                log::error!("table fetch failed: {err}");
                self.rows.clear();
                self.total_count = 0;
            }
        }
        self.loading = false;
        ApplyOutcome::Applied
    }

    /// Runs one pending fetch against the source and applies the result.
    ///
    /// Returns `None` when no fetch was pending. For sequential drivers
    /// this is all that is needed; event loops with overlapping fetches use
    /// [`take_request`](Self::take_request) and [`apply`](Self::apply)
    /// directly.
    pub async fn refresh<S>(&mut self, source: &S) -> Option<ApplyOutcome>
    where
        S: TableSource<Row = R, Filter = F>,
    {
        let request = self.take_request()?;
        let result = source.fetch(&request.state).await;
        Some(self.apply(request.generation, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::query::EarningsFilter;
    use crate::error::ApiError;
    use crate::model::Earning;
    use crate::table::earning_columns;

    fn earning(grower: &str) -> Earning {
        serde_json::from_value(serde_json::json!({
            "id": "0b8e0ddd-3f13-4e66-a697-64296a1dad21",
            "grower": grower,
            "funder": "Green Fund",
            "amount": "1.00",
            "calculated_at": "2021-12-01T00:00:00Z",
            "consolidation_period_start": "2021-11-01T00:00:00Z",
            "consolidation_period_end": "2021-11-30T00:00:00Z",
            "status": "calculated"
        }))
        .unwrap()
    }

    fn controller() -> TableController<Earning, EarningsFilter> {
        TableController::new(EarningsFilter::default())
    }

    #[test]
    fn initial_fetch_is_pending() {
        let mut table = controller();
        assert!(table.is_loading());

        let request = table.take_request().unwrap();
        assert_eq!(request.state.page(), 0);
        assert!(table.take_request().is_none());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut table = controller();
        let first = table.take_request().unwrap();

        // State changes while the first fetch is in flight.
        table.set_filter(EarningsFilter {
            grower: Some("Joe".to_string()),
            ..Default::default()
        });

        let outcome = table.apply(first.generation, Ok(Page::new(vec![earning("Old")], 1)));
        assert_eq!(outcome, ApplyOutcome::Stale);
        assert!(table.rows().is_empty());
        assert!(table.is_loading());

        let second = table.take_request().unwrap();
        let outcome = table.apply(second.generation, Ok(Page::new(vec![earning("Joe")], 1)));
        assert_eq!(outcome, ApplyOutcome::Applied);
        assert_eq!(table.rows()[0].grower, "Joe");
        assert!(!table.is_loading());
    }

    #[test]
    fn fetch_error_surfaces_as_empty_table() {
        let mut table = controller();
        let request = table.take_request().unwrap();
        table.apply(request.generation, Ok(Page::new(vec![earning("Joe")], 40)));
        assert_eq!(table.total_count(), 40);

        table.set_page(1);
        let request = table.take_request().unwrap();
        let outcome = table.apply(
            request.generation,
            Err(ApiError::http(503, "unavailable").into()),
        );
        assert_eq!(outcome, ApplyOutcome::Applied);
        assert!(table.rows().is_empty());
        assert_eq!(table.total_count(), 0);
        assert!(!table.is_loading());
    }

    #[test]
    fn consecutive_changes_coalesce_into_one_request() {
        let mut table = controller();
        table.take_request();

        table.set_page(3);
        table.set_rows_per_page(100);
        table.set_page(1);

        let request = table.take_request().unwrap();
        assert_eq!(request.state.page(), 1);
        assert_eq!(request.state.rows_per_page(), 100);
        assert!(table.take_request().is_none());
    }

    #[test]
    fn toggle_sort_rejects_unsortable_columns() {
        let columns = earning_columns();
        let effective_date = columns
            .iter()
            .find(|column| column.attr == "calculated_at")
            .unwrap();
        let amount = columns.iter().find(|column| column.attr == "amount").unwrap();

        let mut table: TableController<Earning, EarningsFilter> = controller();
        assert!(!table.toggle_sort(effective_date));
        assert!(table.state().sort().is_none());

        assert!(table.toggle_sort(amount));
        assert_eq!(table.state().sort(), Some(&SortBy::asc("amount")));
        assert!(table.toggle_sort(amount));
        assert_eq!(table.state().sort(), Some(&SortBy::desc("amount")));
    }

    struct StubSource {
        rows: Vec<Earning>,
    }

    #[async_trait]
    impl TableSource for StubSource {
        type Row = Earning;
        type Filter = EarningsFilter;

        async fn fetch(
            &self,
            _state: &PageState<EarningsFilter>,
        ) -> Result<Page<Earning>, Error> {
            Ok(Page::new(self.rows.clone(), self.rows.len()))
        }
    }

    #[tokio::test]
    async fn refresh_runs_the_pending_fetch() {
        let source = StubSource {
            rows: vec![earning("Joe")],
        };
        let mut table = controller();

        assert_eq!(table.refresh(&source).await, Some(ApplyOutcome::Applied));
        assert_eq!(table.rows().len(), 1);
        assert!(!table.is_loading());

        // Nothing pending until the state changes again.
        assert_eq!(table.refresh(&source).await, None);
    }
}
