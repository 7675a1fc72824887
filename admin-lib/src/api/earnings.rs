//! Earnings list endpoint

use async_trait::async_trait;
use serde::Deserialize;

use crate::AdminClient;
use crate::api::query::EarningsFilter;
use crate::api::query::Page;
use crate::api::query::PageState;
use crate::error::Error;
use crate::model::Earning;
use crate::table::TableSource;

#[derive(Debug, Deserialize)]
struct ListEarningsResponse {
    earnings: Vec<Earning>,
    #[serde(rename = "totalCount")]
    total_count: usize,
}

impl AdminClient {
    /// Fetches one page of earnings for the given page state.
    pub async fn list_earnings(
        &self,
        state: &PageState<EarningsFilter>,
    ) -> Result<Page<Earning>, Error> {
        let response: ListEarningsResponse =
            self.get_json("earnings", &state.query_pairs()).await?;
        Ok(Page::new(response.earnings, response.total_count))
    }
}

/// [`TableSource`] over the earnings list endpoint.
#[derive(Clone)]
pub struct EarningsSource {
    client: AdminClient,
}

impl EarningsSource {
    /// Creates a source backed by the given client.
    pub fn new(client: AdminClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TableSource for EarningsSource {
    type Row = Earning;
    type Filter = EarningsFilter;

    async fn fetch(&self, state: &PageState<EarningsFilter>) -> Result<Page<Earning>, Error> {
        self.client.list_earnings(state).await
    }
}
