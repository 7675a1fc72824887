//! Captures list endpoint and tag batch lookup

use async_trait::async_trait;
use serde::Deserialize;

use crate::AdminClient;
use crate::api::query::CaptureFilter;
use crate::api::query::Page;
use crate::api::query::PageState;
use crate::error::Error;
use crate::model::Capture;
use crate::model::CaptureTagAssociation;
use crate::table::TableSource;
use crate::table::TagSource;

#[derive(Debug, Deserialize)]
struct ListCapturesResponse {
    captures: Vec<Capture>,
    total: usize,
}

impl AdminClient {
    /// Fetches one page of captures for the given page state.
    pub async fn list_captures(
        &self,
        state: &PageState<CaptureFilter>,
    ) -> Result<Page<Capture>, Error> {
        let response: ListCapturesResponse =
            self.get_json("captures", &state.query_pairs()).await?;
        Ok(Page::new(response.captures, response.total))
    }

    /// Fetches the tag associations for a batch of capture ids in one call.
    ///
    /// Callers must not pass an empty id list; the server treats it as an
    /// unconstrained query. [`crate::table::join_tags`] guards for that.
    pub async fn capture_tags(
        &self,
        capture_ids: &[u64],
    ) -> Result<Vec<CaptureTagAssociation>, Error> {
        self.post_json(
            "capture_tags/batch",
            &serde_json::json!({ "captureIds": capture_ids }),
        )
        .await
    }
}

/// [`TableSource`] over the captures list endpoint.
#[derive(Clone)]
pub struct CaptureSource {
    client: AdminClient,
}

impl CaptureSource {
    /// Creates a source backed by the given client.
    pub fn new(client: AdminClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TableSource for CaptureSource {
    type Row = Capture;
    type Filter = CaptureFilter;

    async fn fetch(&self, state: &PageState<CaptureFilter>) -> Result<Page<Capture>, Error> {
        self.client.list_captures(state).await
    }
}

#[async_trait]
impl TagSource for CaptureSource {
    async fn tags_for(&self, capture_ids: &[u64]) -> Result<Vec<CaptureTagAssociation>, Error> {
        self.client.capture_tags(capture_ids).await
    }
}
