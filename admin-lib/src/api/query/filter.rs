//! Filter types for the capture and earnings list queries
//!
//! Filters are modeled as structs of known, explicitly typed fields rather
//! than open maps; every set field becomes one or more query parameters.

use chrono::NaiveDate;

use crate::model::PaymentStatus;
use crate::model::VerificationStatus;

/// A filter that can be serialized into list-query parameters.
pub trait TableFilter: Clone + Send + Sync {
    /// Returns the query parameters for the currently set filter fields.
    fn query_pairs(&self) -> Vec<(String, String)>;
}

/// An inclusive date range filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day of the range.
    pub start: NaiveDate,
    /// Last day of the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns the human-readable description shown while the range is active,
    /// e.g. `Nov 1, 2021 - Nov 30, 2021`.
    pub fn describe(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%b %-d, %Y"),
            self.end.format("%b %-d, %Y")
        )
    }

    fn push_pairs(&self, pairs: &mut Vec<(String, String)>) {
        pairs.push(("start_date".to_string(), self.start.format("%Y-%m-%d").to_string()));
        pairs.push(("end_date".to_string(), self.end.format("%Y-%m-%d").to_string()));
    }
}

/// Filter fields accepted by the captures list endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaptureFilter {
    /// Restrict to a single capture id.
    pub capture_id: Option<u64>,
    /// Restrict to captures by one grower.
    pub planter_id: Option<u64>,
    /// Restrict to captures taken on one device.
    pub device_identifier: Option<String>,
    /// Restrict to one species.
    pub species_id: Option<u64>,
    /// Restrict to captures carrying one tag.
    pub tag_id: Option<u64>,
    /// Restrict to a creation-date range.
    pub created_range: Option<DateRange>,
    /// Restrict to one verification outcome.
    pub status: Option<VerificationStatus>,
}

impl TableFilter for CaptureFilter {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.capture_id {
            pairs.push(("id".to_string(), id.to_string()));
        }
        if let Some(id) = self.planter_id {
            pairs.push(("planterId".to_string(), id.to_string()));
        }
        if let Some(device) = &self.device_identifier {
            pairs.push(("deviceIdentifier".to_string(), device.clone()));
        }
        if let Some(id) = self.species_id {
            pairs.push(("speciesId".to_string(), id.to_string()));
        }
        if let Some(id) = self.tag_id {
            pairs.push(("tagId".to_string(), id.to_string()));
        }
        if let Some(range) = &self.created_range {
            range.push_pairs(&mut pairs);
        }
        if let Some(status) = self.status {
            // The server filters on the underlying flag pair, not the label.
            let (active, approved) = match status {
                VerificationStatus::Approved => (true, true),
                VerificationStatus::AwaitingVerification => (true, false),
                VerificationStatus::Rejected => (false, false),
            };
            pairs.push(("active".to_string(), active.to_string()));
            pairs.push(("approved".to_string(), approved.to_string()));
        }
        pairs
    }
}

/// Filter fields accepted by the earnings list endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EarningsFilter {
    /// Match on grower display name.
    pub grower: Option<String>,
    /// Match on funder display name.
    pub funder: Option<String>,
    /// Restrict to one payment state.
    pub status: Option<PaymentStatus>,
    /// Restrict to earnings calculated within a date range.
    pub effective_range: Option<DateRange>,
}

impl TableFilter for EarningsFilter {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(grower) = &self.grower {
            pairs.push(("grower".to_string(), grower.clone()));
        }
        if let Some(funder) = &self.funder {
            pairs.push(("funder".to_string(), funder.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(range) = &self.effective_range {
            range.push_pairs(&mut pairs);
        }
        pairs
    }
}
