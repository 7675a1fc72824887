//! Capture records and their verification state

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

/// A tree capture submitted by a grower.
///
/// Captures come back from the list endpoint in camelCase JSON. Most
/// descriptive fields are nullable server-side, so they deserialize as
/// `Option` here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capture {
    /// Unique capture id.
    pub id: u64,
    /// Id of the grower who submitted the capture.
    pub planter_id: u64,
    /// Identifier of the device the capture was taken on.
    #[serde(default)]
    pub device_identifier: Option<String>,
    /// Grower-supplied identifier (usually a phone number or email).
    #[serde(default)]
    pub planter_identifier: Option<String>,
    /// Foreign key into the species reference collection.
    #[serde(default)]
    pub species_id: Option<u64>,
    /// Token id, present once the capture has been tokenized.
    #[serde(default)]
    pub token_id: Option<Uuid>,
    /// Whether the capture is still part of the active verification flow.
    #[serde(default)]
    pub active: Option<bool>,
    /// Whether the capture has been approved.
    #[serde(default)]
    pub approved: Option<bool>,
    /// Estimated tree age class.
    #[serde(default)]
    pub age: Option<String>,
    /// Morphology note recorded during verification.
    #[serde(default)]
    pub morphology: Option<String>,
    /// Tag applied at approval time.
    #[serde(default)]
    pub capture_approval_tag: Option<String>,
    /// Reason the capture was rejected, if it was.
    #[serde(default)]
    pub rejection_reason: Option<String>,
    /// When the capture was taken.
    pub time_created: DateTime<Utc>,
}

/// Association between a capture and a tag from the tag reference collection.
///
/// The server still calls the owning capture a "tree" in this payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CaptureTagAssociation {
    /// Id of the capture the tag is attached to.
    #[serde(rename = "treeId")]
    pub capture_id: u64,
    /// Id of the attached tag.
    #[serde(rename = "tagId")]
    pub tag_id: u64,
}

/// Verification outcome derived from the `active` and `approved` flags.
///
/// The `active=false, approved=true` combination does not occur in the
/// verification flow and has no status; callers render a placeholder for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStatus {
    /// Capture has been approved.
    Approved,
    /// Capture is still waiting for a verification decision.
    AwaitingVerification,
    /// Capture has been rejected.
    Rejected,
}

impl VerificationStatus {
    /// Derives the status from the two verification flags.
    pub fn from_flags(active: bool, approved: bool) -> Option<Self> {
        match (active, approved) {
            (true, true) => Some(Self::Approved),
            (true, false) => Some(Self::AwaitingVerification),
            (false, false) => Some(Self::Rejected),
            (false, true) => None,
        }
    }

    /// Returns the display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::AwaitingVerification => "Awaiting Verification",
            Self::Rejected => "Rejected",
        }
    }
}
