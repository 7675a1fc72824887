//! Earning records

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

/// Payment lifecycle state of an earning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// The earning has been calculated but not yet paid out.
    Calculated,
    /// The earning has been paid.
    Paid,
}

impl PaymentStatus {
    /// Returns the query-parameter value for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calculated => "calculated",
            Self::Paid => "paid",
        }
    }
}

/// An earning owed (or paid) to a grower for a consolidation period.
///
/// The earnings service uses snake_case JSON, unlike the captures API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Earning {
    /// Unique earning id.
    pub id: Uuid,
    /// Display name of the grower the earning belongs to.
    pub grower: String,
    /// Display name of the funding organization.
    pub funder: String,
    /// Amount owed, in the earning's currency.
    pub amount: Decimal,
    /// Currency code of the amount.
    #[serde(default)]
    pub currency: Option<String>,
    /// When the earning was calculated.
    pub calculated_at: DateTime<Utc>,
    /// Start of the consolidation period the earning covers.
    pub consolidation_period_start: DateTime<Utc>,
    /// End of the consolidation period the earning covers.
    pub consolidation_period_end: DateTime<Utc>,
    /// When the earning was paid, if it has been.
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    /// External confirmation id recorded when logging the payment.
    #[serde(default)]
    pub payment_confirmation_id: Option<String>,
    /// Current payment state.
    pub status: PaymentStatus,
}
