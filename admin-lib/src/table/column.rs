//! Column definitions for the capture and earnings tables
//!
//! The `{attr, label, renderer}` shape is shared with export collaborators
//! and must stay stable.

use crate::model::Capture;
use crate::model::Earning;

/// Display label for a tokenized capture.
pub const TOKENIZED: &str = "Tokenized";
/// Display label for a capture without a token.
pub const NOT_TOKENIZED: &str = "Not Tokenized";

/// One column of a record table.
pub struct Column<R> {
    /// Server-side attribute name; doubles as the sort key.
    pub attr: &'static str,
    /// Header label.
    pub label: &'static str,
    /// Whether the column may be used as the sort column.
    pub sortable: bool,
    /// Renderer for columns without a formatter special case.
    pub renderer: Option<fn(&R) -> String>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

fn date_time_string(value: &chrono::DateTime<chrono::Utc>) -> String {
    value.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Humanized date, e.g. `Nov 30, 2021`.
pub fn date_string(value: &chrono::DateTime<chrono::Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// The columns of the captures table.
pub fn capture_columns() -> Vec<Column<Capture>> {
    vec![
        Column {
            attr: "id",
            label: "Capture ID",
            sortable: true,
            renderer: None,
        },
        Column {
            attr: "planterId",
            label: "Grower ID",
            sortable: true,
            renderer: None,
        },
        Column {
            attr: "deviceIdentifier",
            label: "Device Identifier",
            sortable: true,
            renderer: Some(|capture| capture.device_identifier.clone().unwrap_or_default()),
        },
        Column {
            attr: "planterIdentifier",
            label: "Planter Identifier",
            sortable: true,
            renderer: Some(|capture| capture.planter_identifier.clone().unwrap_or_default()),
        },
        Column {
            attr: "verificationStatus",
            label: "Verification Status",
            sortable: false,
            renderer: None,
        },
        Column {
            attr: "speciesId",
            label: "Species",
            sortable: false,
            renderer: None,
        },
        Column {
            attr: "tokenId",
            label: "Token Status",
            sortable: true,
            renderer: Some(|capture| {
                if capture.token_id.is_some() {
                    TOKENIZED.to_string()
                } else {
                    NOT_TOKENIZED.to_string()
                }
            }),
        },
        Column {
            attr: "captureTags",
            label: "Capture Tags",
            sortable: false,
            renderer: None,
        },
        Column {
            attr: "timeCreated",
            label: "Created",
            sortable: true,
            renderer: Some(|capture| date_time_string(&capture.time_created)),
        },
    ]
}

/// The columns of the earnings table.
pub fn earning_columns() -> Vec<Column<Earning>> {
    vec![
        Column {
            attr: "grower",
            label: "Grower",
            sortable: true,
            renderer: Some(|earning| earning.grower.clone()),
        },
        Column {
            attr: "funder",
            label: "Funder",
            sortable: true,
            renderer: Some(|earning| earning.funder.clone()),
        },
        Column {
            attr: "amount",
            label: "Amount",
            sortable: true,
            renderer: Some(|earning| earning.amount.to_string()),
        },
        Column {
            attr: "calculated_at",
            label: "Effective Date",
            sortable: false,
            renderer: Some(|earning| date_string(&earning.calculated_at)),
        },
        Column {
            attr: "paid_at",
            label: "Payment Date",
            sortable: false,
            renderer: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_columns_mark_derived_columns_unsortable() {
        let columns = capture_columns();
        let sortable = |attr: &str| {
            columns
                .iter()
                .find(|column| column.attr == attr)
                .unwrap()
                .sortable
        };

        assert!(sortable("id"));
        assert!(!sortable("verificationStatus"));
        assert!(!sortable("speciesId"));
        assert!(!sortable("captureTags"));
    }
}
