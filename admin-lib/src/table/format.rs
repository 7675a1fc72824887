//! Pure record-to-cell formatting

use std::fmt;

use super::Column;
use super::Lookup;
use super::column::date_string;
use crate::model::Capture;
use crate::model::Earning;
use crate::model::VerificationStatus;

/// Placeholder rendered for absent values, distinct from an empty string.
pub const MISSING_VALUE: &str = "--";

/// What an identity cell links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Link to the capture on the web map.
    Capture,
    /// Link to the grower on the web map.
    Grower,
}

/// A formatted table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// A cross-reference link rather than a raw value.
    Link {
        /// Target kind.
        kind: LinkKind,
        /// Id of the linked record.
        id: u64,
    },
    /// Plain text.
    Text(String),
    /// Absent value, rendered as [`MISSING_VALUE`].
    Missing,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link { id, .. } => write!(f, "{id}"),
            Self::Text(text) => f.write_str(text),
            Self::Missing => f.write_str(MISSING_VALUE),
        }
    }
}

/// Formats one cell of the captures table.
///
/// `tags` is the joined tag label list for this capture (empty when it has
/// none). Columns without a special case fall back to the column renderer,
/// or an empty string when there is none.
pub fn format_capture_cell(
    capture: &Capture,
    species_lookup: &Lookup,
    tags: &[String],
    column: &Column<Capture>,
) -> CellValue {
    match column.attr {
        "id" => CellValue::Link {
            kind: LinkKind::Capture,
            id: capture.id,
        },
        "planterId" => CellValue::Link {
            kind: LinkKind::Grower,
            id: capture.planter_id,
        },
        "speciesId" => match capture.species_id {
            None => CellValue::Missing,
            Some(id) => species_lookup
                .get(id)
                .map(|name| CellValue::Text(name.to_string()))
                .unwrap_or(CellValue::Missing),
        },
        "verificationStatus" => match (capture.active, capture.approved) {
            (Some(active), Some(approved)) => VerificationStatus::from_flags(active, approved)
                .map(|status| CellValue::Text(status.label().to_string()))
                .unwrap_or(CellValue::Missing),
            _ => CellValue::Missing,
        },
        "captureTags" => CellValue::Text(compose_capture_tags(capture, tags)),
        _ => fallback(capture, column),
    }
}

/// Formats one cell of the earnings table.
pub fn format_earning_cell(earning: &Earning, column: &Column<Earning>) -> CellValue {
    match column.attr {
        "paid_at" => earning
            .paid_at
            .map(|paid_at| CellValue::Text(date_string(&paid_at)))
            .unwrap_or(CellValue::Missing),
        _ => fallback(earning, column),
    }
}

fn fallback<R>(record: &R, column: &Column<R>) -> CellValue {
    match column.renderer {
        Some(renderer) => CellValue::Text(renderer(record)),
        None => CellValue::Text(String::new()),
    }
}

/// Concatenates the single-valued descriptive fields with the joined tag
/// list, dropping absent entries, separated by `", "`.
fn compose_capture_tags(capture: &Capture, tags: &[String]) -> String {
    [
        capture.age.as_deref(),
        capture.morphology.as_deref(),
        capture.capture_approval_tag.as_deref(),
        capture.rejection_reason.as_deref(),
    ]
    .into_iter()
    .flatten()
    .chain(tags.iter().map(String::as_str))
    .collect::<Vec<_>>()
    .join(", ")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;
    use crate::model::Species;
    use crate::table::capture_columns;
    use crate::table::column::NOT_TOKENIZED;
    use crate::table::column::TOKENIZED;

    fn capture() -> Capture {
        Capture {
            id: 42,
            planter_id: 7,
            device_identifier: Some("dev-1".to_string()),
            planter_identifier: None,
            species_id: None,
            token_id: None,
            active: None,
            approved: None,
            age: None,
            morphology: None,
            capture_approval_tag: None,
            rejection_reason: None,
            time_created: Utc.with_ymd_and_hms(2021, 11, 23, 9, 30, 0).unwrap(),
        }
    }

    fn column(attr: &str) -> Column<Capture> {
        capture_columns()
            .into_iter()
            .find(|column| column.attr == attr)
            .unwrap()
    }

    fn cell(capture: &Capture, species: &Lookup, tags: &[String], attr: &str) -> CellValue {
        format_capture_cell(capture, species, tags, &column(attr))
    }

    #[test]
    fn identity_columns_render_as_links() {
        let capture = capture();
        assert_eq!(
            cell(&capture, &Lookup::new(), &[], "id"),
            CellValue::Link {
                kind: LinkKind::Capture,
                id: 42
            }
        );
        assert_eq!(
            cell(&capture, &Lookup::new(), &[], "planterId"),
            CellValue::Link {
                kind: LinkKind::Grower,
                id: 7
            }
        );
    }

    #[test]
    fn absent_species_renders_placeholder_not_empty_string() {
        let lookup = Lookup::from_references(&[Species {
            id: 3,
            name: "Acacia".to_string(),
        }]);

        let mut capture = capture();
        assert_eq!(cell(&capture, &lookup, &[], "speciesId"), CellValue::Missing);
        assert_ne!(
            cell(&capture, &lookup, &[], "speciesId").to_string(),
            String::new()
        );

        capture.species_id = Some(3);
        assert_eq!(
            cell(&capture, &lookup, &[], "speciesId"),
            CellValue::Text("Acacia".to_string())
        );
    }

    #[test]
    fn verification_status_requires_both_flags() {
        let mut capture = capture();
        capture.approved = Some(true);
        assert_eq!(
            cell(&capture, &Lookup::new(), &[], "verificationStatus"),
            CellValue::Missing
        );

        capture.active = Some(true);
        assert_eq!(
            cell(&capture, &Lookup::new(), &[], "verificationStatus"),
            CellValue::Text("Approved".to_string())
        );

        capture.approved = Some(false);
        assert_eq!(
            cell(&capture, &Lookup::new(), &[], "verificationStatus"),
            CellValue::Text("Awaiting Verification".to_string())
        );

        capture.active = Some(false);
        assert_eq!(
            cell(&capture, &Lookup::new(), &[], "verificationStatus"),
            CellValue::Text("Rejected".to_string())
        );
    }

    #[test]
    fn tags_column_drops_absent_fields_and_keeps_order() {
        let mut capture = capture();
        capture.age = Some("Young".to_string());
        capture.morphology = None;
        capture.capture_approval_tag = Some("Good".to_string());
        capture.rejection_reason = None;

        let joined = vec!["Canopy".to_string()];
        assert_eq!(
            cell(&capture, &Lookup::new(), &joined, "captureTags"),
            CellValue::Text("Young, Good, Canopy".to_string())
        );
    }

    #[test]
    fn token_status_uses_fixed_labels() {
        let mut capture = capture();
        assert_eq!(
            cell(&capture, &Lookup::new(), &[], "tokenId"),
            CellValue::Text(NOT_TOKENIZED.to_string())
        );

        capture.token_id = Some(uuid::Uuid::new_v4());
        assert_eq!(
            cell(&capture, &Lookup::new(), &[], "tokenId"),
            CellValue::Text(TOKENIZED.to_string())
        );
    }

    #[test]
    fn plain_columns_use_the_renderer() {
        let capture = capture();
        assert_eq!(
            cell(&capture, &Lookup::new(), &[], "deviceIdentifier"),
            CellValue::Text("dev-1".to_string())
        );
        // Absent raw value renders as empty text, not the placeholder.
        assert_eq!(
            cell(&capture, &Lookup::new(), &[], "planterIdentifier"),
            CellValue::Text(String::new())
        );
    }

    #[test]
    fn earnings_paid_at_placeholder() {
        let earning: Earning = serde_json::from_value(serde_json::json!({
            "id": "0b8e0ddd-3f13-4e66-a697-64296a1dad21",
            "grower": "Joe Grower",
            "funder": "Green Fund",
            "amount": "12.50",
            "calculated_at": "2021-12-01T00:00:00Z",
            "consolidation_period_start": "2021-11-01T00:00:00Z",
            "consolidation_period_end": "2021-11-30T00:00:00Z",
            "status": "calculated"
        }))
        .unwrap();

        let columns = crate::table::earning_columns();
        let paid_at = columns.iter().find(|c| c.attr == "paid_at").unwrap();
        let effective = columns.iter().find(|c| c.attr == "calculated_at").unwrap();

        assert_eq!(format_earning_cell(&earning, paid_at), CellValue::Missing);
        assert_eq!(
            format_earning_cell(&earning, effective),
            CellValue::Text("Dec 1, 2021".to_string())
        );
    }
}
