//! Batch tag join for the current page of captures

use std::collections::HashMap;

use async_trait::async_trait;

use super::Lookup;
use crate::error::Error;
use crate::model::Capture;
use crate::model::CaptureTagAssociation;

/// Supplies tag associations for a batch of capture ids.
#[async_trait]
pub trait TagSource: Send + Sync {
    /// Fetches the associations for the given capture ids in one call.
    async fn tags_for(&self, capture_ids: &[u64]) -> Result<Vec<CaptureTagAssociation>, Error>;
}

/// Joins the tags of one page of captures into a per-capture label list.
///
/// Tag labels keep the order the associations came back in. An empty page
/// short-circuits to an empty map without touching the network; the batch
/// endpoint would interpret an empty id list as "all captures".
/// Associations pointing at tags missing from the lookup are dropped.
///
/// Re-run this whenever the page's captures or the tag lookup change, so
/// renamed tags propagate without a capture re-fetch.
pub async fn join_tags<S: TagSource + ?Sized>(
    source: &S,
    captures: &[Capture],
    tag_lookup: &Lookup,
) -> Result<HashMap<u64, Vec<String>>, Error> {
    if captures.is_empty() {
        return Ok(HashMap::new());
    }

    let ids: Vec<u64> = captures.iter().map(|capture| capture.id).collect();
    let associations = source.tags_for(&ids).await?;

    let mut joined: HashMap<u64, Vec<String>> = HashMap::new();
    for association in associations {
        if let Some(label) = tag_lookup.get(association.tag_id) {
            joined
                .entry(association.capture_id)
                .or_default()
                .push(label.to_string());
        }
    }
    Ok(joined)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::model::Tag;

    struct MockTagSource {
        associations: Vec<CaptureTagAssociation>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TagSource for MockTagSource {
        async fn tags_for(
            &self,
            _capture_ids: &[u64],
        ) -> Result<Vec<CaptureTagAssociation>, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.associations.clone())
        }
    }

    fn capture(id: u64) -> Capture {
        Capture {
            id,
            planter_id: 1,
            device_identifier: None,
            planter_identifier: None,
            species_id: None,
            token_id: None,
            active: None,
            approved: None,
            age: None,
            morphology: None,
            capture_approval_tag: None,
            rejection_reason: None,
            time_created: chrono::Utc::now(),
        }
    }

    fn tag_lookup() -> Lookup {
        Lookup::from_references(&[
            Tag {
                id: 10,
                tag_name: "Canopy".to_string(),
            },
            Tag {
                id: 11,
                tag_name: "Roadside".to_string(),
            },
        ])
    }

    #[tokio::test]
    async fn empty_page_short_circuits_without_network_call() {
        let source = MockTagSource {
            associations: vec![],
            calls: AtomicUsize::new(0),
        };

        let joined = join_tags(&source, &[], &tag_lookup()).await.unwrap();
        assert!(joined.is_empty());
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn groups_labels_by_capture_in_arrival_order() {
        let source = MockTagSource {
            associations: vec![
                CaptureTagAssociation {
                    capture_id: 1,
                    tag_id: 11,
                },
                CaptureTagAssociation {
                    capture_id: 2,
                    tag_id: 10,
                },
                CaptureTagAssociation {
                    capture_id: 1,
                    tag_id: 10,
                },
                // Unknown tag id, dropped from the join.
                CaptureTagAssociation {
                    capture_id: 2,
                    tag_id: 99,
                },
            ],
            calls: AtomicUsize::new(0),
        };

        let joined = join_tags(&source, &[capture(1), capture(2)], &tag_lookup())
            .await
            .unwrap();
        assert_eq!(joined[&1], vec!["Roadside".to_string(), "Canopy".to_string()]);
        assert_eq!(joined[&2], vec!["Canopy".to_string()]);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }
}
