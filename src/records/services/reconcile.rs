//! Merges draft edits into the baseline record set.

use crate::records::domain::{DraftEdit, Record};
use std::collections::HashMap;

/// Result of reconciling drafts against a baseline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    changed: Vec<Record>,
    snapshot: Vec<Record>,
}

impl Reconciliation {
    /// Returns the merged records that carry edits, in baseline order.
    #[must_use]
    pub fn changed(&self) -> &[Record] {
        &self.changed
    }

    /// Returns the full baseline with edits applied, in baseline order.
    #[must_use]
    pub fn snapshot(&self) -> &[Record] {
        &self.snapshot
    }

    /// Returns `true` when there is nothing to deploy.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.changed.is_empty()
    }

    /// Splits the reconciliation into `(changed, snapshot)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Record>, Vec<Record>) {
        (self.changed, self.snapshot)
    }
}

/// Reconciles draft edits against the authoritative record list.
///
/// Drafts are indexed by developer name with the last draft for a name
/// winning. Each baseline record with a matching draft is shallow-merged and
/// reported in both `changed` and `snapshot`; other records pass through to
/// `snapshot` untouched. Drafts without a developer name, or whose name is
/// not in the baseline, are dropped. Edits never add records.
#[must_use]
pub fn reconcile(baseline: &[Record], drafts: &[DraftEdit]) -> Reconciliation {
    if drafts.is_empty() {
        return Reconciliation {
            changed: Vec::new(),
            snapshot: baseline.to_vec(),
        };
    }

    let by_name: HashMap<&str, &DraftEdit> = drafts
        .iter()
        .filter_map(|draft| draft.developer_name().map(|name| (name, draft)))
        .collect();

    let mut changed = Vec::new();
    let mut snapshot = Vec::with_capacity(baseline.len());
    for record in baseline {
        match by_name.get(record.developer_name().as_str()) {
            Some(draft) => {
                let merged = record.merged_with(draft);
                changed.push(merged.clone());
                snapshot.push(merged);
            }
            None => snapshot.push(record.clone()),
        }
    }

    Reconciliation { changed, snapshot }
}
