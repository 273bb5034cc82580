//! Label → count views over categorical columns.
//!
//! Ordering is descending count; equal counts keep ascending key order
//! (label bytes for status columns, store number for stores, with
//! `Unknown` after every real store).

use std::collections::BTreeMap;

use crate::models::{StatusField, StatusRecord};

use super::resolver::ResolvedView;
use super::types::Distribution;

/// Bucket for rows whose value is missing.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Counts keys and ranks them by descending count.
fn ranked_counts<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut ranked: Vec<(K, usize)> = counts.into_iter().collect();
    // Stable: ties stay in ascending key order from the BTreeMap.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Distribution of `status` or `recent_status` across the resolved view.
/// Patients with no value are counted under [`UNKNOWN_LABEL`].
pub fn distribution(view: &ResolvedView, field: StatusField) -> Distribution {
    let ranked = ranked_counts(
        view.iter()
            .map(|record| record.field(field).unwrap_or(UNKNOWN_LABEL)),
    );

    Distribution::from_ranked(
        ranked
            .into_iter()
            .map(|(label, count)| (label.to_string(), count)),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum StoreKey {
    Store(i64),
    Unknown,
}

impl StoreKey {
    fn label(self) -> String {
        match self {
            StoreKey::Store(number) => format!("Store {number}"),
            StoreKey::Unknown => UNKNOWN_LABEL.to_string(),
        }
    }
}

/// Top `n` previous stores over the raw record history.
///
/// Every history row counts, so this answers "which stores produced the
/// most status records" rather than a per-patient snapshot.
pub fn store_distribution(records: &[StatusRecord], n: usize) -> Distribution {
    let ranked = ranked_counts(
        records
            .iter()
            .map(|record| record.previous_store.map_or(StoreKey::Unknown, StoreKey::Store)),
    );

    Distribution::from_ranked(
        ranked
            .into_iter()
            .take(n)
            .map(|(key, count)| (key.label(), count)),
    )
}
