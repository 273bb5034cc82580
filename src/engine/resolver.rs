//! Latest-record resolution: one authoritative row per patient.

use std::collections::BTreeMap;

use crate::models::{PatientId, StatusRecord};

/// One record per patient, iterated in ascending patient id order.
///
/// Built fresh by [`resolve_latest`] for every aggregation; never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedView {
    records: Vec<StatusRecord>,
}

impl ResolvedView {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StatusRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[StatusRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<StatusRecord> {
        self.records
    }

    pub fn get(&self, patient_id: PatientId) -> Option<&StatusRecord> {
        self.records
            .binary_search_by_key(&patient_id, |r| r.patient_id)
            .ok()
            .map(|i| &self.records[i])
    }
}

impl<'a> IntoIterator for &'a ResolvedView {
    type Item = &'a StatusRecord;
    type IntoIter = std::slice::Iter<'a, StatusRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Picks each patient's latest record by effective date.
///
/// Rows are stably sorted by effective date with missing dates first
/// (`None < Some(_)`), then the last row seen per patient wins. Ties on
/// the date therefore go to the row that came later in the input, and a
/// patient with no dated rows keeps its last row.
pub fn resolve_latest(records: &[StatusRecord]) -> ResolvedView {
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by_key(|&i| records[i].effective_date);

    let mut latest: BTreeMap<PatientId, &StatusRecord> = BTreeMap::new();
    for i in order {
        latest.insert(records[i].patient_id, &records[i]);
    }

    let view = ResolvedView {
        records: latest.into_values().cloned().collect(),
    };

    tracing::debug!(
        rows = records.len(),
        patients = view.len(),
        "Resolved latest status per patient"
    );

    view
}
