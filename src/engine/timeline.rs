use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::models::{format_day, period_key, StatusRecord};

use super::types::{PeriodDetail, Timeline, TransitionEntry};

/// Buckets transition events by calendar month.
///
/// Rows without a usable transition date cannot be plotted and are left
/// out. Periods come back oldest first; events inside a period are ordered
/// by patient id, then transition date.
pub fn timeline(records: &[StatusRecord]) -> Timeline {
    let mut periods: BTreeMap<String, Vec<(&StatusRecord, NaiveDateTime)>> = BTreeMap::new();
    let mut undated = 0usize;

    for record in records {
        match record.transition_date {
            Some(date) => periods
                .entry(period_key(&date))
                .or_default()
                .push((record, date)),
            None => undated += 1,
        }
    }

    if undated > 0 {
        tracing::debug!(undated, "Records without a transition date left off the timeline");
    }

    let mut timeline = Timeline::default();

    for (period, mut events) in periods {
        events.sort_by_key(|(record, date)| (record.patient_id, *date));

        let transitions: Vec<TransitionEntry> = events
            .into_iter()
            .map(|(record, date)| TransitionEntry {
                patient_id: record.patient_id,
                status: record.status.clone(),
                recent_status: record.recent_status.clone(),
                transition_date: format_day(&date),
            })
            .collect();

        timeline.labels.push(period.clone());
        timeline.values.push(transitions.len());
        timeline.details.push(PeriodDetail {
            period,
            count: transitions.len(),
            transitions,
        });
    }

    timeline
}
