//! Status aggregation engine.
//!
//! Resolves each patient's latest status record from the dated history and
//! derives the dashboard views from it: headline KPIs, status and
//! recent-status distributions (resolved view), the top-N store distribution
//! and the monthly transition timeline (raw history).
//!
//! Every function is a pure transform of its input. Nothing is cached
//! between calls.

mod distribution;
mod error;
mod kpi;
mod resolver;
mod snapshot;
mod timeline;
mod types;

pub use distribution::*;
pub use error::*;
pub use kpi::*;
pub use resolver::*;
pub use snapshot::*;
pub use timeline::*;
pub use types::*;

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::models::{parse_record_date, PatientId, StatusField, StatusRecord};

    fn row(id: i64, eff: &str, status: &str, recent: Option<&str>) -> StatusRecord {
        let mut record = StatusRecord::new(id)
            .with_effective_date(parse_record_date(eff))
            .with_status(status);
        record.recent_status = recent.map(String::from);
        record
    }

    // ── Worked examples ────────────────────────────────────────────────

    #[test]
    fn latest_record_drives_kpis() {
        let records = vec![
            row(1, "2024-01-01", "Active", Some("Recently New")),
            row(1, "2024-02-01", "Active", Some("Recently Reactivated")),
            row(2, "2024-01-15", "Inactive", None),
        ];

        let view = resolve_latest(&records);
        assert_eq!(view.len(), 2);
        assert_eq!(
            view.get(PatientId(1)).unwrap().effective_date,
            parse_record_date("2024-02-01")
        );

        let kpis = compute_kpis(&view);
        assert_eq!(
            kpis,
            KpiSummary {
                total_patients: 2,
                currently_active: 1,
                newly_engaged: 0,
                reactivated_patients: 1,
            }
        );
    }

    #[test]
    fn empty_record_set_is_not_an_error() {
        let records: Vec<StatusRecord> = Vec::new();
        let result = timeline(&records);
        assert!(result.labels.is_empty());
        assert!(result.values.is_empty());
        assert!(result.details.is_empty());
        assert_eq!(compute_kpis(&resolve_latest(&records)), KpiSummary::default());
    }

    #[test]
    fn unknown_store_rows_are_aggregated() {
        let records = vec![
            StatusRecord::new(1),
            StatusRecord::new(2).with_previous_store(Some(44)),
            StatusRecord::new(3),
            StatusRecord::new(1),
        ];
        let dist = store_distribution(&records, 10);
        assert_eq!(dist.get(UNKNOWN_LABEL), Some(3));
        assert_eq!(dist.get("Store 44"), Some(1));
    }

    // ── Properties ─────────────────────────────────────────────────────

    const STATUSES: &[&str] = &["Active", "Inactive", "Lapsed", "Lost"];
    const RECENT: &[&str] = &["Recently New", "Recently Reactivated", "Recently Lapsed"];

    fn arb_date() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            1 => Just(None::<String>),
            1 => Just(Some("garbage".to_string())),
            6 => (2020i32..2025, 1u32..=12, 1u32..=28)
                .prop_map(|(y, m, d)| Some(format!("{y:04}-{m:02}-{d:02}"))),
        ]
    }

    fn arb_record() -> impl Strategy<Value = StatusRecord> {
        (
            1i64..25,
            arb_date(),
            prop::option::of(prop::sample::select(STATUSES)),
            prop::option::of(prop::sample::select(RECENT)),
            prop::option::of(1i64..15),
            arb_date(),
        )
            .prop_map(|(id, eff, status, recent, store, transition)| StatusRecord {
                patient_id: PatientId(id),
                effective_date: eff.as_deref().and_then(parse_record_date),
                status: status.map(String::from),
                recent_status: recent.map(String::from),
                previous_store: store,
                transition_date: transition.as_deref().and_then(parse_record_date),
            })
    }

    fn arb_records() -> impl Strategy<Value = Vec<StatusRecord>> {
        prop::collection::vec(arb_record(), 0..60)
    }

    proptest! {
        #[test]
        fn resolved_view_has_one_entry_per_patient(records in arb_records()) {
            let distinct: HashSet<PatientId> = records.iter().map(|r| r.patient_id).collect();
            let view = resolve_latest(&records);
            prop_assert_eq!(view.len(), distinct.len());
            for record in &view {
                prop_assert!(distinct.contains(&record.patient_id));
            }
        }

        #[test]
        fn resolver_is_idempotent(records in arb_records()) {
            let view = resolve_latest(&records);
            prop_assert_eq!(resolve_latest(view.records()), view);
        }

        #[test]
        fn resolved_record_has_latest_date(records in arb_records()) {
            let view = resolve_latest(&records);
            for record in &view {
                let max = records
                    .iter()
                    .filter(|r| r.patient_id == record.patient_id)
                    .map(|r| r.effective_date)
                    .max()
                    .flatten();
                prop_assert_eq!(record.effective_date, max);
            }
        }

        #[test]
        fn status_distributions_sum_to_patient_count(records in arb_records()) {
            let view = resolve_latest(&records);
            for field in [StatusField::Status, StatusField::RecentStatus] {
                let dist = distribution(&view, field);
                prop_assert_eq!(dist.total(), view.len());
                prop_assert_eq!(dist.labels.len(), dist.values.len());
                prop_assert!(dist.values.iter().all(|&v| v > 0));
                prop_assert!(dist.values.windows(2).all(|w| w[0] >= w[1]));
            }
        }

        #[test]
        fn store_distribution_sums_to_row_count(records in arb_records()) {
            // At most 14 stores plus Unknown, so a cap of 20 keeps every bucket.
            let dist = store_distribution(&records, 20);
            prop_assert_eq!(dist.total(), records.len());
            prop_assert!(dist.values.windows(2).all(|w| w[0] >= w[1]));
            prop_assert!(store_distribution(&records, 10).len() <= 10);
        }

        #[test]
        fn kpis_never_exceed_patient_count(records in arb_records()) {
            let kpis = compute_kpis(&resolve_latest(&records));
            prop_assert!(kpis.currently_active <= kpis.total_patients);
            prop_assert!(kpis.newly_engaged <= kpis.total_patients);
            prop_assert!(kpis.reactivated_patients <= kpis.total_patients);
        }

        #[test]
        fn timeline_labels_strictly_ascending(records in arb_records()) {
            let result = timeline(&records);
            prop_assert!(result.labels.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(result.labels.len(), result.values.len());
            prop_assert_eq!(result.labels.len(), result.details.len());

            let dated = records.iter().filter(|r| r.transition_date.is_some()).count();
            prop_assert_eq!(result.total(), dated);
            for (detail, &value) in result.details.iter().zip(&result.values) {
                prop_assert_eq!(detail.count, value);
                prop_assert_eq!(detail.transitions.len(), value);
            }
        }
    }
}
