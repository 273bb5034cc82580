use serde::{Deserialize, Serialize};

use crate::models::{StatusField, StatusRecord};

use super::distribution::{distribution, store_distribution};
use super::kpi::compute_kpis;
use super::resolver::resolve_latest;
use super::timeline::timeline;
use super::types::{Distribution, KpiSummary, Timeline};

/// Every dashboard view in one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub kpis: KpiSummary,
    pub status_distribution: Distribution,
    pub recent_status_distribution: Distribution,
    pub store_distribution: Distribution,
    pub timeline: Timeline,
}

/// Resolves once and derives all views from the same record set.
pub fn build_dashboard(records: &[StatusRecord], top_stores: usize) -> DashboardSnapshot {
    let view = resolve_latest(records);

    DashboardSnapshot {
        kpis: compute_kpis(&view),
        status_distribution: distribution(&view, StatusField::Status),
        recent_status_distribution: distribution(&view, StatusField::RecentStatus),
        store_distribution: store_distribution(records, top_stores),
        timeline: timeline(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_record_date;

    #[test]
    fn empty_records_give_empty_snapshot() {
        assert_eq!(build_dashboard(&[], 10), DashboardSnapshot::default());
    }

    #[test]
    fn snapshot_mixes_resolved_and_raw_views() {
        let records = vec![
            StatusRecord::new(1)
                .with_effective_date(parse_record_date("2024-01-01"))
                .with_status("Inactive")
                .with_previous_store(Some(3))
                .with_transition_date(parse_record_date("2024-01-01")),
            StatusRecord::new(1)
                .with_effective_date(parse_record_date("2024-02-01"))
                .with_status("Active")
                .with_recent_status("Recently Reactivated")
                .with_previous_store(Some(3))
                .with_transition_date(parse_record_date("2024-02-01")),
        ];

        let snapshot = build_dashboard(&records, 10);

        assert_eq!(snapshot.kpis.total_patients, 1);
        assert_eq!(snapshot.kpis.reactivated_patients, 1);
        assert_eq!(snapshot.status_distribution.labels, vec!["Active"]);
        // Store and timeline views see both history rows.
        assert_eq!(snapshot.store_distribution.get("Store 3"), Some(2));
        assert_eq!(snapshot.timeline.labels, vec!["2024-01", "2024-02"]);
    }
}
