use super::resolver::ResolvedView;
use super::types::KpiSummary;

pub const STATUS_ACTIVE: &str = "Active";
pub const RECENT_STATUS_NEW: &str = "Recently New";
pub const RECENT_STATUS_REACTIVATED: &str = "Recently Reactivated";

/// Headline KPIs over the resolved view. Labels match exactly (case-sensitive).
///
/// Taking a `ResolvedView` rather than raw rows keeps a patient's older
/// history rows from being counted.
pub fn compute_kpis(view: &ResolvedView) -> KpiSummary {
    let mut kpis = KpiSummary {
        total_patients: view.len(),
        ..KpiSummary::default()
    };

    for record in view {
        if record.status.as_deref() == Some(STATUS_ACTIVE) {
            kpis.currently_active += 1;
        }
        match record.recent_status.as_deref() {
            Some(RECENT_STATUS_NEW) => kpis.newly_engaged += 1,
            Some(RECENT_STATUS_REACTIVATED) => kpis.reactivated_patients += 1,
            _ => {}
        }
    }

    kpis
}
