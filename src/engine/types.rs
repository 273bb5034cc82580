use serde::{Deserialize, Serialize};

use crate::models::PatientId;

/// Headline counts, always taken over the resolved (latest-only) view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_patients: usize,
    pub currently_active: usize,
    pub newly_engaged: usize,
    pub reactivated_patients: usize,
}

/// Label → count summary, most frequent first. `labels` and `values` are parallel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
}

impl Distribution {
    pub(crate) fn from_ranked<I>(ranked: I) -> Self
    where
        I: IntoIterator<Item = (String, usize)>,
    {
        let (labels, values): (Vec<String>, Vec<usize>) = ranked.into_iter().unzip();
        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.values.iter().sum()
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// One transition event inside a timeline period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEntry {
    pub patient_id: PatientId,
    pub status: Option<String>,
    pub recent_status: Option<String>,
    /// `YYYY-MM-DD`
    pub transition_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodDetail {
    /// `YYYY-MM`
    pub period: String,
    pub count: usize,
    pub transitions: Vec<TransitionEntry>,
}

/// Transition events bucketed by calendar month, oldest month first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
    pub details: Vec<PeriodDetail>,
}

impl Timeline {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of events across all periods.
    pub fn total(&self) -> usize {
        self.values.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Distribution {
        Distribution::from_ranked(vec![
            ("Active".to_string(), 5),
            ("Inactive".to_string(), 3),
            ("Lapsed".to_string(), 1),
        ])
    }

    #[test]
    fn distribution_accessors() {
        let dist = sample();
        assert_eq!(dist.len(), 3);
        assert_eq!(dist.total(), 9);
        assert_eq!(dist.get("Inactive"), Some(3));
        assert_eq!(dist.get("Lost"), None);
        assert_eq!(dist.iter().next(), Some(("Active", 5)));
    }

    #[test]
    fn distribution_serializes_as_parallel_arrays() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["labels"], serde_json::json!(["Active", "Inactive", "Lapsed"]));
        assert_eq!(json["values"], serde_json::json!([5, 3, 1]));
    }

    #[test]
    fn empty_timeline_serializes_to_empty_arrays() {
        let json = serde_json::to_value(Timeline::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"labels": [], "values": [], "details": []})
        );
    }
}
