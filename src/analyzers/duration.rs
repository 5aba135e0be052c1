//! Total and mean trip duration.

use serde::Serialize;

use super::EmptyRecordSet;
use crate::model::RecordSet;

const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationStats {
    pub total_seconds: f64,
    /// `None` when no trip in the set has a duration.
    pub mean_seconds: Option<f64>,
    /// Trips whose duration cell was blank.
    pub missing: usize,
}

impl DurationStats {
    pub fn total_days(&self) -> f64 {
        self.total_seconds / SECONDS_PER_DAY
    }

    pub fn mean_minutes(&self) -> Option<f64> {
        self.mean_seconds.map(|s| s / SECONDS_PER_MINUTE)
    }
}

/// Sums and averages the present durations; blank ones are skipped and
/// negative values are kept as-is.
#[tracing::instrument(skip(records), fields(trips = records.len()))]
pub fn trip_duration_stats(records: &RecordSet) -> Result<DurationStats, EmptyRecordSet> {
    if records.is_empty() {
        return Err(EmptyRecordSet);
    }
    let present: Vec<f64> = records
        .iter()
        .filter_map(|t| t.details.trip_duration)
        .collect();
    let total_seconds: f64 = present.iter().sum();
    let mean_seconds = (!present.is_empty()).then(|| total_seconds / present.len() as f64);

    Ok(DurationStats {
        total_seconds,
        mean_seconds,
        missing: records.len() - present.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::trip;
    use crate::model::{ColumnPresence, Trip};

    fn with_duration(seconds: Option<f64>) -> Trip {
        let mut t = trip((2017, 4, 10), 12, "A", "B");
        t.details.trip_duration = seconds;
        t
    }

    #[test]
    fn test_totals_and_means() {
        let set = RecordSet::new(
            vec![
                with_duration(Some(43_200.0)),
                with_duration(Some(43_200.0)),
                with_duration(Some(86_400.0)),
            ],
            ColumnPresence::default(),
        );
        let stats = trip_duration_stats(&set).unwrap();
        assert_eq!(stats.total_seconds, 172_800.0);
        assert_eq!(stats.total_days(), 2.0);
        assert_eq!(stats.mean_seconds, Some(57_600.0));
        assert_eq!(stats.mean_minutes(), Some(960.0));
        assert_eq!(stats.missing, 0);
    }

    #[test]
    fn test_negative_durations_are_not_filtered() {
        let set = RecordSet::new(
            vec![with_duration(Some(120.0)), with_duration(Some(-60.0))],
            ColumnPresence::default(),
        );
        let stats = trip_duration_stats(&set).unwrap();
        assert_eq!(stats.total_seconds, 60.0);
        assert_eq!(stats.mean_minutes(), Some(0.5));
    }

    #[test]
    fn test_blank_durations_are_skipped() {
        let set = RecordSet::new(
            vec![
                with_duration(Some(300.0)),
                with_duration(None),
                with_duration(Some(900.0)),
            ],
            ColumnPresence::default(),
        );
        let stats = trip_duration_stats(&set).unwrap();
        assert_eq!(stats.total_seconds, 1200.0);
        assert_eq!(stats.mean_minutes(), Some(10.0));
        assert_eq!(stats.missing, 1);
    }

    #[test]
    fn test_all_blank_durations_have_no_mean() {
        let set = RecordSet::new(vec![with_duration(None)], ColumnPresence::default());
        let stats = trip_duration_stats(&set).unwrap();
        assert_eq!(stats.total_seconds, 0.0);
        assert_eq!(stats.mean_seconds, None);
        assert_eq!(stats.missing, 1);
    }

    #[test]
    fn test_empty_set_is_an_error() {
        assert_eq!(trip_duration_stats(&RecordSet::default()), Err(EmptyRecordSet));
    }
}
