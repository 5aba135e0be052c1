//! All four statistic groups for one selection.

use serde::Serialize;

use super::EmptyRecordSet;
use super::duration::{DurationStats, trip_duration_stats};
use super::station::{StationStats, station_stats};
use super::temporal::{TemporalStats, time_stats};
use super::users::{UserStats, user_stats};
use crate::config::City;
use crate::filter::TripFilter;
use crate::model::RecordSet;

/// The city and filters the statistics were computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub city: City,
    pub month: &'static str,
    pub day: &'static str,
}

impl Selection {
    pub fn new(city: City, filter: &TripFilter) -> Self {
        Self {
            city,
            month: filter.month_label(),
            day: filter.day_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub selection: Selection,
    pub trip_count: usize,
    pub times: TemporalStats,
    pub stations: StationStats,
    pub durations: DurationStats,
    pub users: UserStats,
}

impl Summary {
    pub fn compute(
        city: City,
        filter: &TripFilter,
        records: &RecordSet,
    ) -> Result<Self, EmptyRecordSet> {
        Ok(Self {
            selection: Selection::new(city, filter),
            trip_count: records.len(),
            times: time_stats(records)?,
            stations: station_stats(records)?,
            durations: trip_duration_stats(records)?,
            users: user_stats(records),
        })
    }
}
