//! Month / weekday narrowing of a record set.

use chrono::{Month, Weekday};
use std::fmt;

use crate::model::{RecordSet, Trip};
use crate::selection::weekday_name;

/// Month and day constraints; `None` means no filter on that field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TripFilter {
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl TripFilter {
    pub fn new(month: Option<Month>, day: Option<Weekday>) -> Self {
        Self { month, day }
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        let month_ok = self
            .month
            .is_none_or(|m| m.number_from_month() == trip.month());
        let day_ok = self.day.is_none_or(|d| d == trip.weekday());
        month_ok && day_ok
    }

    /// Returns a new record set holding the matching trips, in source order.
    #[tracing::instrument(skip(records), fields(input = records.len()))]
    pub fn apply(&self, records: &RecordSet) -> RecordSet {
        if self.month.is_none() && self.day.is_none() {
            return records.clone();
        }
        let trips = records
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect();
        RecordSet::new(trips, records.columns())
    }

    pub fn month_label(&self) -> &'static str {
        self.month.map_or("all", |m| m.name())
    }

    pub fn day_label(&self) -> &'static str {
        self.day.map_or("all", weekday_name)
    }
}

impl fmt::Display for TripFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "month: {}, day: {}", self.month_label(), self.day_label())
    }
}
