//! Most frequent times of travel.

use chrono::Weekday;
use serde::{Serialize, Serializer};

use super::EmptyRecordSet;
use super::mode::mode;
use crate::model::{RecordSet, Trip};
use crate::selection::{month_name, weekday_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemporalStats {
    /// 1-12.
    #[serde(serialize_with = "as_month_name")]
    pub popular_month: u32,
    #[serde(serialize_with = "as_weekday_name")]
    pub popular_day: Weekday,
    pub popular_hour: u32,
}

impl TemporalStats {
    pub fn popular_month_name(&self) -> &'static str {
        month_name(self.popular_month).unwrap_or("unknown")
    }
}

#[tracing::instrument(skip(records), fields(trips = records.len()))]
pub fn time_stats(records: &RecordSet) -> Result<TemporalStats, EmptyRecordSet> {
    Ok(TemporalStats {
        popular_month: mode(records.iter().map(Trip::month)).ok_or(EmptyRecordSet)?,
        popular_day: mode(records.iter().map(Trip::weekday)).ok_or(EmptyRecordSet)?,
        popular_hour: mode(records.iter().map(Trip::hour)).ok_or(EmptyRecordSet)?,
    })
}

fn as_month_name<S: Serializer>(month: &u32, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(month_name(*month).unwrap_or("unknown"))
}

fn as_weekday_name<S: Serializer>(day: &Weekday, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(weekday_name(*day))
}
