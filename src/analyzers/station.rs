//! Most popular stations and trip.

use serde::Serialize;

use super::EmptyRecordSet;
use super::mode::mode;
use crate::model::RecordSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationPair {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub popular_start_station: String,
    pub popular_end_station: String,
    pub popular_trip: StationPair,
}

#[tracing::instrument(skip(records), fields(trips = records.len()))]
pub fn station_stats(records: &RecordSet) -> Result<StationStats, EmptyRecordSet> {
    let start = mode(records.iter().map(|t| t.details.start_station.as_str()))
        .ok_or(EmptyRecordSet)?;
    let end =
        mode(records.iter().map(|t| t.details.end_station.as_str())).ok_or(EmptyRecordSet)?;
    let (pair_start, pair_end) = mode(
        records
            .iter()
            .map(|t| (t.details.start_station.as_str(), t.details.end_station.as_str())),
    )
    .ok_or(EmptyRecordSet)?;

    Ok(StationStats {
        popular_start_station: start.to_string(),
        popular_end_station: end.to_string(),
        popular_trip: StationPair {
            start: pair_start.to_string(),
            end: pair_end.to_string(),
        },
    })
}
