//! Trip records and the record set the analyzers work on.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Source columns of a single ride.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDetails {
    /// Leading unnamed column of the source file, if any.
    pub id: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Seconds; `None` for a blank cell.
    pub trip_duration: Option<f64>,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

/// One ride plus the calendar fields derived from its start time.
///
/// The derived fields are only computed in [`Trip::new`], so they always
/// agree with `details.start_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub details: TripDetails,
    month: u32,
    weekday: Weekday,
    hour: u32,
}

impl Trip {
    pub fn new(details: TripDetails) -> Self {
        let start = details.start_time;
        Self {
            month: start.month(),
            weekday: start.weekday(),
            hour: start.hour(),
            details,
        }
    }

    /// Month number, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Start hour, 0-23.
    pub fn hour(&self) -> u32 {
        self.hour
    }
}

impl From<TripDetails> for Trip {
    fn from(details: TripDetails) -> Self {
        Trip::new(details)
    }
}

/// Which optional columns the source file defines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnPresence {
    pub gender: bool,
    pub birth_year: bool,
}

/// Ordered, read-only collection of trips from one city.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    trips: Vec<Trip>,
    columns: ColumnPresence,
}

impl RecordSet {
    pub fn new(trips: Vec<Trip>, columns: ColumnPresence) -> Self {
        Self { trips, columns }
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    pub fn columns(&self) -> ColumnPresence {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use chrono::NaiveDate;

    /// Builds a trip starting at the given date and hour with a 10 minute ride.
    pub fn trip(
        (year, month, day): (i32, u32, u32),
        hour: u32,
        start_station: &str,
        end_station: &str,
    ) -> Trip {
        let start_time = NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        Trip::new(TripDetails {
            id: None,
            start_time,
            end_time: start_time + chrono::Duration::minutes(10),
            trip_duration: Some(600.0),
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::trip;
    use super::*;

    #[test]
    fn test_derived_fields_follow_start_time() {
        // 2017-01-01 was a Sunday
        let t = trip((2017, 1, 1), 9, "A", "B");
        assert_eq!(t.month(), 1);
        assert_eq!(t.weekday(), Weekday::Sun);
        assert_eq!(t.hour(), 9);
    }

    #[test]
    fn test_record_set_len() {
        let set = RecordSet::new(
            vec![trip((2017, 3, 6), 0, "A", "B"), trip((2017, 3, 7), 23, "B", "A")],
            ColumnPresence::default(),
        );
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.iter().map(Trip::hour).collect::<Vec<_>>(), vec![0, 23]);
        assert!(RecordSet::default().is_empty());
    }
}
