//! CSV loading of a city's trip file into a [`RecordSet`].
//!
//! Required columns are located by header name; `Gender` and `Birth Year`
//! are optional and their presence is recorded on the record set. The
//! unnamed leading column, when there is one, is kept as the trip id.

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use csv::StringRecord;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::config::{City, DataConfig};
use crate::filter::TripFilter;
use crate::model::{ColumnPresence, RecordSet, Trip, TripDetails};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

const KNOWN_COLUMNS: [&str; 8] = [
    START_TIME,
    END_TIME,
    TRIP_DURATION,
    START_STATION,
    END_STATION,
    USER_TYPE,
    GENDER,
    BIRTH_YEAR,
];

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

/// Loads `city` from the configured data directory and narrows it with `filter`.
#[tracing::instrument(skip_all, fields(city = %city, %filter))]
pub fn load_data(config: &DataConfig, city: City, filter: &TripFilter) -> Result<RecordSet> {
    let path = config.path_for(city);
    let all = load_file(&path)?;
    let filtered = filter.apply(&all);
    info!(
        loaded = all.len(),
        kept = filtered.len(),
        "Trip data loaded and filtered"
    );
    Ok(filtered)
}

/// Reads every trip in the CSV file at `path`.
pub fn load_file(path: &Path) -> Result<RecordSet> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening trip file {}", path.display()))?;
    load_reader(file).with_context(|| format!("reading trip file {}", path.display()))
}

/// Reads every trip from CSV text with a header row.
pub fn load_reader<R: Read>(reader: R) -> Result<RecordSet> {
    let mut rdr = csv::Reader::from_reader(reader);
    let columns = ColumnIndex::from_headers(rdr.headers().context("reading CSV headers")?)?;
    debug!(
        gender = columns.gender.is_some(),
        birth_year = columns.birth_year.is_some(),
        "Optional columns detected"
    );

    let mut trips = Vec::new();
    for (row_no, result) in rdr.records().enumerate() {
        // line 1 is the header
        let line = row_no as u64 + 2;
        let record = result.with_context(|| format!("CSV line {line}"))?;
        let line = record.position().map_or(line, |p| p.line());
        let details = columns
            .parse(&record)
            .with_context(|| format!("CSV line {line}"))?;
        trips.push(Trip::new(details));
    }

    Ok(RecordSet::new(trips, columns.presence()))
}

/// Positions of the known columns within a header row.
struct ColumnIndex {
    id: Option<usize>,
    start_time: usize,
    end_time: usize,
    trip_duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| find(name).with_context(|| format!("missing '{name}' column"));
        let id = headers.iter().position(|h| h.trim().is_empty()).or_else(|| {
            headers
                .get(0)
                .filter(|h| !KNOWN_COLUMNS.contains(&h.trim()))
                .map(|_| 0)
        });

        Ok(Self {
            id,
            start_time: require(START_TIME)?,
            end_time: require(END_TIME)?,
            trip_duration: require(TRIP_DURATION)?,
            start_station: require(START_STATION)?,
            end_station: require(END_STATION)?,
            user_type: require(USER_TYPE)?,
            gender: find(GENDER),
            birth_year: find(BIRTH_YEAR),
        })
    }

    fn presence(&self) -> ColumnPresence {
        ColumnPresence {
            gender: self.gender.is_some(),
            birth_year: self.birth_year.is_some(),
        }
    }

    fn parse(&self, record: &StringRecord) -> Result<TripDetails> {
        // text cells are kept as written; only parsed cells are trimmed
        let cell = |idx: usize| record.get(idx).unwrap_or("");
        let optional = |idx: Option<usize>| {
            idx.map(cell)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let duration = cell(self.trip_duration).trim();
        let trip_duration = if duration.is_empty() {
            None
        } else {
            Some(duration.parse::<f64>().with_context(|| {
                format!("'{TRIP_DURATION}' value '{duration}' is not a number")
            })?)
        };

        let birth_year = match self.birth_year.map(|idx| cell(idx).trim()) {
            Some(raw) if !raw.is_empty() => Some(parse_birth_year(raw)?),
            _ => None,
        };

        Ok(TripDetails {
            id: optional(self.id),
            start_time: parse_timestamp(cell(self.start_time).trim())
                .with_context(|| format!("bad '{START_TIME}'"))?,
            end_time: parse_timestamp(cell(self.end_time).trim())
                .with_context(|| format!("bad '{END_TIME}'"))?,
            trip_duration,
            start_station: cell(self.start_station).to_string(),
            end_station: cell(self.end_station).to_string(),
            user_type: optional(Some(self.user_type)),
            gender: optional(self.gender),
            birth_year,
        })
    }
}

/// Parses `YYYY-MM-DD HH:MM:SS`, with optional fractional seconds.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(ts);
        }
    }
    bail!("'{s}' is not a timestamp")
}

/// Birth years are stored as floats in some files (`1989.0`).
fn parse_birth_year(s: &str) -> Result<i32> {
    if let Ok(year) = s.parse::<i32>() {
        return Ok(year);
    }
    let year = s
        .parse::<f64>()
        .with_context(|| format!("'{BIRTH_YEAR}' value '{s}' is not a year"))?;
    if year.fract() != 0.0 {
        bail!("'{BIRTH_YEAR}' value '{s}' is not a whole year");
    }
    Ok(year as i32)
}
