//! Console rendering of statistics and raw trips.
//!
//! Everything writes to a caller-supplied [`Write`] so the interactive
//! session and the one-shot report share the same formatting.

use anyhow::Result;
use std::io::Write;
use std::time::Duration;
use tracing::debug;

use crate::analyzers::duration::DurationStats;
use crate::analyzers::mode::ValueCount;
use crate::analyzers::station::StationStats;
use crate::analyzers::summary::Summary;
use crate::analyzers::temporal::TemporalStats;
use crate::analyzers::users::UserStats;
use crate::config::City;
use crate::filter::TripFilter;
use crate::model::{ColumnPresence, Trip};
use crate::selection::weekday_name;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn write_rule(w: &mut impl Write) -> Result<()> {
    writeln!(w, "{}", "-".repeat(40))?;
    Ok(())
}

pub fn write_selection(w: &mut impl Write, city: City, filter: &TripFilter) -> Result<()> {
    write_rule(w)?;
    writeln!(
        w,
        "The analysis will be performed for city: {city}, {filter}\n"
    )?;
    write_rule(w)
}

/// Closing line of each statistic block.
pub fn write_elapsed(w: &mut impl Write, elapsed: Duration) -> Result<()> {
    writeln!(w, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    write_rule(w)
}

pub fn write_time_stats(w: &mut impl Write, stats: &TemporalStats) -> Result<()> {
    writeln!(w, "\nCalculating The Most Frequent Times of Travel...\n")?;
    writeln!(w, "Most Popular Start Month: {}", stats.popular_month_name())?;
    writeln!(w, "Most Popular Start Day: {}", weekday_name(stats.popular_day))?;
    writeln!(w, "Most Popular Start Hour: {}", stats.popular_hour)?;
    Ok(())
}

pub fn write_station_stats(w: &mut impl Write, stats: &StationStats) -> Result<()> {
    writeln!(w, "\nCalculating The Most Popular Stations and Trip...\n")?;
    writeln!(w, "Most Popular Start Station: {}", stats.popular_start_station)?;
    writeln!(w, "Most Popular End Station: {}", stats.popular_end_station)?;
    writeln!(
        w,
        "Most Popular Combination of Start and End Station: \"{}\" and \"{}\"",
        stats.popular_trip.start, stats.popular_trip.end
    )?;
    Ok(())
}

pub fn write_duration_stats(w: &mut impl Write, stats: &DurationStats) -> Result<()> {
    writeln!(w, "\nCalculating Trip Duration...\n")?;
    writeln!(w, "Total travel time: {} days", stats.total_days())?;
    match stats.mean_minutes() {
        Some(mean) => writeln!(w, "Mean travel time: {mean} minutes")?,
        None => writeln!(w, "Mean travel time: No data available for this data set")?,
    }
    if stats.missing > 0 {
        writeln!(w, "Trips without a duration: {}", stats.missing)?;
    }
    Ok(())
}

pub fn write_user_stats(w: &mut impl Write, stats: &UserStats) -> Result<()> {
    writeln!(w, "\nCalculating User Stats...\n")?;

    writeln!(w, "User Types:")?;
    write_counts(w, &stats.user_types)?;

    match &stats.genders {
        Some(genders) => {
            writeln!(w, "Gender:")?;
            write_counts(w, genders)?;
        }
        None => writeln!(w, "Gender: No data available for this data set")?,
    }

    let years = stats.birth_years.unwrap_or_default();
    write_year(w, "Earliest birth year", years.earliest)?;
    write_year(w, "Most recent birth year", years.most_recent)?;
    write_year(w, "Most common birth year", years.most_common)?;
    Ok(())
}

fn write_counts(w: &mut impl Write, counts: &[ValueCount<String>]) -> Result<()> {
    if counts.is_empty() {
        writeln!(w, "  No data available for this data set")?;
    }
    let width = counts.iter().map(|c| c.value.len()).max().unwrap_or(0);
    for c in counts {
        writeln!(w, "  {:<width$}  {}", c.value, c.count)?;
    }
    writeln!(w)?;
    Ok(())
}

fn write_year(w: &mut impl Write, label: &str, year: Option<i32>) -> Result<()> {
    match year {
        Some(y) => writeln!(w, "{label}: {y}")?,
        None => writeln!(w, "{label}: No data available for this data set")?,
    }
    Ok(())
}

/// Writes `trips` one per line, numbering rows from `first_row`.
pub fn write_trips(
    w: &mut impl Write,
    trips: &[Trip],
    first_row: usize,
    columns: ColumnPresence,
) -> Result<()> {
    for (offset, trip) in trips.iter().enumerate() {
        let d = &trip.details;
        write!(w, "[{}] ", first_row + offset)?;
        if let Some(id) = &d.id {
            write!(w, "Id: {id} | ")?;
        }
        let duration = d
            .trip_duration
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        write!(
            w,
            "Start Time: {} | End Time: {} | Trip Duration: {} | Start Station: {} | End Station: {} | User Type: {}",
            d.start_time.format(TIMESTAMP_FORMAT),
            d.end_time.format(TIMESTAMP_FORMAT),
            duration,
            d.start_station,
            d.end_station,
            d.user_type.as_deref().unwrap_or("-"),
        )?;
        if columns.gender {
            write!(w, " | Gender: {}", d.gender.as_deref().unwrap_or("-"))?;
        }
        if columns.birth_year {
            match d.birth_year {
                Some(y) => write!(w, " | Birth Year: {y}")?,
                None => write!(w, " | Birth Year: -")?,
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Writes the summary as pretty-printed JSON.
pub fn write_json(w: &mut impl Write, summary: &Summary) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, summary)?;
    writeln!(w)?;
    Ok(())
}

/// Logs the summary using Rust's debug pretty-print format.
pub fn log_pretty(summary: &Summary) {
    debug!("{:#?}", summary);
}
