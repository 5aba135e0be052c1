//! Interactive analysis session and the one-shot report.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::{info, warn};

use crate::analyzers::duration::trip_duration_stats;
use crate::analyzers::station::station_stats;
use crate::analyzers::summary::Summary;
use crate::analyzers::temporal::time_stats;
use crate::analyzers::users::user_stats;
use crate::config::{City, DataConfig};
use crate::filter::TripFilter;
use crate::loader::load_data;
use crate::model::RecordSet;
use crate::output;
use crate::paginate::{PAGE_SIZE, Paginator};
use crate::prompt::Console;
use crate::selection::{parse_day, parse_month, parse_yes_no};

const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
const CITY_PROMPT: &str = "Choose the city you want to analyze (Chicago, New York City, Washington)";
const CITY_RETRY: &str = "Invalid city. Please enter either Chicago, New York City or Washington";
const MONTH_PROMPT: &str =
    "Which month do you want to analyze? Please enter all, January, February, ..., June";
const MONTH_RETRY: &str = "Invalid month. Please enter either all, january, february, etc.";
const DAY_PROMPT: &str =
    "Which day of the week do you want to analyze? Please enter all, monday, tuesday, ...";
const DAY_RETRY: &str = "Invalid day. Please enter either all, monday, tuesday, etc.";
const RAW_PROMPT: &str = "Would you like to see the first 5 rows of raw data? Please enter yes or no.";
const MORE_PROMPT: &str = "Would you like to see the next 5 rows of raw data? Please enter yes or no.";
const YES_NO_RETRY: &str = "Please enter yes or no.";
const RESTART_PROMPT: &str = "Would you like to restart? Please enter yes or no.";
const NO_TRIPS: &str = "No trips match the selected filters.";

/// Runs analysis rounds until the user declines to restart.
pub fn run_interactive<R: BufRead, W: Write>(
    config: &DataConfig,
    console: &mut Console<R, W>,
) -> Result<()> {
    let mut round = 0usize;
    loop {
        round += 1;
        let (city, filter) = get_filters(console)?;
        info!(round, city = %city, %filter, "Starting analysis");

        let records = load_data(config, city, &filter)?;
        if records.is_empty() {
            warn!(city = %city, %filter, "Filters matched no trips");
            writeln!(console.output(), "{NO_TRIPS}")?;
        } else {
            show_statistics(console.output(), &records)?;
            if console.ask_until(RAW_PROMPT, YES_NO_RETRY, parse_yes_no)? {
                show_raw_data(console, &records)?;
            }
        }

        let restart = console.ask(RESTART_PROMPT)?;
        if !restart.trim().eq_ignore_ascii_case("yes") {
            info!(rounds = round, "Session finished");
            return Ok(());
        }
    }
}

/// Asks for city, month and day, re-asking on anything outside the accepted sets.
pub fn get_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<(City, TripFilter)> {
    writeln!(console.output(), "{GREETING}")?;
    let city = console.ask_until(CITY_PROMPT, CITY_RETRY, str::parse::<City>)?;
    let month = console.ask_until(MONTH_PROMPT, MONTH_RETRY, parse_month)?;
    let day = console.ask_until(DAY_PROMPT, DAY_RETRY, parse_day)?;

    let filter = TripFilter::new(month, day);
    output::write_selection(console.output(), city, &filter)?;
    Ok((city, filter))
}

/// Writes the four statistic groups, each followed by its computation time.
pub fn show_statistics(w: &mut impl Write, records: &RecordSet) -> Result<()> {
    let start = Instant::now();
    let times = time_stats(records)?;
    output::write_time_stats(w, &times)?;
    output::write_elapsed(w, start.elapsed())?;

    let start = Instant::now();
    let stations = station_stats(records)?;
    output::write_station_stats(w, &stations)?;
    output::write_elapsed(w, start.elapsed())?;

    let start = Instant::now();
    let durations = trip_duration_stats(records)?;
    output::write_duration_stats(w, &durations)?;
    output::write_elapsed(w, start.elapsed())?;

    let start = Instant::now();
    let users = user_stats(records);
    output::write_user_stats(w, &users)?;
    output::write_elapsed(w, start.elapsed())
}

/// Pages through raw trips five at a time while the user answers yes.
pub fn show_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    records: &RecordSet,
) -> Result<()> {
    let columns = records.columns();
    let mut pager = Paginator::new(records.trips());

    writeln!(console.output(), "\nFirst {PAGE_SIZE} rows of raw data:\n")?;
    output::write_trips(console.output(), pager.page(), pager.cursor(), columns)?;

    while console.ask_until(MORE_PROMPT, YES_NO_RETRY, parse_yes_no)? {
        let page = pager.advance();
        if page.is_empty() {
            writeln!(console.output(), "No more raw data to display.")?;
            return Ok(());
        }
        output::write_trips(console.output(), page, pager.cursor(), columns)?;
    }
    Ok(())
}

/// Non-interactive run for one selection, as text or JSON.
#[tracing::instrument(skip_all, fields(city = %city, %filter, json = json))]
pub fn run_report(
    config: &DataConfig,
    city: City,
    filter: &TripFilter,
    json: bool,
    w: &mut impl Write,
) -> Result<()> {
    let records = load_data(config, city, filter)?;
    if json {
        let summary = Summary::compute(city, filter, &records)
            .with_context(|| format!("summarising {city} ({filter})"))?;
        output::log_pretty(&summary);
        output::write_json(w, &summary)
    } else {
        output::write_selection(w, city, filter)?;
        show_statistics(w, &records).with_context(|| format!("summarising {city} ({filter})"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,2017-01-02 08:10:00,600,A,B,Subscriber
2017-01-03 08:00:00,2017-01-03 08:10:00,600,A,B,Subscriber
2017-01-04 08:00:00,2017-01-04 08:10:00,600,A,C,Customer
2017-01-05 08:00:00,2017-01-05 08:10:00,600,B,C,Subscriber
2017-01-06 08:00:00,2017-01-06 08:10:00,600,C,A,Subscriber
2017-01-07 08:00:00,2017-01-07 08:10:00,600,C,A,Subscriber
2017-01-08 08:00:00,2017-01-08 08:10:00,600,C,A,Subscriber
";

    fn data_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("washington.csv"), CSV).unwrap();
        dir
    }

    fn run(dir: &tempfile::TempDir, input: &str) -> Result<String> {
        let config = DataConfig::new(dir.path());
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run_interactive(&config, &mut console)?;
        Ok(String::from_utf8(console.into_output())?)
    }

    #[test]
    fn test_single_round_without_raw_data() {
        let dir = data_dir();
        let out = run(&dir, "washington\nall\nall\nno\nno\n").unwrap();
        assert!(out.starts_with(GREETING));
        assert!(out.contains("city: washington, month: all, day: all"));
        assert!(out.contains("Most Popular Start Station: A"));
        assert!(out.contains("\"C\" and \"A\""));
        assert!(out.contains("Gender: No data available"));
        assert!(!out.contains("First 5 rows"));
    }

    #[test]
    fn test_invalid_answers_are_re_asked() {
        let dir = data_dir();
        let out = run(&dir, "boston\nWashington\njuly\nJanuary\nfunday\nMONDAY\nno\nno\n").unwrap();
        assert!(out.contains(CITY_RETRY));
        assert!(out.contains(MONTH_RETRY));
        assert!(out.contains(DAY_RETRY));
        assert!(out.contains("month: January, day: Monday"));
    }

    #[test]
    fn test_raw_data_pages() {
        let dir = data_dir();
        let out = run(&dir, "washington\nall\nall\nyes\nyes\nyes\nno\n").unwrap();
        assert!(out.contains("[0] Start Time: 2017-01-02 08:00:00"));
        assert!(out.contains("[4] Start Time: 2017-01-06 08:00:00"));
        assert!(out.contains("[5] Start Time: 2017-01-07 08:00:00"));
        assert!(out.contains("[6] Start Time: 2017-01-08 08:00:00"));
        assert!(out.contains("No more raw data to display."));
    }

    #[test]
    fn test_no_stops_paging() {
        let dir = data_dir();
        let out = run(&dir, "washington\nall\nall\nyes\nno\nno\n").unwrap();
        assert!(out.contains("[4]"));
        assert!(!out.contains("[5]"));
    }

    #[test]
    fn test_restart_runs_another_round() {
        let dir = data_dir();
        let out = run(&dir, "washington\nall\nall\nno\nYes\nwashington\nall\nsunday\nno\nno\n").unwrap();
        assert_eq!(out.matches(GREETING).count(), 2);
        assert!(out.contains("day: Sunday"));
    }

    #[test]
    fn test_empty_selection_skips_statistics() {
        let dir = data_dir();
        let out = run(&dir, "washington\nmarch\nall\nno\n").unwrap();
        assert!(out.contains(NO_TRIPS));
        assert!(!out.contains("Most Popular Start Month"));
    }

    #[test]
    fn test_missing_city_file_is_fatal() {
        let dir = data_dir();
        let err = run(&dir, "chicago\nall\nall\n").unwrap_err();
        assert!(format!("{err:#}").contains("chicago.csv"));
    }

    #[test]
    fn test_report_json() {
        let dir = data_dir();
        let config = DataConfig::new(dir.path());
        let mut out = Vec::new();
        run_report(&config, City::Washington, &TripFilter::default(), true, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["trip_count"], 7);
        assert_eq!(json["stations"]["popular_trip"]["start"], "C");
        assert_eq!(json["times"]["popular_month"], "January");
    }

    #[test]
    fn test_report_empty_selection_fails() {
        let dir = data_dir();
        let config = DataConfig::new(dir.path());
        let filter = TripFilter::new(Some(chrono::Month::May), None);
        let err = run_report(&config, City::Washington, &filter, false, &mut Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("no trips match"));
    }
}
