//! Statistics over a filtered record set.
//!
//! Each group is computed independently from the same read-only
//! [`RecordSet`](crate::model::RecordSet):
//!
//! - [`temporal`]: most popular month, weekday and start hour
//! - [`station`]: most popular start, end and start/end pair
//! - [`duration`]: total and mean trip duration
//! - [`users`]: user type, gender and birth year breakdowns
//!
//! [`summary`] bundles all four for one-shot and JSON output.

pub mod duration;
pub mod mode;
pub mod station;
pub mod summary;
pub mod temporal;
pub mod users;

use thiserror::Error;

/// A mode or mean was requested over zero trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no trips match the selected filters")]
pub struct EmptyRecordSet;
