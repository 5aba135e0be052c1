//! User type, gender and birth year breakdowns.
//!
//! Gender and birth year are optional columns. When the source file does
//! not define one, the matching field here is `None` rather than an error.

use serde::Serialize;

use super::mode::{ValueCount, mode, value_counts};
use crate::model::RecordSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: Option<i32>,
    pub most_recent: Option<i32>,
    pub most_common: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub user_types: Vec<ValueCount<String>>,
    /// `None` when the data has no gender column.
    pub genders: Option<Vec<ValueCount<String>>>,
    /// `None` when the data has no birth year column.
    pub birth_years: Option<BirthYearStats>,
}

/// Blank cells are left out of every count and extreme.
#[tracing::instrument(skip(records), fields(trips = records.len()))]
pub fn user_stats(records: &RecordSet) -> UserStats {
    let columns = records.columns();

    let user_types = value_counts(records.iter().filter_map(|t| t.details.user_type.clone()));

    let genders = columns
        .gender
        .then(|| value_counts(records.iter().filter_map(|t| t.details.gender.clone())));

    let birth_years = columns.birth_year.then(|| {
        let years = || records.iter().filter_map(|t| t.details.birth_year);
        BirthYearStats {
            earliest: years().min(),
            most_recent: years().max(),
            most_common: mode(years()),
        }
    });

    UserStats {
        user_types,
        genders,
        birth_years,
    }
}
