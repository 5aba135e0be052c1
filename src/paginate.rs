//! Fixed-size paging over raw trips.

use crate::model::Trip;

pub const PAGE_SIZE: usize = 5;

/// Cursor over a slice of trips, starting at row 0.
///
/// There is no end-of-data signal: a page past the end is empty, and the
/// last page may be partial.
#[derive(Debug, Clone)]
pub struct Paginator<'a> {
    trips: &'a [Trip],
    cursor: usize,
}

impl<'a> Paginator<'a> {
    pub fn new(trips: &'a [Trip]) -> Self {
        Self { trips, cursor: 0 }
    }

    /// Row index of the first trip on the current page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Trips on the current page.
    pub fn page(&self) -> &'a [Trip] {
        let start = self.cursor.min(self.trips.len());
        let end = self.cursor.saturating_add(PAGE_SIZE).min(self.trips.len());
        &self.trips[start..end]
    }

    /// Moves to the next page and returns it.
    pub fn advance(&mut self) -> &'a [Trip] {
        self.cursor = self.cursor.saturating_add(PAGE_SIZE);
        self.page()
    }
}
