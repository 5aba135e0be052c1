//! Frequency counting with a deterministic tie-break.
//!
//! Among values with equal counts, the one whose first occurrence comes
//! earliest in iteration order wins.

use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// A distinct value and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount<T> {
    pub value: T,
    pub count: usize,
}

/// Counts per distinct value, most frequent first; ties keep first-seen order.
pub fn value_counts<T, I>(values: I) -> Vec<ValueCount<T>>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts = first_seen_counts(values);
    // stable sort, so equal counts stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Most frequent value, or `None` for an empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<ValueCount<T>> = None;
    for vc in first_seen_counts(values) {
        if best.as_ref().is_none_or(|b| vc.count > b.count) {
            best = Some(vc);
        }
    }
    best.map(|b| b.value)
}

fn first_seen_counts<T, I>(values: I) -> Vec<ValueCount<T>>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut slots: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<ValueCount<T>> = Vec::new();

    for value in values {
        match slots.get(&value) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                slots.insert(value.clone(), counts.len());
                counts.push(ValueCount { value, count: 1 });
            }
        }
    }

    counts
}
