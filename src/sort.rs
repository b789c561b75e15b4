//! Ordering of a finished listing

use std::cmp::Ordering;
use std::time::SystemTime;

use crate::entry::{Entry, EntryArena, EntryId, StatInfo};

/// Numeric metadata a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    Size,
    Accessed,
    Changed,
    Modified,
}

/// What to sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Discovery order.
    None,
    /// Raw bytes of the path.
    #[default]
    Name,
    Numeric(StatField),
}

impl SortKey {
    /// Natural direction: names ascend, sizes and times put the largest
    /// and newest first.
    fn polarity(self) -> Polarity {
        match self {
            SortKey::None | SortKey::Name => Polarity::Ascending,
            SortKey::Numeric(_) => Polarity::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarity {
    Ascending,
    Descending,
}

/// Comparable value of one field. Missing stat data sorts lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum FieldValue {
    Missing,
    Size(u64),
    Time(SystemTime),
}

fn field_value(stat: Option<&StatInfo>, field: StatField) -> FieldValue {
    let Some(stat) = stat else {
        return FieldValue::Missing;
    };
    let time = match field {
        StatField::Size => return FieldValue::Size(stat.size),
        StatField::Accessed => stat.accessed,
        StatField::Changed => stat.changed,
        StatField::Modified => stat.modified,
    };
    time.map_or(FieldValue::Missing, FieldValue::Time)
}

fn compare(a: &Entry, b: &Entry, key: SortKey) -> Ordering {
    match key {
        SortKey::None => Ordering::Equal,
        SortKey::Name => a
            .text()
            .as_os_str()
            .as_encoded_bytes()
            .cmp(b.text().as_os_str().as_encoded_bytes()),
        SortKey::Numeric(field) => field_value(a.stat(), field).cmp(&field_value(b.stat(), field)),
    }
}

/// Order every entry of `entries` by `key`.
///
/// The arena is left untouched; the result is a permutation of its ids.
/// Equal entries keep their discovery order, whichever direction is used.
pub fn sort_entries(entries: &EntryArena, key: SortKey, reverse: bool) -> Vec<EntryId> {
    let mut order: Vec<EntryId> = entries.ids().collect();
    if key == SortKey::None {
        return order;
    }

    let descending = (key.polarity() == Polarity::Descending) != reverse;
    order.sort_by(|&a, &b| {
        let ord = compare(&entries[a], &entries[b], key);
        if descending { ord.reverse() } else { ord }
    });
    order
}
