//! JSON output formatting

use std::io::{self, Write};
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entry::{Entry, EntryId};
use crate::walk::Listing;

use super::utils::printed_ids;

/// One printed entry, as serialized.
#[derive(Debug, Clone, Serialize)]
pub struct JsonEntry {
    pub path: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessed: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

fn timestamp(time: Option<SystemTime>) -> Option<DateTime<Utc>> {
    time.map(DateTime::<Utc>::from)
}

impl From<&Entry> for JsonEntry {
    fn from(entry: &Entry) -> Self {
        let stat = entry.stat();
        Self {
            path: entry.text().to_string_lossy().into_owned(),
            kind: stat.map(|s| s.kind.as_str()),
            size: stat.map(|s| s.size),
            accessed: timestamp(stat.and_then(|s| s.accessed)),
            changed: timestamp(stat.and_then(|s| s.changed)),
            modified: timestamp(stat.and_then(|s| s.modified)),
        }
    }
}

/// Printed entries of `listing` in `order`, ready for serialization.
pub fn json_entries(listing: &Listing, order: &[EntryId], leaf_only: bool) -> Vec<JsonEntry> {
    printed_ids(listing, order, leaf_only)
        .map(|id| JsonEntry::from(&listing.entries[id]))
        .collect()
}

/// Print the listing as a pretty-printed JSON array to stdout.
pub fn print_json(listing: &Listing, order: &[EntryId], leaf_only: bool) -> io::Result<()> {
    let entries = json_entries(listing, order, leaf_only);
    let json = serde_json::to_string_pretty(&entries).map_err(io::Error::other)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()
}
