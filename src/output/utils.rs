//! Shared helpers for output formatters

use crate::entry::EntryId;
use crate::walk::Listing;

/// Append `bytes` to `out`, escaping anything that would break a
/// newline-separated stream.
pub fn escape_into(bytes: &[u8], out: &mut Vec<u8>) {
    for &b in bytes {
        match b {
            b'\\' => out.extend_from_slice(b"\\\\"),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\t' => out.extend_from_slice(b"\\t"),
            b'\r' => out.extend_from_slice(b"\\r"),
            0x00..=0x1f | 0x7f => out.extend_from_slice(format!("\\x{:02x}", b).as_bytes()),
            _ => out.push(b),
        }
    }
}

/// Ids from `order` that should be printed, in that order.
pub fn printed_ids<'a>(
    listing: &'a Listing,
    order: &'a [EntryId],
    leaf_only: bool,
) -> impl Iterator<Item = EntryId> + 'a {
    order
        .iter()
        .copied()
        .filter(move |&id| listing.is_printed(id, leaf_only))
}
