//! pathls - list paths for machines: filtered, sorted, delimiter-terminated

pub mod entry;
pub mod error;
pub mod lists;
pub mod output;
pub mod sort;
pub mod walk;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use entry::{Entry, EntryArena, EntryId, EntryKind, NonLeaf, StatInfo};
pub use error::{ConfigError, Failure};
pub use lists::{read_list, read_lists, split_list};
pub use output::{DelimitedFormatter, OutputConfig, Terminator, print_json};
pub use sort::{SortKey, StatField, sort_entries};
pub use walk::{FsProbe, ListConfig, Listing, Probe, Walker};
