//! Listing output
//!
//! - `config` - Output configuration types
//! - `utils` - Escaping and printable-entry selection
//! - `delimited` - Paths followed by a newline or NUL terminator
//! - `json` - JSON array output

mod config;
mod delimited;
mod json;
mod utils;

pub use config::{OutputConfig, Terminator};
pub use delimited::DelimitedFormatter;
pub use json::{JsonEntry, json_entries, print_json};
pub use utils::{escape_into, printed_ids};
