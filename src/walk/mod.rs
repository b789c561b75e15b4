//! Directory walking logic
//!
//! - `probe` - stat and directory listing, behind the [`Probe`] trait
//! - `policy` - which entries are visible and which directories are read
//! - `engine` - breadth-first expansion producing a [`Listing`]
//! - `filter` - ignore patterns and modification-time window

mod config;
mod engine;
mod filter;
mod policy;
mod probe;

pub use config::ListConfig;
pub use engine::{Listing, Walker};
pub use filter::compile_patterns;
pub use probe::{FsProbe, Probe};
