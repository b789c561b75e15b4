//! Delimiter-terminated path output
//!
//! One path per record, each followed by the configured terminator. This is
//! the default format and the one meant for piping into other tools.

use std::io;

use termcolor::{BufferedStandardStream, Color, ColorChoice, ColorSpec, WriteColor};

use crate::entry::{Entry, EntryId};
use crate::walk::Listing;

use super::config::OutputConfig;
use super::utils::{escape_into, printed_ids};

/// Writes paths to any colour-capable writer.
pub struct DelimitedFormatter<W> {
    config: OutputConfig,
    out: W,
    scratch: Vec<u8>,
}

impl DelimitedFormatter<BufferedStandardStream> {
    /// Formatter writing to buffered stdout.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(config, BufferedStandardStream::stdout(choice))
    }
}

impl<W: WriteColor> DelimitedFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self {
            config,
            out,
            scratch: Vec::new(),
        }
    }

    /// Write every printable entry of `listing` in `order`.
    pub fn write_listing(&mut self, listing: &Listing, order: &[EntryId]) -> io::Result<usize> {
        let mut written = 0;
        for id in printed_ids(listing, order, self.config.leaf_only) {
            self.write_entry(&listing.entries[id])?;
            written += 1;
        }
        Ok(written)
    }

    /// Write a single path and its terminator.
    pub fn write_entry(&mut self, entry: &Entry) -> io::Result<()> {
        let raw = entry.text().as_os_str().as_encoded_bytes();
        let bytes = if self.config.escapes() {
            self.scratch.clear();
            escape_into(raw, &mut self.scratch);
            &self.scratch[..]
        } else {
            raw
        };

        let colored = self.config.use_color && entry.is_dir();
        if colored {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        }
        self.out.write_all(bytes)?;
        if colored {
            self.out.reset()?;
        }
        self.out.write_all(&[self.config.terminator.byte()])
    }

    /// Flush and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
