//! Output configuration types

/// Byte written after every path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terminator {
    #[default]
    Newline,
    Nul,
}

impl Terminator {
    pub fn byte(self) -> u8 {
        match self {
            Terminator::Newline => b'\n',
            Terminator::Nul => b'\0',
        }
    }
}

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    pub terminator: Terminator,
    /// Escape control bytes. Only honoured with [`Terminator::Newline`].
    pub escape: bool,
    /// Skip entries that have visible children.
    pub leaf_only: bool,
}

impl OutputConfig {
    /// Whether paths have to be escaped before writing.
    pub fn escapes(&self) -> bool {
        self.escape && self.terminator == Terminator::Newline
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: false,
            terminator: Terminator::Newline,
            escape: true,
            leaf_only: false,
        }
    }
}
