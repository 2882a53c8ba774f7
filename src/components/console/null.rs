//! Null console component (no output)
//!
//! A no-op console for builds where diagnostic output is not wanted.
//! All output operations compile away to nothing.

use super::Console;

/// Null console configuration (empty - no configuration needed)
#[derive(Clone, Copy)]
pub struct NullConfig;

/// Null console component (no output)
///
/// Discards everything written to it. The compiler optimizes the calls
/// away since they have no side effects.
pub struct NullConsole;

impl NullConsole {
    /// Create a new null console
    pub const fn new(_config: NullConfig) -> Self {
        Self
    }

    /// Initialize null console (no-op)
    pub fn init(&self) {
        // Nothing to initialize
    }
}

impl Console for NullConsole {
    #[inline(always)]
    fn putc(&self, _c: u8) {
        // Discard output
    }

    #[inline(always)]
    fn puts(&self, _s: &str) {
        // Discard output
    }
}
