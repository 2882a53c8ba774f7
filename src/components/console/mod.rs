//! Console component trait
//!
//! The single-character sink every diagnostic path writes through.
//! This is NOT a full UART driver - just enough for `printk!` and the
//! hex dump to reach a terminal.
//!
//! The format engine hands components raw bytes and never looks back.
//! Components that feed real terminals translate `\n` to CRLF inside
//! `putc` (see [`pl011`]); components that record or discard output keep
//! the byte stream exactly as written.

/// Console trait for diagnostic output
///
/// Implementations provide character output for the format engine. This
/// is minimal by design - only `putc()` is required.
pub trait Console: Send + Sync {
    /// Write a single byte to the console
    ///
    /// This is a blocking operation. The implementation should wait for
    /// the hardware to be ready before writing.
    fn putc(&self, c: u8);

    /// Write a string, byte by byte
    ///
    /// Default implementation forwards each byte to `putc`. Can be
    /// overridden for more efficient implementations.
    fn puts(&self, s: &str) {
        for byte in s.bytes() {
            self.putc(byte);
        }
    }
}

// Component implementations
pub mod capture;
pub mod null;
pub mod pl011;
