//! Capture console component (in-memory)
//!
//! Records every byte written into a fixed buffer so callers can inspect
//! exactly what the format engine produced, without hardware. Used by the
//! test suite and usable on target for post-mortem buffers.
//!
//! The buffer does not grow. Once full, further bytes are dropped; `len`
//! stops at [`CAPTURE_CAPACITY`] so overflow is detectable.

use super::Console;
use spin::Mutex;

/// Capture buffer capacity in bytes
pub const CAPTURE_CAPACITY: usize = 4096;

/// Capture console configuration (empty - no configuration needed)
#[derive(Clone, Copy)]
pub struct CaptureConfig;

struct CaptureBuf {
    bytes: [u8; CAPTURE_CAPACITY],
    len: usize,
}

/// Capture console component (in-memory)
///
/// `putc` appends to an internal buffer behind a spin lock, which keeps
/// the `&self` signature of [`Console`] while allowing mutation.
pub struct CaptureConsole {
    buf: Mutex<CaptureBuf>,
}

impl CaptureConsole {
    /// Create a new, empty capture console
    pub const fn new(_config: CaptureConfig) -> Self {
        Self {
            buf: Mutex::new(CaptureBuf {
                bytes: [0; CAPTURE_CAPACITY],
                len: 0,
            }),
        }
    }

    /// Initialize capture console (starts empty)
    pub fn init(&self) {
        self.clear();
    }

    /// Number of bytes captured so far
    pub fn len(&self) -> usize {
        self.buf.lock().len
    }

    /// True if nothing has been captured
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard everything captured so far
    pub fn clear(&self) {
        self.buf.lock().len = 0;
    }

    /// Run `f` over the captured bytes while holding the buffer lock
    ///
    /// The console must not be written to from inside `f`.
    pub fn with_output<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        let buf = self.buf.lock();
        f(&buf.bytes[..buf.len])
    }
}

impl Console for CaptureConsole {
    fn putc(&self, c: u8) {
        let mut buf = self.buf.lock();
        let at = buf.len;
        if at < CAPTURE_CAPACITY {
            buf.bytes[at] = c;
            buf.len = at + 1;
        }
    }
}
