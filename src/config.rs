//! Configuration and component composition
//!
//! Compile-time selection of the console component via cargo features.
//! Exactly one `CONSOLE` static exists per build; `printk!` and the log
//! macros route through it via [`console()`].

// Each import is gated by the same condition as the static it feeds, so
// no feature combination leaves an unused import behind.
#[cfg(any(
    test,
    all(
        feature = "console-capture",
        not(any(feature = "console-pl011", feature = "console-null"))
    )
))]
use crate::components::console::capture::{CaptureConfig, CaptureConsole};
#[cfg(all(not(test), feature = "console-null", not(feature = "console-pl011")))]
use crate::components::console::null::{NullConfig, NullConsole};
#[cfg(all(
    not(test),
    any(
        feature = "console-pl011",
        not(any(feature = "console-null", feature = "console-capture"))
    )
))]
use crate::components::console::pl011::{Pl011Config, Pl011Console};
use crate::components::console::Console;

/// Console component selection (compile-time)
///
/// Cargo features pick the implementation:
/// - `console-pl011`: PL011 UART console (default for QEMU virt)
/// - `console-null`: No console output (production builds)
/// - `console-capture`: In-memory capture console
///
/// The features are additive, so when several are enabled the first in
/// the order above wins. Unit tests always get the capture console;
/// poking UART MMIO from a host test process would fault.
#[cfg(test)]
pub static CONSOLE: CaptureConsole = CaptureConsole::new(CaptureConfig);

#[cfg(all(not(test), feature = "console-pl011"))]
pub static CONSOLE: Pl011Console = Pl011Console::new(Pl011Config {
    mmio_base: 0x0900_0000, // QEMU virt PL011 UART base address
});

#[cfg(all(not(test), feature = "console-null", not(feature = "console-pl011")))]
pub static CONSOLE: NullConsole = NullConsole::new(NullConfig);

#[cfg(all(
    not(test),
    feature = "console-capture",
    not(any(feature = "console-pl011", feature = "console-null"))
))]
pub static CONSOLE: CaptureConsole = CaptureConsole::new(CaptureConfig);

// Default to PL011 if no console feature is specified
#[cfg(all(
    not(test),
    not(any(
        feature = "console-pl011",
        feature = "console-null",
        feature = "console-capture"
    ))
))]
pub static CONSOLE: Pl011Console = Pl011Console::new(Pl011Config {
    mmio_base: 0x0900_0000,
});

/// Initialize the console component
///
/// Must be called early in the boot sequence, before any diagnostic
/// output.
pub fn init_console() {
    CONSOLE.init();
}

/// Get a reference to the global console
///
/// This provides a typed reference to the selected console component for
/// use by the format engine and the logging macros.
pub fn console() -> &'static impl Console {
    &CONSOLE
}
