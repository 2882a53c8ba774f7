//! Diagnostic components
//!
//! Minimal components the diagnostic core needs to reach the outside
//! world. These are NOT full-featured drivers - they provide only what
//! `printk` and the hex dump need to function.
//!
//! # Component Composition (Compile-Time)
//!
//! Components are composed at compile-time via cargo features rather than
//! discovered at runtime:
//!
//! ```ignore
//! #[cfg(feature = "console-pl011")]
//! static CONSOLE: Pl011Console = Pl011Console::new(Pl011Config {
//!     mmio_base: 0x0900_0000,
//! });
//! ```

pub mod console;
