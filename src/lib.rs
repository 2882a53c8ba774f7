//! kdiag - diagnostic output core for an ARM64 kernel
//!
//! A C-style `printk` format engine, a 16-column hex dump built on top of
//! it, and severity-tagged logging macros. Everything funnels through a
//! single-character console component, so the whole crate works before the
//! allocator, the scheduler, or interrupts exist.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//! - `components`: Console components (PL011 UART, null, capture)
//! - `config`: Compile-time console selection via cargo features
//! - `printk`: Format template interpreter and numeric rendering
//! - `hexdump`: Address-labeled memory inspection view
//! - `log`: Severity-tagged logging macros over `printk`
//!
//! # Constraints
//!
//! The engine allocates nothing and keeps no state between calls. Output
//! is emitted strictly left to right, one byte at a time. Concurrent
//! callers must serialize access to the shared console themselves; the
//! engine does not lock.

#![cfg_attr(not(test), no_std)]

pub mod components;
pub mod config;
pub mod hexdump;
pub mod log;
pub mod printk;

pub use components::console::Console;
pub use printk::{format_to, Arg};
