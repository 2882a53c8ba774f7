//! Severity-tagged logging
//!
//! Thin wrappers over [`printk!`](crate::printk!) that prepend a fixed
//! severity label. Labels are colored with ANSI escapes (except INFO)
//! and padded so the message text starts in the same column at every
//! level:
//!
//! ```text
//! [ERROR] red
//! [WARN]  yellow
//! [INFO]  plain
//! [DEBUG] cyan
//! ```
//!
//! Levels are compiled in or out with the `log-*` cargo features. Each
//! feature implies the quieter ones, so `log-debug` turns everything on
//! while plain `log-error` keeps only errors. A disabled level expands
//! to nothing; its arguments are not evaluated.
//!
//! `log-info` is the default. `log-debug` is off by default.

/// Log an error message (red label)
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! log_error {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::printk!(concat!("\x1b[31m[ERROR]\x1b[0m ", $fmt) $(, $arg)*)
    };
}

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! log_error {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {};
}

/// Log a warning message (yellow label)
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! log_warn {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::printk!(concat!("\x1b[33m[WARN]\x1b[0m  ", $fmt) $(, $arg)*)
    };
}

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! log_warn {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {};
}

/// Log an informational message (plain label)
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! log_info {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::printk!(concat!("[INFO]  ", $fmt) $(, $arg)*)
    };
}

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! log_info {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {};
}

/// Log a debug message (cyan label)
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! log_debug {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::printk!(concat!("\x1b[36m[DEBUG]\x1b[0m ", $fmt) $(, $arg)*)
    };
}

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! log_debug {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {};
}
