//! Format directive parsing
//!
//! Interprets the bytes of a `%` directive into a [`FormatSpec`]. The
//! grammar matches the classic printf prefix:
//!
//! ```text
//! % [flags]* [width] [.precision] [length] conversion
//! ```
//!
//! Parsing never fails. A directive cut off by the end of the template
//! yields a spec with no conversion byte, which the engine renders as
//! nothing; an unrecognized conversion byte is recorded as-is and left
//! for the engine's dispatch to ignore.

use bitflags::bitflags;

bitflags! {
    /// Flag characters accepted at the start of a directive
    ///
    /// Flags may repeat and appear in any order; repeats are idempotent.
    /// The space flag is accepted for compatibility but has no stored
    /// effect.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SpecFlags: u8 {
        /// `0`: pad with zeros instead of spaces
        const ZERO_PAD   = 1 << 0;

        /// `-`: left-align within the field width (parsed, not rendered)
        const LEFT_ALIGN = 1 << 1;

        /// `+`: always show the sign (parsed, not rendered)
        const SHOW_SIGN  = 1 << 2;

        /// `#`: alternate form (parsed, not rendered)
        const ALT_FORM   = 1 << 3;
    }
}

/// Length modifier parsed from a directive
///
/// Only `Long` changes behavior downstream: it widens the integer
/// conversions to 64 bits. `Short` is accepted and ignored; values
/// already arrive narrower than the carried 64-bit slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    /// No modifier: integer conversions truncate to 32 bits
    None,
    /// `h`: accepted, no effect
    Short,
    /// `l`: integer conversions use the full 64 bits
    Long,
}

/// One parsed `%` directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    /// Flag characters seen before the width
    pub flags: SpecFlags,

    /// Minimum field width, 0 when absent
    pub width: usize,

    /// Precision, `Some(0)` when a bare `.` was given, `None` when absent
    ///
    /// Recorded but not applied by any current conversion.
    pub precision: Option<usize>,

    /// Length modifier
    pub length: Length,

    /// Conversion byte, `None` when the template ended mid-directive
    pub conversion: Option<u8>,
}

impl FormatSpec {
    /// Spec with every field at its default
    pub const fn new() -> Self {
        Self {
            flags: SpecFlags::empty(),
            width: 0,
            precision: None,
            length: Length::None,
            conversion: None,
        }
    }
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one directive from `rest`, the bytes following a `%`
///
/// Returns the parsed spec and how many bytes of `rest` were consumed,
/// including the conversion byte when one was present.
pub fn parse_directive(rest: &[u8]) -> (FormatSpec, usize) {
    let mut spec = FormatSpec::new();
    let mut pos = 0;

    // Flags: any run of `- + space # 0`
    while pos < rest.len() {
        match rest[pos] {
            b'0' => spec.flags.insert(SpecFlags::ZERO_PAD),
            b'-' => spec.flags.insert(SpecFlags::LEFT_ALIGN),
            b'+' => spec.flags.insert(SpecFlags::SHOW_SIGN),
            b'#' => spec.flags.insert(SpecFlags::ALT_FORM),
            b' ' => {} // accepted, nothing stored
            _ => break,
        }
        pos += 1;
    }

    // Width: decimal digits
    while pos < rest.len() && rest[pos].is_ascii_digit() {
        spec.width = spec
            .width
            .saturating_mul(10)
            .saturating_add((rest[pos] - b'0') as usize);
        pos += 1;
    }

    // Precision: a dot marks presence even when no digits follow
    if pos < rest.len() && rest[pos] == b'.' {
        pos += 1;
        let mut precision = 0usize;
        while pos < rest.len() && rest[pos].is_ascii_digit() {
            precision = precision
                .saturating_mul(10)
                .saturating_add((rest[pos] - b'0') as usize);
            pos += 1;
        }
        spec.precision = Some(precision);
    }

    // Length modifier: at most one of `l` or `h`
    if pos < rest.len() {
        match rest[pos] {
            b'l' => {
                spec.length = Length::Long;
                pos += 1;
            }
            b'h' => {
                spec.length = Length::Short;
                pos += 1;
            }
            _ => {}
        }
    }

    // Conversion byte, whatever it is
    if pos < rest.len() {
        spec.conversion = Some(rest[pos]);
        pos += 1;
    }

    (spec, pos)
}
