//! Numeric rendering
//!
//! Digits are produced least-significant first into a fixed scratch
//! buffer, then emitted in reverse. Nothing here allocates and nothing
//! here can fail: the buffers are sized for the worst case of a 64-bit
//! value, proven below.
//!
//! Padding rules follow classic printf behavior for the supported
//! subset: zero padding sits between the sign and the digits, space
//! padding sits before the sign, and a width smaller than the rendered
//! digits pads nothing.

use static_assertions::{const_assert, const_assert_eq};

use super::spec::{FormatSpec, SpecFlags};
use crate::components::console::Console;

/// Scratch capacity for decimal digits of a `u64`
const DEC_DIGITS: usize = 20;

/// Scratch capacity for hex digits of a `u64`
const HEX_DIGITS: usize = 16;

// u64::MAX is 18446744073709551615 (20 digits) and has 16 hex nibbles.
const_assert!((u64::MAX as u128) < 10u128.pow(DEC_DIGITS as u32));
const_assert_eq!(HEX_DIGITS as u32 * 4, u64::BITS);

/// Emit the pad run, then the scratch digits in display order
///
/// `digits` holds the value least-significant first.
fn pad_and_emit<C: Console + ?Sized>(con: &C, digits: &[u8], spec: FormatSpec) {
    let pad = spec.width.saturating_sub(digits.len());
    let padder = if spec.flags.contains(SpecFlags::ZERO_PAD) {
        b'0'
    } else {
        b' '
    };
    for _ in 0..pad {
        con.putc(padder);
    }
    for &digit in digits.iter().rev() {
        con.putc(digit);
    }
}

/// Render a signed decimal with the directive's width and padding
///
/// The sign counts against the field width. With zero padding the sign
/// is emitted first, ahead of the zeros; with space padding it is
/// emitted after the spaces, flush against the digits.
pub(crate) fn signed_decimal<C: Console + ?Sized>(con: &C, value: i64, spec: FormatSpec) {
    let negative = value < 0;
    let mut magnitude = value.unsigned_abs();

    let mut digits = [0u8; DEC_DIGITS];
    let mut count = 0;
    if magnitude == 0 {
        digits[0] = b'0';
        count = 1;
    } else {
        while magnitude > 0 {
            digits[count] = b'0' + (magnitude % 10) as u8;
            magnitude /= 10;
            count += 1;
        }
    }

    let reserved = count + usize::from(negative);
    let pad = spec.width.saturating_sub(reserved);
    let zero_pad = spec.flags.contains(SpecFlags::ZERO_PAD);

    if negative && zero_pad {
        con.putc(b'-');
    }
    let padder = if zero_pad { b'0' } else { b' ' };
    for _ in 0..pad {
        con.putc(padder);
    }
    if negative && !zero_pad {
        con.putc(b'-');
    }
    for &digit in digits[..count].iter().rev() {
        con.putc(digit);
    }
}

/// Render an unsigned decimal with the directive's width and padding
pub(crate) fn unsigned_decimal<C: Console + ?Sized>(con: &C, mut value: u64, spec: FormatSpec) {
    let mut digits = [0u8; DEC_DIGITS];
    let mut count = 0;
    if value == 0 {
        digits[0] = b'0';
        count = 1;
    } else {
        while value > 0 {
            digits[count] = b'0' + (value % 10) as u8;
            value /= 10;
            count += 1;
        }
    }

    pad_and_emit(con, &digits[..count], spec);
}

/// Render a hexadecimal value, lowercase or uppercase
///
/// No `0x` prefix; callers that want one emit it themselves.
pub(crate) fn hexadecimal<C: Console + ?Sized>(
    con: &C,
    mut value: u64,
    uppercase: bool,
    spec: FormatSpec,
) {
    let letter = if uppercase { b'A' } else { b'a' };

    let mut digits = [0u8; HEX_DIGITS];
    let mut count = 0;
    if value == 0 {
        digits[0] = b'0';
        count = 1;
    } else {
        while value > 0 {
            let nibble = (value % 16) as u8;
            digits[count] = if nibble < 10 {
                b'0' + nibble
            } else {
                letter + (nibble - 10)
            };
            value /= 16;
            count += 1;
        }
    }

    pad_and_emit(con, &digits[..count], spec);
}
