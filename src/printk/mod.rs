//! Format template interpreter
//!
//! A self-contained printf-style engine for diagnostic output. No
//! allocator, no `core::fmt` machinery, no panics: every input renders
//! to something, left to right, one byte at a time.
//!
//! # Template language
//!
//! Literal bytes pass through untouched. A `%` starts a directive (see
//! [`spec`] for the full grammar); the supported conversions are:
//!
//! - `%%`: literal percent sign, consumes no argument
//! - `%c`: single character
//! - `%s`: string, `(null)` when the argument is missing or not a string
//! - `%d`: signed decimal
//! - `%u`: unsigned decimal
//! - `%x` / `%X`: lowercase / uppercase hexadecimal
//! - `%p`: pointer, `0x` plus 16 zero-padded hex digits, `(nil)` for null
//!
//! Integer conversions truncate the carried value to 32 bits unless the
//! `l` length modifier is present. Unrecognized conversions are consumed
//! from the template without reading an argument and emit nothing.
//!
//! # Argument passing
//!
//! C varargs do not exist here; call sites pass a slice of [`Arg`]
//! values instead. Each directive that takes an argument consumes the
//! next slice element. Directives beyond the end of the slice render as
//! zero values (`(null)` and `(nil)` for `%s` and `%p`), never fault.

pub mod spec;

mod render;

use crate::components::console::Console;
use spec::{Length, SpecFlags};

/// A typed argument for the format engine
///
/// Stands in for C's variadic list. The conversion directive decides the
/// interpretation: a `%d` applied to an [`Arg::Uint`] reads the bits as
/// two's complement, a `%c` applied to an integer takes the low byte,
/// and so on. The `From` impls let macro call sites stay close to the
/// C shape.
#[derive(Debug, Clone, Copy)]
pub enum Arg<'a> {
    /// One character, for `%c`
    Char(u8),
    /// Borrowed text, for `%s`
    Str(&'a str),
    /// Signed integer, for `%d`
    Int(i64),
    /// Unsigned integer, for `%u`, `%x`, `%X`
    Uint(u64),
    /// Pointer value, for `%p`
    Ptr(usize),
}

impl<'a> Arg<'a> {
    /// Two's complement view of the argument
    fn as_i64(self) -> i64 {
        match self {
            Arg::Int(v) => v,
            Arg::Uint(v) => v as i64,
            Arg::Char(c) => c as i64,
            Arg::Ptr(p) => p as i64,
            Arg::Str(_) => 0,
        }
    }

    /// Raw bits of the argument, zero for strings
    fn as_u64(self) -> u64 {
        match self {
            Arg::Int(v) => v as u64,
            Arg::Uint(v) => v,
            Arg::Char(c) => c as u64,
            Arg::Ptr(p) => p as u64,
            Arg::Str(_) => 0,
        }
    }

    /// Low byte of the argument
    fn as_byte(self) -> u8 {
        self.as_u64() as u8
    }

    /// The borrowed string, if this argument is one
    fn as_str(self) -> Option<&'a str> {
        match self {
            Arg::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i32> for Arg<'_> {
    fn from(v: i32) -> Self {
        Arg::Int(v as i64)
    }
}

impl From<i64> for Arg<'_> {
    fn from(v: i64) -> Self {
        Arg::Int(v)
    }
}

impl From<isize> for Arg<'_> {
    fn from(v: isize) -> Self {
        Arg::Int(v as i64)
    }
}

impl From<u32> for Arg<'_> {
    fn from(v: u32) -> Self {
        Arg::Uint(v as u64)
    }
}

impl From<u64> for Arg<'_> {
    fn from(v: u64) -> Self {
        Arg::Uint(v)
    }
}

impl From<usize> for Arg<'_> {
    fn from(v: usize) -> Self {
        Arg::Uint(v as u64)
    }
}

impl From<u8> for Arg<'_> {
    fn from(v: u8) -> Self {
        Arg::Char(v)
    }
}

impl From<char> for Arg<'_> {
    fn from(v: char) -> Self {
        Arg::Char(v as u8)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(s)
    }
}

impl<T> From<*const T> for Arg<'_> {
    fn from(p: *const T) -> Self {
        Arg::Ptr(p as usize)
    }
}

impl<T> From<*mut T> for Arg<'_> {
    fn from(p: *mut T) -> Self {
        Arg::Ptr(p as usize)
    }
}

/// Take the next argument, or a zero sentinel once the slice runs out
fn take<'a>(args: &[Arg<'a>], cursor: &mut usize) -> Arg<'a> {
    let arg = args.get(*cursor).copied().unwrap_or(Arg::Uint(0));
    *cursor += 1;
    arg
}

/// Interpret `template`, consuming `args` per directive, writing to `con`
///
/// This is the engine under [`printk!`]; call it directly to target a
/// specific console instead of the configured one. Output is emitted
/// strictly left to right and the function cannot fail.
pub fn format_to<C: Console + ?Sized>(con: &C, template: &str, args: &[Arg]) {
    let bytes = template.as_bytes();
    let mut pos = 0;
    let mut cursor = 0;

    while pos < bytes.len() {
        if bytes[pos] != b'%' {
            con.putc(bytes[pos]);
            pos += 1;
            continue;
        }

        let (spec, used) = spec::parse_directive(&bytes[pos + 1..]);
        pos += 1 + used;

        // Template ended mid-directive: nothing to render
        let conversion = match spec.conversion {
            Some(c) => c,
            None => continue,
        };

        match conversion {
            b'%' => con.putc(b'%'),
            b'c' => con.putc(take(args, &mut cursor).as_byte()),
            b's' => match take(args, &mut cursor).as_str() {
                Some(s) => con.puts(s),
                None => con.puts("(null)"),
            },
            b'd' => {
                let arg = take(args, &mut cursor);
                let value = match spec.length {
                    Length::Long => arg.as_i64(),
                    _ => arg.as_i64() as i32 as i64,
                };
                render::signed_decimal(con, value, spec);
            }
            b'u' => {
                let arg = take(args, &mut cursor);
                let value = match spec.length {
                    Length::Long => arg.as_u64(),
                    _ => arg.as_u64() as u32 as u64,
                };
                render::unsigned_decimal(con, value, spec);
            }
            b'x' | b'X' => {
                let arg = take(args, &mut cursor);
                let value = match spec.length {
                    Length::Long => arg.as_u64(),
                    _ => arg.as_u64() as u32 as u64,
                };
                render::hexadecimal(con, value, conversion == b'X', spec);
            }
            b'p' => {
                let addr = take(args, &mut cursor).as_u64();
                if addr == 0 {
                    con.puts("(nil)");
                } else {
                    // Addresses always print as 16 zero-padded hex digits,
                    // whatever the directive asked for
                    let mut pspec = spec;
                    pspec.width = 16;
                    pspec.flags.insert(SpecFlags::ZERO_PAD);
                    con.puts("0x");
                    render::hexadecimal(con, addr, false, pspec);
                }
            }
            // Unrecognized conversion: swallowed, no argument read
            _ => {}
        }
    }
}

/// Print through the configured console
///
/// Arguments are converted via [`Arg::from`], so call sites keep the
/// C shape. Literal integers default to `i32`; suffix values that do
/// not fit, as in the example below.
///
/// # Examples
///
/// ```no_run
/// kdiag::printk!("var = %d, addr = 0x%x\n", 42, 0xdeadbeefu32);
/// ```
#[macro_export]
macro_rules! printk {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::printk::format_to(
            $crate::config::console(),
            $fmt,
            &[$($crate::printk::Arg::from($arg)),*],
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::console::capture::{CaptureConfig, CaptureConsole};

    fn fmt(template: &str, args: &[Arg]) -> String {
        let con = CaptureConsole::new(CaptureConfig);
        format_to(&con, template, args);
        con.with_output(|bytes| String::from_utf8(bytes.to_vec()).unwrap())
    }

    // ========================================================================
    // Literal text and escapes
    // ========================================================================

    #[test]
    fn test_literal_bytes_pass_through() {
        assert_eq!(fmt("hello world\n", &[]), "hello world\n");
        assert_eq!(fmt("", &[]), "");
    }

    #[test]
    fn test_percent_escape() {
        assert_eq!(fmt("100%%\n", &[]), "100%\n");
        assert_eq!(fmt("%%%%", &[]), "%%");
    }

    #[test]
    fn test_newline_not_translated_by_engine() {
        // CRLF policy belongs to the hardware console, not the engine
        assert_eq!(fmt("a\nb\n", &[]), "a\nb\n");
    }

    // ========================================================================
    // Character and string conversions
    // ========================================================================

    #[test]
    fn test_char_conversion() {
        assert_eq!(fmt("%c", &[Arg::Char(b'A')]), "A");
        assert_eq!(fmt("(%c)", &[Arg::Char(b'*')]), "(*)");
    }

    #[test]
    fn test_char_takes_low_byte_of_integers() {
        assert_eq!(fmt("%c", &[Arg::Int(0x41)]), "A");
        assert_eq!(fmt("%c", &[Arg::Uint(0x141)]), "A");
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!(fmt("[%s]", &[Arg::Str("core0")]), "[core0]");
        assert_eq!(fmt("%s%s", &[Arg::Str("ab"), Arg::Str("cd")]), "abcd");
    }

    #[test]
    fn test_string_missing_renders_null_marker() {
        assert_eq!(fmt("%s", &[]), "(null)");
    }

    #[test]
    fn test_string_type_mismatch_renders_null_marker() {
        assert_eq!(fmt("%s", &[Arg::Int(3)]), "(null)");
        assert_eq!(fmt("%s", &[Arg::Ptr(0x1000)]), "(null)");
    }

    // ========================================================================
    // Signed and unsigned decimals
    // ========================================================================

    #[test]
    fn test_signed_decimal() {
        assert_eq!(fmt("%d", &[Arg::Int(42)]), "42");
        assert_eq!(fmt("%d", &[Arg::Int(-42)]), "-42");
        assert_eq!(fmt("%d", &[Arg::Int(0)]), "0");
    }

    #[test]
    fn test_unsigned_decimal() {
        assert_eq!(fmt("%u", &[Arg::Uint(7)]), "7");
        assert_eq!(fmt("%u", &[Arg::Uint(4294967295)]), "4294967295");
    }

    #[test]
    fn test_signed_reads_unsigned_bits_as_twos_complement() {
        assert_eq!(fmt("%ld", &[Arg::Uint(u64::MAX)]), "-1");
    }

    #[test]
    fn test_unsigned_reads_negative_bits_as_twos_complement() {
        assert_eq!(fmt("%u", &[Arg::Int(-1)]), "4294967295");
        assert_eq!(fmt("%lu", &[Arg::Int(-1)]), "18446744073709551615");
    }

    // ========================================================================
    // Length modifiers and truncation
    // ========================================================================

    #[test]
    fn test_default_width_is_32_bits() {
        assert_eq!(fmt("%d", &[Arg::Int(0x1_0000_0001)]), "1");
        assert_eq!(fmt("%u", &[Arg::Uint(0x1_0000_0002)]), "2");
        assert_eq!(fmt("%x", &[Arg::Uint(0xAAAA_BBBB_CCCC)]), "bbbbcccc");
    }

    #[test]
    fn test_long_modifier_keeps_64_bits() {
        assert_eq!(fmt("%ld", &[Arg::Int(0x1_0000_0001)]), "4294967297");
        assert_eq!(fmt("%lu", &[Arg::Uint(u64::MAX)]), "18446744073709551615");
        assert_eq!(fmt("%lx", &[Arg::Uint(0xAAAA_BBBB_CCCC)]), "aaaabbbbcccc");
    }

    #[test]
    fn test_truncation_preserves_small_negatives() {
        assert_eq!(fmt("%d", &[Arg::Int(-5)]), "-5");
    }

    #[test]
    fn test_short_modifier_accepted_and_ignored() {
        assert_eq!(fmt("%hd", &[Arg::Int(-3)]), "-3");
        assert_eq!(fmt("%hu", &[Arg::Uint(9)]), "9");
    }

    // ========================================================================
    // Hexadecimal
    // ========================================================================

    #[test]
    fn test_hex_case_pair() {
        assert_eq!(fmt("%x", &[Arg::Uint(0xdeadbeef)]), "deadbeef");
        assert_eq!(fmt("%X", &[Arg::Uint(0xdeadbeef)]), "DEADBEEF");
    }

    #[test]
    fn test_hex_zero() {
        assert_eq!(fmt("%x", &[Arg::Uint(0)]), "0");
    }

    // ========================================================================
    // Width and padding through the engine
    // ========================================================================

    #[test]
    fn test_width_and_zero_pad() {
        assert_eq!(fmt("%05d", &[Arg::Int(42)]), "00042");
        assert_eq!(fmt("%5d", &[Arg::Int(42)]), "   42");
        assert_eq!(fmt("%08x", &[Arg::Uint(0x2a)]), "0000002a");
        assert_eq!(fmt("%04d", &[Arg::Int(-5)]), "-005");
    }

    #[test]
    fn test_parsed_but_unrendered_flags_are_inert() {
        // Left-align, sign, alternate form, and precision parse cleanly
        // but do not change the output
        assert_eq!(fmt("%-5d|", &[Arg::Int(42)]), "   42|");
        assert_eq!(fmt("%+d", &[Arg::Int(42)]), "42");
        assert_eq!(fmt("%#x", &[Arg::Uint(0x2a)]), "2a");
        assert_eq!(fmt("%.3d", &[Arg::Int(42)]), "42");
    }

    // ========================================================================
    // Pointers
    // ========================================================================

    #[test]
    fn test_pointer_fixed_16_digit_form() {
        assert_eq!(fmt("%p", &[Arg::Ptr(0xdeadbeef)]), "0x00000000deadbeef");
        assert_eq!(fmt("%p", &[Arg::Ptr(0xffff_0000_1000)]), "0x0000ffff00001000");
    }

    #[test]
    fn test_pointer_null_marker() {
        assert_eq!(fmt("%p", &[Arg::Ptr(0)]), "(nil)");
        assert_eq!(fmt("%p", &[]), "(nil)");
    }

    #[test]
    fn test_pointer_ignores_requested_width() {
        assert_eq!(fmt("%4p", &[Arg::Ptr(0x1000)]), "0x0000000000001000");
        assert_eq!(fmt("%p", &[Arg::Uint(0x2000)]), "0x0000000000002000");
    }

    // ========================================================================
    // Unknown and truncated directives
    // ========================================================================

    #[test]
    fn test_unknown_conversion_is_silent() {
        assert_eq!(fmt("a%qb", &[]), "ab");
    }

    #[test]
    fn test_unknown_conversion_reads_no_argument() {
        // The argument is still there for the next directive
        assert_eq!(fmt("%q%d", &[Arg::Int(5)]), "5");
    }

    #[test]
    fn test_trailing_percent_emits_nothing() {
        assert_eq!(fmt("100%", &[]), "100");
    }

    #[test]
    fn test_template_ending_mid_directive() {
        assert_eq!(fmt("%05", &[Arg::Int(1)]), "");
        assert_eq!(fmt("x%l", &[Arg::Int(1)]), "x");
    }

    #[test]
    fn test_missing_numeric_arguments_render_zero() {
        assert_eq!(fmt("%d/%u/%x", &[]), "0/0/0");
    }

    #[test]
    fn test_missing_char_argument_emits_nul() {
        // The zero sentinel's low byte is NUL; surrounding literals
        // still render
        assert_eq!(fmt("%c", &[]), "\0");
        assert_eq!(fmt("a%cb", &[]), "a\0b");
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        assert_eq!(fmt("%d", &[Arg::Int(1), Arg::Int(2)]), "1");
    }

    // ========================================================================
    // Argument conversions
    // ========================================================================

    #[test]
    fn test_from_impls_cover_common_call_sites() {
        assert_eq!(fmt("%d", &[Arg::from(-7)]), "-7");
        assert_eq!(fmt("%d", &[Arg::from(-7i64)]), "-7");
        assert_eq!(fmt("%u", &[Arg::from(7u32)]), "7");
        assert_eq!(fmt("%u", &[Arg::from(7usize)]), "7");
        assert_eq!(fmt("%c", &[Arg::from(b'!')]), "!");
        assert_eq!(fmt("%c", &[Arg::from('A')]), "A");
        assert_eq!(fmt("%s", &[Arg::from("str")]), "str");
    }

    #[test]
    fn test_from_raw_pointer() {
        let value = 5u32;
        let out = fmt("%p", &[Arg::from(&value as *const u32)]);
        assert!(out.starts_with("0x"));
        assert_eq!(out.len(), 18);
    }

    #[test]
    fn test_mixed_directive_sequence() {
        let out = fmt(
            "pid=%d name=%s flags=%08x at %p\n",
            &[
                Arg::Int(17),
                Arg::Str("idle"),
                Arg::Uint(0x13),
                Arg::Ptr(0x4000_0000),
            ],
        );
        assert_eq!(out, "pid=17 name=idle flags=00000013 at 0x0000000040000000\n");
    }
}
