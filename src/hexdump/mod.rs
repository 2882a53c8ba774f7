//! Memory hex dump
//!
//! A 16-column, address-labeled hex and ASCII view for inspecting raw
//! memory over the console, in the shape debuggers have printed since
//! forever:
//!
//! ```text
//! 0x40080000:    48 65 6c 6c 6f 2c 20 6b 65 72 6e 65 6c 21 21 21    Hello, kernel!!!
//! 0x40080010:    00 01 02 03 .. .. .. .. .. .. .. .. .. .. .. ..    ................
//! ```
//!
//! Rows start on 16-byte boundaries. When the requested region does not
//! fill a row, the columns outside it render as `..` placeholders in the
//! hex grid and are skipped entirely in the ASCII column; the bytes
//! behind them are never read.

use crate::components::console::Console;
use crate::printk::{format_to, Arg};

/// Bytes per output row
const ROW_BYTES: usize = 16;

/// True when a byte renders literally in the ASCII column
#[inline]
fn printable(byte: u8) -> bool {
    byte > 31 && byte < 127
}

/// Dump `len` bytes of memory starting at `addr` to `con`
///
/// The first row is aligned down to a 16-byte boundary, so the dump may
/// open with placeholder columns before `addr` and close with
/// placeholders after the region.
///
/// # Safety
/// Every address in `[addr, addr + len)` must be readable. Nothing
/// outside that range is dereferenced.
pub unsafe fn dump_region_to<C: Console + ?Sized>(con: &C, addr: usize, len: usize) {
    let end = addr + len;
    let mut row = addr & !0xF;

    while row < end {
        format_to(con, "0x%lx:    ", &[Arg::Uint(row as u64)]);

        // Hex cells
        for col in 0..ROW_BYTES {
            let at = row + col;
            if at < addr || at >= end {
                con.puts(".. ");
            } else {
                let byte = *(at as *const u8);
                if byte < 0x10 {
                    con.putc(b'0');
                }
                format_to(con, "%x ", &[Arg::Uint(byte as u64)]);
            }
        }

        con.puts("   ");

        // ASCII cells
        for col in 0..ROW_BYTES {
            let at = row + col;
            if at < addr || at >= end {
                con.putc(b'.');
            } else {
                let byte = *(at as *const u8);
                if printable(byte) {
                    con.putc(byte);
                } else {
                    con.putc(b'.');
                }
            }
        }

        con.putc(b'\n');
        row += ROW_BYTES;
    }
}

/// Dump a borrowed slice at its own address to `con`
pub fn dump_slice_to<C: Console + ?Sized>(con: &C, bytes: &[u8]) {
    // The borrow makes the whole region readable
    unsafe { dump_region_to(con, bytes.as_ptr() as usize, bytes.len()) }
}

/// Dump `len` bytes of memory through the configured console
///
/// # Safety
/// Every address in `[addr, addr + len)` must be readable.
pub unsafe fn dump_region(addr: usize, len: usize) {
    dump_region_to(crate::config::console(), addr, len);
}

/// Dump a borrowed slice through the configured console
pub fn dump_slice(bytes: &[u8]) {
    dump_slice_to(crate::config::console(), bytes);
}
