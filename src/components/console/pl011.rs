//! PL011 UART console component (minimal)
//!
//! This is a MINIMAL implementation for diagnostic output only: poll the
//! flag register, stuff the data register. No interrupts, no DMA, no
//! buffering, no baud rate setup - the bootloader or firmware is assumed
//! to have configured the line already.

use super::Console;
use core::ptr;

/// PL011 UART registers (minimal subset)
#[repr(C)]
struct Pl011Regs {
    dr: u32,           // 0x00: Data register
    _rsrecr: [u32; 5], // 0x04-0x14: Status/error registers (unused)
    fr: u32,           // 0x18: Flag register
}

/// PL011 console component configuration
#[derive(Clone, Copy)]
pub struct Pl011Config {
    /// Physical MMIO base address
    pub mmio_base: usize,
}

/// PL011 minimal console component
///
/// Writes one byte at a time, spinning until the TX FIFO has room.
/// Newlines are translated to CRLF here, at the hardware boundary, so
/// that serial terminals render line breaks correctly; everything above
/// this component sees a plain `\n` stream.
///
/// # Safety
/// This component directly accesses MMIO registers. The kernel must
/// ensure the MMIO region is mapped before using this component.
pub struct Pl011Console {
    mmio_base: usize,
}

impl Pl011Console {
    /// Create a new PL011 console from configuration
    ///
    /// # Safety
    /// The caller must ensure the MMIO base address is valid and properly
    /// mapped in the kernel's address space.
    pub const fn new(config: Pl011Config) -> Self {
        Self {
            mmio_base: config.mmio_base,
        }
    }

    /// Initialize the PL011 UART (minimal setup)
    ///
    /// Assumes the bootloader or firmware has already configured baud
    /// rate, word length, parity, and stop bits. This just verifies the
    /// registers are reachable.
    pub fn init(&self) {
        unsafe {
            let regs = self.mmio_base as *mut Pl011Regs;
            let _flags = ptr::read_volatile(&(*regs).fr);
        }
    }

    /// Check if TX FIFO is full
    #[inline]
    fn tx_full(&self) -> bool {
        unsafe {
            let regs = self.mmio_base as *const Pl011Regs;
            let fr = ptr::read_volatile(&(*regs).fr);
            (fr & (1 << 5)) != 0 // TXFF bit
        }
    }

    /// Push one raw byte into the TX FIFO, spinning while it is full
    fn write_byte(&self, c: u8) {
        unsafe {
            let regs = self.mmio_base as *mut Pl011Regs;

            while self.tx_full() {
                core::hint::spin_loop();
            }

            ptr::write_volatile(&mut (*regs).dr, c as u32);
        }
    }
}

impl Console for Pl011Console {
    fn putc(&self, c: u8) {
        if c == b'\n' {
            self.write_byte(b'\r'); // CRLF for serial terminals
        }
        self.write_byte(c);
    }
}
