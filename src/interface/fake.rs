//! Register-file stand-in for the chip, used by the driver tests.

use super::Max31856Interface;
use crate::registers::{REG_CR0, REGISTER_COUNT};

const WRITE_LOG_LEN: usize = 32;
const ONE_SHOT: u8 = 0x40;

/// Error raised by [`FakeChip`] when asked to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// In-memory register file that answers like the chip.
///
/// Writes land in `registers` and are logged in order. The one-shot bit in
/// `CR0` clears itself after `conversion_reads` further reads of `CR0`, or
/// never if `conversion_reads` is `None`.
pub struct FakeChip {
    pub registers: [u8; REGISTER_COUNT],
    pub conversion_reads: Option<u32>,
    pub fail_open: bool,
    pub fail_writes: bool,
    pending_reads: Option<u32>,
    writes: [(u8, u8); WRITE_LOG_LEN],
    write_count: usize,
}

impl FakeChip {
    pub fn new() -> Self {
        Self {
            registers: [0; REGISTER_COUNT],
            conversion_reads: Some(0),
            fail_open: false,
            fail_writes: false,
            pending_reads: None,
            writes: [(0, 0); WRITE_LOG_LEN],
            write_count: 0,
        }
    }

    pub fn with_register(mut self, register: u8, value: u8) -> Self {
        self.registers[register as usize] = value;
        self
    }

    pub fn writes(&self) -> &[(u8, u8)] {
        &self.writes[..self.write_count]
    }
}

impl Max31856Interface for FakeChip {
    type Error = BusFault;

    fn open(&mut self) -> core::result::Result<(), Self::Error> {
        if self.fail_open { Err(BusFault) } else { Ok(()) }
    }

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        if self.fail_writes {
            return Err(BusFault);
        }

        let register = register & 0x7F;
        assert!(self.write_count < WRITE_LOG_LEN, "write log overflow");
        self.writes[self.write_count] = (register, value);
        self.write_count += 1;
        self.registers[register as usize] = value;

        if register == REG_CR0 && value & ONE_SHOT != 0 {
            self.pending_reads = self.conversion_reads;
        }
        Ok(())
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        let start = (register & 0x7F) as usize;
        if start == REG_CR0 as usize {
            if let Some(remaining) = self.pending_reads {
                if remaining == 0 {
                    self.registers[REG_CR0 as usize] &= !ONE_SHOT;
                    self.pending_reads = None;
                } else {
                    self.pending_reads = Some(remaining - 1);
                }
            }
        }

        for (offset, byte) in buf.iter_mut().enumerate() {
            *byte = self.registers[(start + offset) % REGISTER_COUNT];
        }
        Ok(())
    }
}
