//! SPI interface implementation built on top of `embedded-hal` `SpiDevice`.

use embedded_hal::spi::{Mode, Operation, SpiDevice, MODE_1};

use super::Max31856Interface;

/// SPI mode expected by the MAX31856 (CPOL = 0, CPHA = 1). Mode 3 also works.
pub const MODE: Mode = MODE_1;

/// Default SCLK rate; the part accepts up to 5 MHz.
pub const DEFAULT_CLOCK_HZ: u32 = 1_000_000;

// Bit 7 of the address byte selects a write.
const WRITE_FLAG: u8 = 0x80;

/// SPI-based interface implementation for the MAX31856 driver.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new interface from the provided SPI device abstraction.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Builds the address byte used to access registers over SPI.
    fn command_byte(register: u8, is_read: bool) -> u8 {
        if is_read {
            register & !WRITE_FLAG
        } else {
            register | WRITE_FLAG
        }
    }

    /// Provides mutable access to the wrapped SPI device.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Max31856Interface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        let command = [Self::command_byte(register, false)];
        let payload = [value];
        let mut operations = [Operation::Write(&command), Operation::Write(&payload)];
        self.spi.transaction(&mut operations)
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        let command = [Self::command_byte(register, true)];
        let mut operations = [Operation::Write(&command), Operation::Read(buf)];
        self.spi.transaction(&mut operations)
    }
}
