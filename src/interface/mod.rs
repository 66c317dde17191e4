//! Bus interface abstraction for the MAX31856 driver.

pub mod spi;

#[cfg(test)]
pub(crate) mod fake;

/// Abstraction over the low-level bus access required by the driver.
///
/// Every method is a single exchange with chip-select held for its whole
/// duration; implementations must not split the address and data phases.
pub trait Max31856Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Acquires the bus before first use.
    ///
    /// Buses that are ready once constructed keep the default no-op.
    fn open(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;

    /// Reads consecutive registers into the provided buffer, most significant byte first.
    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;
}
