//! `#![no_std]` driver for the MAX31856 thermocouple-to-digital converter.
//!
//! Built on `embedded-hal` 1.0 `SpiDevice` (mode 1, see [`interface::spi::MODE`]).
//! The driver mirrors the conversion mode into `CR0`, triggers and polls one-shot
//! conversions, and decodes the cold-junction and linearized thermocouple
//! registers into degrees Celsius.
//!
//! ```no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::spi::SpiDevice;
//! use max31856::{Config, ConversionMode, Max31856, ThermocoupleType};
//!
//! fn sample<SPI: SpiDevice>(spi: SPI, delay: &mut impl DelayNs) -> Result<f32, max31856::Error<SPI::Error>> {
//!     let config = Config::new().thermocouple_type(ThermocoupleType::J).build();
//!     let mut sensor = Max31856::new_spi(spi, config);
//!     sensor.begin()?;
//!
//!     let celsius = sensor.read_thermocouple_temperature(delay)?;
//!     if celsius.is_nan() {
//!         // conversion did not finish within 250 ms
//!     }
//!
//!     sensor.set_conversion_mode(ConversionMode::Continuous)?;
//!     let _ambient = sensor.read_cj_temperature()?;
//!     Ok(celsius)
//! }
//! ```
#![cfg_attr(not(test), no_std)]

mod error;
mod log;

pub mod config;
pub mod conversion;
pub mod device;
pub mod fault;
pub mod interface;
pub mod params;
pub mod registers;

pub use crate::config::Config;
pub use crate::device::Max31856;
pub use crate::error::{Error, Result};
pub use crate::fault::FaultStatus;
pub use crate::params::{ConversionMode, NoiseFilter, ThermocoupleType};
