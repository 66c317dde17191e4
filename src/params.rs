//! Strongly typed parameter enumerations for the MAX31856 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep configuration values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use max31856::params::{AveragingMode, ConversionMode, NoiseFilter, ThermocoupleType};
//!
//! let tc = ThermocoupleType::from_bits(0b0011);
//! assert_eq!(tc, ThermocoupleType::K);
//! assert_eq!(AveragingMode::from_bits(0b110), AveragingMode::Samples16);
//! let _ = (ConversionMode::Continuous, NoiseFilter::Hz50);
//! ```

use modular_bitfield::prelude::Specifier;

/// Host-side conversion behaviour, mirrored into `CR0.CMODE` and `CR0.1SHOT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionMode {
    /// Trigger a conversion per reading and wait for it to complete.
    #[default]
    OneShot,
    /// One-shot hardware mode; the caller triggers and waits on its own.
    OneShotNoWait,
    /// Automatic conversions roughly every 100 ms.
    Continuous,
}

impl ConversionMode {
    /// Returns `true` when the chip free-runs without per-reading triggers.
    pub const fn is_continuous(self) -> bool {
        matches!(self, Self::Continuous)
    }
}

/// Thermocouple and voltage-input selections encoded in `CR1[3:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThermocoupleType {
    /// Type B.
    B,
    /// Type E.
    E,
    /// Type J.
    J,
    /// Type K.
    #[default]
    K,
    /// Type N.
    N,
    /// Type R.
    R,
    /// Type S.
    S,
    /// Type T.
    T,
    /// Voltage mode, gain 8 (`1000`).
    G8,
    /// Voltage mode, gain 32 (`1100`).
    G32,
    /// Voltage mode with non-zero don't-care bits (`1001..=1011`, `1101..=1111`).
    ///
    /// Holds the raw nibble so a read-back writes the same bits again.
    Voltage(u8),
}

impl ThermocoupleType {
    /// Returns the 4-bit field encoding.
    pub const fn bits(self) -> u8 {
        match self {
            Self::B => 0b0000,
            Self::E => 0b0001,
            Self::J => 0b0010,
            Self::K => 0b0011,
            Self::N => 0b0100,
            Self::R => 0b0101,
            Self::S => 0b0110,
            Self::T => 0b0111,
            Self::G8 => 0b1000,
            Self::G32 => 0b1100,
            Self::Voltage(bits) => 0b1000 | (bits & 0b0111),
        }
    }

    /// Decodes the low nibble of `CR1`. Bits above the nibble are ignored.
    ///
    /// Lossless: `from_bits(v).bits() == v & 0x0F` for every byte.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x0F {
            0b0000 => Self::B,
            0b0001 => Self::E,
            0b0010 => Self::J,
            0b0011 => Self::K,
            0b0100 => Self::N,
            0b0101 => Self::R,
            0b0110 => Self::S,
            0b0111 => Self::T,
            0b1000 => Self::G8,
            0b1100 => Self::G32,
            other => Self::Voltage(other),
        }
    }

    /// Returns `true` for the voltage-input gain modes.
    pub const fn is_voltage_mode(self) -> bool {
        matches!(self, Self::G8 | Self::G32 | Self::Voltage(_))
    }

    /// Returns the voltage-mode gain selected by `CR1[2]`, or `None` for thermocouples.
    pub const fn gain(self) -> Option<u8> {
        match self {
            Self::G8 => Some(8),
            Self::G32 => Some(32),
            Self::Voltage(bits) if bits & 0b0100 != 0 => Some(32),
            Self::Voltage(_) => Some(8),
            _ => None,
        }
    }
}

/// Sample averaging selections encoded in `CR1[6:4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AveragingMode {
    /// Single sample (power-on default).
    #[default]
    Samples1,
    /// 2 samples.
    Samples2,
    /// 4 samples.
    Samples4,
    /// 8 samples.
    Samples8,
    /// 16 samples.
    Samples16,
}

impl AveragingMode {
    /// Returns the 3-bit field encoding.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Samples1 => 0b000,
            Self::Samples2 => 0b001,
            Self::Samples4 => 0b010,
            Self::Samples8 => 0b011,
            Self::Samples16 => 0b100,
        }
    }

    /// Decodes `AVGSEL`; every `1xx` pattern selects 16 samples.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0b000 => Self::Samples1,
            0b001 => Self::Samples2,
            0b010 => Self::Samples4,
            0b011 => Self::Samples8,
            _ => Self::Samples16,
        }
    }

    /// Returns the number of samples averaged per conversion.
    pub const fn samples(self) -> u8 {
        match self {
            Self::Samples1 => 1,
            Self::Samples2 => 2,
            Self::Samples4 => 4,
            Self::Samples8 => 8,
            Self::Samples16 => 16,
        }
    }
}

/// Mains rejection filter selection (`CR0.50/60Hz`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum NoiseFilter {
    /// Reject 60 Hz and harmonics (power-on default).
    Hz60 = 0,
    /// Reject 50 Hz and harmonics.
    Hz50 = 1,
}

/// Open-circuit detection settings encoded in `CR0[5:4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum OpenCircuitMode {
    /// Detection disabled.
    Disabled = 0b00,
    /// Enabled, source resistance below 5 kΩ.
    LowResistance = 0b01,
    /// Enabled, 5 kΩ to 40 kΩ with a time constant under 2 ms.
    MidResistanceFast = 0b10,
    /// Enabled, 5 kΩ to 40 kΩ with a time constant over 2 ms.
    MidResistanceSlow = 0b11,
}

/// FAULT pin behaviour (`CR0.FAULT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum FaultMode {
    /// Faults clear automatically once the condition goes away.
    Comparator = 0,
    /// Faults latch until cleared through `CR0.FAULTCLR`.
    Interrupt = 1,
}
