//! Register map definitions for the MAX31856 thermocouple converter.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{FaultMode, NoiseFilter, OpenCircuitMode};

/// Register address of `CR0` (configuration 0).
pub const REG_CR0: u8 = 0x00;
/// Register address of `CR1` (configuration 1).
pub const REG_CR1: u8 = 0x01;
/// Register address of `MASK` (fault mask).
pub const REG_MASK: u8 = 0x02;
/// Register address of `CJHF` (cold-junction high fault threshold).
pub const REG_CJHF: u8 = 0x03;
/// Register address of `CJLF` (cold-junction low fault threshold).
pub const REG_CJLF: u8 = 0x04;
/// Register address of `LTHFTH` (linearized high fault threshold, MSB).
pub const REG_LTHFTH: u8 = 0x05;
/// Register address of `LTHFTL` (linearized high fault threshold, LSB).
pub const REG_LTHFTL: u8 = 0x06;
/// Register address of `LTLFTH` (linearized low fault threshold, MSB).
pub const REG_LTLFTH: u8 = 0x07;
/// Register address of `LTLFTL` (linearized low fault threshold, LSB).
pub const REG_LTLFTL: u8 = 0x08;
/// Register address of `CJTO` (cold-junction temperature offset).
pub const REG_CJTO: u8 = 0x09;
/// Register address of `CJTH` (cold-junction temperature, MSB).
pub const REG_CJTH: u8 = 0x0A;
/// Register address of `CJTL` (cold-junction temperature, LSB).
pub const REG_CJTL: u8 = 0x0B;
/// Register address of `LTCBH` (linearized thermocouple temperature, byte 2).
pub const REG_LTCBH: u8 = 0x0C;
/// Register address of `LTCBM` (linearized thermocouple temperature, byte 1).
pub const REG_LTCBM: u8 = 0x0D;
/// Register address of `LTCBL` (linearized thermocouple temperature, byte 0).
pub const REG_LTCBL: u8 = 0x0E;
/// Register address of `SR` (fault status).
pub const REG_SR: u8 = 0x0F;

/// Number of addressable registers.
pub const REGISTER_COUNT: usize = 16;

/// `SR[7]` cold-junction out of range.
pub const FAULT_CJRANGE: u8 = 0x80;
/// `SR[6]` thermocouple out of range.
pub const FAULT_TCRANGE: u8 = 0x40;
/// `SR[5]` cold junction above its high threshold.
pub const FAULT_CJHIGH: u8 = 0x20;
/// `SR[4]` cold junction below its low threshold.
pub const FAULT_CJLOW: u8 = 0x10;
/// `SR[3]` thermocouple above its high threshold.
pub const FAULT_TCHIGH: u8 = 0x08;
/// `SR[2]` thermocouple below its low threshold.
pub const FAULT_TCLOW: u8 = 0x04;
/// `SR[1]` input over- or under-voltage.
pub const FAULT_OVUV: u8 = 0x02;
/// `SR[0]` thermocouple open circuit.
pub const FAULT_OPEN: u8 = 0x01;

/// Bitfield representation of the `CR0` register (address `0x00`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cr0 {
    // Mains rejection selection (bit 0).
    pub noise_filter: NoiseFilter,
    // Fault status clear request (bit 1).
    pub fault_clear: bool,
    // Comparator or interrupt fault mode (bit 2).
    pub fault_mode: FaultMode,
    // Cold-junction sensor disable (bit 3).
    pub cj_disable: bool,
    // Open-circuit fault detection (bits 5:4).
    pub open_circuit: OpenCircuitMode,
    // One-shot conversion request, cleared by the chip when done (bit 6).
    pub one_shot: bool,
    // Automatic conversion mode (bit 7).
    pub auto_convert: bool,
}

impl From<u8> for Cr0 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Cr0> for u8 {
    fn from(value: Cr0) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `CR1` register (address `0x01`).
///
/// Both fields are kept raw so every bit pattern survives a read-modify-write.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cr1 {
    // Thermocouple type (bits 3:0).
    pub tc_type: B4,
    // Averaging selection (bits 6:4).
    pub avgsel: B3,
    #[skip]
    __: B1,
}

impl From<u8> for Cr1 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Cr1> for u8 {
    fn from(value: Cr1) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `MASK` register (address `0x02`).
///
/// A set bit masks the fault from the FAULT pin.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultMask {
    // Open-circuit fault mask (bit 0).
    pub open: bool,
    // Over/under-voltage fault mask (bit 1).
    pub ovuv: bool,
    // Thermocouple low fault mask (bit 2).
    pub tc_low: bool,
    // Thermocouple high fault mask (bit 3).
    pub tc_high: bool,
    // Cold-junction low fault mask (bit 4).
    pub cj_low: bool,
    // Cold-junction high fault mask (bit 5).
    pub cj_high: bool,
    #[skip]
    __: B2,
}

impl From<u8> for FaultMask {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<FaultMask> for u8 {
    fn from(value: FaultMask) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `SR` register (address `0x0F`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    // Thermocouple open circuit (bit 0).
    pub open: bool,
    // Input over/under-voltage (bit 1).
    pub ovuv: bool,
    // Thermocouple low threshold (bit 2).
    pub tc_low: bool,
    // Thermocouple high threshold (bit 3).
    pub tc_high: bool,
    // Cold-junction low threshold (bit 4).
    pub cj_low: bool,
    // Cold-junction high threshold (bit 5).
    pub cj_high: bool,
    // Thermocouple out of range (bit 6).
    pub tc_range: bool,
    // Cold junction out of range (bit 7).
    pub cj_range: bool,
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Status> for u8 {
    fn from(value: Status) -> Self {
        value.into_bytes()[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cr0_layout_matches_datasheet() {
        let cr0 = Cr0::from(0b1101_0101);
        assert_eq!(cr0.noise_filter(), NoiseFilter::Hz50);
        assert!(!cr0.fault_clear());
        assert_eq!(cr0.fault_mode(), FaultMode::Interrupt);
        assert!(!cr0.cj_disable());
        assert_eq!(cr0.open_circuit(), OpenCircuitMode::LowResistance);
        assert!(cr0.one_shot());
        assert!(cr0.auto_convert());
    }

    #[test]
    fn cr0_mode_bits_encode_at_the_top() {
        let continuous = Cr0::new().with_auto_convert(true);
        assert_eq!(u8::from(continuous), 0x80);

        let one_shot = Cr0::new().with_one_shot(true);
        assert_eq!(u8::from(one_shot), 0x40);

        let oc = Cr0::new().with_open_circuit(OpenCircuitMode::LowResistance);
        assert_eq!(u8::from(oc), 0x10);
    }

    #[test]
    fn cr1_keeps_reserved_bit() {
        let cr1 = Cr1::from(0xF3).with_tc_type(0b0111);
        assert_eq!(u8::from(cr1), 0xF7);
        assert_eq!(cr1.avgsel(), 0b111);
    }

    #[test]
    fn status_bits_match_fault_masks() {
        let status = Status::from(FAULT_CJRANGE | FAULT_TCLOW | FAULT_OPEN);
        assert!(status.cj_range());
        assert!(!status.tc_range());
        assert!(!status.cj_high());
        assert!(!status.cj_low());
        assert!(!status.tc_high());
        assert!(status.tc_low());
        assert!(!status.ovuv());
        assert!(status.open());
    }

    #[test]
    fn power_on_values_decode_to_defaults() {
        let cr0 = Cr0::from(0x00);
        assert!(!cr0.auto_convert());
        assert_eq!(cr0.noise_filter(), NoiseFilter::Hz60);
        assert_eq!(cr0.open_circuit(), OpenCircuitMode::Disabled);

        let cr1 = Cr1::from(0x03);
        assert_eq!(cr1.tc_type(), 0b0011);
        assert_eq!(cr1.avgsel(), 0);

        let mask = FaultMask::from(0xFF);
        assert!(mask.open() && mask.cj_high());
    }

    #[test]
    fn fault_mask_reserved_bits_stay_clear() {
        let mask = FaultMask::new().with_cj_high(true).with_open(true);
        assert_eq!(u8::from(mask), 0b0010_0001);
    }
}
