//! Fault status decoding and fault mask helpers.

use crate::registers::{FaultMask, Status};

/// Decoded view of the `SR` register with explicit flags.
///
/// A snapshot of a single register read; it does not track later changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultStatus {
    /// SR[7] CJRANGE, cold junction out of range.
    pub cj_range: bool,
    /// SR[6] TCRANGE, thermocouple out of range.
    pub tc_range: bool,
    /// SR[5] CJHIGH.
    pub cj_high: bool,
    /// SR[4] CJLOW.
    pub cj_low: bool,
    /// SR[3] TCHIGH.
    pub tc_high: bool,
    /// SR[2] TCLOW.
    pub tc_low: bool,
    /// SR[1] OVUV, input over- or under-voltage.
    pub ovuv: bool,
    /// SR[0] OPEN, thermocouple open circuit.
    pub open: bool,
}

impl FaultStatus {
    /// Builds a snapshot from the raw `SR` byte.
    pub fn from_register(raw: u8) -> Self {
        let status = Status::from(raw);
        Self {
            cj_range: status.cj_range(),
            tc_range: status.tc_range(),
            cj_high: status.cj_high(),
            cj_low: status.cj_low(),
            tc_high: status.tc_high(),
            tc_low: status.tc_low(),
            ovuv: status.ovuv(),
            open: status.open(),
        }
    }

    /// Re-encodes the flags into the `SR` bit layout.
    pub fn bits(&self) -> u8 {
        u8::from(
            Status::new()
                .with_cj_range(self.cj_range)
                .with_tc_range(self.tc_range)
                .with_cj_high(self.cj_high)
                .with_cj_low(self.cj_low)
                .with_tc_high(self.tc_high)
                .with_tc_low(self.tc_low)
                .with_ovuv(self.ovuv)
                .with_open(self.open),
        )
    }

    /// Returns `true` if any fault flag is set.
    pub fn has_fault(&self) -> bool {
        self.bits() != 0
    }
}

impl From<u8> for FaultStatus {
    fn from(raw: u8) -> Self {
        Self::from_register(raw)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FaultStatus {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "FaultStatus {{ CJRANGE: {}, TCRANGE: {}, CJHIGH: {}, CJLOW: {}, TCHIGH: {}, TCLOW: {}, OVUV: {}, OPEN: {} }}",
            self.cj_range,
            self.tc_range,
            self.cj_high,
            self.cj_low,
            self.tc_high,
            self.tc_low,
            self.ovuv,
            self.open
        );
    }
}

impl FaultMask {
    /// Mask value that reports every fault on the FAULT pin.
    pub fn report_all() -> Self {
        Self::new()
    }

    /// Power-on mask value, every maskable fault suppressed.
    pub fn suppress_all() -> Self {
        Self::new()
            .with_open(true)
            .with_ovuv(true)
            .with_tc_low(true)
            .with_tc_high(true)
            .with_cj_low(true)
            .with_cj_high(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::{FAULT_CJHIGH, FAULT_OPEN, FAULT_OVUV, FAULT_TCRANGE};

    #[test]
    fn decodes_individual_flags() {
        let status = FaultStatus::from_register(FAULT_TCRANGE | FAULT_OVUV);
        assert!(status.tc_range);
        assert!(status.ovuv);
        assert!(!status.open);
        assert!(!status.cj_range);
        assert!(status.has_fault());
    }

    #[test]
    fn clear_register_reports_no_fault() {
        assert!(!FaultStatus::from(0x00).has_fault());
    }

    #[test]
    fn bits_match_the_register_byte() {
        for raw in [0x00, FAULT_OPEN, FAULT_CJHIGH | FAULT_OPEN, 0xFF, 0xA5] {
            assert_eq!(FaultStatus::from_register(raw).bits(), raw);
        }
    }

    #[test]
    fn mask_presets() {
        assert_eq!(u8::from(FaultMask::report_all()), 0x00);
        assert_eq!(u8::from(FaultMask::suppress_all()), 0x3F);
    }
}
