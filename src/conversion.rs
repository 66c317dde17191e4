//! Fixed-point codecs between raw register bytes and degrees Celsius.

/// Degrees Celsius per LSB of the linearized thermocouple value (2^-7).
pub const THERMOCOUPLE_LSB_CELSIUS: f32 = 0.0078125;
/// Cold-junction LSBs per degree Celsius (2^8).
pub const COLD_JUNCTION_LSB_PER_CELSIUS: f32 = 256.0;
/// Fault threshold and offset LSBs per degree Celsius (2^4).
pub const THRESHOLD_LSB_PER_CELSIUS: f32 = 16.0;

/// Sign-extends the 24-bit `LTCB` register triplet and drops the 5 reserved bits.
pub fn thermocouple_counts(raw: [u8; 3]) -> i32 {
    // Left-align in an i32 so the arithmetic shift carries bit 23 as the sign.
    i32::from_be_bytes([raw[0], raw[1], raw[2], 0]) >> 13
}

/// Converts the `LTCBH..LTCBL` bytes into degrees Celsius.
pub fn thermocouple_celsius(raw: [u8; 3]) -> f32 {
    thermocouple_counts(raw) as f32 * THERMOCOUPLE_LSB_CELSIUS
}

/// Converts the `CJTH..CJTL` bytes into degrees Celsius.
pub fn cold_junction_celsius(raw: [u8; 2]) -> f32 {
    i16::from_be_bytes(raw) as f32 / COLD_JUNCTION_LSB_PER_CELSIUS
}

/// Encodes a linearized fault threshold as `[MSB, LSB]`.
///
/// The scaled value truncates toward zero and saturates at the 16-bit limits.
pub fn threshold_bytes(celsius: f32) -> [u8; 2] {
    ((celsius * THRESHOLD_LSB_PER_CELSIUS) as i16).to_be_bytes()
}

/// Decodes a linearized fault threshold register pair.
pub fn threshold_celsius(raw: [u8; 2]) -> f32 {
    i16::from_be_bytes(raw) as f32 / THRESHOLD_LSB_PER_CELSIUS
}

/// Encodes a cold-junction offset for `CJTO`, truncating toward zero.
pub fn cold_junction_offset_byte(celsius: f32) -> u8 {
    (celsius * THRESHOLD_LSB_PER_CELSIUS) as i8 as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_thermocouple_reading_skips_sign_extension() {
        let raw = [0x7F, 0xFF, 0xE0];
        assert_eq!(thermocouple_counts(raw), 0x7FFFE0 >> 5);
        assert_eq!(thermocouple_celsius(raw), 2047.9921875);
    }

    #[test]
    fn negative_thermocouple_reading_is_sign_extended() {
        assert_eq!(thermocouple_counts([0x80, 0x00, 0x00]), -262_144);
        assert_eq!(thermocouple_celsius([0x80, 0x00, 0x00]), -2048.0);
        // -0.0078125 °C is one LSB below zero.
        assert_eq!(thermocouple_celsius([0xFF, 0xFF, 0xE0]), -0.0078125);
    }

    #[test]
    fn reserved_thermocouple_bits_are_ignored() {
        assert_eq!(thermocouple_celsius([0x01, 0x90, 0x1F]), 25.0);
    }

    #[test]
    fn cold_junction_scales_by_256() {
        assert_eq!(cold_junction_celsius([0x19, 0x00]), 25.0);
        assert_eq!(cold_junction_celsius([0xFF, 0x00]), -1.0);
        assert_eq!(cold_junction_celsius([0x00, 0x40]), 0.25);
    }

    #[test]
    fn thresholds_scale_by_16() {
        assert_eq!(threshold_bytes(85.0), [0x05, 0x50]);
        assert_eq!(threshold_bytes(-10.0), [0xFF, 0x60]);
        assert_eq!(threshold_celsius([0xFF, 0x60]), -10.0);
    }

    #[test]
    fn thresholds_truncate_toward_zero() {
        // 1.99 * 16 = 31.84 -> 31, -1.99 * 16 = -31.84 -> -31
        assert_eq!(threshold_bytes(1.99), [0x00, 0x1F]);
        assert_eq!(threshold_bytes(-1.99), [0xFF, 0xE1]);
    }

    #[test]
    fn cold_junction_offset_uses_sixteenths() {
        assert_eq!(cold_junction_offset_byte(0.0), 0x00);
        assert_eq!(cold_junction_offset_byte(1.5), 0x18);
        assert_eq!(cold_junction_offset_byte(-0.5), 0xF8);
    }
}
