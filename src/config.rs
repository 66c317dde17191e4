//! Configuration primitives for the MAX31856 driver.

use crate::params::{AveragingMode, ConversionMode, NoiseFilter, OpenCircuitMode, ThermocoupleType};

// CJTO holds a signed byte in 1/16 °C steps.
const CJ_OFFSET_MIN_CELSIUS: f32 = -8.0;
const CJ_OFFSET_MAX_CELSIUS: f32 = 7.9375;

/// Settings programmed by [`Max31856::begin`](crate::Max31856::begin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Thermocouple type written to `CR1[3:0]`.
    pub thermocouple_type: ThermocoupleType,
    /// Conversion mode mirrored into `CR0`.
    pub conversion_mode: ConversionMode,
    /// Open-circuit detection written to `CR0[5:4]`.
    pub open_circuit: OpenCircuitMode,
    /// Cold-junction offset in degrees Celsius.
    pub cj_offset_celsius: f32,
    /// Mains rejection filter; `None` keeps the power-on selection.
    pub noise_filter: Option<NoiseFilter>,
    /// Averaging selection; `None` keeps the power-on selection.
    pub averaging: Option<AveragingMode>,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks whether this configuration fits the register encodings.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if !(CJ_OFFSET_MIN_CELSIUS..=CJ_OFFSET_MAX_CELSIUS).contains(&self.cj_offset_celsius) {
            return Err(ConfigError::ColdJunctionOffsetOutOfRange);
        }

        Ok(())
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the thermocouple type.
    pub fn thermocouple_type(mut self, thermocouple_type: ThermocoupleType) -> Self {
        self.config.thermocouple_type = thermocouple_type;
        self
    }

    /// Overrides the conversion mode.
    pub fn conversion_mode(mut self, mode: ConversionMode) -> Self {
        self.config.conversion_mode = mode;
        self
    }

    /// Overrides open-circuit detection.
    pub fn open_circuit(mut self, open_circuit: OpenCircuitMode) -> Self {
        self.config.open_circuit = open_circuit;
        self
    }

    /// Sets the cold-junction offset in degrees Celsius.
    pub fn cj_offset_celsius(mut self, offset: f32) -> Self {
        self.config.cj_offset_celsius = offset;
        self
    }

    /// Selects the mains rejection filter.
    pub fn noise_filter(mut self, filter: NoiseFilter) -> Self {
        self.config.noise_filter = Some(filter);
        self
    }

    /// Selects the averaging mode.
    pub fn averaging(mut self, averaging: AveragingMode) -> Self {
        self.config.averaging = Some(averaging);
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thermocouple_type: ThermocoupleType::K,
            conversion_mode: ConversionMode::OneShot,
            open_circuit: OpenCircuitMode::LowResistance,
            cj_offset_celsius: 0.0,
            noise_filter: None,
            averaging: None,
        }
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The cold-junction offset does not fit the signed 1/16 °C register.
    ColdJunctionOffsetOutOfRange,
}
