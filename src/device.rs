//! High-level MAX31856 device driver implementation.

use crate::config::Config;
use crate::conversion::{
    cold_junction_celsius,
    cold_junction_offset_byte,
    thermocouple_celsius,
    threshold_bytes,
    threshold_celsius,
};
use crate::error::{Error, Result};
use crate::fault::FaultStatus;
use crate::interface::spi::SpiInterface;
use crate::interface::Max31856Interface;
use crate::log::{debug, trace, warning};
use crate::params::{
    AveragingMode,
    ConversionMode,
    FaultMode,
    NoiseFilter,
    OpenCircuitMode,
    ThermocoupleType,
};
use crate::registers::{
    Cr0,
    Cr1,
    FaultMask,
    REG_CJHF,
    REG_CJLF,
    REG_CJTH,
    REG_CJTO,
    REG_CR0,
    REG_CR1,
    REG_LTCBH,
    REG_LTHFTH,
    REG_LTHFTL,
    REG_LTLFTH,
    REG_LTLFTL,
    REG_MASK,
    REG_SR,
    REGISTER_COUNT,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiDevice;

// Interval between one-shot completion checks (milliseconds).
const POLL_INTERVAL_MS: u32 = 10;
// One-shot conversions take at most 185 ms at 50 Hz rejection (milliseconds).
const ONE_SHOT_TIMEOUT_MS: u32 = 250;

/// High-level synchronous driver for the MAX31856 thermocouple converter.
///
/// The driver owns the bus exclusively and keeps no internal locking; share it
/// behind an external mutex if several tasks need it.
pub struct Max31856<IFACE> {
    interface: IFACE,
    config: Config,
}

impl<IFACE> Max31856<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    ///
    /// No bus traffic happens until [`begin`](Self::begin); the conversion mode
    /// starts out as `config.conversion_mode`.
    pub fn new(interface: IFACE, config: Config) -> Self {
        Self { interface, config }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns the settings last written to the device.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the conversion mode the driver is operating in.
    pub fn conversion_mode(&self) -> ConversionMode {
        self.config.conversion_mode
    }
}

impl<SPI> Max31856<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for SPI transports.
    pub fn new_spi(spi: SPI, config: Config) -> Self {
        Self::new(SpiInterface::new(spi), config)
    }

    /// Releases the driver, returning the SPI device and configuration.
    pub fn release_spi(self) -> (SPI, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<IFACE, CommE> Max31856<IFACE>
where
    IFACE: Max31856Interface<Error = CommE>,
{
    // ==================================================================
    // == Initialization =================================================
    // ==================================================================
    /// Opens the bus and programs the configuration.
    ///
    /// Sequence: unmask every fault, enable open-circuit detection, write the
    /// cold-junction offset, select the thermocouple type (plus averaging and
    /// noise filter when configured) and finally the conversion mode. The chip
    /// has no identity register, so success does not prove a MAX31856 answered.
    pub fn begin(&mut self) -> Result<(), CommE> {
        let config = self.config;
        config.validate().map_err(|_| Error::InvalidConfig)?;

        self.interface.open()?;
        debug!("max31856: bus open, programming configuration");

        self.set_fault_mask(FaultMask::report_all())?;
        self.set_open_circuit_detection(config.open_circuit)?;
        self.set_cold_junction_offset(config.cj_offset_celsius)?;
        self.set_thermocouple_type(config.thermocouple_type)?;

        if let Some(averaging) = config.averaging {
            self.set_averaging(averaging)?;
        }

        if let Some(filter) = config.noise_filter {
            self.set_noise_filter(filter)?;
        }

        self.set_conversion_mode(config.conversion_mode)
    }

    // ==================================================================
    // == Conversion Control =============================================
    // ==================================================================
    /// Switches the conversion mode and mirrors it into `CR0`.
    ///
    /// The in-memory mode only changes once the register write succeeded.
    pub fn set_conversion_mode(&mut self, mode: ConversionMode) -> Result<(), CommE> {
        let continuous = mode.is_continuous();
        self.update_cr0(|cr0| {
            cr0.set_auto_convert(continuous);
            cr0.set_one_shot(!continuous);
        })?;

        self.config.conversion_mode = mode;
        debug!("max31856: conversion mode {}", mode);
        Ok(())
    }

    /// Requests a single conversion.
    ///
    /// Does nothing in continuous mode. The conversion starts when chip-select
    /// rises at the end of the `CR0` write; read the result after
    /// [`conversion_complete`](Self::conversion_complete) reports `true`.
    pub fn trigger_one_shot(&mut self) -> Result<(), CommE> {
        if self.config.conversion_mode.is_continuous() {
            return Ok(());
        }

        self.update_cr0(|cr0| {
            cr0.set_auto_convert(false);
            cr0.set_one_shot(true);
        })?;
        trace!("max31856: one-shot triggered");
        Ok(())
    }

    /// Returns `true` once the chip has cleared `CR0.1SHOT`, or always in continuous mode.
    pub fn conversion_complete(&mut self) -> Result<bool, CommE> {
        if self.config.conversion_mode.is_continuous() {
            return Ok(true);
        }

        let cr0 = Cr0::from(self.interface.read_register(REG_CR0)?);
        Ok(!cr0.one_shot())
    }

    /// Polls [`conversion_complete`](Self::conversion_complete) every 10 ms for up to 250 ms.
    ///
    /// Returns `false` if the conversion did not finish in time. Elapsed time is
    /// measured as the sum of delays requested from `delay`; time spent on the
    /// bus is not counted, so on a slow bus the wall-clock wait runs past 250 ms.
    /// The check count is fixed at 26 (25 sleeps) regardless of bus speed.
    pub fn wait_for_conversion(&mut self, delay: &mut impl DelayNs) -> Result<bool, CommE> {
        let mut waited_ms = 0;
        loop {
            if self.conversion_complete()? {
                return Ok(true);
            }

            if waited_ms >= ONE_SHOT_TIMEOUT_MS {
                return Ok(false);
            }

            delay.delay_ms(POLL_INTERVAL_MS);
            waited_ms += POLL_INTERVAL_MS;
        }
    }

    // ==================================================================
    // == Temperature & Fault Readout ====================================
    // ==================================================================
    /// Returns the linearized thermocouple temperature in degrees Celsius.
    ///
    /// In [`ConversionMode::OneShot`] this triggers a conversion and waits for
    /// it; a conversion that does not finish within 250 ms yields `Ok(f32::NAN)`.
    /// The other modes read the latched value immediately.
    pub fn read_thermocouple_temperature(&mut self, delay: &mut impl DelayNs) -> Result<f32, CommE> {
        if self.config.conversion_mode == ConversionMode::OneShot {
            self.trigger_one_shot()?;
            if !self.wait_for_conversion(delay)? {
                warning!("max31856: one-shot conversion timed out");
                return Ok(f32::NAN);
            }
        }

        let mut raw = [0u8; 3];
        self.interface.read_many(REG_LTCBH, &mut raw)?;
        Ok(thermocouple_celsius(raw))
    }

    /// Returns the latched cold-junction temperature in degrees Celsius.
    ///
    /// Never triggers a conversion.
    pub fn read_cj_temperature(&mut self) -> Result<f32, CommE> {
        let mut raw = [0u8; 2];
        self.interface.read_many(REG_CJTH, &mut raw)?;
        Ok(cold_junction_celsius(raw))
    }

    /// Reads the raw `SR` byte; test it against the `FAULT_*` masks.
    pub fn read_fault(&mut self) -> Result<u8, CommE> {
        self.interface.read_register(REG_SR).map_err(Error::from)
    }

    /// Reads `SR` and decodes every flag.
    pub fn read_fault_status(&mut self) -> Result<FaultStatus, CommE> {
        self.read_fault().map(FaultStatus::from_register)
    }

    /// Clears latched faults by pulsing `CR0.FAULTCLR`.
    pub fn clear_fault(&mut self) -> Result<(), CommE> {
        let restored = self.update_cr0(|cr0| cr0.set_fault_clear(true))?;
        self.interface
            .write_register(REG_CR0, u8::from(restored.with_fault_clear(false)))?;
        debug!("max31856: faults cleared");
        Ok(())
    }

    /// Dumps all 16 registers, starting at `CR0`.
    pub fn read_registers(&mut self) -> Result<[u8; REGISTER_COUNT], CommE> {
        let mut registers = [0u8; REGISTER_COUNT];
        self.interface.read_many(REG_CR0, &mut registers)?;
        Ok(registers)
    }

    // ==================================================================
    // == Measurement Configuration ======================================
    // ==================================================================
    /// Selects the thermocouple type, leaving `CR1[7:4]` untouched.
    pub fn set_thermocouple_type(&mut self, thermocouple_type: ThermocoupleType) -> Result<(), CommE> {
        self.update_cr1(|cr1| cr1.set_tc_type(thermocouple_type.bits() & 0x0F))?;
        self.config.thermocouple_type = thermocouple_type;
        Ok(())
    }

    /// Reads the thermocouple type back from `CR1[3:0]`.
    pub fn thermocouple_type(&mut self) -> Result<ThermocoupleType, CommE> {
        let cr1 = Cr1::from(self.interface.read_register(REG_CR1)?);
        Ok(ThermocoupleType::from_bits(cr1.tc_type()))
    }

    /// Selects the number of samples averaged per conversion.
    pub fn set_averaging(&mut self, averaging: AveragingMode) -> Result<(), CommE> {
        self.update_cr1(|cr1| cr1.set_avgsel(averaging.bits()))?;
        self.config.averaging = Some(averaging);
        Ok(())
    }

    /// Reads the averaging selection back from `CR1[6:4]`.
    pub fn averaging(&mut self) -> Result<AveragingMode, CommE> {
        let cr1 = Cr1::from(self.interface.read_register(REG_CR1)?);
        Ok(AveragingMode::from_bits(cr1.avgsel()))
    }

    /// Selects 50 Hz or 60 Hz mains rejection (`CR0[0]`).
    pub fn set_noise_filter(&mut self, filter: NoiseFilter) -> Result<(), CommE> {
        self.update_cr0(|cr0| cr0.set_noise_filter(filter))?;
        self.config.noise_filter = Some(filter);
        Ok(())
    }

    /// Reads the mains rejection selection back from `CR0[0]`.
    pub fn noise_filter(&mut self) -> Result<NoiseFilter, CommE> {
        let cr0 = Cr0::from(self.interface.read_register(REG_CR0)?);
        Ok(cr0.noise_filter())
    }

    /// Configures open-circuit fault detection (`CR0[5:4]`).
    pub fn set_open_circuit_detection(&mut self, mode: OpenCircuitMode) -> Result<(), CommE> {
        self.update_cr0(|cr0| cr0.set_open_circuit(mode))?;
        self.config.open_circuit = mode;
        Ok(())
    }

    /// Selects comparator or latched interrupt behaviour for the FAULT pin.
    pub fn set_fault_mode(&mut self, mode: FaultMode) -> Result<(), CommE> {
        self.update_cr0(|cr0| cr0.set_fault_mode(mode))?;
        Ok(())
    }

    /// Enables or disables the internal cold-junction sensor.
    pub fn set_cold_junction_sensor(&mut self, enabled: bool) -> Result<(), CommE> {
        self.update_cr0(|cr0| cr0.set_cj_disable(!enabled))?;
        Ok(())
    }

    /// Writes the `MASK` register; set bits keep a fault off the FAULT pin.
    pub fn set_fault_mask(&mut self, mask: FaultMask) -> Result<(), CommE> {
        self.interface
            .write_register(REG_MASK, u8::from(mask))
            .map_err(Error::from)
    }

    /// Writes the cold-junction offset (`CJTO`) in 1/16 °C steps.
    ///
    /// Offsets outside -8.0..=7.9375 °C are rejected with [`Error::InvalidConfig`].
    pub fn set_cold_junction_offset(&mut self, celsius: f32) -> Result<(), CommE> {
        let candidate = Config {
            cj_offset_celsius: celsius,
            ..self.config
        };
        candidate.validate().map_err(|_| Error::InvalidConfig)?;

        self.interface
            .write_register(REG_CJTO, cold_junction_offset_byte(celsius))?;
        self.config.cj_offset_celsius = celsius;
        Ok(())
    }

    // ==================================================================
    // == Fault Thresholds ===============================================
    // ==================================================================
    /// Sets the cold-junction fault window in whole degrees Celsius.
    pub fn set_cold_junction_fault_thresholds(&mut self, low: i8, high: i8) -> Result<(), CommE> {
        self.interface.write_register(REG_CJLF, low as u8)?;
        self.interface.write_register(REG_CJHF, high as u8)?;
        Ok(())
    }

    /// Sets the linearized thermocouple fault window in degrees Celsius.
    ///
    /// Values are scaled by 16 and truncated toward zero; the high pair is
    /// written first, MSB before LSB.
    pub fn set_temp_fault_thresholds(&mut self, low: f32, high: f32) -> Result<(), CommE> {
        let [high_msb, high_lsb] = threshold_bytes(high);
        let [low_msb, low_lsb] = threshold_bytes(low);

        self.interface.write_register(REG_LTHFTH, high_msb)?;
        self.interface.write_register(REG_LTHFTL, high_lsb)?;
        self.interface.write_register(REG_LTLFTH, low_msb)?;
        self.interface.write_register(REG_LTLFTL, low_lsb)?;
        Ok(())
    }

    /// Reads the linearized fault window back as `(low, high)` in degrees Celsius.
    pub fn temp_fault_thresholds(&mut self) -> Result<(f32, f32), CommE> {
        let mut raw = [0u8; 4];
        self.interface.read_many(REG_LTHFTH, &mut raw)?;
        let high = threshold_celsius([raw[0], raw[1]]);
        let low = threshold_celsius([raw[2], raw[3]]);
        Ok((low, high))
    }

    // ==================================================================
    // == Internal Configuration Helpers =================================
    // ==================================================================
    fn update_cr0<F>(&mut self, mut mutate: F) -> Result<Cr0, CommE>
    where
        F: FnMut(&mut Cr0),
    {
        let current = self.interface.read_register(REG_CR0)?;

        let mut cr0 = Cr0::from(current);
        mutate(&mut cr0);

        // Always written: a repeated 1SHOT request must reach the chip.
        self.interface.write_register(REG_CR0, u8::from(cr0))?;
        Ok(cr0)
    }

    fn update_cr1<F>(&mut self, mut mutate: F) -> Result<Cr1, CommE>
    where
        F: FnMut(&mut Cr1),
    {
        let current = self.interface.read_register(REG_CR1)?;

        let mut cr1 = Cr1::from(current);
        mutate(&mut cr1);

        self.interface.write_register(REG_CR1, u8::from(cr1))?;
        Ok(cr1)
    }
}
