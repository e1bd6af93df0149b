//! MPU-9250 9-axis IMU driver
//!
//! This driver provides a register-level interface to the MPU-9250 over I2C.
//! It handles:
//! - Configuration of sample rate, filter bandwidth, ranges and power state
//! - Enabling the I2C bypass so the AK8963 magnetometer is directly addressable
//! - Sequential register reads of accelerometer, gyroscope, temperature and
//!   magnetometer data, or an equivalent burst read
//!
//! All operations are blocking. The driver keeps no state between calls other
//! than its [`DriverConfig`].

use super::config::{DriverConfig, ReadMode, SensorSettings};
use super::data::{combine_bytes, temperature_celsius, RawSample};
use super::error::ImuError;
use super::registers::*;
use crate::peripherals::i2c::{BusAddress, BusTransport};

/// MPU-9250 driver for interfacing with the IMU package
pub struct Mpu9250<B> {
    /// Bus the inertial die and the magnetometer share
    bus: B,
    /// Addresses, read mode and timeout
    config: DriverConfig,
}

impl<B: BusTransport> Mpu9250<B> {
    /// Create a new MPU-9250 driver instance
    ///
    /// # Arguments
    /// * `bus` - Transport to the shared I2C bus
    /// * `config` - Device addresses, read mode and transaction timeout
    pub fn new(bus: B, config: DriverConfig) -> Self {
        Self { bus, config }
    }

    /// Configuration this driver was built with
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }

    /// Configure the inertial die
    ///
    /// Writes, in order:
    /// 1. PWR_MGMT_1 (sleep, temperature disable, clock source)
    /// 2. CONFIG (low-pass filter)
    /// 3. SMPLRT_DIV
    /// 4. GYRO_CONFIG (full-scale range)
    /// 5. ACCEL_CONFIG (full-scale range)
    /// 6. INT_PIN_CFG (bypass enable, exposes the magnetometer)
    ///
    /// Nothing is read back. The first failing write aborts the sequence.
    pub fn configure(&mut self, settings: &SensorSettings) -> Result<(), ImuError> {
        debug!("Configuring MPU-9250: {:?}", settings);
        let inertial = self.config.addresses.inertial;

        self.write_register(inertial, Register::PwrMgmt1 as u8, settings.power_management())?;
        self.write_register(inertial, Register::Config as u8, settings.low_pass_filter)?;
        self.write_register(inertial, Register::SmplrtDiv as u8, settings.sample_rate_divider)?;
        self.write_register(inertial, Register::GyroConfig as u8, settings.gyro_range.bits())?;
        self.write_register(inertial, Register::AccelConfig as u8, settings.accel_range.bits())?;
        self.write_register(inertial, Register::IntPinCfg as u8, INT_PIN_CFG_BYPASS_EN)?;

        info!("MPU-9250 configured");
        Ok(())
    }

    /// Check the identity registers of both devices
    ///
    /// The magnetometer only answers once bypass is enabled, so call this after
    /// [`configure`](Self::configure).
    pub fn verify_devices(&mut self) -> Result<(), ImuError> {
        let inertial = self.config.addresses.inertial;
        let chip_id = self.read_register(inertial, Register::WhoAmI as u8)?;
        if !WHO_AM_I_EXPECTED.contains(&chip_id) {
            error!("Wrong chip ID: got 0x{:02X}", chip_id);
            return Err(ImuError::DeviceNotFound {
                address: inertial.read,
                id: chip_id,
            });
        }

        let magnetic = self.config.addresses.magnetic;
        let mag_id = self.read_register(magnetic, MagRegister::Wia as u8)?;
        if mag_id != MAG_WIA_EXPECTED {
            error!(
                "Wrong magnetometer ID: expected 0x{:02X}, got 0x{:02X}",
                MAG_WIA_EXPECTED, mag_id
            );
            return Err(ImuError::DeviceNotFound {
                address: magnetic.read,
                id: mag_id,
            });
        }

        debug!("MPU-9250 identity ok (0x{:02X}, AK8963 0x{:02X})", chip_id, mag_id);
        Ok(())
    }

    /// Read one complete sample
    pub fn read_sample(&mut self) -> Result<RawSample, ImuError> {
        let mut sample = RawSample::default();
        self.read_sample_into(&mut sample)?;
        Ok(sample)
    }

    /// Read one sample into `sample`
    ///
    /// Each field is stored as soon as it has been assembled. If a transaction
    /// fails, the fields read before the failure are fresh and all others keep
    /// their previous values, so the caller may keep using `sample` as a stale
    /// reading.
    pub fn read_sample_into(&mut self, sample: &mut RawSample) -> Result<(), ImuError> {
        match self.config.read_mode {
            ReadMode::PerByte => self.read_per_byte(sample),
            ReadMode::Burst => self.read_burst(sample),
        }
    }

    /// Register-by-register read: accel, gyro, temperature, then magnetometer
    fn read_per_byte(&mut self, sample: &mut RawSample) -> Result<(), ImuError> {
        let inertial = self.config.addresses.inertial;

        for (axis, (high, low)) in ACCEL_FIELDS.iter().enumerate() {
            sample.accel[axis] = self.read_field((inertial, *high as u8), (inertial, *low as u8))?;
        }
        for (axis, (high, low)) in GYRO_FIELDS.iter().enumerate() {
            sample.gyro[axis] = self.read_field((inertial, *high as u8), (inertial, *low as u8))?;
        }

        let raw_temperature = self.read_field(
            (inertial, Register::TempOutH as u8),
            (inertial, Register::TempOutL as u8),
        )?;
        sample.temperature = temperature_celsius(raw_temperature);

        let magnetic = self.config.addresses.magnetic;
        self.write_register(magnetic, MagRegister::Cntl1 as u8, MAG_MODE_MEASURE)?;
        let result = self.read_mag_fields(sample);
        // Power down even if an axis failed; the axis error takes precedence
        let powered_down = self.write_register(magnetic, MagRegister::Cntl1 as u8, MAG_MODE_POWER_DOWN);
        result?;
        powered_down
    }

    fn read_mag_fields(&mut self, sample: &mut RawSample) -> Result<(), ImuError> {
        let magnetic = self.config.addresses.magnetic;

        for (axis, (high, low)) in MAG_FIELDS.iter().enumerate() {
            let mut low_address = magnetic;
            if self.config.legacy_hall_y_address && *low == MagRegister::Hyl {
                low_address.write = self.config.addresses.inertial.write;
            }
            sample.mag[axis] = self.read_field((magnetic, *high as u8), (low_address, *low as u8))?;
        }
        Ok(())
    }

    /// Two multi-byte reads covering the same registers as [`read_per_byte`](Self::read_per_byte)
    fn read_burst(&mut self, sample: &mut RawSample) -> Result<(), ImuError> {
        let inertial = self.config.addresses.inertial;
        let mut block = [0u8; INERTIAL_BLOCK_LEN];
        self.read_block(inertial, Register::AccelXoutH as u8, &mut block)?;

        // ACCEL_XOUT_H .. ACCEL_ZOUT_L, TEMP_OUT_H/L, GYRO_XOUT_H .. GYRO_ZOUT_L
        for axis in 0..3 {
            sample.accel[axis] = combine_bytes(block[2 * axis], block[2 * axis + 1]);
            sample.gyro[axis] = combine_bytes(block[8 + 2 * axis], block[9 + 2 * axis]);
        }
        sample.temperature = temperature_celsius(combine_bytes(block[6], block[7]));

        let magnetic = self.config.addresses.magnetic;
        self.write_register(magnetic, MagRegister::Cntl1 as u8, MAG_MODE_MEASURE)?;
        let mut mag_block = [0u8; MAG_BLOCK_LEN];
        let result = self.read_block(magnetic, MagRegister::Hxl as u8, &mut mag_block);
        let powered_down = self.write_register(magnetic, MagRegister::Cntl1 as u8, MAG_MODE_POWER_DOWN);
        result?;

        // HXL, HXH, HYL, HYH, HZL, HZH
        for axis in 0..3 {
            sample.mag[axis] = combine_bytes(mag_block[2 * axis + 1], mag_block[2 * axis]);
        }
        powered_down
    }

    /// Assemble a field from two single-register reads, first read is the high byte
    fn read_field(&mut self, first: (BusAddress, u8), second: (BusAddress, u8)) -> Result<i16, ImuError> {
        let high = self.read_register(first.0, first.1)?;
        let low = self.read_register(second.0, second.1)?;
        trace!("0x{:02X}/0x{:02X} -> [{:02X}, {:02X}]", first.1, second.1, high, low);
        Ok(combine_bytes(high, low))
    }

    /// Read a single register: transmit its address, then receive one byte
    fn read_register(&mut self, address: BusAddress, register: u8) -> Result<u8, ImuError> {
        self.transmit(address.write, &[register])?;
        let mut buffer = [0u8; 1];
        self.receive(address.read, &mut buffer)?;
        Ok(buffer[0])
    }

    fn read_block(&mut self, address: BusAddress, register: u8, buffer: &mut [u8]) -> Result<(), ImuError> {
        self.bus
            .transmit_receive(address, &[register], buffer, self.config.timeout)
            .map_err(|error| {
                warn!("Burst read of 0x{:02X} from 0x{:02X} failed: {:?}", register, address.read, error);
                ImuError::Receive {
                    address: address.read,
                    error,
                }
            })
    }

    fn write_register(&mut self, address: BusAddress, register: u8, value: u8) -> Result<(), ImuError> {
        self.transmit(address.write, &[register, value])
    }

    fn transmit(&mut self, address: u8, bytes: &[u8]) -> Result<(), ImuError> {
        self.bus.transmit(address, bytes, self.config.timeout).map_err(|error| {
            warn!("Transmit to 0x{:02X} failed: {:?}", address, error);
            ImuError::Transmit { address, error }
        })
    }

    fn receive(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), ImuError> {
        self.bus.receive(address, buffer, self.config.timeout).map_err(|error| {
            warn!("Receive from 0x{:02X} failed: {:?}", address, error);
            ImuError::Receive { address, error }
        })
    }
}
