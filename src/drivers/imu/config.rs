//! Sensor settings and driver construction parameters.

use super::registers::{PWR_MGMT_1_SLEEP, PWR_MGMT_1_TEMP_DISABLE};
use crate::peripherals::i2c::{BusAddress, MAX_TIMEOUT};
use embassy_time::Duration;

/// Gyroscope full-scale range, stored as its GYRO_CONFIG bit pattern
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
    #[default]
    Dps250 = 0b00 << 3,
    Dps500 = 0b01 << 3,
    Dps1000 = 0b10 << 3,
    Dps2000 = 0b11 << 3,
}

impl GyroRange {
    /// Map a range selector (0-3) to a range. Anything else selects ±250 °/s.
    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => GyroRange::Dps500,
            2 => GyroRange::Dps1000,
            3 => GyroRange::Dps2000,
            _ => GyroRange::Dps250,
        }
    }

    /// GYRO_CONFIG register value
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Output sensitivity in LSB per °/s
    pub const fn lsb_per_dps(self) -> f32 {
        match self {
            GyroRange::Dps250 => 131.0,
            GyroRange::Dps500 => 65.5,
            GyroRange::Dps1000 => 32.8,
            GyroRange::Dps2000 => 16.4,
        }
    }
}

/// Accelerometer full-scale range, stored as its ACCEL_CONFIG bit pattern
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    #[default]
    G2 = 0b00 << 3,
    G4 = 0b01 << 3,
    G8 = 0b10 << 3,
    G16 = 0b11 << 3,
}

impl AccelRange {
    /// Map a range selector (0-3) to a range. Anything else selects ±2 g.
    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => AccelRange::G4,
            2 => AccelRange::G8,
            3 => AccelRange::G16,
            _ => AccelRange::G2,
        }
    }

    /// ACCEL_CONFIG register value
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Output sensitivity in LSB per g
    pub const fn lsb_per_g(self) -> f32 {
        match self {
            AccelRange::G2 => 16384.0,
            AccelRange::G4 => 8192.0,
            AccelRange::G8 => 4096.0,
            AccelRange::G16 => 2048.0,
        }
    }
}

/// Operating parameters written by [`Mpu9250::configure`](super::Mpu9250::configure)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSettings {
    /// SMPLRT_DIV value, written verbatim
    pub sample_rate_divider: u8,
    /// CONFIG (DLPF_CFG) value, written verbatim
    pub low_pass_filter: u8,
    pub gyro_range: GyroRange,
    pub accel_range: AccelRange,
    /// Put the inertial die to sleep (no measurements)
    pub sleep: bool,
    /// Skip temperature measurement
    pub temp_disable: bool,
    /// PWR_MGMT_1 clock source, OR-ed in verbatim
    pub clock_select: u8,
}

impl SensorSettings {
    /// Build settings from the seven integer option codes.
    ///
    /// Range selectors outside 0-3 fall back to the smallest range; any non-zero
    /// flag counts as set.
    pub const fn from_codes(
        sample_rate_divider: u8,
        low_pass_filter: u8,
        gyro_range: u8,
        accel_range: u8,
        sleep_enable: u8,
        temp_disable: u8,
        clock_select: u8,
    ) -> Self {
        Self {
            sample_rate_divider,
            low_pass_filter,
            gyro_range: GyroRange::from_code(gyro_range),
            accel_range: AccelRange::from_code(accel_range),
            sleep: sleep_enable != 0,
            temp_disable: temp_disable != 0,
            clock_select,
        }
    }

    /// PWR_MGMT_1 register value
    pub const fn power_management(&self) -> u8 {
        let sleep = if self.sleep { PWR_MGMT_1_SLEEP } else { 0 };
        let temp = if self.temp_disable { PWR_MGMT_1_TEMP_DISABLE } else { 0 };
        sleep | temp | self.clock_select
    }
}

/// Bus addresses of the two devices in the package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceAddresses {
    /// Accelerometer/gyroscope die
    pub inertial: BusAddress,
    /// AK8963 magnetometer (reachable once bypass is enabled)
    pub magnetic: BusAddress,
}

impl DeviceAddresses {
    /// AD0 pin low
    pub const MPU9250: Self = Self::new(0x68, 0x0C);
    /// AD0 pin high
    pub const MPU9250_AD0_HIGH: Self = Self::new(0x69, 0x0C);

    /// Build from 7-bit device addresses
    pub const fn new(inertial: u8, magnetic: u8) -> Self {
        Self {
            inertial: BusAddress::from_7bit(inertial),
            magnetic: BusAddress::from_7bit(magnetic),
        }
    }
}

impl Default for DeviceAddresses {
    fn default() -> Self {
        Self::MPU9250
    }
}

/// How [`Mpu9250::read_sample`](super::Mpu9250::read_sample) fetches data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadMode {
    /// One register per transaction pair, high byte first
    #[default]
    PerByte,
    /// One multi-byte read per device
    Burst,
}

/// Immutable driver configuration, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverConfig {
    pub addresses: DeviceAddresses,
    pub read_mode: ReadMode,
    /// Timeout passed to every bus transaction
    pub timeout: Duration,
    /// Send the magnetometer Y low-byte register address to the inertial die, as
    /// older firmware for this board did. Only affects [`ReadMode::PerByte`].
    pub legacy_hall_y_address: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            addresses: DeviceAddresses::default(),
            read_mode: ReadMode::default(),
            timeout: MAX_TIMEOUT,
            legacy_hall_y_address: false,
        }
    }
}
