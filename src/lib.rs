//! Register-level driver for the MPU-9250 motion sensor package.
//!
//! The MPU-9250 combines an MPU-6500 accelerometer/gyroscope die with an AK8963
//! magnetometer. Both sit behind a single I2C connection: once the inertial die's
//! bypass multiplexer is enabled, the magnetometer answers on its own address.
//!
//! The crate is split like the firmware that uses it:
//! - [`peripherals`] holds the blocking bus transport ([`BusTransport`]) and an
//!   adapter for any `embedded-hal` I2C master.
//! - [`drivers`] holds the sensor driver itself ([`Mpu9250`]).

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod drivers;
pub mod peripherals;

pub use drivers::imu::{
    AccelRange, DeviceAddresses, DriverConfig, GyroRange, ImuData, ImuError, Mpu9250, RawSample, ReadMode,
    SensorSettings,
};
pub use peripherals::i2c::{BusAddress, BusError, BusTransport, HalBus, MAX_TIMEOUT};
