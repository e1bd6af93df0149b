//! I2C1 bus carrying the MPU-9250.
//!
//! Pinout:
//! - SCL -> PB6
//! - SDA -> PB7
//! - VCC -> 3.3V

use embassy_stm32::{
    i2c::{Config as I2cConfig, I2c},
    mode::Blocking,
    peripherals::{I2C1, PB6, PB7},
    time::Hertz,
    Peri,
};
use embassy_time::Duration;
use mpu9250_rs::HalBus;

/// Peripheral collection for the IMU I2C bus
pub struct I2cPeripherals<'d> {
    pub i2c1: Peri<'d, I2C1>,
    pub scl: Peri<'d, PB6>,
    pub sda: Peri<'d, PB7>,
}

/// Macro to claim peripherals for the IMU I2C bus
#[macro_export]
macro_rules! claim_imu_i2c {
    ($peripherals:expr) => {{
        $crate::board::i2c::I2cPeripherals {
            i2c1: $peripherals.I2C1,
            scl: $peripherals.PB6,
            sda: $peripherals.PB7,
        }
    }};
}

/// Blocking I2C1 wrapped as a bus transport
pub type ImuBus<'d> = HalBus<I2c<'d, Blocking>>;

/// Create the IMU bus at 400 kHz (fast mode)
///
/// `timeout` is applied by the peripheral to every transaction, since the
/// `embedded-hal` interface cannot carry it per call.
pub fn new_imu_bus(peripherals: I2cPeripherals<'_>, timeout: Duration) -> ImuBus<'_> {
    let mut config = I2cConfig::default();
    config.frequency = Hertz(400_000);
    config.timeout = timeout;

    let i2c = I2c::new_blocking(peripherals.i2c1, peripherals.scl, peripherals.sda, config);
    HalBus::new(i2c)
}
