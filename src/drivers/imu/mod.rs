//! MPU-9250 IMU driver (MPU-6500 accelerometer/gyroscope + AK8963 magnetometer)

mod config;
mod data;
mod driver;
mod error;
pub mod registers;

pub use config::{AccelRange, DeviceAddresses, DriverConfig, GyroRange, ReadMode, SensorSettings};
pub use data::{combine_bytes, temperature_celsius, ImuData, RawSample};
pub use driver::Mpu9250;
pub use error::ImuError;
