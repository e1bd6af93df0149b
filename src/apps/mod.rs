//! Application layer of the firmware.
//!
//! Applications use the board support and the driver library to acquire and
//! report sensor data.

/// MPU-9250 configuration and polling
pub mod imu_poll;
/// Periodic reporting of the latest IMU reading
pub mod imu_report;
