//! Hardware drivers.
//!
//! This module contains device drivers for the sensors attached to the board.

/// MPU-9250 IMU driver
pub mod imu;
