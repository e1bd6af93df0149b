//! Board support for the STM32H753 carrier: clocks and the IMU bus.

pub mod i2c;
pub mod system;

pub use system::init_system;
