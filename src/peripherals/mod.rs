//! Bus-level peripherals used by the drivers.
//!
//! The drivers only see the [`BusTransport`](i2c::BusTransport) trait; the platform
//! supplies the concrete I2C master through [`HalBus`](i2c::HalBus).

pub mod i2c;
#[cfg(test)]
pub(crate) mod mock_i2c;

pub use i2c::{BusAddress, BusError, BusTransport, HalBus, MAX_TIMEOUT};
