use crate::peripherals::i2c::BusError;
use core::fmt;

/// IMU driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImuError {
    /// A write to the wire address failed
    Transmit { address: u8, error: BusError },
    /// A read from the wire address failed
    Receive { address: u8, error: BusError },
    /// Device answered with an unexpected identity register
    DeviceNotFound { address: u8, id: u8 },
}

impl ImuError {
    /// Underlying bus failure, if this error came from the bus
    pub const fn bus_error(&self) -> Option<BusError> {
        match self {
            ImuError::Transmit { error, .. } | ImuError::Receive { error, .. } => Some(*error),
            ImuError::DeviceNotFound { .. } => None,
        }
    }
}

impl fmt::Display for ImuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImuError::Transmit { address, error } => write!(f, "transmit to 0x{:02X} failed: {:?}", address, error),
            ImuError::Receive { address, error } => write!(f, "receive from 0x{:02X} failed: {:?}", address, error),
            ImuError::DeviceNotFound { address, id } => {
                write!(f, "unexpected device id 0x{:02X} at 0x{:02X}", id, address)
            }
        }
    }
}
