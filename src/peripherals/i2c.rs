//! Blocking two-wire (I2C) transport used by the sensor drivers.
//!
//! Addresses handed to [`BusTransport`] are 8-bit wire addresses: the 7-bit device
//! address shifted left by one with the direction in bit 0. Writes go to the even
//! form and reads to the odd form, so every device is described by a [`BusAddress`]
//! pair rather than a single address plus a direction flag.

use embassy_time::Duration;
use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

/// Wait forever for a transaction to complete
pub const MAX_TIMEOUT: Duration = Duration::MAX;

/// Bus-level failure reported by a transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Address or data byte was not acknowledged
    Nack,
    /// Transaction did not finish within the timeout
    Timeout,
    /// Another master won arbitration
    ArbitrationLost,
    /// Misplaced START or STOP condition
    Bus,
    /// Received data was lost
    Overrun,
    /// Any other peripheral-specific failure
    Other,
}

impl From<ErrorKind> for BusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NoAcknowledge(_) => BusError::Nack,
            ErrorKind::ArbitrationLoss => BusError::ArbitrationLost,
            ErrorKind::Bus => BusError::Bus,
            ErrorKind::Overrun => BusError::Overrun,
            _ => BusError::Other,
        }
    }
}

/// Write and read forms of one device's address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusAddress {
    /// Wire address with the R/W bit cleared
    pub write: u8,
    /// Wire address with the R/W bit set
    pub read: u8,
}

impl BusAddress {
    /// Derive both wire forms from a 7-bit device address
    pub const fn from_7bit(address: u8) -> Self {
        Self {
            write: (address & 0x7F) << 1,
            read: ((address & 0x7F) << 1) | 1,
        }
    }

    /// The 7-bit device address shared by both forms
    pub const fn device(&self) -> u8 {
        self.write >> 1
    }
}

/// Blocking request/response access to a shared two-wire bus.
///
/// Every call blocks until the transaction completes, fails, or `timeout` elapses.
/// Implementations must not retry; the caller decides what a failure means.
///
/// # Safety Invariants
///
/// - One owner per bus; nothing else may touch the bus between the two halves of
///   a register read, or multi-byte field assembly is corrupted.
pub trait BusTransport {
    /// Send `bytes` to the device at wire address `address` (START - ADDR(W) - DATA - STOP)
    fn transmit(&mut self, address: u8, bytes: &[u8], timeout: Duration) -> Result<(), BusError>;

    /// Fill `buffer` from the device at wire address `address` (START - ADDR(R) - DATA - STOP)
    fn receive(&mut self, address: u8, buffer: &mut [u8], timeout: Duration) -> Result<(), BusError>;

    /// Send `bytes` then read `buffer`.
    ///
    /// The default issues two independent transactions. Transports that support a
    /// repeated START should override this.
    fn transmit_receive(
        &mut self,
        address: BusAddress,
        bytes: &[u8],
        buffer: &mut [u8],
        timeout: Duration,
    ) -> Result<(), BusError> {
        self.transmit(address.write, bytes, timeout)?;
        self.receive(address.read, buffer, timeout)
    }
}

/// [`BusTransport`] over any `embedded-hal` 1.0 blocking I2C master.
///
/// `embedded-hal` has no per-transaction timeout, so the `timeout` argument is
/// advisory here: the timeout configured on the peripheral itself applies.
pub struct HalBus<I> {
    i2c: I,
}

impl<I: I2c> HalBus<I> {
    /// Wrap an initialized I2C master
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Give the I2C master back
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> BusTransport for HalBus<I> {
    fn transmit(&mut self, address: u8, bytes: &[u8], _timeout: Duration) -> Result<(), BusError> {
        self.i2c.write(address >> 1, bytes).map_err(|e| e.kind().into())
    }

    fn receive(&mut self, address: u8, buffer: &mut [u8], _timeout: Duration) -> Result<(), BusError> {
        self.i2c.read(address >> 1, buffer).map_err(|e| e.kind().into())
    }

    fn transmit_receive(
        &mut self,
        address: BusAddress,
        bytes: &[u8],
        buffer: &mut [u8],
        _timeout: Duration,
    ) -> Result<(), BusError> {
        self.i2c
            .write_read(address.device(), bytes, buffer)
            .map_err(|e| e.kind().into())
    }
}
