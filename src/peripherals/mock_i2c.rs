//! Register-backed mock bus for driver tests.
//!
//! Each simulated device keeps a 256-byte register file and a register pointer.
//! A transmit sets the pointer from its first byte and writes any remaining bytes
//! with auto-increment; a receive reads from the pointer with auto-increment. This
//! matches how the MPU-9250 and AK8963 behave on the wire, so per-byte and burst
//! reads observe the same data. Every transaction is logged for order checks.

use super::i2c::{BusError, BusTransport};
use embassy_time::Duration;
use std::collections::BTreeMap;
use std::vec::Vec;

/// Logged bus transaction (wire addresses)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusTransaction {
    Transmit { address: u8, data: Vec<u8> },
    Receive { address: u8, len: usize },
}

#[derive(Debug)]
struct MockDevice {
    registers: [u8; 256],
    pointer: u8,
}

impl MockDevice {
    fn new() -> Self {
        Self {
            registers: [0; 256],
            pointer: 0,
        }
    }
}

/// Mock two-wire bus
#[derive(Debug, Default)]
pub struct MockI2c {
    devices: BTreeMap<u8, MockDevice>,
    transactions: Vec<BusTransaction>,
    failures: BTreeMap<usize, BusError>,
}

impl MockI2c {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload a register of the device at 7-bit address `device`
    pub fn set_register(&mut self, device: u8, register: u8, value: u8) {
        self.device(device).registers[register as usize] = value;
    }

    /// Preload consecutive registers starting at `register`
    pub fn set_registers(&mut self, device: u8, register: u8, values: &[u8]) {
        for (offset, value) in values.iter().enumerate() {
            self.set_register(device, register.wrapping_add(offset as u8), *value);
        }
    }

    pub fn register(&self, device: u8, register: u8) -> u8 {
        self.devices
            .get(&device)
            .map_or(0, |d| d.registers[register as usize])
    }

    /// Fail the transaction with zero-based index `index` with `error`
    pub fn fail_at(&mut self, index: usize, error: BusError) {
        self.failures.insert(index, error);
    }

    pub fn transactions(&self) -> &[BusTransaction] {
        &self.transactions
    }

    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    fn device(&mut self, device: u8) -> &mut MockDevice {
        self.devices.entry(device).or_insert_with(MockDevice::new)
    }

    /// Log the transaction and report an injected failure for its index
    fn record(&mut self, transaction: BusTransaction) -> Result<(), BusError> {
        let index = self.transactions.len();
        self.transactions.push(transaction);
        match self.failures.get(&index) {
            Some(error) => Err(*error),
            None => Ok(()),
        }
    }
}

impl BusTransport for MockI2c {
    fn transmit(&mut self, address: u8, bytes: &[u8], _timeout: Duration) -> Result<(), BusError> {
        self.record(BusTransaction::Transmit {
            address,
            data: bytes.to_vec(),
        })?;

        let device = self.device(address >> 1);
        if let Some((register, values)) = bytes.split_first() {
            device.pointer = *register;
            for value in values {
                device.registers[device.pointer as usize] = *value;
                device.pointer = device.pointer.wrapping_add(1);
            }
        }
        Ok(())
    }

    fn receive(&mut self, address: u8, buffer: &mut [u8], _timeout: Duration) -> Result<(), BusError> {
        self.record(BusTransaction::Receive {
            address,
            len: buffer.len(),
        })?;

        let device = self.device(address >> 1);
        for byte in buffer.iter_mut() {
            *byte = device.registers[device.pointer as usize];
            device.pointer = device.pointer.wrapping_add(1);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peripherals::i2c::MAX_TIMEOUT;

    #[test]
    fn test_mock_write_then_read_back() {
        let mut bus = MockI2c::new();
        bus.transmit(0xD0, &[0x19, 0x07, 0x03], MAX_TIMEOUT).unwrap();
        assert_eq!(bus.register(0x68, 0x19), 0x07);
        assert_eq!(bus.register(0x68, 0x1A), 0x03);

        bus.transmit(0xD0, &[0x19], MAX_TIMEOUT).unwrap();
        let mut buffer = [0u8; 2];
        bus.receive(0xD1, &mut buffer, MAX_TIMEOUT).unwrap();
        assert_eq!(buffer, [0x07, 0x03]);
    }

    #[test]
    fn test_mock_devices_are_independent() {
        let mut bus = MockI2c::new();
        bus.set_register(0x68, 0x03, 0xAA);
        bus.set_register(0x0C, 0x03, 0xBB);

        bus.transmit(0x18, &[0x03], MAX_TIMEOUT).unwrap();
        let mut buffer = [0u8; 1];
        bus.receive(0x19, &mut buffer, MAX_TIMEOUT).unwrap();
        assert_eq!(buffer, [0xBB]);
    }

    #[test]
    fn test_mock_injected_failure() {
        let mut bus = MockI2c::new();
        bus.fail_at(1, BusError::Timeout);

        assert!(bus.transmit(0xD0, &[0x3B], MAX_TIMEOUT).is_ok());
        let mut buffer = [0u8; 1];
        assert_eq!(bus.receive(0xD1, &mut buffer, MAX_TIMEOUT), Err(BusError::Timeout));
        assert_eq!(bus.transactions().len(), 2);
    }
}
