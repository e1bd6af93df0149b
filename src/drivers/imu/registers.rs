//! Register addresses and fixed bit patterns for the MPU-9250.
//!
//! These correspond to the MPU-9250 register map (MPU-6500 die) and the AK8963
//! section of the same document.

/// Registers of the accelerometer/gyroscope die
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    SmplrtDiv = 0x19,
    Config = 0x1A,
    GyroConfig = 0x1B,
    AccelConfig = 0x1C,
    IntPinCfg = 0x37,
    AccelXoutH = 0x3B,
    AccelXoutL = 0x3C,
    AccelYoutH = 0x3D,
    AccelYoutL = 0x3E,
    AccelZoutH = 0x3F,
    AccelZoutL = 0x40,
    TempOutH = 0x41,
    TempOutL = 0x42,
    GyroXoutH = 0x43,
    GyroXoutL = 0x44,
    GyroYoutH = 0x45,
    GyroYoutL = 0x46,
    GyroZoutH = 0x47,
    GyroZoutL = 0x48,
    PwrMgmt1 = 0x6B,
    WhoAmI = 0x75,
}

/// Registers of the AK8963 magnetometer
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagRegister {
    Wia = 0x00,
    Hxl = 0x03,
    Hxh = 0x04,
    Hyl = 0x05,
    Hyh = 0x06,
    Hzl = 0x07,
    Hzh = 0x08,
    Cntl1 = 0x0A,
}

/// PWR_MGMT_1: sleep mode
pub const PWR_MGMT_1_SLEEP: u8 = 0b0100_0000;
/// PWR_MGMT_1: temperature sensor disable
pub const PWR_MGMT_1_TEMP_DISABLE: u8 = 0b1000_0000;

/// INT_PIN_CFG: expose the auxiliary bus so the AK8963 is directly addressable
pub const INT_PIN_CFG_BYPASS_EN: u8 = 0b0000_0010;

/// CNTL1: 16-bit output, start measuring
pub const MAG_MODE_MEASURE: u8 = 0b0001_0110;
/// CNTL1: 16-bit output, power down
pub const MAG_MODE_POWER_DOWN: u8 = 0b0001_0000;

/// WHO_AM_I values accepted for the inertial die (MPU-9250, MPU-9255)
pub const WHO_AM_I_EXPECTED: [u8; 2] = [0x71, 0x73];
/// WIA value of the AK8963
pub const MAG_WIA_EXPECTED: u8 = 0x48;

/// Register pairs of the accelerometer axes, high byte first
pub const ACCEL_FIELDS: [(Register, Register); 3] = [
    (Register::AccelXoutH, Register::AccelXoutL),
    (Register::AccelYoutH, Register::AccelYoutL),
    (Register::AccelZoutH, Register::AccelZoutL),
];

/// Register pairs of the gyroscope axes, high byte first
pub const GYRO_FIELDS: [(Register, Register); 3] = [
    (Register::GyroXoutH, Register::GyroXoutL),
    (Register::GyroYoutH, Register::GyroYoutL),
    (Register::GyroZoutH, Register::GyroZoutL),
];

/// Register pairs of the magnetometer axes, high byte first.
///
/// The AK8963 stores each axis low byte at the lower address, so the high byte
/// register is the second one in address order.
pub const MAG_FIELDS: [(MagRegister, MagRegister); 3] = [
    (MagRegister::Hxh, MagRegister::Hxl),
    (MagRegister::Hyh, MagRegister::Hyl),
    (MagRegister::Hzh, MagRegister::Hzl),
];

/// Length of the ACCEL_XOUT_H..GYRO_ZOUT_L block (6 accel + 2 temp + 6 gyro)
pub const INERTIAL_BLOCK_LEN: usize = 14;
/// Length of the HXL..HZH block
pub const MAG_BLOCK_LEN: usize = 6;
