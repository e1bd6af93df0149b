//! Sample types and raw-to-physical conversions.

use super::config::SensorSettings;

/// Standard gravity in m/s²
const STANDARD_GRAVITY: f32 = 9.80665;
/// AK8963 sensitivity in 16-bit output mode, µT per LSB
const MAG_UT_PER_LSB: f32 = 0.15;

/// Raw readings of one sample
///
/// Inertial and magnetic fields are the signed register values; only the
/// temperature is converted (to °C).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// Accelerometer X, Y, Z
    pub accel: [i16; 3],
    /// Gyroscope X, Y, Z
    pub gyro: [i16; 3],
    /// Die temperature in °C
    pub temperature: f32,
    /// Magnetometer X, Y, Z
    pub mag: [i16; 3],
}

/// Scaled IMU sensor data in physical units
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImuData {
    /// Acceleration in m/s² (X, Y, Z)
    pub accel: [f32; 3],
    /// Angular velocity in rad/s (X, Y, Z)
    pub gyro: [f32; 3],
    /// Temperature in °C
    pub temperature: f32,
    /// Magnetic flux density in µT (X, Y, Z)
    pub mag: [f32; 3],
}

impl ImuData {
    /// Scale a raw sample using the ranges it was taken with
    pub fn from_raw(sample: &RawSample, settings: &SensorSettings) -> Self {
        let accel_scale = STANDARD_GRAVITY / settings.accel_range.lsb_per_g();
        let gyro_scale = (core::f32::consts::PI / 180.0) / settings.gyro_range.lsb_per_dps();

        Self {
            accel: sample.accel.map(|v| f32::from(v) * accel_scale),
            gyro: sample.gyro.map(|v| f32::from(v) * gyro_scale),
            temperature: sample.temperature,
            mag: sample.mag.map(|v| f32::from(v) * MAG_UT_PER_LSB),
        }
    }
}

/// Assemble a field from two register reads: the first byte read is the high byte
pub const fn combine_bytes(first: u8, second: u8) -> i16 {
    i16::from_be_bytes([first, second])
}

/// Convert a raw TEMP_OUT value to °C
pub fn temperature_celsius(raw: i16) -> f32 {
    f32::from(raw) / 340.0 + 21.0
}
