//! MPU6050 6-axis IMU driver
//!
//! Every measurement is a big-endian 16-bit two's complement value split
//! across two registers. The driver fetches the two bytes with separate
//! transport reads, so a sample can tear if the sensor updates its output
//! registers in between; nothing here guards against that.

use ufmt::{uDisplay, uWrite, Formatter};

use super::fixed::write_fixed2;
use super::registers::{Channel, PWR_MGMT_1};
use super::tilt::{self, Orientation};
use crate::config::{GyroScaling, SensorConfig};
use crate::error::{Error, Result};
use crate::hal::Transport;

/// LSB per g at ±2g full scale
pub const ACCEL_SENSITIVITY: f64 = 16384.0;
/// LSB per °/s at ±250°/s full scale
pub const GYRO_SENSITIVITY: i16 = 131;
/// LSB per °C
pub const TEMP_SENSITIVITY: f64 = 340.0;
/// °C at a reading of zero
pub const TEMP_OFFSET_C: f64 = 36.53;

/// 3-axis sensor data
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl uDisplay for Vec3 {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> core::result::Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str("X=")?;
        write_fixed2(f, self.x)?;
        f.write_str(" Y=")?;
        write_fixed2(f, self.y)?;
        f.write_str(" Z=")?;
        write_fixed2(f, self.z)
    }
}

/// Reinterpret a raw register word as two's complement
#[inline]
pub const fn to_signed16(raw: u16) -> i16 {
    raw as i16
}

/// Scale a signed accelerometer count to g
#[inline]
pub fn accel_to_g(count: i16) -> f64 {
    count as f64 / ACCEL_SENSITIVITY
}

/// Scale a signed gyroscope count to °/s
pub fn gyro_to_dps(count: i16, scaling: GyroScaling) -> f64 {
    match scaling {
        GyroScaling::Float => count as f64 / GYRO_SENSITIVITY as f64,
        GyroScaling::Integer => count.div_euclid(GYRO_SENSITIVITY) as f64,
    }
}

/// Convert a signed temperature count to °C
#[inline]
pub fn temp_to_celsius(count: i16) -> f64 {
    count as f64 / TEMP_SENSITIVITY + TEMP_OFFSET_C
}

/// MPU6050 session: one device on one bus
pub struct Mpu6050<T> {
    transport: T,
    config: SensorConfig,
}

impl<T: Transport> Mpu6050<T> {
    /// Open a session and wake the sensor
    ///
    /// The MPU6050 powers up asleep; clearing PWR_MGMT_1 starts the
    /// internal oscillator and the measurement cycle.
    pub fn new(transport: T, config: SensorConfig) -> Result<Self, T::Error> {
        let mut mpu = Self { transport, config };

        mpu.write_reg(PWR_MGMT_1, 0x00)?;
        log_info!("mpu6050 awake at {:#x}", mpu.config.address);

        Ok(mpu)
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// End the session and hand the transport back
    pub fn release(self) -> T {
        self.transport
    }

    /// Read one register
    pub fn read_byte(&mut self, register: u8) -> Result<u8, T::Error> {
        let address = self.config.address;
        self.transport
            .read_byte(address, register)
            .map_err(|err| {
                log_warn!("mpu6050 read of {:#x} failed", register);
                Error::Transport(err)
            })
    }

    /// Read `high` and `high + 1` and join them big-endian
    ///
    /// `high` must be below 0xFF; the low address wraps to 0x00 otherwise.
    pub fn read_raw_word(&mut self, high: u8) -> Result<u16, T::Error> {
        let hi = self.read_byte(high)?;
        let lo = self.read_byte(high.wrapping_add(1))?;
        Ok(u16::from_be_bytes([hi, lo]))
    }

    pub fn read_signed_word(&mut self, high: u8) -> Result<i16, T::Error> {
        self.read_raw_word(high).map(to_signed16)
    }

    /// Signed count for one named channel
    pub fn read_channel(&mut self, channel: Channel) -> Result<i16, T::Error> {
        self.read_signed_word(channel.high_register())
    }

    /// Die temperature in °C
    pub fn read_temperature_celsius(&mut self) -> Result<f64, T::Error> {
        let count = self.read_channel(Channel::Temperature)?;
        let celsius = temp_to_celsius(count);
        log_trace!("temp raw={} C={}", count, celsius);
        Ok(celsius)
    }

    /// Angular rate in °/s, read X then Y then Z
    pub fn read_gyro_scaled(&mut self) -> Result<Vec3, T::Error> {
        let x = self.read_channel(Channel::GyroX)?;
        let y = self.read_channel(Channel::GyroY)?;
        let z = self.read_channel(Channel::GyroZ)?;
        log_trace!("gyro raw x={} y={} z={}", x, y, z);

        let scaling = self.config.gyro_scaling;
        Ok(Vec3 {
            x: gyro_to_dps(x, scaling),
            y: gyro_to_dps(y, scaling),
            z: gyro_to_dps(z, scaling),
        })
    }

    /// Acceleration in g, read X then Y then Z
    pub fn read_accel_scaled(&mut self) -> Result<Vec3, T::Error> {
        let x = self.read_channel(Channel::AccelX)?;
        let y = self.read_channel(Channel::AccelY)?;
        let z = self.read_channel(Channel::AccelZ)?;
        log_trace!("accel raw x={} y={} z={}", x, y, z);

        Ok(Vec3 {
            x: accel_to_g(x),
            y: accel_to_g(y),
            z: accel_to_g(z),
        })
    }

    /// Read the accelerometer and derive the tilt angles from it
    pub fn read_orientation(&mut self) -> Result<Orientation, T::Error> {
        let accel = self.read_accel_scaled()?;
        Ok(tilt::compute_orientation(accel.x, accel.y, accel.z))
    }

    /// Write to register
    fn write_reg(&mut self, register: u8, value: u8) -> Result<(), T::Error> {
        let address = self.config.address;
        self.transport
            .write_byte(address, register, value)
            .map_err(|err| {
                log_warn!("mpu6050 write of {:#x} failed", register);
                Error::Transport(err)
            })
    }
}
