//! MPU6050 tilt and temperature reader
//!
//! Decodes the sensor's big-endian register pairs into physical units and
//! derives tilt angles from the accelerometer. The bus sits behind
//! [`hal::Transport`] so the same driver runs against the ATmega128 TWI
//! peripheral, any `embedded-hal` I2C bus, or an in-memory stub.
#![cfg_attr(not(test), no_std)]

#[macro_use]
pub mod logger;

pub mod config;
pub mod drivers;
pub mod error;
pub mod hal;

pub use config::{GyroScaling, SensorConfig};
pub use drivers::{Channel, Mpu6050, Orientation, Vec3};
pub use error::{BusOpenError, Error, Result};
pub use hal::Transport;
