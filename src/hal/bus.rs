//! Register-level bus access
//!
//! The driver only ever needs two primitives from the bus: read one register
//! byte and write one register byte. Anything that can do both is a
//! [`Transport`].

use embedded_hal::blocking::i2c::{Write, WriteRead};

/// Byte-wise register access to a device on a shared bus
///
/// # Invariants
///
/// - Each call is one complete bus transaction; no state carries between calls
/// - Nothing locks the bus across calls, so another master may interleave
/// - Errors are returned as-is; implementations do not retry
pub trait Transport {
    /// Bus-specific failure (NACK, arbitration loss, timeout)
    type Error;

    /// Read the register at `register` on the 7-bit device `device`
    fn read_byte(&mut self, device: u8, register: u8) -> Result<u8, Self::Error>;

    /// Write `value` into the register at `register` on the 7-bit device `device`
    fn write_byte(&mut self, device: u8, register: u8, value: u8) -> Result<(), Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn read_byte(&mut self, device: u8, register: u8) -> Result<u8, Self::Error> {
        T::read_byte(self, device, register)
    }

    fn write_byte(&mut self, device: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        T::write_byte(self, device, register, value)
    }
}

/// [`Transport`] over any `embedded-hal` blocking I2C bus
///
/// Reads are a register-address write followed by a repeated-start read of
/// one byte; writes send the register address and value in one transaction.
#[derive(Debug)]
pub struct I2cTransport<I2C> {
    i2c: I2C,
}

impl<I2C> I2cTransport<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> Transport for I2cTransport<I2C>
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
{
    type Error = E;

    fn read_byte(&mut self, device: u8, register: u8) -> Result<u8, E> {
        let mut buffer = [0u8; 1];
        self.i2c.write_read(device, &[register], &mut buffer)?;
        Ok(buffer[0])
    }

    fn write_byte(&mut self, device: u8, register: u8, value: u8) -> Result<(), E> {
        self.i2c.write(device, &[register, value])
    }
}
