//! TWI (I2C) master on the ATmega128
//!
//! Implements the `embedded-hal` blocking I2C traits so it plugs into
//! [`I2cTransport`](super::I2cTransport) like any other bus.

use avr_device::atmega128a::TWI;
use core::marker::PhantomData;
use embedded_hal::blocking::i2c::{Write, WriteRead};

use super::claim::{BusClaim, ClaimFlag};
use crate::config::TwiSpeed;
use crate::error::BusOpenError;

// TWCR bits
const TWINT: u8 = 1 << 7;
const TWEA: u8 = 1 << 6;
const TWSTA: u8 = 1 << 5;
const TWSTO: u8 = 1 << 4;
const TWEN: u8 = 1 << 2;

static TWI_CLAIM: ClaimFlag = ClaimFlag::new();

/// TWI status codes (TWSR with prescaler bits masked)
#[derive(Clone, Copy, PartialEq)]
#[repr(u8)]
enum TwiStatus {
    StartTransmitted = 0x08,
    RepStartTransmitted = 0x10,
    AddrWriteAck = 0x18,
    AddrWriteNack = 0x20,
    DataWriteAck = 0x28,
    DataWriteNack = 0x30,
    ArbitrationLost = 0x38,
    AddrReadAck = 0x40,
    AddrReadNack = 0x48,
    DataReadAck = 0x50,
    DataReadNack = 0x58,
}

/// TWI bus failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TwiError {
    /// Address byte not acknowledged: no device at this address
    AddressNack,
    /// Data byte not acknowledged
    DataNack,
    ArbitrationLost,
    /// Any other TWSR value
    Bus(u8),
}

/// TWI peripheral driver
///
/// Dropping it disables the peripheral and releases the claim.
pub struct Twi {
    _twi: PhantomData<TWI>,
    _claim: BusClaim,
}

impl Twi {
    /// Claim the TWI peripheral and configure the bit rate
    ///
    /// Fails with [`BusOpenError::InUse`] while another `Twi` exists.
    pub fn open(speed: TwiSpeed) -> Result<Self, BusOpenError> {
        let claim = BusClaim::acquire(&TWI_CLAIM)?;

        let mut twi = Self {
            _twi: PhantomData,
            _claim: claim,
        };
        twi.set_speed(speed);
        unsafe {
            (*TWI::ptr()).twcr.write(|w| w.bits(TWEN));
        }

        log_debug!("twi open, TWBR={}", speed.bit_rate());
        Ok(twi)
    }

    /// Disable the peripheral and release the claim
    pub fn close(self) {
        drop(self);
    }

    pub fn set_speed(&mut self, speed: TwiSpeed) {
        unsafe {
            let p = TWI::ptr();
            (*p).twbr.write(|w| w.bits(speed.bit_rate()));
            (*p).twsr.write(|w| w.bits(0));
        }
    }

    /// Kick off a TWI operation and block until TWINT is set
    fn execute(&mut self, control: u8) -> Result<u8, TwiError> {
        unsafe {
            (*TWI::ptr()).twcr.write(|w| w.bits(control | TWINT | TWEN));
        }
        nb::block!(self.poll())
    }

    fn poll(&self) -> nb::Result<u8, TwiError> {
        unsafe {
            let p = TWI::ptr();
            if (*p).twcr.read().bits() & TWINT == 0 {
                return Err(nb::Error::WouldBlock);
            }
            Ok((*p).twsr.read().bits() & 0xF8)
        }
    }

    fn start(&mut self) -> Result<(), TwiError> {
        match self.execute(TWSTA)? {
            s if s == TwiStatus::StartTransmitted as u8 => Ok(()),
            s if s == TwiStatus::RepStartTransmitted as u8 => Ok(()),
            s => Err(Self::classify(s)),
        }
    }

    fn stop(&mut self) {
        unsafe {
            let p = TWI::ptr();
            (*p).twcr.write(|w| w.bits(TWINT | TWSTO | TWEN));
            while (*p).twcr.read().bits() & TWSTO != 0 {}
        }
    }

    /// Address byte with R/W bit
    fn address(&mut self, addr: u8, read: bool) -> Result<(), TwiError> {
        self.load((addr << 1) | (read as u8));
        let expected = if read {
            TwiStatus::AddrReadAck
        } else {
            TwiStatus::AddrWriteAck
        };
        match self.execute(0)? {
            s if s == expected as u8 => Ok(()),
            s => Err(Self::classify(s)),
        }
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), TwiError> {
        self.load(byte);
        match self.execute(0)? {
            s if s == TwiStatus::DataWriteAck as u8 => Ok(()),
            s => Err(Self::classify(s)),
        }
    }

    /// Read a byte, ACKing it unless it is the last one
    fn read_byte(&mut self, ack: bool) -> Result<u8, TwiError> {
        let status = self.execute(if ack { TWEA } else { 0 })?;
        if status == TwiStatus::DataReadAck as u8 || status == TwiStatus::DataReadNack as u8 {
            Ok(unsafe { (*TWI::ptr()).twdr.read().bits() })
        } else {
            Err(Self::classify(status))
        }
    }

    fn load(&mut self, byte: u8) {
        unsafe {
            (*TWI::ptr()).twdr.write(|w| w.bits(byte));
        }
    }

    fn classify(status: u8) -> TwiError {
        match status {
            s if s == TwiStatus::AddrWriteNack as u8 || s == TwiStatus::AddrReadNack as u8 => {
                TwiError::AddressNack
            }
            s if s == TwiStatus::DataWriteNack as u8 => TwiError::DataNack,
            s if s == TwiStatus::ArbitrationLost as u8 => TwiError::ArbitrationLost,
            s => TwiError::Bus(s),
        }
    }

    fn write_frame(&mut self, addr: u8, bytes: &[u8]) -> Result<(), TwiError> {
        self.start()?;
        self.address(addr, false)?;
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    fn read_frame(&mut self, addr: u8, buffer: &mut [u8]) -> Result<(), TwiError> {
        self.start()?;
        self.address(addr, true)?;
        let last = buffer.len().saturating_sub(1);
        for (i, slot) in buffer.iter_mut().enumerate() {
            *slot = self.read_byte(i < last)?;
        }
        Ok(())
    }
}

impl Drop for Twi {
    fn drop(&mut self) {
        unsafe {
            (*TWI::ptr()).twcr.write(|w| w.bits(0));
        }
        // `_claim` drops after this, freeing the bus for the next `open`
    }
}

impl Write for Twi {
    type Error = TwiError;

    fn write(&mut self, addr: u8, bytes: &[u8]) -> Result<(), TwiError> {
        let result = self.write_frame(addr, bytes);
        // Arbitration loss already released the bus
        if result != Err(TwiError::ArbitrationLost) {
            self.stop();
        }
        result
    }
}

impl WriteRead for Twi {
    type Error = TwiError;

    fn write_read(&mut self, addr: u8, bytes: &[u8], buffer: &mut [u8]) -> Result<(), TwiError> {
        let result = self
            .write_frame(addr, bytes)
            .and_then(|()| self.read_frame(addr, buffer));
        if result != Err(TwiError::ArbitrationLost) {
            self.stop();
        }
        result
    }
}
