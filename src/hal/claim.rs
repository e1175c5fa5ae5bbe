//! Exclusive ownership of a bus peripheral
//!
//! A peripheral has one static [`ClaimFlag`]. Opening the bus takes a
//! [`BusClaim`] from it; the claim is released when the guard drops, so a
//! session dropped on an error path frees the bus just like an orderly close.

use core::cell::Cell;
use critical_section::Mutex;

use crate::error::BusOpenError;

/// Ownership flag for one peripheral, meant to live in a `static`
pub struct ClaimFlag {
    taken: Mutex<Cell<bool>>,
}

impl ClaimFlag {
    pub const fn new() -> Self {
        Self {
            taken: Mutex::new(Cell::new(false)),
        }
    }

    pub fn is_claimed(&self) -> bool {
        critical_section::with(|cs| self.taken.borrow(cs).get())
    }
}

impl Default for ClaimFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Held while a bus session is open
#[must_use = "the bus is released as soon as the claim is dropped"]
pub struct BusClaim {
    flag: &'static ClaimFlag,
}

impl BusClaim {
    /// Take the peripheral, or fail with [`BusOpenError::InUse`] if another
    /// claim is alive
    pub fn acquire(flag: &'static ClaimFlag) -> Result<Self, BusOpenError> {
        let was_taken = critical_section::with(|cs| flag.taken.borrow(cs).replace(true));
        if was_taken {
            log_warn!("bus already claimed");
            return Err(BusOpenError::InUse);
        }
        Ok(Self { flag })
    }
}

impl Drop for BusClaim {
    fn drop(&mut self) {
        critical_section::with(|cs| self.flag.taken.borrow(cs).set(false));
    }
}
