//! Error types shared by the transports and the driver

use ufmt::{uDisplay, uWrite, Formatter};

/// Diagnostic code space used by the firmware's error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ErrorCode {
    HardwareFault = 0x1000,
    CommunicationError = 0x3000,
}

/// The bus session could not be established
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusOpenError {
    /// The peripheral is already owned by another session
    InUse,
}

/// Driver error, generic over the transport's own error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus I/O failed: device absent, NACK, bus fault
    Transport(E),
    /// Bus session could not be opened
    BusOpen(BusOpenError),
}

pub type Result<T, E> = core::result::Result<T, Error<E>>;

impl<E> Error<E> {
    /// Numeric code for compact error reports
    pub fn code(&self) -> u16 {
        let code = match self {
            Error::Transport(_) => ErrorCode::CommunicationError,
            Error::BusOpen(_) => ErrorCode::HardwareFault,
        };
        code as u16
    }
}

impl<E> From<BusOpenError> for Error<E> {
    fn from(err: BusOpenError) -> Self {
        Error::BusOpen(err)
    }
}

impl<E> uDisplay for Error<E> {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> core::result::Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match self {
            Error::Transport(_) => f.write_str("transport error"),
            Error::BusOpen(BusOpenError::InUse) => f.write_str("bus open failed: in use"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let transport: Error<()> = Error::Transport(());
        let open: Error<()> = BusOpenError::InUse.into();
        assert_eq!(transport.code(), 0x3000);
        assert_eq!(open.code(), 0x1000);
        assert_eq!(open, Error::BusOpen(BusOpenError::InUse));
    }
}
