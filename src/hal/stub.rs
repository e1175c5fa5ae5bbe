//! In-memory transport for testing without hardware

use super::Transport;

/// Stub transport failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StubError {
    /// No device answers at this address
    Nack { device: u8 },
    /// Injected fault on this register
    Fault { register: u8 },
}

/// One device's 256-byte register file
///
/// Reads and writes addressed to any other device NACK. A single register
/// can be set to fail so error paths can be exercised mid-sequence.
#[derive(Debug, Clone)]
pub struct StubTransport {
    device: u8,
    registers: [u8; 256],
    fault: Option<u8>,
    reads: usize,
    writes: usize,
}

impl StubTransport {
    /// Create a stub answering at `device` with every register zeroed
    pub fn new(device: u8) -> Self {
        Self {
            device,
            registers: [0; 256],
            fault: None,
            reads: 0,
            writes: 0,
        }
    }

    pub fn set_register(&mut self, register: u8, value: u8) {
        self.registers[register as usize] = value;
    }

    pub fn register(&self, register: u8) -> u8 {
        self.registers[register as usize]
    }

    /// Store `word` big-endian at `high` and `high + 1`
    pub fn set_word(&mut self, high: u8, word: u16) {
        let [hi, lo] = word.to_be_bytes();
        self.set_register(high, hi);
        self.set_register(high.wrapping_add(1), lo);
    }

    /// Make every access to `register` fail
    pub fn fail_on(&mut self, register: u8) {
        self.fault = Some(register);
    }

    pub fn clear_fault(&mut self) {
        self.fault = None;
    }

    /// Successful and failed reads so far
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Successful and failed writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn check(&self, device: u8, register: u8) -> Result<(), StubError> {
        if device != self.device {
            return Err(StubError::Nack { device });
        }
        if self.fault == Some(register) {
            return Err(StubError::Fault { register });
        }
        Ok(())
    }
}

impl Transport for StubTransport {
    type Error = StubError;

    fn read_byte(&mut self, device: u8, register: u8) -> Result<u8, StubError> {
        self.reads += 1;
        self.check(device, register)?;
        Ok(self.registers[register as usize])
    }

    fn write_byte(&mut self, device: u8, register: u8, value: u8) -> Result<(), StubError> {
        self.writes += 1;
        self.check(device, register)?;
        self.registers[register as usize] = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_read_write() {
        let mut stub = StubTransport::new(0x68);
        stub.write_byte(0x68, 0x6B, 0x40).unwrap();

        assert_eq!(stub.read_byte(0x68, 0x6B), Ok(0x40));
        assert_eq!(stub.reads(), 1);
        assert_eq!(stub.writes(), 1);
    }

    #[test]
    fn test_stub_set_word_is_big_endian() {
        let mut stub = StubTransport::new(0x68);
        stub.set_word(0x41, 0xABCD);

        assert_eq!(stub.register(0x41), 0xAB);
        assert_eq!(stub.register(0x42), 0xCD);
    }

    #[test]
    fn test_stub_wrong_device_nacks() {
        let mut stub = StubTransport::new(0x68);

        assert_eq!(stub.read_byte(0x69, 0x3B), Err(StubError::Nack { device: 0x69 }));
        assert_eq!(
            stub.write_byte(0x69, 0x6B, 0),
            Err(StubError::Nack { device: 0x69 })
        );
    }

    #[test]
    fn test_stub_fault_injection() {
        let mut stub = StubTransport::new(0x68);
        stub.fail_on(0x3C);

        assert_eq!(stub.read_byte(0x68, 0x3B), Ok(0));
        assert_eq!(stub.read_byte(0x68, 0x3C), Err(StubError::Fault { register: 0x3C }));

        stub.clear_fault();
        assert_eq!(stub.read_byte(0x68, 0x3C), Ok(0));
        assert_eq!(stub.reads(), 3);
    }
}
