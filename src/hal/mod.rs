pub mod bus;
pub mod claim;
pub mod stub;
#[cfg(all(feature = "atmega128", target_arch = "avr"))]
pub mod twi;

// Re-export commonly used types
pub use bus::{I2cTransport, Transport};
pub use claim::{BusClaim, ClaimFlag};
pub use stub::{StubError, StubTransport};
#[cfg(all(feature = "atmega128", target_arch = "avr"))]
pub use twi::{Twi, TwiError};
