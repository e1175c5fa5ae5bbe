mod fixed;
pub mod mpu6050;
pub mod registers;
pub mod tilt;

pub use mpu6050::{to_signed16, Mpu6050, Vec3};
pub use registers::Channel;
pub use tilt::{compute_orientation, Orientation};
