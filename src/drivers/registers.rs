//! MPU6050 register map

/// Power management 1; writing 0 clears the sleep bit
pub const PWR_MGMT_1: u8 = 0x6B;
/// Power management 2
pub const PWR_MGMT_2: u8 = 0x6C;

pub const ACCEL_XOUT_H: u8 = 0x3B;
pub const ACCEL_YOUT_H: u8 = 0x3D;
pub const ACCEL_ZOUT_H: u8 = 0x3F;
pub const TEMP_OUT_H: u8 = 0x41;
pub const GYRO_XOUT_H: u8 = 0x43;
pub const GYRO_YOUT_H: u8 = 0x45;
pub const GYRO_ZOUT_H: u8 = 0x47;

/// A 16-bit measurement stored high byte first in two consecutive registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    AccelX,
    AccelY,
    AccelZ,
    Temperature,
    GyroX,
    GyroY,
    GyroZ,
}

impl Channel {
    /// All channels in register order
    pub const ALL: [Channel; 7] = [
        Channel::AccelX,
        Channel::AccelY,
        Channel::AccelZ,
        Channel::Temperature,
        Channel::GyroX,
        Channel::GyroY,
        Channel::GyroZ,
    ];

    pub const fn high_register(self) -> u8 {
        match self {
            Channel::AccelX => ACCEL_XOUT_H,
            Channel::AccelY => ACCEL_YOUT_H,
            Channel::AccelZ => ACCEL_ZOUT_H,
            Channel::Temperature => TEMP_OUT_H,
            Channel::GyroX => GYRO_XOUT_H,
            Channel::GyroY => GYRO_YOUT_H,
            Channel::GyroZ => GYRO_ZOUT_H,
        }
    }

    pub const fn low_register(self) -> u8 {
        self.high_register() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_follows_high() {
        for channel in Channel::ALL {
            assert_eq!(channel.low_register(), channel.high_register() + 1);
        }
    }

    #[test]
    fn test_output_block_is_contiguous() {
        // 0x3B..=0x48 with no gaps or overlaps
        let mut expected = ACCEL_XOUT_H;
        for channel in Channel::ALL {
            assert_eq!(channel.high_register(), expected);
            expected += 2;
        }
        assert_eq!(expected, 0x49);
    }
}
