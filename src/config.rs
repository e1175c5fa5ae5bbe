//! Configuration constants and sensor session settings

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// MPU6050 I2C address with AD0 tied low
pub const MPU6050_ADDR: u8 = 0x68;

/// MPU6050 I2C address with AD0 tied high
pub const MPU6050_ADDR_ALT: u8 = 0x69;

/// TWI bus speed modes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TwiSpeed {
    Standard100k,
    Fast400k,
}

impl TwiSpeed {
    /// SCL frequency in Hz
    pub const fn frequency_hz(self) -> u32 {
        match self {
            TwiSpeed::Standard100k => 100_000,
            TwiSpeed::Fast400k => 400_000,
        }
    }

    /// TWBR value for a prescaler of 1: `(F_CPU / SCL - 16) / 2`
    pub const fn bit_rate(self) -> u8 {
        ((CPU_FREQ_HZ / self.frequency_hz() - 16) / 2) as u8
    }
}

/// How gyroscope counts are turned into degrees per second.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroScaling {
    /// `count / 131.0`
    #[default]
    Float,
    /// Whole degrees per second: `count / 131` as integer division,
    /// rounding toward negative infinity. Matches readings logged by older tooling.
    Integer,
}

/// Settings for one sensor session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// 7-bit device address
    pub address: u8,
    /// Gyroscope count conversion, see [`GyroScaling`]
    pub gyro_scaling: GyroScaling,
}

impl SensorConfig {
    pub const fn new() -> Self {
        Self {
            address: MPU6050_ADDR,
            gyro_scaling: GyroScaling::Float,
        }
    }

    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    pub const fn with_gyro_scaling(mut self, gyro_scaling: GyroScaling) -> Self {
        self.gyro_scaling = gyro_scaling;
        self
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_rate_matches_16mhz_table() {
        assert_eq!(TwiSpeed::Standard100k.bit_rate(), 72);
        assert_eq!(TwiSpeed::Fast400k.bit_rate(), 12);
    }

    #[test]
    fn test_default_config() {
        let config = SensorConfig::default();
        assert_eq!(config.address, MPU6050_ADDR);
        assert_eq!(config.gyro_scaling, GyroScaling::Float);
    }

    #[test]
    fn test_builder() {
        let config = SensorConfig::new()
            .with_address(MPU6050_ADDR_ALT)
            .with_gyro_scaling(GyroScaling::Integer);
        assert_eq!(config.address, 0x69);
        assert_eq!(config.gyro_scaling, GyroScaling::Integer);
    }
}
