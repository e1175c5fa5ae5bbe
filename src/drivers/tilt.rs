//! Tilt angles from a single accelerometer sample
//!
//! With the sensor at rest the accelerometer measures only gravity, so the
//! angle between each axis and the gravity vector gives the board's tilt.
//! Nothing here integrates the gyroscope; yaw is unobservable this way.

use libm::{atan2, sqrt};
use ufmt::{uDisplay, uWrite, Formatter};

use super::fixed::write_fixed2;

/// Rotation about the X and Y axes, in degrees
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Orientation {
    pub x_rotation: f64,
    pub y_rotation: f64,
}

/// Length of the vector `(a, b)`
#[inline]
pub fn distance(a: f64, b: f64) -> f64 {
    sqrt(a * a + b * b)
}

/// Tilt about the X axis; positive when the Y axis tips upward
pub fn x_rotation_degrees(x: f64, y: f64, z: f64) -> f64 {
    atan2(y, distance(x, z)).to_degrees()
}

/// Tilt about the Y axis; negative when the X axis tips upward
pub fn y_rotation_degrees(x: f64, y: f64, z: f64) -> f64 {
    -atan2(x, distance(y, z)).to_degrees()
}

/// Both tilt angles for one scaled accelerometer sample (in g)
pub fn compute_orientation(x: f64, y: f64, z: f64) -> Orientation {
    Orientation {
        x_rotation: x_rotation_degrees(x, y, z),
        y_rotation: y_rotation_degrees(x, y, z),
    }
}

impl uDisplay for Orientation {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str("x=")?;
        write_fixed2(f, self.x_rotation)?;
        f.write_str(" y=")?;
        write_fixed2(f, self.y_rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::fixed::tests::Sink;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(0.0, 0.0), 0.0);
        assert_close(distance(3.0, 4.0), 5.0);
        for (a, b) in [(0.3, -1.2), (-7.0, 2.5), (1e-3, 42.0)] {
            assert_eq!(distance(a, b), distance(b, a));
        }
    }

    #[test]
    fn test_level_is_zero_tilt() {
        assert_eq!(x_rotation_degrees(0.0, 0.0, 1.0), 0.0);
        assert_eq!(y_rotation_degrees(0.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_axis_aligned_gravity() {
        assert_close(y_rotation_degrees(1.0, 0.0, 0.0), -90.0);
        assert_close(y_rotation_degrees(-1.0, 0.0, 0.0), 90.0);
        assert_close(x_rotation_degrees(0.0, 1.0, 0.0), 90.0);
        assert_close(x_rotation_degrees(0.0, -1.0, 0.0), -90.0);
    }

    #[test]
    fn test_forty_five_degrees() {
        let h = core::f64::consts::FRAC_1_SQRT_2;
        assert_close(x_rotation_degrees(0.0, h, h), 45.0);
        assert_close(y_rotation_degrees(h, 0.0, h), -45.0);
    }

    #[test]
    fn test_zero_vector_is_defined() {
        let o = compute_orientation(0.0, 0.0, 0.0);
        assert_eq!(o, Orientation { x_rotation: 0.0, y_rotation: 0.0 });
    }

    #[test]
    fn test_compute_orientation_matches_parts() {
        let (x, y, z) = (0.12, -0.34, 0.93);
        let o = compute_orientation(x, y, z);
        assert_eq!(o.x_rotation, x_rotation_degrees(x, y, z));
        assert_eq!(o.y_rotation, y_rotation_degrees(x, y, z));
    }

    #[test]
    fn test_orientation_display() {
        let mut sink = Sink::default();
        let o = Orientation {
            x_rotation: 12.346,
            y_rotation: -90.0,
        };
        ufmt::uwrite!(sink, "{}", o).unwrap();
        assert_eq!(sink.0, "x=12.35 y=-90.00");
    }
}
