//! Fixed-point float output for `ufmt`, which has no float support

use ufmt::{uWrite, uwrite, Formatter};

/// Write `value` rounded to two decimals, e.g. `-0.05`, `90.00`
pub(crate) fn write_fixed2<W>(f: &mut Formatter<'_, W>, value: f64) -> Result<(), W::Error>
where
    W: uWrite + ?Sized,
{
    let centi = libm::round(value * 100.0) as i64;
    if centi < 0 {
        f.write_str("-")?;
    }
    let abs = centi.unsigned_abs();
    let frac = (abs % 100) as u8;
    uwrite!(f, "{}.", abs / 100)?;
    if frac < 10 {
        f.write_str("0")?;
    }
    uwrite!(f, "{}", frac)
}

#[cfg(test)]
pub(crate) mod tests {
    use core::convert::Infallible;
    use ufmt::uWrite;

    /// `uWrite` sink for asserting on formatted output
    #[derive(Default)]
    pub(crate) struct Sink(pub String);

    impl uWrite for Sink {
        type Error = Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
            self.0.push_str(s);
            Ok(())
        }
    }

    struct Fixed(f64);

    impl ufmt::uDisplay for Fixed {
        fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
        where
            W: uWrite + ?Sized,
        {
            super::write_fixed2(f, self.0)
        }
    }

    fn render(value: f64) -> String {
        let mut sink = Sink::default();
        ufmt::uwrite!(sink, "{}", Fixed(value)).unwrap();
        sink.0
    }

    #[test]
    fn test_fixed_point_rendering() {
        assert_eq!(render(0.0), "0.00");
        assert_eq!(render(36.53), "36.53");
        assert_eq!(render(-90.0), "-90.00");
        assert_eq!(render(1.005_1), "1.01");
        assert_eq!(render(-0.05), "-0.05");
        assert_eq!(render(0.004), "0.00");
    }
}
