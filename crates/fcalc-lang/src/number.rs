use std::fmt;

/// A fixed-width rational literal.
///
/// The sign of the value is carried by `denominator`; `numerator` is always the
/// magnitude. Arithmetic used while building a literal wraps on overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Number {
    pub numerator: u64,
    pub denominator: i64,
}

impl Number {
    /// Creates a new `Number` from its raw parts.
    pub const fn new(numerator: u64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Creates a whole number from an unsigned magnitude.
    pub const fn from_unsigned(value: u64) -> Self {
        Self::new(value, 1)
    }

    /// Creates a decimal `int.frac` where `frac_digits` is the number of
    /// fractional digits written, so leading zeros of `frac` are significant.
    pub fn from_decimal(int: u64, frac: u64, frac_digits: u32) -> Self {
        let scale = 10u64.wrapping_pow(frac_digits);
        Self::new(
            int.wrapping_mul(scale).wrapping_add(frac),
            scale as i64,
        )
    }

    /// Returns `true` if the represented value is below zero.
    pub fn is_negative(&self) -> bool {
        self.denominator < 0 && self.numerator != 0
    }

    /// Returns `true` if the number represents an integer value.
    pub fn is_int(&self) -> bool {
        self.denominator.unsigned_abs() == 1
    }

    /// Returns the number of decimal places if the denominator is a power of ten.
    fn decimal_places(&self) -> Option<u32> {
        let mut den = self.denominator.unsigned_abs();
        let mut places = 0;
        while den > 1 && den % 10 == 0 {
            den /= 10;
            places += 1;
        }
        (den == 1).then_some(places)
    }

    /// Returns the value as a lossy `f64`.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::new(0, 1)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::from_unsigned(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::new(value.unsigned_abs(), if value < 0 { -1 } else { 1 })
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };

        match self.decimal_places() {
            Some(0) => write!(f, "{}{}", sign, self.numerator),
            Some(places) => {
                let den = self.denominator.unsigned_abs();
                let frac = format!("{:0width$}", self.numerator % den, width = places as usize);
                let frac = frac.trim_end_matches('0');
                if frac.is_empty() {
                    write!(f, "{}{}", sign, self.numerator / den)
                } else {
                    write!(f, "{}{}.{}", sign, self.numerator / den, frac)
                }
            }
            None => write!(
                f,
                "{}{}/{}",
                sign,
                self.numerator,
                self.denominator.unsigned_abs()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(Number::new(42, 1), "42")]
    #[case(Number::new(314, 100), "3.14")]
    #[case(Number::new(305, 100), "3.05")]
    #[case(Number::new(300, 100), "3")]
    #[case(Number::new(310, 100), "3.1")]
    #[case(Number::new(5, 1000), "0.005")]
    #[case(Number::new(42, -1), "-42")]
    #[case(Number::new(25, -10), "-2.5")]
    #[case(Number::new(1, 3), "1/3")]
    #[case(Number::new(1, -3), "-1/3")]
    #[case(Number::new(0, -1), "0")]
    #[case(Number::new(0, 1), "0")]
    fn test_display_formatting(#[case] num: Number, #[case] expected: &str) {
        assert_eq!(format!("{}", num), expected);
    }

    #[rstest]
    #[case(3, 14, 2, Number::new(314, 100))]
    #[case(3, 5, 2, Number::new(305, 100))]
    #[case(0, 5, 1, Number::new(5, 10))]
    #[case(412, 312, 3, Number::new(412_312, 1000))]
    fn test_from_decimal(
        #[case] int: u64,
        #[case] frac: u64,
        #[case] digits: u32,
        #[case] expected: Number,
    ) {
        assert_eq!(Number::from_decimal(int, frac, digits), expected);
    }

    #[test]
    fn test_from_decimal_wraps_on_overflow() {
        let num = Number::from_decimal(u64::MAX, 1, 1);
        assert_eq!(num.numerator, u64::MAX.wrapping_mul(10).wrapping_add(1));
        assert_eq!(num.denominator, 10);
    }

    #[rstest]
    #[case(42i64, Number::new(42, 1))]
    #[case(-42i64, Number::new(42, -1))]
    #[case(0i64, Number::new(0, 1))]
    fn test_from_i64(#[case] input: i64, #[case] expected: Number) {
        assert_eq!(Number::from(input), expected);
    }

    #[rstest]
    #[case(Number::new(42, -1), true)]
    #[case(Number::new(42, 1), false)]
    #[case(Number::new(0, -1), false)]
    fn test_is_negative(#[case] num: Number, #[case] expected: bool) {
        assert_eq!(num.is_negative(), expected);
    }

    #[rstest]
    #[case(Number::new(314, 100), 3.14)]
    #[case(Number::new(5, -2), -2.5)]
    fn test_to_f64(#[case] num: Number, #[case] expected: f64) {
        assert!((num.to_f64() - expected).abs() < f64::EPSILON);
    }
}
