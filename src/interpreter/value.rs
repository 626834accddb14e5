use crate::util::num::{f64_to_i64_exact, is_integral};

/// The numeric result of an evaluation.
///
/// Arithmetic is carried out on the full-precision `f64`; only formatting
/// normalizes the value. A result without a fractional part is shown as an
/// integer, anything else as a decimal.
///
/// # Example
/// ```
/// use stackcalc::interpreter::value::Number;
///
/// assert_eq!(Number::from(10.0).to_string(), "10");
/// assert_eq!(Number::from(-0.0).to_string(), "0");
/// assert_eq!(Number::from(2.5).to_string(), "2.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Number(f64);

impl Number {
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the value as an integer if it has no fractional part and fits
    /// exactly.
    #[must_use]
    pub fn as_integer(self) -> Option<i64> {
        f64_to_i64_exact(self.0)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Number> for f64 {
    fn from(number: Number) -> Self {
        number.0
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(int) = self.as_integer() {
            write!(f, "{int}")
        } else if is_integral(self.0) {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
