use crate::error::{EvalResult, RuntimeError};

/// The four arithmetic operators understood by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Returns the operator written as `symbol`, if any.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Binding strength; higher binds tighter.
    ///
    /// All operators are left-associative, so an operator on the stack with
    /// equal precedence is applied before the incoming one.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Computes `left op right`.
    ///
    /// The divisor is checked before dividing, so `x / 0` never yields an
    /// infinity or NaN. A result that leaves the finite range is an error as
    /// well.
    ///
    /// # Errors
    /// - [`RuntimeError::DivisionByZero`] if `self` is [`Operator::Div`] and
    ///   `right` is zero.
    /// - [`RuntimeError::Overflow`] if the result is not finite.
    ///
    /// # Example
    /// ```
    /// use stackcalc::{error::RuntimeError, interpreter::operator::Operator};
    ///
    /// assert_eq!(Operator::Sub.apply(2.0, 1.0), Ok(1.0));
    /// assert_eq!(Operator::Div.apply(1.0, 0.0), Err(RuntimeError::DivisionByZero));
    /// assert!(matches!(Operator::Mul.apply(1e308, 10.0), Err(RuntimeError::Overflow { .. })));
    /// ```
    pub fn apply(self, left: f64, right: f64) -> EvalResult<f64> {
        let result = match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                left / right
            },
        };

        if !result.is_finite() {
            return Err(RuntimeError::Overflow { left:     left.to_string(),
                                                operator: self.symbol(),
                                                right:    right.to_string(), });
        }
        Ok(result)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
