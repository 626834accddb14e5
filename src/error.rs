/// Parsing errors.
///
/// Defines the errors raised before evaluation starts: bracket mismatches,
/// characters outside the grammar, and misplaced operators.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised by the operand stack and the postfix
/// evaluator, such as division by zero or leftover operands.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseResult};
pub use runtime_error::{EvalResult, RuntimeError};
use thiserror::Error;

/// Result type of the whole pipeline.
pub type CalcResult<T> = Result<T, CalcError>;

/// Any failure surfaced by the calculation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// The kind of a failure, independent of its message and context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnbalancedBrackets,
    InvalidCharacter,
    MisplacedOperator,
    EmptyStack,
    DivisionByZero,
    MalformedExpression,
}

impl CalcError {
    /// Returns the kind of this error.
    ///
    /// # Example
    /// ```
    /// use stackcalc::{calculate, error::ErrorKind};
    ///
    /// let err = calculate("7 / (3 - 3)").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::UnbalancedBrackets) => ErrorKind::UnbalancedBrackets,
            Self::Parse(ParseError::InvalidCharacter { .. }) => ErrorKind::InvalidCharacter,
            Self::Parse(ParseError::MisplacedOperator { .. }) => ErrorKind::MisplacedOperator,
            Self::Runtime(RuntimeError::EmptyStack) => ErrorKind::EmptyStack,
            Self::Runtime(RuntimeError::DivisionByZero) => ErrorKind::DivisionByZero,
            Self::Runtime(RuntimeError::MalformedExpression { .. }
                          | RuntimeError::Overflow { .. }
                          | RuntimeError::UnexpectedToken { .. }
                          | RuntimeError::InvalidLiteral { .. }) => ErrorKind::MalformedExpression,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::UnbalancedBrackets => "UnbalancedBrackets",
            Self::InvalidCharacter => "InvalidCharacter",
            Self::MisplacedOperator => "MisplacedOperator",
            Self::EmptyStack => "EmptyStack",
            Self::DivisionByZero => "DivisionByZero",
            Self::MalformedExpression => "MalformedExpression",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for ErrorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UnbalancedBrackets" => Ok(Self::UnbalancedBrackets),
            "InvalidCharacter" => Ok(Self::InvalidCharacter),
            "MisplacedOperator" => Ok(Self::MisplacedOperator),
            "EmptyStack" => Ok(Self::EmptyStack),
            "DivisionByZero" => Ok(Self::DivisionByZero),
            "MalformedExpression" => Ok(Self::MalformedExpression),
            other => Err(format!("unknown error kind '{other}'")),
        }
    }
}
