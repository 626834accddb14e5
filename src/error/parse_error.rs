use thiserror::Error;

/// Result type used by the validation and conversion stages.
pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while validating, tokenizing or
/// converting an expression.
pub enum ParseError {
    /// Parentheses or braces are unmatched or nested incorrectly.
    #[error("Incorrect bracket sequence.")]
    UnbalancedBrackets,
    /// A character outside the digit, operator and parenthesis alphabet.
    #[error("Invalid character '{character}' at position {position}.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character index in the whitespace-free expression.
        position:  usize,
    },
    /// An operator at the start or end of the expression, or directly after
    /// another operator.
    #[error("Operator '{operator}' in an unexpected place at position {position}.")]
    MisplacedOperator {
        /// The symbol of the misplaced operator.
        operator: char,
        /// Zero-based character index in the whitespace-free expression.
        position: usize,
    },
}
