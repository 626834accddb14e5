use thiserror::Error;

/// Result type used by the stack and the postfix evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while evaluating postfix code.
pub enum RuntimeError {
    /// Tried to pop or peek an empty stack.
    #[error("Not enough operands: the stack is empty.")]
    EmptyStack,
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Evaluation did not leave exactly one value behind.
    #[error("Incorrect expression: {remaining} values left after evaluation.")]
    MalformedExpression {
        /// How many values were left on the operand stack.
        remaining: usize,
    },
    /// A token that has no meaning in postfix code, such as a parenthesis.
    #[error("Incorrect expression: unexpected '{token}' in postfix code.")]
    UnexpectedToken {
        /// The rendered token.
        token: String,
    },
    /// An operation produced a value outside the finite `f64` range.
    #[error("Overflow while computing {left} {operator} {right}.")]
    Overflow {
        /// The left operand.
        left:     String,
        /// The operator symbol.
        operator: char,
        /// The right operand.
        right:    String,
    },
    /// A number token that is not a digit run, or too large to represent.
    #[error("Incorrect expression: '{literal}' is not a number.")]
    InvalidLiteral {
        /// The literal as it appeared in the token.
        literal: String,
    },
}
