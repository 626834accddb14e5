use tracing::{debug, trace};

use crate::{
    error::{EvalResult, RuntimeError},
    interpreter::{lexer::Token, value::Number},
    stack::Stack,
    util::num::parse_digits,
};

/// Evaluates postfix tokens on an operand stack.
///
/// Numbers are pushed; an operator pops the right operand, then the left
/// one, and pushes `left op right`. Exactly one value must remain at the
/// end.
///
/// # Errors
/// - [`RuntimeError::EmptyStack`] if an operator lacks operands.
/// - [`RuntimeError::DivisionByZero`] if a divisor is zero.
/// - [`RuntimeError::Overflow`] if an intermediate value is not finite.
/// - [`RuntimeError::MalformedExpression`] if zero or several values remain.
/// - [`RuntimeError::UnexpectedToken`] for a parenthesis.
/// - [`RuntimeError::InvalidLiteral`] for a number token that is not a digit
///   run or does not fit a finite `f64`.
///
/// # Example
/// ```
/// use stackcalc::{
///     error::RuntimeError,
///     interpreter::{evaluator::evaluate, lexer::parse_postfix},
/// };
///
/// let postfix = parse_postfix("2 1 - 4 * 6 + 5 /").unwrap();
/// assert_eq!(evaluate(&postfix).unwrap().to_string(), "2");
///
/// let postfix = parse_postfix("1 0 /").unwrap();
/// assert_eq!(evaluate(&postfix), Err(RuntimeError::DivisionByZero));
/// ```
pub fn evaluate(postfix: &[Token]) -> EvalResult<Number> {
    let mut operands: Stack<f64> = Stack::new();

    for token in postfix {
        match token {
            Token::Number(digits) => {
                let value =
                    parse_digits(digits).ok_or_else(|| RuntimeError::InvalidLiteral { literal: digits.clone() })?;
                operands.push(value);
            },
            Token::Operator(op) => {
                let right = operands.pop()?;
                let left = operands.pop()?;
                let result = op.apply(left, right)?;
                trace!(%left, %op, %right, %result, "applied operator");
                operands.push(result);
            },
            Token::OpenParen | Token::CloseParen => {
                return Err(RuntimeError::UnexpectedToken { token: token.to_string() });
            },
        }
    }

    if operands.len() != 1 {
        return Err(RuntimeError::MalformedExpression { remaining: operands.len() });
    }
    let result = Number::from(operands.pop()?);

    debug!(%result, "evaluated postfix code");
    Ok(result)
}
