//! # stackcalc
//!
//! stackcalc evaluates arithmetic expressions over non-negative integer
//! literals with `+ - * /` and parentheses. An expression passes through a
//! bracket check, a tokenizer, a shunting-yard converter and a postfix stack
//! machine; the first failing stage reports a typed error.
//!
//! Every stage owns its stacks, so calls are independent of each other and
//! may run on separate threads.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::CalcResult,
    interpreter::{
        brackets::check_brackets,
        converter::to_postfix,
        evaluator::evaluate,
        lexer::{Token, parse_postfix, tokenize},
        value::Number,
    },
};

/// Provides unified error types for validation and evaluation.
///
/// This module defines every error the pipeline can report. Validation and
/// conversion failures are [`error::ParseError`]s, stack and arithmetic
/// failures are [`error::RuntimeError`]s, and [`error::CalcError`] wraps
/// both.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Exposes the error kind independent of the message via
///   [`error::ErrorKind`].
pub mod error;
/// Orchestrates the pipeline stages.
///
/// This module ties together bracket validation, tokenizing, infix to postfix
/// conversion and postfix evaluation.
pub mod interpreter;
/// The generic last-in-first-out container shared by all stages.
pub mod stack;
/// General utilities for exact numeric conversion.
///
/// # Responsibilities
/// - Convert between `f64` and `i64` without silent data loss.
/// - Parse digit-run literals strictly.
pub mod util;

/// Validates an infix expression and converts it to postfix tokens.
///
/// # Example
/// ```
/// use stackcalc::{compile, interpreter::lexer::format_tokens};
///
/// let postfix = compile("(2-1)*4 + 6").unwrap();
/// assert_eq!(format_tokens(&postfix), "2 1 - 4 * 6 +");
/// ```
pub fn compile(source: &str) -> CalcResult<Vec<Token>> {
    check_brackets(source)?;
    let infix = tokenize(source)?;
    Ok(to_postfix(&infix)?)
}

/// Returns the value of an infix expression.
///
/// Runs the bracket check, the tokenizer, the converter and the evaluator in
/// that order and stops at the first failure.
///
/// # Errors
/// Returns an error if any stage fails. The error's
/// [`kind`](error::CalcError::kind) tells which check failed.
///
/// # Examples
/// ```
/// use stackcalc::{calculate, error::ErrorKind};
///
/// assert_eq!(calculate("(625+375)/100 - 2*(2+3)").unwrap().to_string(), "0");
/// assert_eq!(calculate("((2-1)*4 + 6) / 5").unwrap().to_string(), "2");
///
/// let err = calculate("+2-3").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MisplacedOperator);
/// ```
pub fn calculate(source: &str) -> CalcResult<Number> {
    debug!(source, "calculating expression");
    let postfix = compile(source)?;
    Ok(evaluate(&postfix)?)
}

/// Returns the value of an expression written in postfix notation, such as
/// `"2 1 - 4 *"`.
///
/// # Example
/// ```
/// use stackcalc::{calculate_postfix, error::ErrorKind};
///
/// assert_eq!(calculate_postfix("4 5 3 - +").unwrap().to_string(), "6");
/// assert_eq!(calculate_postfix("1 0 /").unwrap_err().kind(), ErrorKind::DivisionByZero);
/// ```
pub fn calculate_postfix(source: &str) -> CalcResult<Number> {
    debug!(source, "calculating postfix code");
    let postfix = parse_postfix(source)?;
    Ok(evaluate(&postfix)?)
}
