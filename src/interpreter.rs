/// The bracket validator.
///
/// Checks that parentheses and braces are matched and correctly nested before
/// anything else looks at the structure of an expression.
pub mod brackets;
/// The shunting-yard converter.
///
/// Reorders validated infix tokens into postfix (Reverse Polish) order
/// according to operator precedence and left associativity.
pub mod converter;
/// The postfix evaluator.
///
/// Replays postfix tokens against an operand stack and produces the numeric
/// result, reporting missing operands, leftover operands and division by
/// zero.
///
/// # Responsibilities
/// - Pushes numbers and applies operators to the two topmost operands.
/// - Checks divisors before dividing.
/// - Ensures exactly one value remains.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// The lexer strips whitespace from the raw text and produces numbers,
/// operators and parentheses, rejecting characters outside the grammar and
/// operators without an operand on both sides. It also reads postfix code
/// written as separate words.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Reports invalid characters and misplaced operators with their position.
/// - Renders token sequences for display.
pub mod lexer;
/// The arithmetic operators and their precedence.
pub mod operator;
/// The numeric result type and its display normalization.
pub mod value;
