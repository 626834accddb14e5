use crate::{
    error::{ParseError, ParseResult},
    stack::Stack,
};

/// Returns the opener matching a closing bracket.
const fn opener_for(closing: char) -> Option<char> {
    match closing {
        ')' => Some('('),
        '}' => Some('{'),
        _ => None,
    }
}

/// Checks that the parentheses and braces in `source` are balanced and
/// correctly nested. All other characters are ignored.
///
/// # Example
/// ```
/// use stackcalc::interpreter::brackets::brackets_balanced;
///
/// assert!(brackets_balanced("{}(()) {(())()}"));
/// assert!(!brackets_balanced(")"));
/// assert!(!brackets_balanced("({)}"));
/// ```
#[must_use]
pub fn brackets_balanced(source: &str) -> bool {
    let mut stack = Stack::new();

    for c in source.chars() {
        match c {
            '(' | '{' => stack.push(c),
            ')' | '}' => match stack.pop() {
                Ok(open) if Some(open) == opener_for(c) => {},
                _ => return false,
            },
            _ => {},
        }
    }

    stack.is_empty()
}

/// Same as [`brackets_balanced`], reported as a [`ParseResult`].
///
/// # Errors
/// Returns [`ParseError::UnbalancedBrackets`] when the check fails.
pub fn check_brackets(source: &str) -> ParseResult<()> {
    if brackets_balanced(source) { Ok(()) } else { Err(ParseError::UnbalancedBrackets) }
}
