use tracing::debug;

use crate::{
    error::{ParseError, ParseResult},
    interpreter::{
        lexer::{Token, format_tokens},
        operator::Operator,
    },
    stack::Stack,
};

/// Converts infix tokens to postfix order with the shunting-yard algorithm.
///
/// `*` and `/` bind tighter than `+` and `-`; operators of equal precedence
/// are left-associative, so `8 / 4 / 2` becomes `8 4 / 2 /`. Parentheses are
/// consumed and never appear in the output.
///
/// # Errors
/// Returns [`ParseError::UnbalancedBrackets`] if a closing parenthesis has no
/// matching opening one, or an opening one is never closed.
///
/// # Example
/// ```
/// use stackcalc::interpreter::{
///     converter::to_postfix,
///     lexer::{format_tokens, tokenize},
/// };
///
/// let infix = tokenize("5 * (15 + 25)").unwrap();
/// let postfix = to_postfix(&infix).unwrap();
/// assert_eq!(format_tokens(&postfix), "5 15 25 + *");
/// ```
pub fn to_postfix(infix: &[Token]) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(infix.len());
    let mut operators: Stack<Token> = Stack::new();

    for token in infix {
        match token {
            Token::Number(_) => output.push(token.clone()),
            Token::OpenParen => operators.push(Token::OpenParen),
            Token::Operator(op) => {
                while let Some(top) = operators.pop_if(|top| binds_before(top, *op)) {
                    output.push(top);
                }
                operators.push(Token::Operator(*op));
            },
            Token::CloseParen => loop {
                match operators.pop() {
                    Ok(Token::OpenParen) => break,
                    Ok(top) => output.push(top),
                    Err(_) => return Err(ParseError::UnbalancedBrackets),
                }
            },
        }
    }

    while let Ok(top) = operators.pop() {
        if top == Token::OpenParen {
            return Err(ParseError::UnbalancedBrackets);
        }
        output.push(top);
    }

    debug!(postfix = %format_tokens(&output), "converted to postfix");
    Ok(output)
}

/// Whether the stacked token must be emitted before `incoming` is pushed.
const fn binds_before(stacked: &Token, incoming: Operator) -> bool {
    match stacked {
        Token::Operator(top) => top.precedence() >= incoming.precedence(),
        Token::OpenParen | Token::CloseParen | Token::Number(_) => false,
    }
}
