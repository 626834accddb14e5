use logos::Logos;
use tracing::debug;

use crate::{
    error::{ParseError, ParseResult},
    interpreter::operator::Operator,
};

/// Represents a lexical token of an arithmetic expression.
///
/// The same tokens are used for infix code (source order, parentheses
/// present) and postfix code (no parentheses, operators after operands).
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// A run of decimal digits, such as `625`. No sign, no decimal point.
    #[regex(r"[0-9]+", |lex| lex.slice().to_owned())]
    Number(String),
    /// One of `+ - * /`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(digits) => f.write_str(digits),
            Self::Operator(op) => write!(f, "{op}"),
            Self::OpenParen => f.write_str("("),
            Self::CloseParen => f.write_str(")"),
        }
    }
}

/// Splits an infix expression into tokens.
///
/// Whitespace is removed first, so `"1 0"` reads as the number `10`. The
/// remaining text must consist of digits, `+ - * /` and parentheses, must
/// neither start nor end with an operator, and must not contain two adjacent
/// operators. The same holds inside parentheses: `(+2)` and `(2+)` are
/// rejected. Empty input produces no tokens.
///
/// # Errors
/// - [`ParseError::InvalidCharacter`] for a character outside the grammar.
/// - [`ParseError::MisplacedOperator`] for a leading, trailing or doubled
///   operator, or one next to the inside of a parenthesis.
///
/// # Example
/// ```
/// use stackcalc::{
///     error::ParseError,
///     interpreter::{lexer::{Token, tokenize}, operator::Operator},
/// };
///
/// let tokens = tokenize("(2 + 2) * 2").unwrap();
/// assert_eq!(tokens[0], Token::OpenParen);
/// assert_eq!(tokens[2], Token::Operator(Operator::Add));
/// assert_eq!(tokens.len(), 7);
///
/// assert!(matches!(tokenize("2 - *3"), Err(ParseError::MisplacedOperator { .. })));
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let compact: String = source.chars().filter(|c| !c.is_whitespace()).collect();

    let mut tokens = Vec::new();
    for (token, span) in Token::lexer(&compact).spanned() {
        match token {
            Ok(tok) => tokens.push((tok, span.start)),
            Err(()) => return Err(invalid_character(&compact, span.start)),
        }
    }

    check_operator_placement(&tokens)?;

    debug!(count = tokens.len(), "tokenized expression");
    Ok(tokens.into_iter().map(|(tok, _)| tok).collect())
}

/// Reads postfix code written as whitespace separated words, such as
/// `"1 0 /"`.
///
/// Each word must be a single digit run or a single operator, so `1+` is
/// rejected at the `+`. Operator placement is not checked here; the
/// evaluator reports missing operands.
///
/// # Errors
/// Returns [`ParseError::InvalidCharacter`] for any other word. The position
/// is the character index in `source`.
///
/// # Example
/// ```
/// use stackcalc::interpreter::{lexer::{Token, parse_postfix}, operator::Operator};
///
/// let tokens = parse_postfix("1 0 /").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number("1".into()),
///                 Token::Number("0".into()),
///                 Token::Operator(Operator::Div)]);
/// ```
pub fn parse_postfix(source: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    for word in source.split_whitespace() {
        // split_whitespace yields subslices of `source`, so the word is found
        // at or after the end of the previous one.
        let start = source[offset..].find(word).map_or(offset, |i| offset + i);
        offset = start + word.len();

        // The error points at the first byte the word cannot be read past:
        // a bad character, a parenthesis, or the start of a second token.
        let mut lexer = Token::lexer(word);
        let token = match lexer.next() {
            Some(Ok(tok @ (Token::Number(_) | Token::Operator(_)))) => tok,
            _ => return Err(invalid_character(source, start + lexer.span().start)),
        };
        if lexer.next().is_some() {
            return Err(invalid_character(source, start + lexer.span().start));
        }
        tokens.push(token);
    }

    debug!(count = tokens.len(), "parsed postfix code");
    Ok(tokens)
}

/// Renders tokens separated by single spaces.
///
/// # Example
/// ```
/// use stackcalc::interpreter::lexer::{format_tokens, parse_postfix};
///
/// let tokens = parse_postfix("2  1   -").unwrap();
/// assert_eq!(format_tokens(&tokens), "2 1 -");
/// ```
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

fn invalid_character(text: &str, byte_offset: usize) -> ParseError {
    let character = text[byte_offset..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
    ParseError::InvalidCharacter { character,
                                   position: text[..byte_offset].chars().count() }
}

/// Rejects operators at either end of the expression or of a parenthesized
/// group, and operators that directly follow another operator.
///
/// Every accepted token is ASCII, so byte offsets equal character positions.
fn check_operator_placement(tokens: &[(Token, usize)]) -> ParseResult<()> {
    let misplaced = |op: Operator, position: usize| ParseError::MisplacedOperator { operator: op.symbol(),
                                                                                   position };

    if let Some((Token::Operator(op), position)) = tokens.first() {
        return Err(misplaced(*op, *position));
    }
    if let Some((Token::Operator(op), position)) = tokens.last() {
        return Err(misplaced(*op, *position));
    }

    for pair in tokens.windows(2) {
        match pair {
            [(Token::Operator(_) | Token::OpenParen, _), (Token::Operator(op), position)]
            | [(Token::Operator(op), position), (Token::CloseParen, _)] => {
                return Err(misplaced(*op, *position));
            },
            _ => {},
        }
    }

    Ok(())
}
