use proptest::prelude::*;
use stackcalc::{
    calculate,
    error::ErrorKind,
    interpreter::{brackets::brackets_balanced, evaluator::evaluate, lexer::Token, operator::Operator},
};

/// A reference expression tree, evaluated directly by recursion.
#[derive(Debug, Clone)]
enum Tree {
    Num(u32),
    Bin(Box<Self>, Operator, Box<Self>),
}

impl Tree {
    /// Fails on division by zero and on values that leave the finite range.
    fn value(&self) -> Result<f64, ErrorKind> {
        match self {
            Self::Num(n) => Ok(f64::from(*n)),
            Self::Bin(left, op, right) => {
                let (a, b) = (left.value()?, right.value()?);
                let result = match op {
                    Operator::Add => a + b,
                    Operator::Sub => a - b,
                    Operator::Mul => a * b,
                    Operator::Div if b == 0.0 => return Err(ErrorKind::DivisionByZero),
                    Operator::Div => a / b,
                };
                if result.is_finite() { Ok(result) } else { Err(ErrorKind::MalformedExpression) }
            },
        }
    }

    const fn precedence(&self) -> Option<u8> {
        match self {
            Self::Num(_) => None,
            Self::Bin(_, op, _) => Some(op.precedence()),
        }
    }

    /// Renders with only the parentheses that precedence and left
    /// associativity require.
    fn minimal(&self) -> String {
        match self {
            Self::Num(n) => n.to_string(),
            Self::Bin(left, op, right) => {
                let p = op.precedence();
                let l = match left.precedence() {
                    Some(lp) if lp < p => format!("({})", left.minimal()),
                    _ => left.minimal(),
                };
                let r = match right.precedence() {
                    Some(rp) if rp <= p => format!("({})", right.minimal()),
                    _ => right.minimal(),
                };
                format!("{l} {op} {r}")
            },
        }
    }

    fn fully_parenthesized(&self) -> String {
        match self {
            Self::Num(n) => n.to_string(),
            Self::Bin(left, op, right) => {
                format!("({}{op}{})", left.fully_parenthesized(), right.fully_parenthesized())
            },
        }
    }
}

fn operator() -> impl Strategy<Value = Operator> {
    prop_oneof![Just(Operator::Add), Just(Operator::Sub), Just(Operator::Mul), Just(Operator::Div)]
}

fn tree() -> impl Strategy<Value = Tree> {
    (0u32..1000).prop_map(Tree::Num).prop_recursive(6, 64, 2, |inner| {
                                         (inner.clone(), operator(), inner).prop_map(|(l, op, r)| {
                                                                               Tree::Bin(Box::new(l),
                                                                                         op,
                                                                                         Box::new(r))
                                                                           })
                                     })
}

fn token() -> impl Strategy<Value = Token> {
    prop_oneof![(0u32..100).prop_map(|n| Token::Number(n.to_string())),
                operator().prop_map(Token::Operator),
                Just(Token::OpenParen),
                Just(Token::CloseParen)]
}

proptest! {
    #[test]
    fn conversion_preserves_precedence(tree in tree()) {
        let source = tree.minimal();
        match (calculate(&source), tree.value()) {
            (Ok(number), Ok(expected)) => prop_assert_eq!(number.value().to_bits(), expected.to_bits()),
            (Err(e), Err(kind)) => prop_assert_eq!(e.kind(), kind),
            (outcome, expected) => prop_assert!(false, "{}: got {:?}, expected {:?}", source, outcome, expected),
        }
    }

    #[test]
    fn redundant_parentheses_change_nothing(tree in tree()) {
        let minimal = calculate(&tree.minimal()).map(|n| n.value().to_bits());
        let full = calculate(&tree.fully_parenthesized()).map(|n| n.value().to_bits());
        prop_assert_eq!(minimal, full);
    }

    #[test]
    fn bracket_check_is_pure(source in "[(){}0-9+ ]{0,24}") {
        prop_assert_eq!(brackets_balanced(&source), brackets_balanced(&source));
    }

    #[test]
    fn evaluator_never_panics(tokens in prop::collection::vec(token(), 0..16)) {
        let _ = evaluate(&tokens);
    }

    #[test]
    fn results_are_always_finite(tree in tree()) {
        if let Ok(number) = calculate(&tree.minimal()) {
            prop_assert!(number.value().is_finite());
        }
    }

    #[test]
    fn calculate_never_panics(source in "\\PC{0,32}") {
        let _ = calculate(&source);
    }
}
