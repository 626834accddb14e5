use std::fs;

use stackcalc::{
    calculate, calculate_postfix, compile,
    error::ErrorKind,
    interpreter::lexer::format_tokens,
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (expression, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            match (calculate(&expression), expected.strip_prefix('!')) {
                (Ok(value), None) => assert_eq!(value.to_string(),
                                                expected,
                                                "case {} in {:?}: {}",
                                                i + 1,
                                                path,
                                                expression),
                (Err(e), Some(kind)) => {
                    let kind: ErrorKind = kind.parse().unwrap_or_else(|e| panic!("{path:?}: {e}"));
                    assert_eq!(e.kind(), kind, "case {} in {:?}: {}", i + 1, path, expression);
                },
                (outcome, _) => panic!("case {} in {:?} failed:\n{}\nexpected {}, got {:?}",
                                       i + 1,
                                       path,
                                       expression,
                                       expected,
                                       outcome),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Reads `expression => expected` lines, skipping blanks and `#` comments.
fn extract_cases(content: &str) -> Vec<(String, String)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .filter_map(|line| line.split_once("=>"))
           .map(|(expr, expected)| (expr.trim().to_string(), expected.trim().to_string()))
           .collect()
}

fn assert_result(src: &str, expected: &str) {
    match calculate(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "expression: {src}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match calculate(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "expression: {src}"),
    }
}

#[test]
fn worked_examples() {
    assert_eq!(format_tokens(&compile("(2-1)*4 + 6").unwrap()), "2 1 - 4 * 6 +");
    assert_result("(2-1)*4 + 6", "10");
    assert_result("(625+375)/100 - 2*(2+3)", "0");
    assert_result("((2-1)*4 + 6) / 5", "2");
}

#[test]
fn precedence_and_associativity() {
    assert_result("2 + 3 * 4", "14");
    assert_result("2 * 3 + 4", "10");
    assert_result("2 - 1 - 1", "0");
    assert_result("8 / 4 / 2", "1");
    assert_result("10 / 5 + 2 * 4 - 3 / 1", "7");
    assert_result("7 + 3 - 6 * 2 / 3", "6");
    assert_result("2 * (3 + 4)", "14");
}

#[test]
fn fractional_results_keep_their_decimals() {
    assert_result("7 / 2", "3.5");
    assert_result("1 / 4", "0.25");
    assert_result("1 / 4 * 4", "1");
}

#[test]
fn whitespace_is_insignificant() {
    assert_result("  12   +  30 ", "42");
    assert_result("1 0 + 5", "15");
    assert_result("\t6*\t7", "42");
}

#[test]
fn unbalanced_brackets_are_rejected_first() {
    assert_failure(")", ErrorKind::UnbalancedBrackets);
    assert_failure("(2+2 *2 ", ErrorKind::UnbalancedBrackets);
    assert_failure("(1 + 2))", ErrorKind::UnbalancedBrackets);
    assert_failure("({1 + 2)}", ErrorKind::UnbalancedBrackets);
    // The bracket check runs before the character check.
    assert_failure("(ы", ErrorKind::UnbalancedBrackets);
}

#[test]
fn invalid_characters() {
    assert_failure("256 + 347 - 123 ы", ErrorKind::InvalidCharacter);
    assert_failure("2.5 + 1", ErrorKind::InvalidCharacter);
    assert_failure("{1 + 2}", ErrorKind::InvalidCharacter);
    assert_failure("2 ^ 3", ErrorKind::InvalidCharacter);
    assert_failure("x + 1", ErrorKind::InvalidCharacter);
}

#[test]
fn misplaced_operators() {
    assert_failure("+2-3", ErrorKind::MisplacedOperator);
    assert_failure("+ 2 - 3", ErrorKind::MisplacedOperator);
    assert_failure("2 - 3*", ErrorKind::MisplacedOperator);
    assert_failure("2 - *3", ErrorKind::MisplacedOperator);
    assert_failure("2 * * 3", ErrorKind::MisplacedOperator);
    assert_failure("-", ErrorKind::MisplacedOperator);
}

#[test]
fn division_by_zero_never_yields_a_number() {
    assert_failure("1 / 0", ErrorKind::DivisionByZero);
    assert_failure("7 / (3 - 3)", ErrorKind::DivisionByZero);
    assert_failure("0 / 0", ErrorKind::DivisionByZero);
    assert_result("0 / 7", "0");
}

#[test]
fn structurally_incomplete_expressions() {
    assert_failure("()", ErrorKind::MalformedExpression);
    assert_failure("", ErrorKind::MalformedExpression);
    assert_failure("2 (3)", ErrorKind::MalformedExpression);
}

#[test]
fn operators_at_group_edges_are_misplaced() {
    assert_failure("(+2)", ErrorKind::MisplacedOperator);
    assert_failure("(2+)", ErrorKind::MisplacedOperator);
    assert_failure("(*)", ErrorKind::MisplacedOperator);
    assert_failure("2 * (3 -) + 1", ErrorKind::MisplacedOperator);
}

#[test]
fn huge_literals_are_not_reported_as_numbers() {
    let huge = "9".repeat(400);
    assert_failure(&huge, ErrorKind::MalformedExpression);
    assert_failure(&format!("{huge} - {huge}"), ErrorKind::MalformedExpression);
    assert_failure(&format!("1 / {huge}"), ErrorKind::MalformedExpression);

    let big = format!("1{}", "0".repeat(308));
    assert_failure(&format!("{big} * 10"), ErrorKind::MalformedExpression);
    assert_result(&format!("{big} - {big}"), "0");
}

#[test]
fn postfix_input() {
    assert_eq!(calculate_postfix("1 0 /").unwrap_err().kind(), ErrorKind::DivisionByZero);
    assert_eq!(calculate_postfix("2 3 - 12 10 - * 4 2 / +").unwrap().to_string(), "0");
    assert_eq!(calculate_postfix("7 3 6 2 3 / * - +").unwrap().to_string(), "6");
    assert_eq!(calculate_postfix("1 2 3 - 12 10 - * 4 2 / +").unwrap_err().kind(),
               ErrorKind::MalformedExpression);
    assert_eq!(calculate_postfix("1 +").unwrap_err().kind(), ErrorKind::EmptyStack);
    assert_eq!(calculate_postfix("1 ( 2 +").unwrap_err().kind(), ErrorKind::InvalidCharacter);
}

#[test]
fn evaluations_do_not_share_state() {
    assert_failure("1 +", ErrorKind::MisplacedOperator);
    assert!(calculate_postfix("1 2 3").is_err());
    assert_result("4", "4");

    let handles: Vec<_> = (0..8).map(|i| std::thread::spawn(move || calculate(&format!("{i} * ({i} + 1)"))))
                                .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let value = handle.join().unwrap().unwrap();
        assert_eq!(value.as_integer(), Some(i64::try_from(i * (i + 1)).unwrap()));
    }
}
