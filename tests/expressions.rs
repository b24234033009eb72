use keypad_calc::{
    ast::{BinaryOperator, Expr},
    error::{ErrorKind, ParseError},
    evaluate_expression,
    interpreter::{
        lexer::{Number, Token, tokenize},
        parser::core::{MAX_NESTING_DEPTH, parse},
    },
};

fn assert_value(src: &str, expected: f64) {
    match evaluate_expression(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-12,
                             "{src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match evaluate_expression(src) {
        Ok(value) => panic!("{src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "{src:?} failed with {e}"),
    }
}

#[test]
fn single_numbers_are_unchanged() {
    assert_value("42", 42.0);
    assert_value("3.5", 3.5);
    assert_value("0", 0.0);
    assert_value(".5", 0.5);
    assert_value("2.", 2.0);
    assert_value("  7  ", 7.0);
}

#[test]
fn operator_precedence() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * 3 + 4 * 5", 26.0);
    assert_value("1 + 6 / 3", 3.0);
}

#[test]
fn left_associativity() {
    assert_value("10 - 2 - 3", 5.0);
    assert_value("20 / 2 / 5", 2.0);
    assert_value("2 * 3 / 4", 1.5);
}

#[test]
fn unary_minus() {
    assert_value("-5 + 3", -2.0);
    assert_value("--3", 3.0);
    assert_value("---3", -3.0);
    assert_value("2 - -3", 5.0);
    assert_value("2 * -3", -6.0);
    assert_value("-(2 + 3)", -5.0);
    assert_value("-2 * 3", -6.0);
}

#[test]
fn decimals_are_not_rounded() {
    assert_value("0.1 + 0.2", 0.1 + 0.2);
    assert_value("1 / 3", 1.0 / 3.0);
}

#[test]
fn multiplication_alias() {
    assert_eq!(evaluate_expression("2 x 3"), evaluate_expression("2 * 3"));
    assert_value("2 x 3", 6.0);
    assert_value("7x6", 42.0);
}

#[test]
fn whitespace_is_ignored() {
    assert_value("1+2", 3.0);
    assert_value("\t1 +\n2 ", 3.0);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("5 / 0", ErrorKind::DivisionByZero);
    assert_failure("1 / (2 - 2)", ErrorKind::DivisionByZero);
    assert_failure("1 / -0", ErrorKind::DivisionByZero);
    assert_failure("0 / 0", ErrorKind::DivisionByZero);
}

#[test]
fn zero_numerator_is_fine() {
    assert_value("0 / 5", 0.0);
}

#[test]
fn empty_input_is_distinct_from_syntax_errors() {
    assert_failure("", ErrorKind::EmptyInput);
    assert_failure("   ", ErrorKind::EmptyInput);
    assert_failure("\t\n", ErrorKind::EmptyInput);
}

#[test]
fn malformed_input_is_syntax_error() {
    for src in ["2 + ", "(2 + 3", "2 ++ 3", "2..3", "1.2.3", ".", "2 3", "(2 + 3))", ")", "()",
                "* 2", "+2", "2 a", "2 % 3", "(", "2 * / 3"]
    {
        assert_failure(src, ErrorKind::Syntax);
    }
}

#[test]
fn overflow_is_error() {
    let huge = format!("1{}", "0".repeat(400));
    assert_failure(&huge, ErrorKind::Overflow);
    assert_failure("99999999999999999999 * 99999999999999999999 * 99999999999999999999 * \
                    99999999999999999999 * 99999999999999999999 * 99999999999999999999 * \
                    99999999999999999999 * 99999999999999999999 * 99999999999999999999 * \
                    99999999999999999999 * 99999999999999999999 * 99999999999999999999 * \
                    99999999999999999999 * 99999999999999999999 * 99999999999999999999 * \
                    99999999999999999999 * 99999999999999999999",
                   ErrorKind::Overflow);
}

#[test]
fn evaluation_is_idempotent() {
    for src in ["2 + 3 * 4", "5 / 0", "(1", "", "-1.25 x 4"] {
        assert_eq!(evaluate_expression(src), evaluate_expression(src));
    }
}

#[test]
fn lexer_reports_positions_and_text() {
    let tokens = tokenize("12.50 x(3)").unwrap();
    assert_eq!(tokens,
               vec![(Token::Number(Number { value: 12.5,
                                            text:  "12.50".to_string(), }),
                     0),
                    (Token::Star, 6),
                    (Token::LParen, 7),
                    (Token::Number(Number { value: 3.0,
                                            text:  "3".to_string(), }),
                     8),
                    (Token::RParen, 9),]);

    assert_eq!(tokenize("1 + 2..3"),
               Err(ParseError::MalformedNumber { text:     "2..3".to_string(),
                                                 position: 4, }));
    assert_eq!(tokenize("1 $ 2"),
               Err(ParseError::UnexpectedCharacter { token:    "$".to_string(),
                                                     position: 2, }));
}

#[test]
fn parser_builds_left_associative_tree() {
    let tokens = tokenize("10 - 2 - 3").unwrap();
    let expr = parse(&tokens).unwrap();

    let Expr::BinaryOp { left, op, right, .. } = expr else {
        panic!("expected a binary operation");
    };
    assert_eq!(op, BinaryOperator::Sub);
    assert!(matches!(*right, Expr::Literal { value, .. } if value == 3.0));
    assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Sub, .. }));
}

#[test]
fn parser_errors_are_specific() {
    let parse_str = |src: &str| parse(&tokenize(src).unwrap());

    assert_eq!(parse_str("(2 + 3"),
               Err(ParseError::ExpectedClosingParen { position: 0 }));
    assert_eq!(parse_str("2 +"), Err(ParseError::UnexpectedEndOfInput));
    assert_eq!(parse_str("2 ++ 3"),
               Err(ParseError::UnexpectedToken { token:    "+".to_string(),
                                                 position: 3, }));
    assert_eq!(parse_str("2 3"),
               Err(ParseError::UnexpectedTrailingTokens { token:    "3".to_string(),
                                                          position: 2, }));
}

#[test]
fn deep_nesting_is_rejected() {
    let ok = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
    assert_value(&ok, 1.0);

    let too_deep = format!("{}1{}",
                           "(".repeat(MAX_NESTING_DEPTH + 1),
                           ")".repeat(MAX_NESTING_DEPTH + 1));
    assert_failure(&too_deep, ErrorKind::Syntax);
    assert_failure(&format!("{}1", "-".repeat(MAX_NESTING_DEPTH + 1)), ErrorKind::Syntax);
}

#[test]
fn error_messages_carry_positions() {
    let err = evaluate_expression("8 / (4 - 4)").unwrap_err();
    assert_eq!(err.to_string(), "Error at position 2: Division by zero.");
}
