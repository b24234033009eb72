use keypad_calc::{
    error::ErrorKind,
    session::{Calculator, Key, ResultState, format_result},
};

fn type_keys(calc: &mut Calculator, labels: &str) {
    for label in labels.split_whitespace() {
        let key: Key = label.parse()
                            .unwrap_or_else(|e| panic!("bad key {label:?}: {e}"));
        calc.press(key);
    }
}

#[test]
fn keypad_sequence_calculates() {
    let mut calc = Calculator::new();
    type_keys(&mut calc, "7 x 6 =");

    assert_eq!(calc.equation(), "7 x 6");
    assert_eq!(calc.result().data.as_deref(), Some("42.00"));
    assert_eq!(calc.result().value, Some(42.0));
    assert!(!calc.result().is_error());
}

#[test]
fn precedence_through_keypad() {
    let mut calc = Calculator::new();
    type_keys(&mut calc, "1 2 0 0 + 3 4 . 5 x 2 =");

    assert_eq!(calc.equation(), "1200 + 34.5 x 2");
    assert_eq!(calc.result().data.as_deref(), Some("1,269.00"));
}

#[test]
fn delete_removes_padded_operator_whole() {
    let mut calc = Calculator::new();
    calc.update_equation("12");
    calc.update_equation(" + ");

    calc.delete_last_character();
    assert_eq!(calc.equation(), "12");

    calc.delete_last_character();
    assert_eq!(calc.equation(), "1");

    calc.delete_last_character();
    calc.delete_last_character();
    assert_eq!(calc.equation(), "");
}

#[test]
fn delete_on_short_padded_text_does_not_panic() {
    let mut calc = Calculator::new();
    calc.update_equation("1 ");
    calc.delete_last_character();
    assert_eq!(calc.equation(), "");
}

#[test]
fn errors_collapse_to_error_state_but_keep_kind() {
    let mut calc = Calculator::new();

    calc.update_equation("5 / 0");
    let state = calc.calculate();
    assert!(state.is_error());
    assert_eq!(state.data, None);
    assert_eq!(state.error, Some(ErrorKind::DivisionByZero));

    calc.clear();
    calc.update_equation(" + ");
    assert_eq!(calc.calculate().error, Some(ErrorKind::Syntax));

    calc.clear();
    assert_eq!(calc.calculate().error, Some(ErrorKind::EmptyInput));
}

#[test]
fn clear_resets_equation_and_result() {
    let mut calc = Calculator::new();
    type_keys(&mut calc, "9 / 3 =");
    assert_eq!(calc.result().data.as_deref(), Some("3.00"));

    calc.press(Key::Clear);
    assert_eq!(calc.equation(), "");
    assert_eq!(calc.result(), &ResultState::default());
}

#[test]
fn calculating_twice_gives_same_state() {
    let mut calc = Calculator::new();
    calc.update_equation("2 x 3.25");
    let first = calc.calculate().clone();
    let second = calc.calculate().clone();
    assert_eq!(first, second);
}

#[test]
fn key_labels() {
    assert_eq!("x".parse::<Key>(), Ok(Key::Multiply));
    assert_eq!("*".parse::<Key>(), Ok(Key::Multiply));
    assert_eq!("del".parse::<Key>(), Ok(Key::Delete));
    assert_eq!("AC".parse::<Key>(), Ok(Key::Clear));
    assert_eq!("0".parse::<Key>(), Ok(Key::Digit(0)));
    assert!("10".parse::<Key>().is_err());
    assert!("%".parse::<Key>().is_err());
}

#[test]
fn formatting_groups_thousands() {
    assert_eq!(format_result(0.0), "0.00");
    assert_eq!(format_result(999.999), "1,000.00");
    assert_eq!(format_result(1_000_000.0), "1,000,000.00");
    assert_eq!(format_result(-1234.5), "-1,234.50");
    assert_eq!(format_result(0.5), "0.50");
}
