// Integration tests for the calculator session

use recalc::calc::engine::{Calculator, Slot};
use recalc::number::Precision;

fn drive(calc: &mut Calculator, codes: &str) {
    for code in codes.chars() {
        calc.submit_event(code);
    }
}

#[test]
fn test_clear_then_simple_addition() {
    let mut calc = Calculator::new();
    drive(&mut calc, "c2+3q");
    assert_eq!(calc.upper_text(), "5");
    assert_eq!(calc.lower_text(), "");
    assert_eq!(calc.operator_token(), "");
    assert!(!calc.has_error());
}

#[test]
fn test_binary_moves_editing_to_the_lower_line() {
    let mut calc = Calculator::new();
    drive(&mut calc, "12+");
    assert_eq!(calc.upper_text(), "12");
    assert_eq!(calc.lower_text(), "0");
    assert_eq!(calc.operator_token(), "+");
    assert_eq!(calc.active_slot(), Slot::Lower);
    drive(&mut calc, "34");
    assert_eq!(calc.lower_text(), "34");
}

#[test]
fn test_later_binary_codes_only_change_the_operator() {
    let mut calc = Calculator::new();
    drive(&mut calc, "2+3x");
    assert_eq!(calc.lower_text(), "3");
    assert_eq!(calc.operator_token(), "×");
    drive(&mut calc, "q");
    assert_eq!(calc.upper_text(), "6");
}

#[test]
fn test_equals_is_idempotent() {
    let mut calc = Calculator::new();
    drive(&mut calc, "2+3q");
    assert_eq!(calc.upper_text(), "5");
    let frames_before = calc.frames().len();
    drive(&mut calc, "q");
    assert_eq!(calc.upper_text(), "5");
    assert_eq!(calc.lower_text(), "");
    assert_eq!(calc.operator_token(), "");
    assert_eq!(calc.frames().len(), frames_before + 1);
}

#[test]
fn test_equals_and_binary_are_rejected_before_any_entry() {
    let mut calc = Calculator::new();
    drive(&mut calc, "q+");
    assert_eq!(calc.upper_text(), "");
    assert_eq!(calc.operator_token(), "");
    assert_eq!(calc.frames().len(), 1);
}

#[test]
fn test_leading_decimal_point_becomes_zero_point() {
    let mut calc = Calculator::new();
    drive(&mut calc, ".5");
    assert_eq!(calc.upper_text(), "0.5");
}

#[test]
fn test_second_decimal_point_is_rejected() {
    let mut calc = Calculator::new();
    drive(&mut calc, "1.2.3");
    assert_eq!(calc.upper_text(), "1.23");
}

#[test]
fn test_zero_does_not_accumulate() {
    let mut calc = Calculator::new();
    drive(&mut calc, "000");
    assert_eq!(calc.upper_text(), "0");
    drive(&mut calc, "7");
    assert_eq!(calc.upper_text(), "7");
}

#[test]
fn test_significant_digit_clamp() {
    let mut calc = Calculator::new();
    drive(&mut calc, "1234567890");
    assert_eq!(calc.upper_text(), "1234567890");
    drive(&mut calc, "1");
    assert_eq!(calc.upper_text(), "1234567890");
}

#[test]
fn test_exponent_digit_clamp() {
    let mut calc = Calculator::new();
    drive(&mut calc, "5e123");
    assert_eq!(calc.upper_text(), "5e+123");
    drive(&mut calc, "4");
    assert_eq!(calc.upper_text(), "5e+123");
}

#[test]
fn test_exponent_rejects_a_leading_zero() {
    let mut calc = Calculator::new();
    drive(&mut calc, "5e0");
    assert_eq!(calc.upper_text(), "5e+");
    drive(&mut calc, "3");
    assert_eq!(calc.upper_text(), "5e+3");
}

#[test]
fn test_scientific_requires_a_nonzero_mantissa() {
    let mut calc = Calculator::new();
    drive(&mut calc, "0e");
    assert_eq!(calc.upper_text(), "0");
    drive(&mut calc, "5ee");
    assert_eq!(calc.upper_text(), "5e+");
}

#[test]
fn test_sign_toggles_mantissa_and_exponent() {
    let mut calc = Calculator::new();
    drive(&mut calc, "5s");
    assert_eq!(calc.upper_text(), "-5");
    drive(&mut calc, "s");
    assert_eq!(calc.upper_text(), "5");
    drive(&mut calc, "e3s");
    assert_eq!(calc.upper_text(), "5e-3");
    drive(&mut calc, "s");
    assert_eq!(calc.upper_text(), "5e+3");
}

#[test]
fn test_sign_is_rejected_on_zero() {
    let mut calc = Calculator::new();
    drive(&mut calc, "s");
    assert_eq!(calc.upper_text(), "");
    drive(&mut calc, "0s");
    assert_eq!(calc.upper_text(), "0");
}

#[test]
fn test_memory_store_and_recall() {
    let mut calc = Calculator::new();
    drive(&mut calc, "7M");
    assert!(calc.memory1_occupied());
    assert_eq!(calc.memory1_text(), Some("7"));
    assert_eq!(calc.upper_text(), "7");
    drive(&mut calc, "cM");
    assert_eq!(calc.upper_text(), "7");
}

#[test]
fn test_second_memory_register_is_independent() {
    let mut calc = Calculator::new();
    drive(&mut calc, "3M");
    drive(&mut calc, "c8W");
    assert_eq!(calc.memory1_text(), Some("3"));
    assert_eq!(calc.memory2_text(), Some("8"));
    drive(&mut calc, "cW");
    assert_eq!(calc.upper_text(), "8");
}

#[test]
fn test_recall_from_an_empty_register_is_rejected() {
    let mut calc = Calculator::new();
    drive(&mut calc, "cM");
    assert_eq!(calc.upper_text(), "0");
    assert!(!calc.memory1_occupied());
}

#[test]
fn test_divide_by_zero_reports_the_error() {
    let mut calc = Calculator::new();
    drive(&mut calc, "0d0q");
    assert!(calc.has_error());
    assert_eq!(calc.upper_text(), "divide by 0 error");
}

#[test]
fn test_typing_after_an_error_starts_fresh() {
    let mut calc = Calculator::new();
    drive(&mut calc, "1d0q");
    assert!(calc.has_error());
    drive(&mut calc, "4");
    assert!(!calc.has_error());
    assert_eq!(calc.upper_text(), "4");
}

#[test]
fn test_operators_are_rejected_while_an_error_shows() {
    let mut calc = Calculator::new();
    drive(&mut calc, "1d0q");
    drive(&mut calc, "+q");
    assert!(calc.has_error());
    assert_eq!(calc.upper_text(), "divide by 0 error");
}

#[test]
fn test_unary_domain_errors() {
    let mut calc = Calculator::new();
    drive(&mut calc, "8sr");
    assert!(calc.has_error());
    assert_eq!(calc.upper_text(), "neg root error");

    let mut calc = Calculator::new();
    drive(&mut calc, "21!");
    assert_eq!(calc.upper_text(), "factorial size error");

    let mut calc = Calculator::new();
    drive(&mut calc, "3.5!");
    assert_eq!(calc.upper_text(), "dec factorial error");

    let mut calc = Calculator::new();
    drive(&mut calc, "c i");
    assert_eq!(calc.upper_text(), "inverse 0 error");
}

#[test]
fn test_unary_applies_to_the_active_line() {
    let mut calc = Calculator::new();
    drive(&mut calc, "2+9r");
    assert_eq!(calc.upper_text(), "2");
    assert_eq!(calc.lower_text(), "3");
    drive(&mut calc, "q");
    assert_eq!(calc.upper_text(), "5");
}

#[test]
fn test_reciprocal_fills_the_digit_budget() {
    let mut calc = Calculator::new();
    drive(&mut calc, "9i");
    assert_eq!(calc.upper_text(), "0.1111111111");
}

#[test]
fn test_factorial_of_twenty() {
    let mut calc = Calculator::new();
    drive(&mut calc, "20!");
    assert_eq!(calc.upper_text(), "2.432902008e+18");
}

#[test]
fn test_power_and_log_and_modulo() {
    let mut calc = Calculator::new();
    drive(&mut calc, "2^10q");
    assert_eq!(calc.upper_text(), "1024");

    let mut calc = Calculator::new();
    drive(&mut calc, "2l8q");
    assert_eq!(calc.upper_text(), "3");

    let mut calc = Calculator::new();
    drive(&mut calc, "7m3q");
    assert_eq!(calc.upper_text(), "1");
}

#[test]
fn test_power_domain_errors() {
    let mut calc = Calculator::new();
    drive(&mut calc, "0^0q");
    assert_eq!(calc.upper_text(), "0^0 error");

    let mut calc = Calculator::new();
    drive(&mut calc, "2s^.5q");
    assert_eq!(calc.upper_text(), "neg power error");
}

#[test]
fn test_overflow_reports_maximum_size() {
    let mut calc = Calculator::new();
    drive(&mut calc, "9e300x9e300q");
    assert!(calc.has_error());
    assert_eq!(calc.upper_text(), "maximum size error");
}

#[test]
fn test_result_switches_to_exponential_form() {
    let mut calc = Calculator::new();
    drive(&mut calc, "5e9x4q");
    assert_eq!(calc.upper_text(), "2e+10");
}

#[test]
fn test_custom_precision_is_honored() {
    let precision = Precision {
        max_significant_digits: 4,
        max_exponent_digits: 2,
    };
    let mut calc = Calculator::with_precision(precision);
    assert_eq!(calc.precision(), precision);
    drive(&mut calc, "12345");
    assert_eq!(calc.upper_text(), "1234");
    drive(&mut calc, "c3i");
    assert_eq!(calc.upper_text(), "0.3333");
}

#[test]
fn test_unknown_codes_are_not_recognized() {
    let mut calc = Calculator::new();
    assert!(!calc.submit_event('z'));
    assert!(calc.submit_event('5'));
    assert_eq!(calc.upper_text(), "5");
    assert_eq!(calc.frames()[0].events, "5");
}
