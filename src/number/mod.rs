//! Operand-text handling for the calculator
//!
//! Operand values live as strings in the display language the keypad edits:
//! an optional leading minus, decimal digits, at most one `.`, and at most
//! one exponent written as `e+` or `e-` followed by exponent digits. Several
//! *in-progress* editor states (`"."`, `"-"`, `"-."`, a trailing `"e+"`) are
//! valid strings here even though no float parser accepts them.
//!
//! All operations take an explicit [`Precision`] so tests can run at
//! alternate digit budgets.

/// Digit budgets for operand text.
///
/// `max_significant_digits` caps the mantissa; `max_exponent_digits` caps the
/// digits typed after an exponent marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    pub max_significant_digits: usize,
    pub max_exponent_digits: usize,
}

impl Default for Precision {
    fn default() -> Self {
        Precision {
            max_significant_digits: 10,
            max_exponent_digits: 3,
        }
    }
}

/// True for the empty-or-zero display states that sign toggles and memory
/// stores treat as "nothing entered yet".
pub fn is_zero_sentinel(text: &str) -> bool {
    text.is_empty() || text == "0"
}

/// Parse operand text to a double.
///
/// In-progress states parse as the value they denote so far: `"."`, `"-"`,
/// and `"-."` are zero, and a bare trailing `"e+"`/`"e-"` is stripped so the
/// mantissa alone is parsed. Anything else unparseable yields zero.
pub fn to_double(text: &str) -> f64 {
    let mut rest = text;
    loop {
        match rest {
            "" | "." | "-" | "-." => return 0.0,
            _ => {}
        }
        if let Some(stripped) = rest.strip_suffix("e+").or_else(|| rest.strip_suffix("e-")) {
            rest = stripped;
            continue;
        }
        return rest.parse().unwrap_or(0.0);
    }
}

/// Format a double back into operand text.
///
/// Uses at most `max_significant_digits` digits, switching to exponential
/// notation (with an explicit `e+`/`e-` marker and a two-digit minimum
/// exponent) when the magnitude demands it. Non-finite values format to the
/// `inf`/`-inf`/`nan` tokens that result classification recognizes.
pub fn to_text(value: f64, precision: &Precision) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    if value == 0.0 {
        return String::from("0");
    }

    let digits = precision.max_significant_digits.max(1);

    // Format in exponential form first; its exponent is authoritative after
    // rounding (log10 would mis-handle values that round up a magnitude).
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value))
    }
}

/// Drop trailing fractional zeros (and a then-trailing decimal point).
fn trim_fraction(text: &str) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text.to_string()
    }
}

/// Count significant digits in the mantissa: the sign, a single leading zero
/// before the decimal point, the point itself, and everything from the
/// exponent marker on are all ignored.
pub fn significant_digit_count(text: &str) -> usize {
    let mantissa = match text.find('e') {
        Some(pos) => &text[..pos],
        None => text,
    };
    let unsigned = mantissa.strip_prefix('-').unwrap_or(mantissa);
    let digits = unsigned.strip_prefix('0').unwrap_or(unsigned);
    digits.chars().filter(|c| *c != '.').count()
}

/// Digits present after the exponent marker and its sign character.
pub fn exponent_digit_count(text: &str) -> usize {
    match text.find('e') {
        Some(pos) => text.len().saturating_sub(pos + 2),
        None => 0,
    }
}

/// Whether another digit would exceed the relevant digit budget: the
/// exponent budget once a marker is present, the mantissa budget otherwise.
pub fn at_max_precision(text: &str, precision: &Precision) -> bool {
    if text.contains('e') {
        exponent_digit_count(text) >= precision.max_exponent_digits
    } else {
        significant_digit_count(text) >= precision.max_significant_digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_in_progress_states_as_zero() {
        assert_eq!(to_double(""), 0.0);
        assert_eq!(to_double("."), 0.0);
        assert_eq!(to_double("-"), 0.0);
        assert_eq!(to_double("-."), 0.0);
    }

    #[test]
    fn parses_open_exponents_as_their_mantissa() {
        assert_eq!(to_double("5e+"), 5.0);
        assert_eq!(to_double("5e-"), 5.0);
        assert_eq!(to_double("-2.5e+"), -2.5);
    }

    #[test]
    fn parses_complete_numbers() {
        assert_eq!(to_double("0.5"), 0.5);
        assert_eq!(to_double("-3."), -3.0);
        assert_eq!(to_double("1e+3"), 1000.0);
        assert_eq!(to_double("2e-2"), 0.02);
    }

    #[test]
    fn formats_small_integers_plainly() {
        let p = Precision::default();
        assert_eq!(to_text(5.0, &p), "5");
        assert_eq!(to_text(-42.0, &p), "-42");
        assert_eq!(to_text(0.0, &p), "0");
        assert_eq!(to_text(-0.0, &p), "0");
        assert_eq!(to_text(1024.0, &p), "1024");
    }

    #[test]
    fn formats_fractions_to_the_digit_budget() {
        let p = Precision::default();
        assert_eq!(to_text(1.0 / 9.0, &p), "0.1111111111");
        assert_eq!(to_text(0.25, &p), "0.25");
        assert_eq!(to_text(0.0001, &p), "0.0001");
    }

    #[test]
    fn switches_to_exponential_at_magnitude_bounds() {
        let p = Precision::default();
        assert_eq!(to_text(1e10, &p), "1e+10");
        assert_eq!(to_text(0.00001, &p), "1e-05");
        assert_eq!(to_text(2.5e20, &p), "2.5e+20");
        assert_eq!(to_text(-1e300, &p), "-1e+300");
    }

    #[test]
    fn rounding_can_bump_the_magnitude() {
        let p = Precision::default();
        assert_eq!(to_text(999.99999999999, &p), "1000");
    }

    #[test]
    fn formats_non_finite_tokens() {
        let p = Precision::default();
        assert_eq!(to_text(f64::INFINITY, &p), "inf");
        assert_eq!(to_text(f64::NEG_INFINITY, &p), "-inf");
        assert_eq!(to_text(f64::NAN, &p), "nan");
    }

    #[test]
    fn counts_significant_digits() {
        assert_eq!(significant_digit_count("1234567890"), 10);
        assert_eq!(significant_digit_count("-0.5"), 1);
        assert_eq!(significant_digit_count("0.1111111111"), 10);
        assert_eq!(significant_digit_count("1.5e+12"), 2);
        assert_eq!(significant_digit_count(""), 0);
        assert_eq!(significant_digit_count("0"), 0);
    }

    #[test]
    fn counts_exponent_digits() {
        assert_eq!(exponent_digit_count("5"), 0);
        assert_eq!(exponent_digit_count("5e+"), 0);
        assert_eq!(exponent_digit_count("5e+1"), 1);
        assert_eq!(exponent_digit_count("5e-123"), 3);
    }

    #[test]
    fn max_precision_switches_budgets_with_the_exponent() {
        let p = Precision::default();
        assert!(at_max_precision("1234567890", &p));
        assert!(!at_max_precision("123456789", &p));
        assert!(at_max_precision("1e+123", &p));
        assert!(!at_max_precision("1234567890e+12", &p));
    }

    #[test]
    fn round_trip_is_format_stable() {
        let p = Precision::default();
        for text in ["5", "0.1111111111", "1e+10", "-42", "0.25"] {
            assert_eq!(to_text(to_double(text), &p), text);
        }
    }
}
