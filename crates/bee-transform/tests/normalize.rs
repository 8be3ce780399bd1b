//! Tests for cell normalization.

use bee_model::MetricValue;
use bee_transform::{ParseError, SpecialToken, normalize};
use proptest::prelude::*;

#[test]
fn special_tokens_map_to_fixed_values() {
    assert_eq!(normalize("(Z)"), Ok(MetricValue::Number(0.25)));
    assert_eq!(normalize("(X)"), Ok(MetricValue::Missing));
    assert_eq!(normalize("(NA)"), Ok(MetricValue::Missing));
    assert_eq!(normalize("-"), Ok(MetricValue::Number(0.0)));
}

#[test]
fn tokens_are_trimmed_before_matching() {
    assert_eq!(normalize("  (Z) "), Ok(MetricValue::Number(0.25)));
    assert_eq!(normalize("\t-\n"), Ok(MetricValue::Number(0.0)));
}

#[test]
fn every_token_has_a_value() {
    for token in SpecialToken::ALL {
        assert_eq!(normalize(token.as_str()), Ok(token.value()));
    }
}

#[test]
fn empty_cell_is_missing() {
    assert_eq!(normalize(""), Ok(MetricValue::Missing));
    assert_eq!(normalize("   "), Ok(MetricValue::Missing));
}

#[test]
fn parses_integers_decimals_and_separators() {
    assert_eq!(normalize("42"), Ok(MetricValue::Number(42.0)));
    assert_eq!(normalize("12.5"), Ok(MetricValue::Number(12.5)));
    assert_eq!(normalize("1,234,000"), Ok(MetricValue::Number(1_234_000.0)));
    assert_eq!(normalize("-3"), Ok(MetricValue::Number(-3.0)));
}

#[test]
fn unknown_notation_is_a_parse_error() {
    assert_eq!(
        normalize("(D)"),
        Err(ParseError {
            raw: "(D)".to_string()
        })
    );
    assert!(normalize("n/a").is_err());
    assert!(normalize("--").is_err());
    assert!(normalize("12 colonies").is_err());
    assert!(normalize("NaN").is_err());
}

proptest! {
    #[test]
    fn numeric_strings_round_trip(value in -1.0e12f64..1.0e12f64) {
        let text = value.to_string();
        prop_assert_eq!(normalize(&text), Ok(MetricValue::Number(value)));
    }

    #[test]
    fn integers_with_separators_round_trip(value in 0u64..10_000_000_000u64) {
        let plain = value.to_string();
        let mut grouped = String::new();
        for (index, ch) in plain.chars().enumerate() {
            if index > 0 && (plain.len() - index) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        prop_assert_eq!(normalize(&grouped), Ok(MetricValue::Number(value as f64)));
    }
}
