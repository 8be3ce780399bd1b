//! Cell value normalization.
//!
//! USDA tables mark non-numeric cells with a fixed set of notations. Those
//! map to numbers or missing values; anything else that is not a number is a
//! [`ParseError`] left for the caller to record.

use thiserror::Error;

use bee_model::MetricValue;

/// Cell content that is neither a special notation nor a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized cell value {raw:?}")]
pub struct ParseError {
    pub raw: String,
}

/// USDA special notations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialToken {
    /// `(Z)`: less than half of the unit shown.
    LessThanHalfUnit,
    /// `(X)`: not applicable.
    NotApplicable,
    /// `(NA)`: not available.
    NotAvailable,
    /// `-`: zero.
    Zero,
}

impl SpecialToken {
    pub const ALL: [Self; 4] = [
        Self::LessThanHalfUnit,
        Self::NotApplicable,
        Self::NotAvailable,
        Self::Zero,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "(Z)" => Some(Self::LessThanHalfUnit),
            "(X)" => Some(Self::NotApplicable),
            "(NA)" => Some(Self::NotAvailable),
            "-" => Some(Self::Zero),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LessThanHalfUnit => "(Z)",
            Self::NotApplicable => "(X)",
            Self::NotAvailable => "(NA)",
            Self::Zero => "-",
        }
    }

    pub fn value(self) -> MetricValue {
        match self {
            Self::LessThanHalfUnit => MetricValue::Number(0.25),
            Self::NotApplicable | Self::NotAvailable => MetricValue::Missing,
            Self::Zero => MetricValue::Number(0.0),
        }
    }
}

/// Converts a raw cell to a metric value.
pub fn normalize(raw: &str) -> Result<MetricValue, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(MetricValue::Missing);
    }
    if let Some(token) = SpecialToken::parse(trimmed) {
        return Ok(token.value());
    }
    parse_number(trimmed)
        .map(MetricValue::Number)
        .ok_or_else(|| ParseError {
            raw: raw.to_string(),
        })
}

fn parse_number(value: &str) -> Option<f64> {
    let digits = if value.contains(',') {
        strip_thousands(value)?
    } else {
        value.to_string()
    };
    // f64::from_str also accepts "inf" and "NaN".
    if !digits
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E'))
    {
        return None;
    }
    digits.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// Removes thousands separators, rejecting commas outside 3-digit groups.
fn strip_thousands(value: &str) -> Option<String> {
    let (sign, unsigned) = match value.strip_prefix(['-', '+']) {
        Some(rest) => (&value[..1], rest),
        None => ("", value),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };
    let mut groups = integer.split(',');
    let head = groups.next()?;
    if head.is_empty() || head.len() > 3 {
        return None;
    }
    let mut out = format!("{sign}{head}");
    for group in groups {
        if group.len() != 3 {
            return None;
        }
        out.push_str(group);
    }
    if let Some(fraction) = fraction {
        if fraction.contains(',') {
            return None;
        }
        out.push('.');
        out.push_str(fraction);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_tokens_round_trip_text() {
        for token in SpecialToken::ALL {
            assert_eq!(SpecialToken::parse(token.as_str()), Some(token));
        }
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(parse_number("1,234"), Some(1234.0));
        assert_eq!(parse_number("-12,345,678.5"), Some(-12_345_678.5));
        assert_eq!(parse_number("1,23"), None);
        assert_eq!(parse_number("1234,567"), None);
        assert_eq!(parse_number(",123"), None);
    }

    #[test]
    fn rejects_non_finite_spellings() {
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("1e400"), None);
    }
}
