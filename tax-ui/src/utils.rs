use rust_decimal::Decimal;
use tax_core::calculations::common::round_half_up;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
pub enum ParseDecimalError {
    #[error("invalid amount '{input}': {source}")]
    Number {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    /// A `,` that does not separate groups of three digits, e.g. `50,5`.
    #[error("invalid amount '{input}': misplaced thousands separator")]
    Grouping { input: String },
}

impl ParseDecimalError {
    pub fn input(&self) -> &str {
        match self {
            Self::Number { input, .. } | Self::Grouping { input } => input,
        }
    }
}

/// Trims whitespace and a leading euro sign.
fn normalize_decimal_input(s: &str) -> &str {
    s.trim().trim_start_matches('€').trim()
}

/// Removes `,` thousands separators. Returns `None` unless every comma sits
/// between groups of digits in the integer part: a first group of one to
/// three digits, then groups of exactly three.
fn strip_thousands_separators(s: &str) -> Option<String> {
    if !s.contains(',') {
        return Some(s.to_string());
    }
    let (whole, fraction) = match s.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (s, None),
    };
    if fraction.is_some_and(|f| f.contains(',')) {
        return None;
    }

    let digits = whole.strip_prefix(['-', '+']).unwrap_or(whole);
    let mut groups = digits.split(',');
    let first = groups.next()?;
    let valid = (1..=3).contains(&first.len())
        && groups.all(|group| group.len() == 3)
        && digits.chars().all(|c| c.is_ascii_digit() || c == ',');

    valid.then(|| s.replace(',', ""))
}

/// Parses a user-entered amount into a [`Decimal`].
///
/// Accepts `,` as thousands separator (`"50,000"`) and an optional `€`
/// prefix. Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let Some(plain) = strip_thousands_separators(normalized) else {
        tracing::warn!(input = %s, "misplaced thousands separator");
        return Err(ParseDecimalError::Grouping {
            input: s.to_string(),
        });
    };
    plain.parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid amount: {}", e);
        ParseDecimalError::Number {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Formats an amount as euros with cents and thousands separators.
///
/// Rounds half away from zero to two places. Negative amounts keep the sign
/// after the currency symbol (`€-2,480.00`).
pub fn format_euro(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    let sign = if rounded.is_sign_negative() { "-" } else { "" };

    let mut magnitude = rounded.abs();
    magnitude.rescale(2);
    let text = magnitude.to_string();
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!("€{sign}{}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal("50,000").unwrap(), dec!(50000));
        assert_eq!(parse_decimal("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn parse_decimal_accepts_euro_prefix_and_whitespace() {
        assert_eq!(parse_decimal("  €40,000.50 ").unwrap(), dec!(40000.50));
        assert_eq!(parse_decimal("€ 12").unwrap(), dec!(12));
    }

    #[test]
    fn parse_decimal_empty_treated_as_zero() {
        assert_eq!(parse_decimal("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_invalid_returns_error() {
        let err = parse_decimal("fifty").unwrap_err();
        assert_eq!(err.input(), "fifty");
        assert!(matches!(err, ParseDecimalError::Number { .. }));
    }

    #[test]
    fn parse_decimal_rejects_misplaced_commas() {
        for input in ["50,5", "1,2,3", "1234,567", ",500", "500,", "1,000.5,0", "-5,00"] {
            let err = parse_decimal(input).unwrap_err();
            assert!(
                matches!(err, ParseDecimalError::Grouping { .. }),
                "{input} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn parse_decimal_accepts_grouped_negative_and_plain_values() {
        assert_eq!(parse_decimal("-1,500").unwrap(), dec!(-1500));
        assert_eq!(parse_decimal("999").unwrap(), dec!(999));
        assert_eq!(parse_decimal("1234567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn format_euro_rounds_to_cents() {
        assert_eq!(format_euro(dec!(11058.048)), "€11,058.05");
        assert_eq!(format_euro(dec!(5452.032)), "€5,452.03");
    }

    #[test]
    fn format_euro_pads_cents() {
        assert_eq!(format_euro(dec!(0)), "€0.00");
        assert_eq!(format_euro(dec!(16030.08)), "€16,030.08");
        assert_eq!(format_euro(dec!(135000)), "€135,000.00");
        assert_eq!(format_euro(dec!(7.5)), "€7.50");
    }

    #[test]
    fn format_euro_groups_large_values() {
        assert_eq!(format_euro(dec!(1234567.891)), "€1,234,567.89");
        assert_eq!(format_euro(dec!(999.995)), "€1,000.00");
        assert_eq!(format_euro(dec!(100000)), "€100,000.00");
    }

    #[test]
    fn format_euro_negative_values() {
        assert_eq!(format_euro(dec!(-2480.00)), "€-2,480.00");
        assert_eq!(format_euro(dec!(-0.004)), "€0.00");
    }
}
