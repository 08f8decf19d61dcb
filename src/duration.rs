//! Human time-expression parsing.
//!
//! Converts free-form durations such as `1h 30m`, `90m`, `1.5h` or a bare
//! `45` into whole seconds, the unit JIRA expects for `timeSpentSeconds`.

use thiserror::Error;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Fraction digits beyond this carry no weight at nanosecond resolution.
const MAX_FRACTION_DIGITS: usize = 18;

/// Errors produced while parsing a time expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    /// Nothing was entered.
    #[error("time input is empty")]
    Empty,

    /// The expression starts with a minus sign.
    #[error("time spent cannot be negative: '{0}'")]
    Negative(String),

    /// A unit appeared without a number in front of it.
    #[error("expected a number before '{0}'")]
    MissingNumber(String),

    /// A number followed an earlier component without its own unit.
    #[error("missing unit after '{0}' (use h, m or s)")]
    MissingUnit(String),

    /// The unit is not one we know.
    #[error("unknown unit '{0}' (use h, m or s)")]
    UnknownUnit(String),

    /// The number itself is malformed, e.g. `1.2.3`.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// The total does not fit in the supported range.
    #[error("duration is too large")]
    Overflow,
}

/// Result type for duration parsing.
pub type Result<T> = std::result::Result<T, DurationError>;

/// Parse a time expression into whole seconds.
///
/// Accepts one or more `<number><unit>` components, optionally separated by
/// whitespace. A bare number with no unit is read as seconds. Decimal values
/// are allowed and the total is truncated to whole seconds.
///
/// # Examples
///
/// ```
/// use jira_worklog::duration::parse_duration;
///
/// assert_eq!(parse_duration("1h 30m").unwrap(), 5400);
/// assert_eq!(parse_duration("90m").unwrap(), 5400);
/// assert_eq!(parse_duration("45").unwrap(), 45);
/// assert!(parse_duration("soon").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<u64> {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(DurationError::Empty);
    }
    if normalized.starts_with('-') {
        return Err(DurationError::Negative(normalized));
    }

    let total_nanos = if is_bare_number(&normalized) {
        component_nanos(&normalized, NANOS_PER_SECOND)?
    } else {
        parse_components(&normalized)?
    };

    u64::try_from(total_nanos / NANOS_PER_SECOND).map_err(|_| DurationError::Overflow)
}

/// Render seconds as a compact human string, e.g. `1h 30m`.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if secs > 0 || parts.is_empty() {
        parts.push(format!("{}s", secs));
    }
    parts.join(" ")
}

fn is_bare_number(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn parse_components(input: &str) -> Result<u128> {
    let mut rest = input;
    let mut total: u128 = 0;

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }

        let number_end = rest.find(|c: char| !is_number_char(c)).unwrap_or(rest.len());
        let number = &rest[..number_end];
        if number.is_empty() {
            return Err(DurationError::MissingNumber(rest.to_string()));
        }
        rest = rest[number_end..].trim_start();

        let unit_end = rest
            .find(|c: char| is_number_char(c) || c.is_whitespace())
            .unwrap_or(rest.len());
        let unit = &rest[..unit_end];
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(number.to_string()));
        }
        rest = &rest[unit_end..];

        let unit_nanos = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit(unit.to_string()))?;
        total = total
            .checked_add(component_nanos(number, unit_nanos)?)
            .ok_or(DurationError::Overflow)?;
    }

    Ok(total)
}

fn unit_nanos(unit: &str) -> Option<u128> {
    let nanos = match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => 1_000,
        "ms" => 1_000_000,
        "s" | "sec" | "secs" | "second" | "seconds" => NANOS_PER_SECOND,
        "m" | "min" | "mins" | "minute" | "minutes" => 60 * NANOS_PER_SECOND,
        "h" | "hr" | "hrs" | "hour" | "hours" => 3600 * NANOS_PER_SECOND,
        _ => return None,
    };
    Some(nanos)
}

/// Value of a single `<number>` in nanoseconds, given its unit size.
fn component_nanos(number: &str, unit: u128) -> Result<u128> {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if fraction.contains('.') || (whole.is_empty() && fraction.is_empty()) {
        return Err(DurationError::InvalidNumber(number.to_string()));
    }

    let whole_value: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| DurationError::Overflow)?
    };
    let mut nanos = whole_value.checked_mul(unit).ok_or(DurationError::Overflow)?;

    if !fraction.is_empty() {
        let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
        let fraction_value: u128 = digits
            .parse()
            .map_err(|_| DurationError::InvalidNumber(number.to_string()))?;
        let scale = 10u128.pow(digits.len() as u32);
        nanos = nanos
            .checked_add(fraction_value * unit / scale)
            .ok_or(DurationError::Overflow)?;
    }

    Ok(nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(parse_duration("1h30m").unwrap(), 5400);
        assert_eq!(parse_duration("1h 30m").unwrap(), 5400);
        assert_eq!(parse_duration("  2h45m10s ").unwrap(), 9910);
    }

    #[test]
    fn test_single_units() {
        assert_eq!(parse_duration("90m").unwrap(), 5400);
        assert_eq!(parse_duration("3h").unwrap(), 10800);
        assert_eq!(parse_duration("45s").unwrap(), 45);
    }

    #[test]
    fn test_bare_number_is_seconds() {
        assert_eq!(parse_duration("45").unwrap(), 45);
        assert_eq!(parse_duration("0").unwrap(), 0);
        assert_eq!(parse_duration("1.9").unwrap(), 1);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(parse_duration("1H 30M").unwrap(), 5400);
    }

    #[test]
    fn test_decimal_values() {
        assert_eq!(parse_duration("1.5h").unwrap(), 5400);
        assert_eq!(parse_duration(".5m").unwrap(), 30);
        assert_eq!(parse_duration("0.29h").unwrap(), 1044);
    }

    #[test]
    fn test_sub_second_units_truncate() {
        assert_eq!(parse_duration("1500ms").unwrap(), 1);
        assert_eq!(parse_duration("1m 999ms").unwrap(), 60);
        assert_eq!(parse_duration("500us").unwrap(), 0);
    }

    #[test]
    fn test_word_units() {
        assert_eq!(parse_duration("2 hours 15 min").unwrap(), 8100);
        assert_eq!(parse_duration("1hr 5secs").unwrap(), 3605);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_duration(""), Err(DurationError::Empty));
        assert_eq!(parse_duration("   \n"), Err(DurationError::Empty));
    }

    #[test]
    fn test_negative_rejected() {
        assert!(matches!(
            parse_duration("-1h"),
            Err(DurationError::Negative(_))
        ));
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            parse_duration("3d"),
            Err(DurationError::UnknownUnit("d".to_string()))
        );
        assert!(matches!(
            parse_duration("soon"),
            Err(DurationError::MissingNumber(_))
        ));
    }

    #[test]
    fn test_missing_unit_after_component() {
        assert_eq!(
            parse_duration("1h 30"),
            Err(DurationError::MissingUnit("30".to_string()))
        );
    }

    #[test]
    fn test_invalid_number() {
        assert!(matches!(
            parse_duration("1.2.3h"),
            Err(DurationError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_duration("1.2.3"),
            Err(DurationError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            parse_duration("99999999999999999999999999999999h"),
            Err(DurationError::Overflow)
        );
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(45), "45s");
        assert_eq!(format_duration(5400), "1h 30m");
        assert_eq!(format_duration(3605), "1h 5s");
    }
}
