//! Duration coercion
//!
//! Renders a structured duration value into the canonical lexical form
//! `[-]PnYnMnDTnHnMn[.f]S`. The component magnitudes arrive already
//! decomposed into calendar units (years/months/days) and exact-time
//! units (hours/minutes/seconds).

use crate::values::DurationValue;

/// Canonical duration lexical form.
///
/// The seconds component renders its nanosecond remainder as nine
/// digits then right-trims zero digits; a zero remainder yields no
/// fractional part at all.
pub fn duration_canonical(value: &DurationValue) -> String {
    let sign = if value.negative { "-" } else { "" };
    let seconds = if value.nanos == 0 {
        value.seconds.to_string()
    } else {
        format!("{}.{:09}", value.seconds, value.nanos)
            .trim_end_matches('0')
            .to_string()
    };
    format!(
        "{}P{}Y{}M{}DT{}H{}M{}S",
        sign, value.years, value.months, value.days, value.hours, value.minutes, seconds,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(negative: bool) -> DurationValue {
        DurationValue {
            negative,
            years: 1,
            months: 2,
            days: 3,
            hours: 4,
            minutes: 5,
            seconds: 6,
            nanos: 500_000_000,
        }
    }

    #[test]
    fn test_positive_duration() {
        assert_eq!(duration_canonical(&sample(false)), "P1Y2M3DT4H5M6.5S");
    }

    #[test]
    fn test_negative_duration() {
        assert_eq!(duration_canonical(&sample(true)), "-P1Y2M3DT4H5M6.5S");
    }

    #[test]
    fn test_zero_fraction_has_no_decimal_point() {
        let one_day = DurationValue {
            days: 1,
            ..Default::default()
        };
        assert_eq!(duration_canonical(&one_day), "P0Y0M1DT0H0M0S");
    }

    #[test]
    fn test_small_nanosecond_remainder() {
        let d = DurationValue {
            seconds: 0,
            nanos: 1,
            ..Default::default()
        };
        assert_eq!(duration_canonical(&d), "P0Y0M0DT0H0M0.000000001S");
    }
}
