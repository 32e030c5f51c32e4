//! Temporal coercion
//!
//! Renders a structured date/time value into each of the canonical
//! lexical forms of the date/time family. One shared set of helpers
//! handles the three branching concerns: field selection per type,
//! fractional-second trimming (dateTime and time only), and the
//! timezone suffix (dateTime, time and date only).

use chrono::{Datelike, Timelike};

use crate::values::{Timestamp, Zone};

/// Render a year with the 4-digit zero padding and a leading minus for
/// negative years (the sign must not eat into the digit width).
fn fmt_year(year: i32) -> String {
    if year < 0 {
        format!("-{:04}", -(year as i64))
    } else {
        format!("{:04}", year)
    }
}

/// Fractional-second suffix: nanoseconds rendered as nine digits, then
/// right-trimmed of zero digits. A zero fraction yields no suffix at all.
fn fmt_fraction(ts: &Timestamp) -> String {
    let nanos = ts.time.nanosecond();
    if nanos == 0 {
        String::new()
    } else {
        format!(".{:09}", nanos).trim_end_matches('0').to_string()
    }
}

/// Timezone suffix: floating yields none, UTC yields the literal `Z`,
/// a fixed offset yields `±HH:MM` rebuilt from the signed offset.
fn fmt_zone(zone: Zone) -> String {
    match zone {
        Zone::Floating => String::new(),
        Zone::Utc => "Z".to_string(),
        Zone::Offset(offset) => {
            let secs = offset.local_minus_utc();
            let sign = if secs < 0 { '-' } else { '+' };
            let secs = secs.unsigned_abs();
            format!("{}{:02}:{:02}", sign, secs / 3600, (secs % 3600) / 60)
        }
    }
}

/// Canonical dateTime: `YYYY-MM-DDTHH:MM:SS[.f][zone]`
pub fn datetime_canonical(ts: &Timestamp) -> String {
    format!(
        "{}-{:02}-{:02}T{:02}:{:02}:{:02}{}{}",
        fmt_year(ts.date.year()),
        ts.date.month(),
        ts.date.day(),
        ts.time.hour(),
        ts.time.minute(),
        ts.time.second(),
        fmt_fraction(ts),
        fmt_zone(ts.zone),
    )
}

/// Canonical time: `HH:MM:SS[.f][zone]`
pub fn time_canonical(ts: &Timestamp) -> String {
    format!(
        "{:02}:{:02}:{:02}{}{}",
        ts.time.hour(),
        ts.time.minute(),
        ts.time.second(),
        fmt_fraction(ts),
        fmt_zone(ts.zone),
    )
}

/// Canonical date: `YYYY-MM-DD[zone]` (no sub-second resolution)
pub fn date_canonical(ts: &Timestamp) -> String {
    format!(
        "{}-{:02}-{:02}{}",
        fmt_year(ts.date.year()),
        ts.date.month(),
        ts.date.day(),
        fmt_zone(ts.zone),
    )
}

/// Canonical gYearMonth from a date/time value: `YYYY-MM`
pub fn gyear_month_canonical(ts: &Timestamp) -> String {
    format!("{}-{:02}", fmt_year(ts.date.year()), ts.date.month())
}

/// Canonical gYear: `YYYY`
pub fn gyear_canonical(ts: &Timestamp) -> String {
    fmt_year(ts.date.year())
}

/// Canonical gMonthDay from a date/time value: `--MM-DD`
pub fn gmonth_day_canonical(ts: &Timestamp) -> String {
    format!("--{:02}-{:02}", ts.date.month(), ts.date.day())
}

/// Canonical gDay from a date/time value: `---DD`
pub fn gday_canonical(ts: &Timestamp) -> String {
    format!("---{:02}", ts.date.day())
}

/// Canonical gMonth from a date/time value: `--MM`
pub fn gmonth_canonical(ts: &Timestamp) -> String {
    format!("--{:02}", ts.date.month())
}

/// gYearMonth from an ordered (year, month) pair.
///
/// Unlike the date/time-sourced path this formats the year at a minimum
/// width of two digits, not four; years below 1000 therefore produce a
/// string the gYearMonth pattern rejects. Inherited behavior, kept as-is.
pub fn gyear_month_from_pair(year: i64, month: i64) -> String {
    format!("{:02}-{:02}", year, month)
}

/// gMonthDay from an ordered (month, day) pair: `--MM-DD`
pub fn gmonth_day_from_pair(month: i64, day: i64) -> String {
    format!("--{:02}-{:02}", month, day)
}

/// gDay from a bare day number: `---DD`
pub fn gday_from_int(day: i64) -> String {
    format!("---{:02}", day)
}

/// gMonth from a bare month number: `--MM`
pub fn gmonth_from_int(month: i64) -> String {
    format!("--{:02}", month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, NaiveTime};
    use pretty_assertions::assert_eq;

    fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, nanos: u32, zone: Zone) -> Timestamp {
        Timestamp::new(
            NaiveDate::from_ymd_opt(y, mo, d).unwrap(),
            NaiveTime::from_hms_nano_opt(h, mi, s, nanos).unwrap(),
            zone,
        )
    }

    #[test]
    fn test_datetime_utc_no_fraction() {
        let t = ts(2024, 1, 15, 10, 30, 0, 0, Zone::Utc);
        assert_eq!(datetime_canonical(&t), "2024-01-15T10:30:00Z");
    }

    #[test]
    fn test_datetime_fixed_offset() {
        let zone = Zone::Offset(FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap());
        let t = ts(2024, 1, 15, 10, 30, 0, 0, zone);
        assert_eq!(datetime_canonical(&t), "2024-01-15T10:30:00+05:30");

        let zone = Zone::Offset(FixedOffset::west_opt(8 * 3600).unwrap());
        let t = ts(2024, 1, 15, 10, 30, 0, 0, zone);
        assert_eq!(datetime_canonical(&t), "2024-01-15T10:30:00-08:00");
    }

    #[test]
    fn test_datetime_floating_no_suffix() {
        let t = ts(2024, 1, 15, 10, 30, 0, 0, Zone::Floating);
        assert_eq!(datetime_canonical(&t), "2024-01-15T10:30:00");
    }

    #[test]
    fn test_fraction_trimming() {
        let t = ts(2024, 1, 15, 10, 30, 0, 123_000_000, Zone::Floating);
        assert_eq!(datetime_canonical(&t), "2024-01-15T10:30:00.123");

        let t = ts(2024, 1, 15, 10, 30, 0, 500_000_000, Zone::Utc);
        assert_eq!(time_canonical(&t), "10:30:00.5Z");

        // A single trailing nanosecond keeps all nine digits
        let t = ts(2024, 1, 15, 10, 30, 0, 1, Zone::Floating);
        assert_eq!(time_canonical(&t), "10:30:00.000000001");
    }

    #[test]
    fn test_date_zone_but_no_fraction() {
        let t = ts(2024, 1, 15, 10, 30, 0, 123_000_000, Zone::Utc);
        assert_eq!(date_canonical(&t), "2024-01-15Z");
    }

    #[test]
    fn test_gregorian_from_timestamp() {
        let t = ts(2024, 7, 5, 0, 0, 0, 0, Zone::Utc);
        assert_eq!(gyear_month_canonical(&t), "2024-07");
        assert_eq!(gyear_canonical(&t), "2024");
        assert_eq!(gmonth_day_canonical(&t), "--07-05");
        assert_eq!(gday_canonical(&t), "---05");
        assert_eq!(gmonth_canonical(&t), "--07");
    }

    #[test]
    fn test_negative_year() {
        let t = ts(-44, 3, 15, 12, 0, 0, 0, Zone::Floating);
        assert_eq!(date_canonical(&t), "-0044-03-15");
        assert_eq!(gyear_canonical(&t), "-0044");
    }

    #[test]
    fn test_pair_and_integer_sources() {
        assert_eq!(gyear_month_from_pair(2024, 5), "2024-05");
        // Pair years keep only two-digit padding
        assert_eq!(gyear_month_from_pair(99, 5), "99-05");
        assert_eq!(gmonth_day_from_pair(7, 15), "--07-15");
        assert_eq!(gday_from_int(7), "---07");
        assert_eq!(gmonth_from_int(11), "--11");
    }
}
