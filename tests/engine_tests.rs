//! Integration tests for the public validate/coerce surface
//!
//! These exercise the whole engine the way the host attribute system
//! consumes it: a type name plus a host-native value in, a canonical
//! representation or a structured failure out.

use std::io::Write;

use chrono::{FixedOffset, NaiveDate, NaiveTime};
use proptest::prelude::*;
use xsdatomic::{catalog, DurationValue, Error, Source, Timestamp, Value, Zone};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
    Timestamp::new(
        NaiveDate::from_ymd_opt(y, mo, d).unwrap(),
        NaiveTime::from_hms_opt(h, mi, s).unwrap(),
        Zone::Utc,
    )
}

#[test]
fn bounded_integer_endpoints() {
    let cases: &[(&str, i64, i64)] = &[
        ("byte", -128, 127),
        ("unsignedByte", 0, 255),
        ("short", -32768, 32767),
        ("unsignedShort", 0, 65535),
        ("int", -2147483648, 2147483647),
        ("unsignedInt", 0, 4294967295),
    ];
    for &(name, min, max) in cases {
        assert!(catalog::is_valid(name, &Value::Int(min)), "{} min", name);
        assert!(catalog::is_valid(name, &Value::Int(max)), "{} max", name);
        assert!(!catalog::is_valid(name, &Value::Int(min - 1)), "{} below", name);
        assert!(!catalog::is_valid(name, &Value::Int(max + 1)), "{} above", name);
    }
}

#[test]
fn long_endpoints_are_exact() {
    for (name, min, max) in [
        ("long", "-9223372036854775808", "9223372036854775807"),
        ("unsignedLong", "0", "18446744073709551615"),
    ] {
        assert!(catalog::coerce(name, Source::Text(min)).is_ok());
        assert!(catalog::coerce(name, Source::Text(max)).is_ok());
    }
    assert!(catalog::coerce("long", Source::Text("9223372036854775808"))
        .unwrap_err()
        .is_out_of_range());
    assert!(catalog::coerce("unsignedLong", Source::Text("-1"))
        .unwrap_err()
        .is_out_of_range());
}

#[test]
fn float_specials_matrix() {
    for source in [Source::Float(f64::NAN), Source::Text("INF"), Source::Text("-INF")] {
        let name = match &source {
            Source::Float(_) => "float",
            _ => "double",
        };
        assert!(catalog::coerce(name, source).is_ok());
    }
    // decimal and integer reject the special states
    assert!(catalog::coerce("decimal", Source::Float(f64::NAN)).is_err());
    assert!(catalog::coerce("decimal", Source::Float(f64::INFINITY)).is_err());
    assert!(catalog::coerce("integer", Source::Text("NaN")).is_err());
}

#[test]
fn duration_round_trip_literals() {
    let d = DurationValue {
        negative: false,
        years: 1,
        months: 2,
        days: 3,
        hours: 4,
        minutes: 5,
        seconds: 6,
        nanos: 500_000_000,
    };
    assert_eq!(
        catalog::coerce("duration", Source::Duration(d)).unwrap().to_string(),
        "P1Y2M3DT4H5M6.5S"
    );
    let neg = DurationValue { negative: true, ..d };
    assert_eq!(
        catalog::coerce("duration", Source::Duration(neg)).unwrap().to_string(),
        "-P1Y2M3DT4H5M6.5S"
    );

    let one_day = DurationValue {
        days: 1,
        ..Default::default()
    };
    assert_eq!(
        catalog::coerce("duration", Source::Duration(one_day)).unwrap().to_string(),
        "P0Y0M1DT0H0M0S"
    );
}

#[test]
fn datetime_timezone_policies() {
    assert_eq!(
        catalog::coerce("dateTime", Source::Timestamp(utc(2024, 1, 15, 10, 30, 0)))
            .unwrap()
            .to_string(),
        "2024-01-15T10:30:00Z"
    );

    let offset = Timestamp::new(
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        Zone::Offset(FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()),
    );
    assert_eq!(
        catalog::coerce("dateTime", Source::Timestamp(offset)).unwrap().to_string(),
        "2024-01-15T10:30:00+05:30"
    );

    let floating = Timestamp::new(
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        Zone::Floating,
    );
    assert_eq!(
        catalog::coerce("dateTime", Source::Timestamp(floating)).unwrap().to_string(),
        "2024-01-15T10:30:00"
    );
}

#[test]
fn gregorian_integer_sources() {
    assert_eq!(catalog::coerce("gDay", Source::Int(7)).unwrap().to_string(), "---07");
    assert_eq!(catalog::coerce("gMonth", Source::Int(11)).unwrap().to_string(), "--11");
}

#[test]
fn base64_stream_from_file() {
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(b"Hello world").unwrap();
    file.sync_all().unwrap();
    let mut file = {
        use std::io::{Seek, SeekFrom};
        let mut f = file;
        f.seek(SeekFrom::Start(0)).unwrap();
        f
    };

    let value = catalog::coerce("base64Binary", Source::Reader(&mut file)).unwrap();
    assert_eq!(value.to_string(), "SGVsbG8gd29ybGQ=");
    assert!(catalog::is_valid("base64Binary", &value));
}

#[test]
fn base64_empty_stream_is_well_defined() {
    let mut empty = std::io::Cursor::new(Vec::new());
    let value = catalog::coerce("base64Binary", Source::Reader(&mut empty)).unwrap();
    assert_eq!(value.to_string(), "");
    assert!(catalog::is_valid("base64Binary", &value));
}

#[test]
fn any_uri_requires_scheme_and_slashes() {
    assert!(catalog::is_valid("anyURI", &Value::Text("http://example.com".into())));
    assert!(!catalog::is_valid("anyURI", &Value::Text("mailto:user@example.com".into())));
    assert!(!catalog::is_valid("anyURI", &Value::Text("relative/path".into())));
}

#[test]
fn not_applicable_falls_back_to_raw_validation() {
    // The host system's fallback path: the shape has no rule, so the
    // caller validates the raw text against the pattern instead.
    let err = catalog::coerce("dateTime", Source::Text("2024-01-15T10:30:00Z")).unwrap_err();
    assert!(err.is_not_applicable());
    assert!(catalog::is_valid(
        "dateTime",
        &Value::Text("2024-01-15T10:30:00Z".into())
    ));
}

#[test]
fn unknown_type_is_a_type_error() {
    assert!(matches!(
        catalog::coerce("vector3", Source::Int(1)).unwrap_err(),
        Error::Type(_)
    ));
}

// =============================================================================
// Properties
// =============================================================================

prop_compose! {
    fn arb_timestamp()(
        year in 1i32..=9999,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..=23,
        minute in 0u32..=59,
        second in 0u32..=59,
        millis in 0u32..1000,
        zone_choice in 0u8..3,
        offset_minutes in -13 * 60..=13 * 60,
    ) -> Timestamp {
        let zone = match zone_choice {
            0 => Zone::Floating,
            1 => Zone::Utc,
            _ => Zone::Offset(FixedOffset::east_opt(offset_minutes * 60).unwrap()),
        };
        Timestamp::new(
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            NaiveTime::from_hms_milli_opt(hour, minute, second, millis).unwrap(),
            zone,
        )
    }
}

prop_compose! {
    fn arb_duration()(
        negative in any::<bool>(),
        years in 0u32..1000,
        months in 0u32..12,
        days in 0u32..31,
        hours in 0u32..24,
        minutes in 0u32..60,
        seconds in 0u64..60,
        nanos in 0u32..1_000_000_000,
    ) -> DurationValue {
        DurationValue { negative, years, months, days, hours, minutes, seconds, nanos }
    }
}

proptest! {
    // The engine invariant: a coerced temporal value always satisfies
    // its target type's lexical pattern.
    #[test]
    fn coerced_timestamps_always_validate(ts in arb_timestamp()) {
        for name in ["dateTime", "time", "date", "gYearMonth", "gYear", "gMonthDay", "gDay", "gMonth"] {
            let value = catalog::coerce(name, Source::Timestamp(ts)).unwrap();
            prop_assert!(catalog::is_valid(name, &value), "{} -> {}", name, value);
        }
    }

    #[test]
    fn coerced_durations_always_validate(d in arb_duration()) {
        let value = catalog::coerce("duration", Source::Duration(d)).unwrap();
        prop_assert!(catalog::is_valid("duration", &value));
    }

    #[test]
    fn byte_range_is_exact(v in -1000i64..=1000) {
        let valid = catalog::is_valid("byte", &Value::Int(v));
        prop_assert_eq!(valid, (-128..=127).contains(&v));
    }

    // Ordinary finite doubles coerce to decimal exactly and validate
    #[test]
    fn finite_floats_coerce_to_decimal(v in -1e9f64..1e9) {
        let value = catalog::coerce("decimal", Source::Float(v)).unwrap();
        prop_assert!(catalog::is_valid("decimal", &value));
    }
}
