//! Lexical pattern validators
//!
//! Precompiled, full-string-anchored membership tests for the
//! string-represented types: duration, the date/time family, base64
//! binary and anyURI. Partial matches are never accepted.

use regex::Regex;

use crate::error::{Error, Result, ValidationError};

lazy_static::lazy_static! {
    static ref DURATION_RE: Regex =
        Regex::new(r"^-?P\d+Y\d+M\d+DT\d+H\d+M\d+(\.\d+)?S$").unwrap();
    static ref DATETIME_RE: Regex =
        Regex::new(r"^-?\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?Z?([-+]\d{2}:?\d{2})?$")
            .unwrap();
    static ref TIME_RE: Regex =
        Regex::new(r"^\d{2}:\d{2}:\d{2}(\.\d+)?Z?([-+]\d{2}:?\d{2})?$").unwrap();
    static ref DATE_RE: Regex =
        Regex::new(r"^-?\d{4}-\d{2}-\d{2}Z?([-+]\d{2}:?\d{2})?$").unwrap();
    static ref GYEAR_MONTH_RE: Regex = Regex::new(r"^\d{4}-\d{2}$").unwrap();
    static ref GYEAR_RE: Regex = Regex::new(r"^\d{4}$").unwrap();
    static ref GMONTH_DAY_RE: Regex = Regex::new(r"^--\d{2}-\d{2}$").unwrap();
    static ref GDAY_RE: Regex = Regex::new(r"^---\d{2}$").unwrap();
    static ref GMONTH_RE: Regex = Regex::new(r"^--\d{2}$").unwrap();
    // Lines of base64 alphabet characters. The empty string is accepted:
    // a zero-length binary stream encodes to it and must stay valid.
    static ref BASE64_RE: Regex = Regex::new(r"^([A-Za-z0-9=+/]+(\r?\n)?)*$").unwrap();
    static ref ANY_URI_RE: Regex = Regex::new(r"^\w+://.*$").unwrap();
}

fn lexical(re: &Regex, value: &str, type_name: &str) -> Result<()> {
    if !re.is_match(value) {
        return Err(Error::Validation(
            ValidationError::new(format!("invalid {} format", type_name)).with_type(type_name),
        ));
    }
    Ok(())
}

/// Validate duration lexical form: `-?PnYnMnDTnHnMn[.f]S`
pub fn duration_lexical(value: &str) -> Result<()> {
    lexical(&DURATION_RE, value, "duration")
}

/// Validate dateTime lexical form
pub fn datetime_lexical(value: &str) -> Result<()> {
    lexical(&DATETIME_RE, value, "dateTime")
}

/// Validate time lexical form
pub fn time_lexical(value: &str) -> Result<()> {
    lexical(&TIME_RE, value, "time")
}

/// Validate date lexical form
pub fn date_lexical(value: &str) -> Result<()> {
    lexical(&DATE_RE, value, "date")
}

/// Validate gYearMonth lexical form: `YYYY-MM`
pub fn gyear_month_lexical(value: &str) -> Result<()> {
    lexical(&GYEAR_MONTH_RE, value, "gYearMonth")
}

/// Validate gYear lexical form: `YYYY`
pub fn gyear_lexical(value: &str) -> Result<()> {
    lexical(&GYEAR_RE, value, "gYear")
}

/// Validate gMonthDay lexical form: `--MM-DD`
pub fn gmonth_day_lexical(value: &str) -> Result<()> {
    lexical(&GMONTH_DAY_RE, value, "gMonthDay")
}

/// Validate gDay lexical form: `---DD`
pub fn gday_lexical(value: &str) -> Result<()> {
    lexical(&GDAY_RE, value, "gDay")
}

/// Validate gMonth lexical form: `--MM`
pub fn gmonth_lexical(value: &str) -> Result<()> {
    lexical(&GMONTH_RE, value, "gMonth")
}

/// Validate base64Binary lexical form: lines of base64 alphabet characters
pub fn base64_lexical(value: &str) -> Result<()> {
    lexical(&BASE64_RE, value, "base64Binary")
}

/// Validate anyURI lexical form: a scheme followed by `://`
pub fn any_uri_lexical(value: &str) -> Result<()> {
    lexical(&ANY_URI_RE, value, "anyURI")
}
