//! Decoded GPMF payload.

use time::{Date, Month, PrimitiveDateTime, Time};

use crate::GpmfError;

/// Payload of a single GPMF record, as handed over by the decoder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Numerical values, one `Vec` per sample (i.e. per repeat).
    /// Single value records, such as `GPSF`, are a single sample with one value.
    /// Fixed point types are already converted.
    Numbers(Vec<Vec<f64>>),
    /// ASCII string, or FourCC.
    String(String),
    /// UTC datetime.
    DateTime(PrimitiveDateTime),
    /// Types this crate does not interpret, passed through as bytes.
    Raw(Vec<u8>),
    Empty,
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Numbers(vec![vec![value]])
    }
}

impl From<Vec<f64>> for Value {
    fn from(value: Vec<f64>) -> Self {
        Value::Numbers(vec![value])
    }
}

impl From<Vec<Vec<f64>>> for Value {
    fn from(value: Vec<Vec<f64>>) -> Self {
        Value::Numbers(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<PrimitiveDateTime> for Value {
    fn from(value: PrimitiveDateTime) -> Self {
        Value::DateTime(value)
    }
}

impl Value {
    /// Returns numerical samples, `None` if the value is not numerical.
    pub fn samples(&self) -> Option<&[Vec<f64>]> {
        match self {
            Value::Numbers(n) => Some(n.as_slice()),
            _ => None
        }
    }

    /// Returns all numerical values as a flat `Vec`,
    /// e.g. for `SCAL` which is logged as one value per sample.
    pub fn to_f64(&self) -> Option<Vec<f64>> {
        self.samples()
            .map(|s| s.iter().flatten().copied().collect())
    }

    /// Returns the first numerical value.
    pub fn first_f64(&self) -> Option<f64> {
        self.samples()?.first()?.first().copied()
    }

    /// Returns datetime. GPS time strings are parsed,
    /// see `parse_gps_datetime()`.
    pub fn to_datetime(&self) -> Option<Result<PrimitiveDateTime, GpmfError>> {
        match self {
            Value::DateTime(dt) => Some(Ok(*dt)),
            Value::String(s) => Some(parse_gps_datetime(s)),
            _ => None
        }
    }
}

/// Parses GPMF UTC datetime string `yymmddhhmmss.sss`.
/// Years are relative to 2000.
pub fn parse_gps_datetime(datetime: &str) -> Result<PrimitiveDateTime, GpmfError> {
    let s = datetime.trim_matches(char::from(0)).trim();

    let year = 2000 + field(s, 0, 2)? as i32;
    let month = Month::try_from(field(s, 2, 4)? as u8)?;
    let date = Date::from_calendar_date(year, month, field(s, 4, 6)? as u8)?;

    let millis = match s.get(12..) {
        None | Some("") => 0,
        Some(fraction) => {
            let digits = fraction.strip_prefix('.')
                .ok_or_else(|| GpmfError::InvalidDateTime(s.to_owned()))?;
            let digits = digits.chars().take(3).collect::<String>();
            format!("{digits:0<3}").parse::<u16>()
                .map_err(|_| GpmfError::InvalidDateTime(s.to_owned()))?
        }
    };

    let time = Time::from_hms_milli(
        field(s, 6, 8)? as u8,
        field(s, 8, 10)? as u8,
        field(s, 10, 12)? as u8,
        millis
    )?;

    Ok(PrimitiveDateTime::new(date, time))
}

fn field(s: &str, start: usize, end: usize) -> Result<u32, GpmfError> {
    s.get(start..end)
        .and_then(|v| v.parse::<u32>().ok())
        .ok_or_else(|| GpmfError::InvalidDateTime(s.to_owned()))
}
