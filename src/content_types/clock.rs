//! Karma system clock (`SYST`).

use time::{OffsetDateTime, PrimitiveDateTime};

use crate::{FourCC, GpmfError};

/// Device clock reading, used to timestamp Karma `GPRI` samples.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SystemClock {
    pub seconds: f64,
    pub milliseconds: f64,
}

impl SystemClock {
    /// Clock from scaled `SYST` values. Only the first two are used.
    pub fn from_scaled(values: &[f64]) -> Result<Self, GpmfError> {
        match values {
            [seconds, milliseconds, ..] => Ok(Self {
                seconds: *seconds,
                milliseconds: *milliseconds,
            }),
            _ => Err(GpmfError::MissingFields{fourcc: FourCC::SYST, expected: 2, got: values.len()})
        }
    }

    /// `true` if both components are non-zero,
    /// i.e. a valid reading has been logged.
    pub fn is_set(&self) -> bool {
        self.seconds != 0.0 && self.milliseconds != 0.0
    }

    /// Datetime (UTC) for Karma samples.
    ///
    /// The millisecond component is used as-is as seconds since the Unix epoch.
    /// Existing tracks were produced this way, so the unit is left untouched.
    pub fn datetime(&self) -> Result<PrimitiveDateTime, GpmfError> {
        if !self.milliseconds.is_finite() {
            return Err(GpmfError::InvalidClock(self.milliseconds))
        }
        let nanos = (self.milliseconds * 1e9).round() as i128;
        let dt = OffsetDateTime::from_unix_timestamp_nanos(nanos)?;
        Ok(PrimitiveDateTime::new(dt.date(), dt.time()))
    }
}
