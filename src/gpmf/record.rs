//! Decoded GPMF records, untyped (`TaggedRecord`) and typed (`Record`).

use time::PrimitiveDateTime;

use crate::{
    FixStatus,
    FourCC,
    Gps5Raw,
    GpmfError,
    KarmaRaw,
    ScaleFactors,
};

use super::Value;

/// Single decoded GPMF record: FourCC and payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedRecord {
    pub fourcc: FourCC,
    pub value: Value,
}

impl TaggedRecord {
    pub fn new(fourcc: FourCC, value: impl Into<Value>) -> Self {
        Self {
            fourcc,
            value: value.into(),
        }
    }
}

/// Records that affect GPS interpretation.
/// Everything else is `Record::Other`.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// `SCAL`
    Scale(ScaleFactors),
    /// `GPSU`
    GpsTime(PrimitiveDateTime),
    /// `GPSP`, DOP x100
    GpsPrecision(f64),
    /// `GPSF`
    GpsFix(FixStatus),
    /// `GPS5`, one sample per repeat
    Gps5(Vec<Gps5Raw>),
    /// `SYST`, unscaled seconds and milliseconds
    SystemClock([f64; 2]),
    /// `GPRI`
    Karma(KarmaRaw),
    Other(FourCC),
}

impl Record {
    /// Converts a decoded record into a typed one.
    ///
    /// Raises an error if a recognised FourCC has a payload of the wrong kind,
    /// e.g. a string in `GPS5`, or too few values.
    /// Unrecognised FourCC never fail.
    pub fn parse(record: &TaggedRecord) -> Result<Self, GpmfError> {
        let fourcc = &record.fourcc;
        let value = &record.value;

        let record = match fourcc {
            FourCC::SCAL => {
                let scale = value.to_f64()
                    .ok_or_else(|| invalid(fourcc, "numerical values"))?;
                Record::Scale(ScaleFactors::from(scale))
            },
            FourCC::GPSU => {
                let datetime = value.to_datetime()
                    .ok_or_else(|| invalid(fourcc, "datetime"))??;
                Record::GpsTime(datetime)
            },
            FourCC::GPSP => {
                let precision = value.first_f64()
                    .ok_or_else(|| invalid(fourcc, "numerical value"))?;
                Record::GpsPrecision(precision)
            },
            FourCC::GPSF => {
                let fix = value.first_f64()
                    .ok_or_else(|| invalid(fourcc, "numerical value"))?;
                Record::GpsFix(FixStatus(fix.round() as u32))
            },
            FourCC::GPS5 => {
                let samples = value.samples()
                    .ok_or_else(|| invalid(fourcc, "numerical samples"))?
                    .iter()
                    .map(|s| Gps5Raw::from_slice(s))
                    .collect::<Result<Vec<_>, GpmfError>>()?;
                Record::Gps5(samples)
            },
            FourCC::SYST => {
                let clock = value.to_f64()
                    .ok_or_else(|| invalid(fourcc, "numerical values"))?;
                match clock.as_slice() {
                    [seconds, milliseconds, ..] => Record::SystemClock([*seconds, *milliseconds]),
                    _ => return Err(GpmfError::MissingFields{
                        fourcc: fourcc.to_owned(),
                        expected: 2,
                        got: clock.len()
                    })
                }
            },
            FourCC::GPRI => {
                // Single sample per record, further repeats are not logged by Karma
                let sample = value.samples()
                    .ok_or_else(|| invalid(fourcc, "numerical values"))?
                    .first()
                    .map(|s| s.as_slice())
                    .unwrap_or_default();
                Record::Karma(KarmaRaw::from_slice(sample)?)
            },
            other => Record::Other(other.to_owned())
        };

        Ok(record)
    }
}

fn invalid(fourcc: &FourCC, expected: &'static str) -> GpmfError {
    GpmfError::InvalidValue{fourcc: fourcc.to_owned(), expected}
}
