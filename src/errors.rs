//! Various GPMF related errors.

use std::fmt;
use std::path::PathBuf;

use crate::FourCC;

/// Errors raised while decoding or interpreting GPMF data.
#[derive(Debug)]
pub enum GpmfError {
    /// Payload value type does not match what the FourCC requires,
    /// e.g. a string where a number is expected.
    InvalidValue{fourcc: FourCC, expected: &'static str},
    /// Sample or scaled record has fewer fields than required.
    MissingFields{fourcc: FourCC, expected: usize, got: usize},
    /// Scale divisor paired with a raw field is zero.
    ZeroScale{index: usize},
    /// Could not convert clock reading to a datetime.
    InvalidClock(f64),
    /// GPS time string could not be parsed.
    InvalidDateTime(String),
    /// KLV payload extends past its container.
    ReadMismatch{got: u64, expected: u64},
    /// Raw GPMF file exceeds in-memory size limit.
    MaxFileSizeExceeded{max: u64, got: u64, path: PathBuf},
    /// No GPS points survived interpretation.
    NoGpsPoints,
    /// Binary read error.
    BinReadError(binrw::Error),
    /// Datetime out of range.
    TimeRangeError(time::error::ComponentRange),
    /// Datetime formatting error.
    TimeFormatError(time::error::Format),
    /// IO error.
    IOError(std::io::Error),
}

impl std::error::Error for GpmfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpmfError::BinReadError(err) => Some(err),
            GpmfError::TimeRangeError(err) => Some(err),
            GpmfError::TimeFormatError(err) => Some(err),
            GpmfError::IOError(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for GpmfError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GpmfError::InvalidValue{fourcc, expected} => write!(f, "Invalid value for '{}', expected {expected}.", fourcc.to_str()),
            GpmfError::MissingFields{fourcc, expected, got} => write!(f, "'{}' requires at least {expected} fields, got {got}.", fourcc.to_str()),
            GpmfError::ZeroScale{index} => write!(f, "Scale divisor at index {index} is zero."),
            GpmfError::InvalidClock(value) => write!(f, "System clock value {value} can not be used as a timestamp."),
            GpmfError::InvalidDateTime(s) => write!(f, "Failed to parse GPS datetime '{s}'."),
            GpmfError::ReadMismatch{got, expected} => write!(f, "Read {got} bytes, expected {expected} bytes."),
            GpmfError::MaxFileSizeExceeded{max, got, path} => write!(f, "'{}' is {got} bytes, max in-memory size is {max} bytes.", path.display()),
            GpmfError::NoGpsPoints => write!(f, "No GPS points found."),
            GpmfError::BinReadError(err) => write!(f, "{err}"),
            GpmfError::TimeRangeError(err) => write!(f, "{err}"),
            GpmfError::TimeFormatError(err) => write!(f, "{err}"),
            GpmfError::IOError(err) => write!(f, "IO error: {}", err),
        }
    }
}

/// Converts std::io::Error to GpmfError
impl From<std::io::Error> for GpmfError {
    fn from(err: std::io::Error) -> GpmfError {
        GpmfError::IOError(err)
    }
}

/// Converts binrw::Error to GpmfError
impl From<binrw::Error> for GpmfError {
    fn from(err: binrw::Error) -> GpmfError {
        GpmfError::BinReadError(err)
    }
}

/// Converts time::error::ComponentRange to GpmfError
impl From<time::error::ComponentRange> for GpmfError {
    fn from(err: time::error::ComponentRange) -> GpmfError {
        GpmfError::TimeRangeError(err)
    }
}

/// Converts time::error::Format to GpmfError
impl From<time::error::Format> for GpmfError {
    fn from(err: time::error::Format) -> GpmfError {
        GpmfError::TimeFormatError(err)
    }
}
