//! GPMF Four CC, i.e. record identifier.
//! Only FourCC that matter for structure or GPS interpretation are listed,
//! anything else ends up as `FourCC::Other(String)` and is passed through untouched.
//! `FourCC::Invalid` marks zero padding, which would otherwise
//! be parsed as a valid FourCC.

use std::fmt::Display;

/// FourCC enum. Descriptions lifted from official GPMF documentation (<https://github.com/gopro/gpmf-parser>)
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum FourCC {
    // FOURCC RESERVED FOR GPMF STRUCTURE
    /// unique device source for metadata
    DEVC,
    /// device/track ID
    DVID,
    /// device name, e.g. "Camera" or "GoPro Karma v1.0"
    DVNM,
    /// Nested signal stream of metadata/telemetry
    STRM,
    /// Stream name
    STNM,
    /// Comments for any stream
    RMRK,
    /// Scaling factor (divisor)
    /// Sensor data often needs to be scaled to be presented with the correct units. SCAL is a divisor.
    SCAL,
    /// Standard Units (like SI)
    SIUN,
    /// Display units
    UNIT,
    /// Typedefs for complex structures (`?` type)
    TYPE,
    /// Total Samples delivered
    TSMP,
    /// Time Offset
    TIMO,
    /// Empty payload count
    EMPT,

    // DEVICE/DATA SPECIFIC FOURCC
    /// 3-axis accelerometer
    ACCL,
    /// 3-axis gyroscope
    GYRO,
    /// HERO5Black+  latitude, longitude, altitude (WGS 84), 2D ground speed, and 3D speed
    GPS5,
    /// HERO5Black+  GPS Fix. 0 - no lock, 2 or 3 - 2D or 3D Lock
    GPSF,
    /// HERO5Black+  GPS Precision - Dilution of Precision (DOP x100). Under 500 is good.
    GPSP,
    /// HERO5Black  UTC time and data from GPS
    GPSU,
    /// GPS Altitude reference
    GPSA,
    /// Karma  GPS record, single sample per record: latitude, longitude, altitude, speed
    GPRI,
    /// Karma  System clock, seconds and milliseconds
    SYST,

    /// Mainly for checking and invalidating 0-padding.
    #[default]
    Invalid,

    /// Any other FourCC
    Other(String),
}

impl Display for FourCC {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FourCC {
    /// Generate FourCC enum from raw bytes.
    pub fn from_slice(slice: &[u8]) -> Self {
        match slice {
            // GPMF structural FourCC
            b"DEVC" => FourCC::DEVC,
            b"DVID" => FourCC::DVID,
            b"DVNM" => FourCC::DVNM,
            b"STRM" => FourCC::STRM,
            b"STNM" => FourCC::STNM,
            b"RMRK" => FourCC::RMRK,
            b"SCAL" => FourCC::SCAL,
            b"SIUN" => FourCC::SIUN,
            b"UNIT" => FourCC::UNIT,
            b"TYPE" => FourCC::TYPE,
            b"TSMP" => FourCC::TSMP,
            b"TIMO" => FourCC::TIMO,
            b"EMPT" => FourCC::EMPT,

            // Device/data specific FourCC
            b"ACCL" => FourCC::ACCL,
            b"GYRO" => FourCC::GYRO,
            b"GPS5" => FourCC::GPS5,
            b"GPSF" => FourCC::GPSF,
            b"GPSP" => FourCC::GPSP,
            b"GPSU" => FourCC::GPSU,
            b"GPSA" => FourCC::GPSA,
            b"GPRI" => FourCC::GPRI,
            b"SYST" => FourCC::SYST,

            // zero padding
            b"\0" | b"\0\0\0\0" => FourCC::Invalid,

            _ => FourCC::Other(String::from_utf8_lossy(slice).to_string()),
        }
    }

    /// Generate FourCC enum from `&str`.
    pub fn from_str(fourcc: &str) -> Self {
        Self::from_slice(fourcc.trim().as_bytes())
    }

    /// Generate `&str` from `FourCC`.
    pub fn to_str(&self) -> &str {
        match self {
            FourCC::DEVC => "DEVC",
            FourCC::DVID => "DVID",
            FourCC::DVNM => "DVNM",
            FourCC::STRM => "STRM",
            FourCC::STNM => "STNM",
            FourCC::RMRK => "RMRK",
            FourCC::SCAL => "SCAL",
            FourCC::SIUN => "SIUN",
            FourCC::UNIT => "UNIT",
            FourCC::TYPE => "TYPE",
            FourCC::TSMP => "TSMP",
            FourCC::TIMO => "TIMO",
            FourCC::EMPT => "EMPT",

            FourCC::ACCL => "ACCL",
            FourCC::GYRO => "GYRO",
            FourCC::GPS5 => "GPS5",
            FourCC::GPSF => "GPSF",
            FourCC::GPSP => "GPSP",
            FourCC::GPSU => "GPSU",
            FourCC::GPSA => "GPSA",
            FourCC::GPRI => "GPRI",
            FourCC::SYST => "SYST",

            FourCC::Invalid => "INVALID_FOURCC",

            FourCC::Other(s) => s,
        }
    }

    pub fn is_invalid(&self) -> bool {
        self == &FourCC::Invalid
    }
}
