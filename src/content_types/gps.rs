//! GPS track derived from `GPS5` (Hero10 and earlier) and Karma `GPRI` records.

pub mod fix;
pub mod point;
pub mod raw;

use std::fmt::Display;

use time::{PrimitiveDateTime, macros::format_description};

use crate::{FourCC, GpmfError, IngestStats};

pub use fix::FixStatus;
pub use point::TrackPoint;
pub use raw::{Gps5Raw, Gps5Scaled, KarmaRaw, KarmaScaled, RawSample};

/// Record family a GPS sample was logged in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleSource {
    /// Camera, `GPS5` block.
    #[default]
    Gps5,
    /// Karma drone, `GPRI` record.
    Karma,
}

impl Display for SampleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fourcc())
    }
}

impl SampleSource {
    pub fn fourcc(&self) -> FourCC {
        match self {
            Self::Gps5 => FourCC::GPS5,
            Self::Karma => FourCC::GPRI,
        }
    }
}

/// GPS points in logged order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Track(pub Vec<TrackPoint>);

impl Track {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackPoint> {
        self.0.iter()
    }

    pub fn into_iter(self) -> impl Iterator<Item = TrackPoint> {
        self.0.into_iter()
    }

    pub fn first(&self) -> Option<&TrackPoint> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&TrackPoint> {
        self.0.last()
    }

    pub(crate) fn push(&mut self, point: TrackPoint) {
        self.0.push(point)
    }

    /// Datetime of the first point as an ISO8601 formatted string.
    pub fn t0_as_string(&self) -> Option<String> {
        self.first()
            .and_then(|p| p.datetime.as_ref())
            .and_then(|t| primitivedatetime_to_string(t).ok())
    }

    /// Datetime of the last point as an ISO8601 formatted string.
    pub fn t_last_as_string(&self) -> Option<String> {
        self.last()
            .and_then(|p| p.datetime.as_ref())
            .and_then(|t| primitivedatetime_to_string(t).ok())
    }
}

/// Interpreted GPS data and ingestion statistics.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GpsIngest {
    pub track: Track,
    pub stats: IngestStats,
}

impl GpsIngest {
    /// Returns the track, or `GpmfError::NoGpsPoints` if no points
    /// survived, so that no empty track is written.
    pub fn into_track(self) -> Result<Track, GpmfError> {
        match self.track.is_empty() {
            true => Err(GpmfError::NoGpsPoints),
            false => Ok(self.track)
        }
    }
}

/// Formats datetime as ISO8601 with millisecond precision, e.g. `2016-09-07T14:30:00.500`.
pub fn primitivedatetime_to_string(datetime: &PrimitiveDateTime) -> Result<String, GpmfError> {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]");
    datetime.format(format).map_err(|err| err.into())
}
