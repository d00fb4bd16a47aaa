use time::PrimitiveDateTime;

use super::{FixStatus, Gps5Scaled, KarmaScaled, SampleSource};

/// Accepted, scaled GPS point.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// Altitude.
    pub altitude: f64,
    /// `GPS5`: 3D speed. `GPRI`: speed.
    /// `0.0` if not covered by `SCAL`.
    pub speed: f64,
    /// `GPS5`: latest `GPSU`.
    /// `GPRI`: derived from latest `SYST`.
    pub datetime: Option<PrimitiveDateTime>,
    /// Latest `GPSP`, unscaled (DOP x100).
    pub precision: Option<f64>,
    /// GPS fix in effect when the sample was logged.
    pub fix: FixStatus,
    pub source: SampleSource,
}

impl std::fmt::Display for TrackPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\
            latitude:  {}
            longitude: {}
            altitude:  {}
            speed:     {}
            datetime:  {:?}
            precision: {:?}
            fix:       {}
            source:    {}",
            self.latitude,
            self.longitude,
            self.altitude,
            self.speed,
            self.datetime,
            self.precision,
            self.fix,
            self.source,
        )
    }
}

impl TrackPoint {
    pub fn from_gps5(
        gps: &Gps5Scaled,
        datetime: Option<PrimitiveDateTime>,
        precision: Option<f64>,
        fix: FixStatus,
    ) -> Self {
        Self {
            latitude: gps.latitude,
            longitude: gps.longitude,
            altitude: gps.altitude,
            speed: gps.speed3d.unwrap_or_default(),
            datetime,
            precision,
            fix,
            source: SampleSource::Gps5,
        }
    }

    pub fn from_karma(
        gps: &KarmaScaled,
        datetime: PrimitiveDateTime,
        precision: Option<f64>,
        fix: FixStatus,
    ) -> Self {
        Self {
            latitude: gps.latitude,
            longitude: gps.longitude,
            altitude: gps.altitude,
            speed: gps.speed.unwrap_or_default(),
            datetime: Some(datetime),
            precision,
            fix,
            source: SampleSource::Karma,
        }
    }
}
