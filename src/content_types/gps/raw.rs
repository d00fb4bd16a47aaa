//! Unscaled GPS samples, as logged.

use crate::{FourCC, GpmfError, ScaleFactors};

use super::SampleSource;

/// Shared behaviour for the two GPS record families.
pub trait RawSample {
    /// Record family the sample belongs to.
    fn source(&self) -> SampleSource;

    /// Raw values in logged order.
    fn fields(&self) -> Vec<f64>;

    /// Raw latitude, longitude, altitude.
    fn position(&self) -> (f64, f64, f64);

    /// All zero position is logged when the GPS has nothing to report.
    fn is_empty(&self) -> bool {
        let (lat, lon, alt) = self.position();
        lat == 0.0 && lon == 0.0 && alt == 0.0
    }
}

/// Single `GPS5` sample, Hero10 and earlier:
/// latitude, longitude, altitude, 2D speed, 3D speed.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Gps5Raw {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub speed2d: f64,
    pub speed3d: f64,
}

impl Gps5Raw {
    pub const FIELDS: usize = 5;

    /// New sample from a single `GPS5` repeat. Values beyond the fifth are ignored.
    pub fn from_slice(values: &[f64]) -> Result<Self, GpmfError> {
        match values {
            [latitude, longitude, altitude, speed2d, speed3d, ..] => Ok(Self {
                latitude: *latitude,
                longitude: *longitude,
                altitude: *altitude,
                speed2d: *speed2d,
                speed3d: *speed3d,
            }),
            _ => Err(GpmfError::MissingFields{
                fourcc: FourCC::GPS5,
                expected: Self::FIELDS,
                got: values.len()
            })
        }
    }

    /// Scales sample. Fields without a corresponding scale value are dropped,
    /// which is only allowed for the speed fields.
    pub fn scale(&self, scale: &ScaleFactors) -> Result<Gps5Scaled, GpmfError> {
        let scaled = scale.apply(&self.fields())?;
        match scaled.as_slice() {
            [latitude, longitude, altitude, speed @ ..] => Ok(Gps5Scaled {
                latitude: *latitude,
                longitude: *longitude,
                altitude: *altitude,
                speed2d: speed.first().copied(),
                speed3d: speed.get(1).copied(),
            }),
            _ => Err(GpmfError::MissingFields{fourcc: FourCC::SCAL, expected: 3, got: scaled.len()})
        }
    }
}

impl RawSample for Gps5Raw {
    fn source(&self) -> SampleSource {
        SampleSource::Gps5
    }

    fn fields(&self) -> Vec<f64> {
        vec![self.latitude, self.longitude, self.altitude, self.speed2d, self.speed3d]
    }

    fn position(&self) -> (f64, f64, f64) {
        (self.latitude, self.longitude, self.altitude)
    }
}

/// Scaled `GPS5` sample.
/// Speed is `None` if `SCAL` was too short to cover it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Gps5Scaled {
    /// Latitude, degrees.
    pub latitude: f64,
    /// Longitude, degrees.
    pub longitude: f64,
    /// Altitude, meters.
    pub altitude: f64,
    /// 2D ground speed, m/s.
    pub speed2d: Option<f64>,
    /// 3D speed, m/s.
    pub speed3d: Option<f64>,
}

/// Karma drone `GPRI` sample: latitude, longitude, altitude, speed.
/// Timed via `SYST` rather than `GPSU`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct KarmaRaw {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub speed: f64,
}

impl KarmaRaw {
    pub const FIELDS: usize = 4;

    pub fn from_slice(values: &[f64]) -> Result<Self, GpmfError> {
        match values {
            [latitude, longitude, altitude, speed, ..] => Ok(Self {
                latitude: *latitude,
                longitude: *longitude,
                altitude: *altitude,
                speed: *speed,
            }),
            _ => Err(GpmfError::MissingFields{
                fourcc: FourCC::GPRI,
                expected: Self::FIELDS,
                got: values.len()
            })
        }
    }

    pub fn scale(&self, scale: &ScaleFactors) -> Result<KarmaScaled, GpmfError> {
        let scaled = scale.apply(&self.fields())?;
        match scaled.as_slice() {
            [latitude, longitude, altitude, speed @ ..] => Ok(KarmaScaled {
                latitude: *latitude,
                longitude: *longitude,
                altitude: *altitude,
                speed: speed.first().copied(),
            }),
            _ => Err(GpmfError::MissingFields{fourcc: FourCC::SCAL, expected: 3, got: scaled.len()})
        }
    }
}

impl RawSample for KarmaRaw {
    fn source(&self) -> SampleSource {
        SampleSource::Karma
    }

    fn fields(&self) -> Vec<f64> {
        vec![self.latitude, self.longitude, self.altitude, self.speed]
    }

    fn position(&self) -> (f64, f64, f64) {
        (self.latitude, self.longitude, self.altitude)
    }
}

/// Scaled Karma `GPRI` sample.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct KarmaScaled {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub speed: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gps5_from_slice() {
        let raw = Gps5Raw::from_slice(&[1., 2., 3., 4., 5.]).unwrap();
        assert_eq!(raw.fields(), vec![1., 2., 3., 4., 5.]);
        assert!(!raw.is_empty());
        assert!(Gps5Raw::from_slice(&[1., 2., 3.]).is_err());
        assert!(Gps5Raw::from_slice(&[0., 0., 0., 4., 5.]).unwrap().is_empty());
    }

    #[test]
    fn gps5_scale_truncates_speed() {
        let raw = Gps5Raw::from_slice(&[4., 2., 3., 7., 9.]).unwrap();

        let scaled = raw.scale(&ScaleFactors::from(vec![2., 1., 1.])).unwrap();
        assert_eq!((scaled.latitude, scaled.longitude, scaled.altitude), (2., 2., 3.));
        assert_eq!(scaled.speed2d, None);
        assert_eq!(scaled.speed3d, None);

        let scaled = raw.scale(&ScaleFactors::from(vec![2., 1., 1., 7.])).unwrap();
        assert_eq!(scaled.speed2d, Some(1.));
        assert_eq!(scaled.speed3d, None);

        let scaled = raw.scale(&ScaleFactors::from(vec![2., 1., 1., 7., 3.])).unwrap();
        assert_eq!(scaled.speed3d, Some(3.));
    }

    #[test]
    fn scale_too_short_for_position() {
        let raw = Gps5Raw::from_slice(&[4., 2., 3., 7., 9.]).unwrap();
        assert!(matches!(
            raw.scale(&ScaleFactors::from(vec![1., 1.])),
            Err(GpmfError::MissingFields{expected: 3, got: 2, ..})
        ));
    }

    #[test]
    fn karma_scale() {
        let raw = KarmaRaw::from_slice(&[10., 20., 30., 40.]).unwrap();
        assert_eq!(raw.source(), SampleSource::Karma);

        let scaled = raw.scale(&ScaleFactors::default()).unwrap();
        assert_eq!(scaled.speed, None);

        let scaled = raw.scale(&ScaleFactors::from(vec![10., 10., 10., 10., 10.])).unwrap();
        assert_eq!(scaled, KarmaScaled{latitude: 1., longitude: 2., altitude: 3., speed: Some(4.)});
    }
}
