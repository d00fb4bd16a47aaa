//! Scale factors (`SCAL`).

use crate::{constants::DEFAULT_SCALE, GpmfError};

/// Divisors for raw GPMF values. The first scale value applies
/// to the first raw value, the second to the second, and so on.
///
/// No validation is done on construction: `SCAL` is used as logged.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleFactors(pub Vec<f64>);

impl Default for ScaleFactors {
    fn default() -> Self {
        Self(DEFAULT_SCALE.to_vec())
    }
}

impl From<Vec<f64>> for ScaleFactors {
    fn from(value: Vec<f64>) -> Self {
        Self(value)
    }
}

impl ScaleFactors {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }

    /// Divides raw values by the corresponding scale value.
    ///
    /// Only the first `min(raw.len(), self.len())` pairs are used,
    /// remaining raw values are dropped. Karma `GPRI` has a different
    /// field count than `SCAL`, so a length mismatch is expected.
    ///
    /// Raises `GpmfError::ZeroScale` if a paired divisor is zero.
    pub fn apply(&self, raw: &[f64]) -> Result<Vec<f64>, GpmfError> {
        raw.iter().zip(self.iter())
            .enumerate()
            .map(|(index, (value, scale))| match *scale == 0.0 {
                true => Err(GpmfError::ZeroScale{index}),
                false => Ok(value / scale),
            })
            .collect()
    }
}
