//! GPS fix status (`GPSF`).

use std::fmt::Display;

/// GPS fix, i.e. level of satellite lock.
/// GoPro logs 0 (no lock), 2 (2D lock), 3 (3D lock).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixStatus(pub u32);

impl From<u32> for FixStatus {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Display for FixStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.0, self.label())
    }
}

impl FixStatus {
    pub const NO_LOCK: Self = Self(0);

    /// `false` for fix `0`, i.e. position and time can not be trusted.
    pub fn is_locked(&self) -> bool {
        self.0 != 0
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            0 => "No lock",
            2 => "2D lock",
            3 => "3D lock",
            _ => "Unknown",
        }
    }
}
