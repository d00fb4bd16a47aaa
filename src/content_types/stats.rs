//! GPS ingestion statistics.

use std::fmt::Display;

/// Counters for processed GPS samples.
///
/// Every sample ends up in exactly one of `ok`, `badfixskip`, `empty`,
/// except Karma samples logged before a valid `SYST`, which are not counted.
/// `badfix` overlaps: it counts all samples logged without satellite lock,
/// both those kept (also in `ok`) and those skipped (also in `badfixskip`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    /// Points emitted.
    pub ok: usize,
    /// Samples logged with GPS fix 0.
    pub badfix: usize,
    /// Samples logged with GPS fix 0 and skipped.
    pub badfixskip: usize,
    /// Samples with all zero position.
    pub empty: usize,
}

impl Display for IngestStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "-- stats -----------------")?;
        writeln!(f, "- Ok:              {:>5}", self.ok)?;
        writeln!(f, "- GPSFIX=0 (bad):  {:>5} (skipped: {})", self.badfix, self.badfixskip)?;
        writeln!(f, "- Empty (No data): {:>5}", self.empty)?;
        writeln!(f, "Total points:      {:>5}", self.total())?;
        write!(f, "--------------------------")
    }
}

impl IngestStats {
    /// Sum of all four counters, as reported.
    /// Samples kept despite GPS fix 0 are counted twice.
    pub fn total(&self) -> usize {
        self.ok + self.badfix + self.badfixskip + self.empty
    }

    /// Number of samples that were either emitted, skipped, or empty.
    pub fn processed(&self) -> usize {
        self.ok + self.badfixskip + self.empty
    }

    /// Samples logged with GPS fix 0 that were still emitted.
    pub fn badfix_kept(&self) -> usize {
        self.badfix - self.badfixskip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals() {
        let stats = IngestStats{ok: 10, badfix: 4, badfixskip: 1, empty: 2};
        assert_eq!(stats.total(), 17);
        assert_eq!(stats.processed(), 13);
        assert_eq!(stats.badfix_kept(), 3);
    }

    #[test]
    fn report() {
        let stats = IngestStats{ok: 10, badfix: 4, badfixskip: 1, empty: 2};
        let report = stats.to_string();
        assert!(report.contains("- Ok:                 10"));
        assert!(report.contains("- GPSFIX=0 (bad):      4 (skipped: 1)"));
        assert!(report.contains("- Empty (No data):     2"));
        assert!(report.contains("Total points:         17"));
    }
}
