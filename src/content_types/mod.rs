pub mod clock;
pub mod gps;
pub mod scale;
pub mod stats;

pub use clock::SystemClock;
pub use gps::{
    FixStatus,
    Gps5Raw,
    Gps5Scaled,
    GpsIngest,
    KarmaRaw,
    KarmaScaled,
    RawSample,
    SampleSource,
    Track,
    TrackPoint,
    primitivedatetime_to_string,
};
pub use scale::ScaleFactors;
pub use stats::IngestStats;
