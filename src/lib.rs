//! Interpret GoPro GPMF telemetry into validated GPS tracks.
//!
//! GPS records are interpreted in logged order: scale (`SCAL`), GPS time (`GPSU`),
//! precision (`GPSP`), fix (`GPSF`) and Karma system clock (`SYST`) apply to all
//! samples that follow, until superseded. Samples come from `GPS5` blocks
//! (Hero5 - Hero10) or Karma drone `GPRI` records.
//!
//! ```rs
//! use gpmf_track::{Gpmf, IngestOptions};
//! use std::path::Path;
//!
//! fn main() -> Result<(), gpmf_track::GpmfError> {
//!     let path = Path::new("GOPRO_VIDEO.gpmf");
//!     let gpmf = Gpmf::new(&path)?;
//!     let ingest = gpmf.gps(IngestOptions::default().with_skip_bad_fix(true))?;
//!     println!("{}", ingest.stats);
//!     let track = ingest.into_track()?;
//!     Ok(())
//! }
//! ```

pub mod gpmf;
pub mod events;
pub mod interpreter;
mod constants;
mod content_types;
mod errors;

pub use gpmf::{
    Gpmf,
    FourCC,
    Record,
    TaggedRecord,
    Value,
};
pub use content_types::{
    FixStatus,
    Gps5Raw,
    Gps5Scaled,
    GpsIngest,
    IngestStats,
    KarmaRaw,
    KarmaScaled,
    RawSample,
    SampleSource,
    ScaleFactors,
    SystemClock,
    Track,
    TrackPoint,
    primitivedatetime_to_string,
};
pub use errors::GpmfError;
pub use events::{Event, EventSink, LogSink};
pub use interpreter::{interpret, Context, IngestOptions, Interpreter};
