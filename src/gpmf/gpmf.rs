//! Core GPMF struct and methods.
//!
//! Input:
//! - raw GPMF "files", e.g. the `GoPro MET` track extracted via FFmpeg
//! - byte slices
//! - records decoded elsewhere
//!
//! ```rs
//! use gpmf_track::{Gpmf, IngestOptions};
//! use std::path::Path;
//!
//! fn main() -> Result<(), gpmf_track::GpmfError> {
//!     let gpmf = Gpmf::new(Path::new("GOPRO_VIDEO.gpmf"))?;
//!     let track = gpmf.gps(IngestOptions::default())?.into_track()?;
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use super::{klv, FourCC, TaggedRecord};
use crate::{
    constants::GPMF_RAW_MAX_SIZE,
    events::{EventSink, LogSink},
    interpreter::{interpret, IngestOptions},
    GpmfError,
    GpsIngest,
};

/// Decoded GPMF records in logged order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gpmf {
    /// GPMF leaf records, nested structure flattened.
    pub records: Vec<TaggedRecord>,
    /// Path/s to the raw GPMF source/s
    /// the records were decoded from.
    pub source: Vec<PathBuf>
}

impl Gpmf {
    /// GPMF from a "raw" GPMF-file,
    /// e.g. the "GoPro MET" track extracted from a GoPro MP4 with FFmpeg.
    pub fn new(path: &Path) -> Result<Self, GpmfError> {
        let size = path.metadata()?.len();

        if size > GPMF_RAW_MAX_SIZE {
            return Err(GpmfError::MaxFileSizeExceeded{
                max: GPMF_RAW_MAX_SIZE,
                got: size,
                path: path.to_owned()
            })
        }

        let records = klv::decode(&std::fs::read(path)?)?;

        Ok(Self{
            records,
            source: vec![path.to_owned()]
        })
    }

    /// GPMF from several raw GPMF-files, e.g. consecutive clips
    /// in a recording session. Files are decoded in parallel,
    /// records are concatenated in the order `paths` are specified.
    pub fn from_paths<P: AsRef<Path> + Sync>(paths: &[P]) -> Result<Self, GpmfError> {
        let decoded = paths.par_iter()
            .map(|p| Self::new(p.as_ref()))
            .collect::<Result<Vec<_>, GpmfError>>()?;

        let mut gpmf = Self::default();
        for mut g in decoded.into_iter() {
            gpmf.merge_mut(&mut g);
        }

        Ok(gpmf)
    }

    /// GPMF from byte slice.
    pub fn from_slice(slice: &[u8]) -> Result<Self, GpmfError> {
        Ok(Self{
            records: klv::decode(slice)?,
            source: vec![]
        })
    }

    /// GPMF from records decoded elsewhere.
    pub fn from_records(records: Vec<TaggedRecord>) -> Self {
        Self{
            records,
            source: vec![]
        }
    }

    /// Returns number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaggedRecord> {
        self.records.iter()
    }

    /// Returns all records with specified FourCC.
    pub fn find_all<'a>(&'a self, fourcc: &'a FourCC) -> impl Iterator<Item = &'a TaggedRecord> + 'a {
        self.iter().filter(move |r| &r.fourcc == fourcc)
    }

    /// Merges records in place.
    /// Assumed that specified `gpmf` follows after
    /// `self` chronologically.
    pub fn merge_mut(&mut self, gpmf: &mut Self) {
        self.records.append(&mut gpmf.records);
        self.source.append(&mut gpmf.source);
    }

    /// Interpret GPS records (`GPS5`, `GPRI` and their context)
    /// into a track. Diagnostics are logged via the `log` facade.
    pub fn gps(&self, options: IngestOptions) -> Result<GpsIngest, GpmfError> {
        self.gps_with_sink(options, &mut LogSink)
    }

    /// Interpret GPS records into a track, sending diagnostics to `sink`.
    pub fn gps_with_sink<S: EventSink>(&self, options: IngestOptions, sink: &mut S) -> Result<GpsIngest, GpmfError> {
        interpret(self.iter(), options, sink)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::gpmf::klv::tests::{i32s, klv, nested};

    use super::*;

    fn clip(lat: i32) -> Vec<u8> {
        nested(b"DEVC", &[nested(b"STRM", &[
            klv(b"GPSF", b'L', 4, 1, &3_u32.to_be_bytes()),
            klv(b"GPS5", b'l', 20, 1, &i32s(&[lat, 2, 3, 0, 0])),
        ])])
    }

    #[test]
    fn from_slice_to_track() {
        let gpmf = Gpmf::from_slice(&clip(1)).unwrap();
        assert_eq!(gpmf.len(), 2);
        assert_eq!(gpmf.find_all(&FourCC::GPS5).count(), 1);

        let track = gpmf.gps(IngestOptions::default()).unwrap().into_track().unwrap();
        assert_eq!(track.len(), 1);
        assert_eq!(track.0[0].latitude, 1.);
    }

    #[test]
    fn from_paths_keeps_order() {
        let dir = std::env::temp_dir().join(format!("gpmf-track-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let paths = (1..=3)
            .map(|i| {
                let path = dir.join(format!("clip{i}.gpmf"));
                let mut file = std::fs::File::create(&path).unwrap();
                file.write_all(&clip(i)).unwrap();
                path
            })
            .collect::<Vec<_>>();

        let gpmf = Gpmf::from_paths(&paths).unwrap();
        assert_eq!(gpmf.source, paths);

        let ingest = gpmf.gps(IngestOptions::default()).unwrap();
        let latitudes = ingest.track.iter().map(|p| p.latitude).collect::<Vec<_>>();
        assert_eq!(latitudes, vec![1., 2., 3.]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            Gpmf::new(Path::new("does/not/exist.gpmf")),
            Err(GpmfError::IOError(_))
        ));
    }
}
