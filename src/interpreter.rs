//! Turns a flat sequence of GPMF records into a GPS track.
//!
//! GPMF records apply to all records that follow until superseded:
//! `SCAL`, `GPSU`, `GPSP`, `GPSF` and `SYST` update the interpretation
//! context, `GPS5` and `GPRI` samples are validated, scaled and stamped
//! with the current context. Output order is the logged order.

use time::PrimitiveDateTime;

use crate::{
    events::{Event, EventSink},
    FixStatus,
    Gps5Raw,
    GpmfError,
    GpsIngest,
    IngestStats,
    KarmaRaw,
    RawSample,
    Record,
    ScaleFactors,
    SystemClock,
    TaggedRecord,
    Track,
    TrackPoint,
};

/// Interpretation options.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Skip samples logged with GPS fix 0.
    /// These are kept by default.
    pub skip_bad_fix: bool,
}

impl IngestOptions {
    pub fn with_skip_bad_fix(self, skip_bad_fix: bool) -> Self {
        Self { skip_bad_fix, ..self }
    }
}

/// Values currently in effect.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Context {
    /// Latest `SCAL`, `[1.0, 1.0, 1.0]` until set.
    pub scale: ScaleFactors,
    /// Latest `GPSF`.
    pub fix: FixStatus,
    /// Latest `GPSU`.
    pub datetime: Option<PrimitiveDateTime>,
    /// Latest `GPSP`.
    pub precision: Option<f64>,
    /// Latest `SYST` that scaled to two non-zero values.
    pub clock: SystemClock,
}

/// Single pass, stateful GPS interpreter.
/// Feed records in logged order with `push()`, then call `finish()`.
pub struct Interpreter<'s, S: EventSink> {
    options: IngestOptions,
    context: Context,
    track: Track,
    stats: IngestStats,
    sink: &'s mut S,
}

impl<'s, S: EventSink> Interpreter<'s, S> {
    pub fn new(options: IngestOptions, sink: &'s mut S) -> Self {
        Self {
            options,
            context: Context::default(),
            track: Track::default(),
            stats: IngestStats::default(),
            sink,
        }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn stats(&self) -> &IngestStats {
        &self.stats
    }

    /// Interpret a single record.
    ///
    /// Errors on malformed payloads for GPS related FourCC. These are not
    /// recoverable: the track would otherwise look plausible but be wrong.
    pub fn push(&mut self, record: &TaggedRecord) -> Result<(), GpmfError> {
        match Record::parse(record)? {
            Record::Scale(scale) => self.context.scale = scale,
            Record::GpsTime(datetime) => self.context.datetime = Some(datetime),
            Record::GpsPrecision(precision) => self.context.precision = Some(precision),
            Record::GpsFix(fix) => {
                if fix != self.context.fix {
                    self.sink.emit(Event::FixChanged{from: self.context.fix, to: fix});
                }
                self.context.fix = fix;
            },
            Record::Gps5(samples) => {
                for sample in samples.iter() {
                    self.gps5(sample)?;
                }
            },
            Record::SystemClock(raw) => {
                let scaled = self.context.scale.apply(&raw)?;
                let clock = SystemClock::from_scaled(&scaled)?;
                // zero readings must not replace a valid clock
                if clock.is_set() {
                    self.context.clock = clock;
                }
            },
            Record::Karma(sample) => self.karma(&sample)?,
            Record::Other(_) => (),
        }

        Ok(())
    }

    /// Final statistics are emitted as an event.
    pub fn finish(self) -> GpsIngest {
        self.sink.emit(Event::Finished(self.stats));
        GpsIngest {
            track: self.track,
            stats: self.stats,
        }
    }

    /// Empty and GPS fix checks shared by `GPS5` and `GPRI`.
    /// Returns `false` if the sample should be discarded.
    fn admit(&mut self, sample: &impl RawSample) -> bool {
        if sample.is_empty() {
            self.stats.empty += 1;
            self.sink.emit(Event::EmptySample(sample.source()));
            return false
        }

        if !self.context.fix.is_locked() {
            self.stats.badfix += 1;
            if self.options.skip_bad_fix {
                self.stats.badfixskip += 1;
                self.sink.emit(Event::BadFixSkipped(sample.source()));
                return false
            }
        }

        true
    }

    fn gps5(&mut self, sample: &Gps5Raw) -> Result<(), GpmfError> {
        if !self.admit(sample) {
            return Ok(())
        }

        let gps = sample.scale(&self.context.scale)?;
        self.track.push(TrackPoint::from_gps5(
            &gps,
            self.context.datetime,
            self.context.precision,
            self.context.fix
        ));
        self.stats.ok += 1;

        Ok(())
    }

    fn karma(&mut self, sample: &KarmaRaw) -> Result<(), GpmfError> {
        if !self.admit(sample) {
            return Ok(())
        }

        let gps = sample.scale(&self.context.scale)?;

        // Karma samples logged before a valid SYST are dropped, uncounted
        if self.context.clock.is_set() {
            let datetime = self.context.clock.datetime()?;
            self.track.push(TrackPoint::from_karma(
                &gps,
                datetime,
                self.context.precision,
                self.context.fix
            ));
            self.stats.ok += 1;
        }

        Ok(())
    }
}

/// Interpret records in order, sending diagnostics to `sink`.
pub fn interpret<'a, I, S>(
    records: I,
    options: IngestOptions,
    sink: &mut S,
) -> Result<GpsIngest, GpmfError>
where
    I: IntoIterator<Item = &'a TaggedRecord>,
    S: EventSink,
{
    let mut interpreter = Interpreter::new(options, sink);
    for record in records {
        interpreter.push(record)?;
    }
    Ok(interpreter.finish())
}
