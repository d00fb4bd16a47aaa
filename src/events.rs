//! Diagnostic events raised during GPS interpretation.
//!
//! Interpretation never prints. Events are handed to an `EventSink`:
//! `LogSink` forwards them to the `log` facade, `Vec<Event>` collects them.

use std::fmt::Display;

use log::{info, warn};

use crate::{FixStatus, IngestStats, SampleSource};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// `GPSF` changed value.
    FixChanged{from: FixStatus, to: FixStatus},
    /// Sample with all zero position was skipped.
    EmptySample(SampleSource),
    /// Sample logged with GPS fix 0 was skipped.
    BadFixSkipped(SampleSource),
    /// All records have been interpreted.
    Finished(IngestStats),
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::FixChanged{from, to} => write!(f, "GPS fix changed from {from} to {to}"),
            Event::EmptySample(source) => write!(f, "Skipping empty {source} point"),
            Event::BadFixSkipped(source) => write!(f, "Skipping {source} point due to GPS fix 0"),
            Event::Finished(stats) => write!(f, "{stats}"),
        }
    }
}

pub trait EventSink {
    fn emit(&mut self, event: Event);
}

impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event)
    }
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, event: Event) {
        match &event {
            Event::FixChanged{..} => info!("{event}"),
            Event::EmptySample(_) | Event::BadFixSkipped(_) => warn!("{event}"),
            Event::Finished(stats) => stats.to_string()
                .lines()
                .for_each(|line| info!("{line}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_messages() {
        let event = Event::FixChanged{from: FixStatus(0), to: FixStatus(3)};
        assert_eq!(event.to_string(), "GPS fix changed from 0 [No lock] to 3 [3D lock]");
        assert_eq!(Event::EmptySample(SampleSource::Karma).to_string(), "Skipping empty GPRI point");
        assert_eq!(Event::BadFixSkipped(SampleSource::Gps5).to_string(), "Skipping GPS5 point due to GPS fix 0");
    }

    #[test]
    fn vec_sink_collects() {
        let mut sink: Vec<Event> = Vec::new();
        sink.emit(Event::EmptySample(SampleSource::Gps5));
        sink.emit(Event::Finished(IngestStats::default()));
        assert_eq!(sink.len(), 2);
    }
}
