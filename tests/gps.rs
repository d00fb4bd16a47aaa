use gpmf_track::{
    interpret,
    Event,
    FixStatus,
    FourCC,
    Gpmf,
    GpmfError,
    GpsIngest,
    IngestOptions,
    IngestStats,
    SampleSource,
    TaggedRecord,
};

fn scal(scale: &[f64]) -> TaggedRecord {
    TaggedRecord::new(FourCC::SCAL, scale.iter().map(|s| vec![*s]).collect::<Vec<_>>())
}

fn gpsf(fix: u32) -> TaggedRecord {
    TaggedRecord::new(FourCC::GPSF, fix as f64)
}

fn gps5(samples: &[[f64; 5]]) -> TaggedRecord {
    TaggedRecord::new(FourCC::GPS5, samples.iter().map(|s| s.to_vec()).collect::<Vec<_>>())
}

fn ingest(records: &[TaggedRecord], skip_bad_fix: bool) -> GpsIngest {
    let mut events: Vec<Event> = Vec::new();
    interpret(records, IngestOptions{skip_bad_fix}, &mut events).unwrap()
}

#[test]
fn scenario_single_point() {
    let records = [scal(&[1., 1., 1.]), gpsf(1), gps5(&[[1., 2., 3., 0., 0.]])];
    let result = ingest(&records, false);

    assert_eq!(result.track.len(), 1);
    let point = &result.track.0[0];
    assert_eq!((point.latitude, point.longitude, point.altitude, point.speed), (1., 2., 3., 0.));
    assert_eq!(result.stats.ok, 1);
}

#[test]
fn scenario_bad_fix_skipped() {
    let records = [gpsf(0), gps5(&[[1., 2., 3., 0., 0.]])];
    let result = ingest(&records, true);

    assert!(result.track.is_empty());
    assert_eq!(result.stats.badfix, 1);
    assert_eq!(result.stats.badfixskip, 1);
    assert!(matches!(result.into_track(), Err(GpmfError::NoGpsPoints)));
}

#[test]
fn scenario_empty_sample() {
    let result = ingest(&[gps5(&[[0., 0., 0., 0., 0.]])], false);
    assert!(result.track.is_empty());
    assert_eq!(result.stats, IngestStats{empty: 1, ..Default::default()});
}

#[test]
fn scenario_shorter_scale() {
    // three scale values, five raw values: speeds are dropped
    let records = [scal(&[2., 1., 1.]), gpsf(1), gps5(&[[4., 2., 3., 0., 0.]])];
    let point = ingest(&records, false).track.0[0].to_owned();
    assert_eq!((point.latitude, point.longitude, point.altitude, point.speed), (2., 2., 3., 0.));

    // speed present, but not covered by scale
    let records = [scal(&[2., 1., 1.]), gpsf(1), gps5(&[[4., 2., 3., 6., 9.]])];
    let point = ingest(&records, false).track.0[0].to_owned();
    assert_eq!(point.speed, 0.);
}

#[test]
fn scenario_equal_length_scale() {
    let records = [scal(&[2., 1., 1., 3., 3.]), gpsf(1), gps5(&[[4., 2., 3., 6., 9.]])];
    let point = ingest(&records, false).track.0[0].to_owned();
    assert_eq!((point.latitude, point.longitude, point.altitude, point.speed), (2., 2., 3., 3.));
}

#[test]
fn order_preserved() {
    let records = [
        gpsf(3),
        gps5(&[[1., 0., 0., 0., 0.], [0., 0., 0., 0., 0.], [2., 0., 0., 0., 0.]]),
        gpsf(0),
        gps5(&[[3., 0., 0., 0., 0.]]),
        gpsf(2),
        gps5(&[[4., 0., 0., 0., 0.], [5., 0., 0., 0., 0.]]),
    ];

    let kept = ingest(&records, false);
    let latitudes = kept.track.iter().map(|p| p.latitude).collect::<Vec<_>>();
    assert_eq!(latitudes, vec![1., 2., 3., 4., 5.]);

    let skipped = ingest(&records, true);
    let latitudes = skipped.track.iter().map(|p| p.latitude).collect::<Vec<_>>();
    assert_eq!(latitudes, vec![1., 2., 4., 5.]);
    assert!(skipped.track.iter().all(|p| p.fix != FixStatus::NO_LOCK));
}

#[test]
fn counters_conserved() {
    let records = [
        gps5(&[[1., 1., 1., 0., 0.], [0., 0., 0., 0., 0.]]),
        gpsf(3),
        gps5(&[[1., 1., 1., 0., 0.], [0., 0., 0., 1., 1.], [2., 2., 2., 0., 0.]]),
        gpsf(0),
        gps5(&[[1., 1., 1., 0., 0.]]),
    ];
    let samples = 6;

    for skip_bad_fix in [false, true] {
        let stats = ingest(&records, skip_bad_fix).stats;
        assert_eq!(stats.processed(), samples);
        assert_eq!(stats.badfix, 2);
        assert_eq!(stats.empty, 2);
        match skip_bad_fix {
            true => assert_eq!((stats.ok, stats.badfixskip), (2, 2)),
            false => assert_eq!((stats.ok, stats.badfixskip, stats.badfix_kept()), (4, 0, 2)),
        }
    }
}

#[test]
fn events_for_skipped_samples() {
    let records = [gps5(&[[0., 0., 0., 0., 0.], [1., 1., 1., 0., 0.]]), gpsf(3)];
    let mut events: Vec<Event> = Vec::new();
    let result = interpret(&records, IngestOptions{skip_bad_fix: true}, &mut events).unwrap();

    assert_eq!(events, vec![
        Event::EmptySample(SampleSource::Gps5),
        Event::BadFixSkipped(SampleSource::Gps5),
        Event::FixChanged{from: FixStatus(0), to: FixStatus(3)},
        Event::Finished(result.stats),
    ]);
}

/// Single KLV entry, payload padded to 32 bits.
fn klv(fourcc: &[u8; 4], type_char: u8, size: u8, repeat: u16, payload: &[u8]) -> Vec<u8> {
    let mut bytes = fourcc.to_vec();
    bytes.push(type_char);
    bytes.push(size);
    bytes.extend(repeat.to_be_bytes());
    bytes.extend(payload);
    bytes.resize((bytes.len() + 3) / 4 * 4, 0);
    bytes
}

fn nested(fourcc: &[u8; 4], content: &[Vec<u8>]) -> Vec<u8> {
    let payload = content.concat();
    klv(fourcc, 0, 1, payload.len() as u16, &payload)
}

fn i32s(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_be_bytes()).collect()
}

#[test]
fn raw_gpmf_to_track() {
    let data = nested(b"DEVC", &[
        klv(b"DVNM", b'c', 1, 6, b"Camera"),
        nested(b"STRM", &[
            klv(b"STNM", b'c', 1, 3, b"GPS"),
            klv(b"GPSF", b'L', 4, 1, &3_u32.to_be_bytes()),
            klv(b"GPSU", b'U', 16, 1, b"160907143000.500"),
            klv(b"GPSP", b'S', 2, 1, &355_u16.to_be_bytes()),
            klv(b"SCAL", b'l', 4, 5, &i32s(&[10000000, 10000000, 1000, 1000, 100])),
            klv(b"GPS5", b'l', 20, 2, &i32s(&[
                593253800, 180640060, 25500, 1200, 150,
                0, 0, 0, 0, 0,
            ])),
        ]),
    ]);

    let gpmf = Gpmf::from_slice(&data).unwrap();
    let result = gpmf.gps(IngestOptions::default()).unwrap();
    assert_eq!(result.stats, IngestStats{ok: 1, empty: 1, ..Default::default()});

    let track = result.into_track().unwrap();
    let point = track.first().unwrap();
    approx::assert_relative_eq!(point.latitude, 59.32538);
    approx::assert_relative_eq!(point.longitude, 18.064006);
    approx::assert_relative_eq!(point.altitude, 25.5);
    approx::assert_relative_eq!(point.speed, 1.5);
    assert_eq!(point.precision, Some(355.));
    assert_eq!(track.t0_as_string().as_deref(), Some("2016-09-07T14:30:00.500"));
}

#[test]
fn raw_karma_to_track() {
    let mut gpri = i32s(&[593253800, 180640060, 25500]);
    gpri.extend(1500_u16.to_be_bytes());
    let data = nested(b"DEVC", &[
        klv(b"DVNM", b'c', 1, 16, b"GoPro Karma v1.0"),
        nested(b"STRM", &[
            klv(b"GPSF", b'L', 4, 1, &3_u32.to_be_bytes()),
            klv(b"SCAL", b'l', 4, 4, &i32s(&[10000000, 10000000, 1000, 1000])),
            klv(b"SYST", b'J', 8, 2, &[
                10_000_u64.to_be_bytes(),
                1_500_000_000_000_u64.to_be_bytes(),
            ].concat()),
            klv(b"TYPE", b'c', 1, 4, b"lllS"),
            klv(b"GPRI", b'?', 14, 1, &gpri),
        ]),
    ]);

    let gpmf = Gpmf::from_slice(&data).unwrap();
    let track = gpmf.gps(IngestOptions::default()).unwrap().into_track().unwrap();
    assert_eq!(track.len(), 1);

    let point = track.first().unwrap();
    assert_eq!(point.source, SampleSource::Karma);
    approx::assert_relative_eq!(point.latitude, 59.32538);
    approx::assert_relative_eq!(point.speed, 1.5);
    // SYST scaled by the first two scale values: milliseconds 150000.0
    assert_eq!(track.t0_as_string().as_deref(), Some("1970-01-02T17:40:00.000"));
}
