use log::Log;
use pose2d::logging::{format_record, format_timestamp, init_stdout_logger, StdoutLogger};
use pose2d::{Point2DInt, Skeleton};

fn level_metadata(level: log::Level) -> log::Metadata<'static> {
    log::MetadataBuilder::new().level(level).target("pose2d").build()
}

// --- StdoutLogger ---

#[test]
fn test_stdout_logger_follows_max_level() {
    init_stdout_logger();
    let logger = StdoutLogger;
    assert!(logger.enabled(&level_metadata(log::Level::Error)));
    assert!(logger.enabled(&level_metadata(log::Level::Info)));
    assert!(!logger.enabled(&level_metadata(log::Level::Trace)));
}

#[test]
fn test_init_twice_is_ignored() {
    init_stdout_logger();
    init_stdout_logger();
    // logging paths run with a logger installed
    assert!(Point2DInt::new(1, 1).divide(0).is_err());
    assert!(Skeleton::default().bounding_box().is_none());
}

// --- Record format ---

#[test]
fn test_format_record_layout() {
    let record = log::RecordBuilder::new()
        .level(log::Level::Info)
        .target("pose2d::skeleton")
        .file(Some("skeleton.rs"))
        .line(Some(42))
        .args(format_args!("bounding box requested"))
        .build();
    let line = format_record(&record);

    let (timestamp, rest) = line.split_once(' ').unwrap();
    assert_eq!(timestamp.len(), 19);
    assert_eq!(rest, "[INFO] skeleton.rs:42 - bounding box requested");
    assert!(!line.contains("thread"));
}

#[test]
fn test_format_record_warn_level() {
    let record = log::RecordBuilder::new()
        .level(log::Level::Warn)
        .target("pose2d")
        .file(Some("bbox.rs"))
        .line(Some(7))
        .args(format_args!("clamped"))
        .build();
    assert!(format_record(&record).ends_with(" [WARN] bbox.rs:7 - clamped"));
}

#[test]
fn test_format_record_without_file_uses_target() {
    let record = log::RecordBuilder::new()
        .level(log::Level::Debug)
        .target("pose2d::point")
        .args(format_args!("rejected"))
        .build();
    assert!(format_record(&record).ends_with(" [DEBUG] pose2d::point:0 - rejected"));
}

#[test]
fn test_format_timestamp_fields_in_range() {
    let ts = format_timestamp();
    let (date, time) = ts.split_once('T').unwrap();
    let date: Vec<u32> = date.split('-').map(|part| part.parse().unwrap()).collect();
    let time: Vec<u32> = time.split(':').map(|part| part.parse().unwrap()).collect();

    assert!(date[0] >= 2024);
    assert!((1..=12).contains(&date[1]));
    assert!((1..=31).contains(&date[2]));
    assert!(time[0] < 24);
    assert!(time[1] < 60);
    assert!(time[2] < 60);
}
