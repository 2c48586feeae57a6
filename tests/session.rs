use chrono::{DateTime, Duration};
use trackviz_rs::types::activity::SessionSummaryBuilder;

#[test]
fn elapsed_time_drives_minutes_and_end() {
    let start = DateTime::from_timestamp(0, 0).expect("epoch");

    let mut builder = SessionSummaryBuilder::default();
    builder.mark_session();
    builder.set_start(start);
    builder.set_elapsed_seconds(120.0);

    let summary = builder.finish().expect("summary");
    assert_eq!(summary.elapsed_minutes, 2);
    assert_eq!(summary.end, start + Duration::seconds(120));
}

#[test]
fn elapsed_minutes_are_truncated() {
    let start = DateTime::from_timestamp(1_672_567_200, 0).expect("start");

    let mut builder = SessionSummaryBuilder::default();
    builder.mark_session();
    builder.set_start(start);
    builder.set_elapsed_seconds(3_719.0); // 61.98 minutes

    let summary = builder.finish().expect("summary");
    assert_eq!(summary.elapsed_minutes, 61);
}

#[test]
fn distance_is_converted_to_km_and_rounded() {
    let start = DateTime::from_timestamp(0, 0).expect("epoch");

    let mut builder = SessionSummaryBuilder::default();
    builder.mark_session();
    builder.set_start(start);
    builder.set_elapsed_seconds(60.0);
    builder.set_distance_meters(12_345.6);

    let summary = builder.finish().expect("summary");
    assert_eq!(summary.distance_km, 12.35);
}

#[test]
fn last_value_wins_when_fields_repeat() {
    let start = DateTime::from_timestamp(0, 0).expect("epoch");

    let mut builder = SessionSummaryBuilder::default();
    builder.mark_session();
    builder.set_start(start);
    builder.set_elapsed_seconds(60.0);
    builder.set_sport("running".to_string());
    builder.set_sport("cycling".to_string());

    let summary = builder.finish().expect("summary");
    assert_eq!(summary.sport, "cycling");
}

#[test]
fn missing_optional_fields_fall_back_to_defaults() {
    let start = DateTime::from_timestamp(0, 0).expect("epoch");

    let mut builder = SessionSummaryBuilder::default();
    builder.mark_session();
    builder.set_start(start);
    builder.set_elapsed_seconds(60.0);

    let summary = builder.finish().expect("summary");
    assert_eq!(summary.distance_km, 0.0);
    assert_eq!(summary.sport, "unknown");
}

#[test]
fn no_session_message_yields_no_summary() {
    let builder = SessionSummaryBuilder::default();
    assert!(builder.finish().is_none());
}

#[test]
fn session_without_required_fields_yields_no_summary() {
    let mut builder = SessionSummaryBuilder::default();
    builder.mark_session();
    builder.set_sport("cycling".to_string());
    assert!(builder.finish().is_none());
}
