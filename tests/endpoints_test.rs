// ABOUTME: Integration tests for the shipped Fitbit endpoint converters
// ABOUTME: Verifies field mapping, time anchoring, topic routing, and audit interplay per endpoint
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, clippy::float_cmp)]

mod common;

use chrono::{TimeZone, Utc};
use common::{
    activity_log_payload, heart_rate_payload, receipt_time, request_for, sleep_payload,
    steps_payload, time_zone_payload, unwindowed_user, windowed_user,
};
use fitsource::constants::topics;
use fitsource::{
    ActivityLogConverter, EndpointConverter, IntradayHeartRateConverter, IntradayStepsConverter,
    RecordConverter, SleepConverter, SourceRecord, TimeZoneConverter,
};
use http::HeaderMap;
use serde_json::Value;

fn convert_with<E: EndpointConverter>(endpoint: E, route: &str, body: &[u8]) -> Vec<SourceRecord> {
    let request = request_for(unwindowed_user(), route);
    RecordConverter::new(endpoint)
        .convert_at(&request, &HeaderMap::new(), Some(body), receipt_time())
        .unwrap()
}

fn field_f64(record: &SourceRecord, field: &str) -> f64 {
    record.value.get(field).and_then(Value::as_f64).unwrap()
}

fn field_i64(record: &SourceRecord, field: &str) -> i64 {
    record.value.get(field).and_then(Value::as_i64).unwrap()
}

fn field_str<'a>(record: &'a SourceRecord, field: &str) -> &'a str {
    record.value.get(field).and_then(Value::as_str).unwrap()
}

const RECEIPT_SECS: f64 = 1_641_124_800.0; // 2022-01-02T12:00:00Z

// ============================================================================
// Intraday steps
// ============================================================================

#[test]
fn steps_samples_anchor_on_the_summary_date() {
    let records = convert_with(IntradayStepsConverter, "intraday_steps", &steps_payload());

    // Steps is an excluded topic, so no audit record joins the batch.
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.topic == topics::INTRADAY_STEPS));
    assert_eq!(records[0].value_schema, "FitbitIntradaySteps");

    let eight_am = Utc.with_ymd_and_hms(2022, 1, 1, 8, 0, 0).unwrap();
    assert_eq!(records[0].source_offset, eight_am.timestamp_millis());
    assert_eq!(field_f64(&records[0], "time"), 1_641_024_000.0);
    assert_eq!(field_f64(&records[0], "timeReceived"), RECEIPT_SECS);
    assert_eq!(field_i64(&records[0], "interval"), 60);
    assert_eq!(field_i64(&records[0], "steps"), 12);
    assert_eq!(field_i64(&records[1], "steps"), 104);
}

#[test]
fn steps_without_intraday_section_produce_nothing() {
    let body = br#"{"activities-steps": [{"dateTime": "2022-01-01", "value": "0"}]}"#;
    let records = convert_with(IntradayStepsConverter, "intraday_steps", body);
    assert!(records.is_empty());
}

#[test]
fn malformed_step_samples_are_skipped_not_fatal() {
    let body = serde_json::to_vec(&serde_json::json!({
        "activities-steps": [{"dateTime": "2022-01-01"}],
        "activities-steps-intraday": {
            "datasetType": "minute",
            "datasetInterval": 1,
            "dataset": [
                {"time": "not a clock", "value": 5},
                {"time": "09:00:00"},
                {"time": "09:01:00", "value": 7}
            ]
        }
    }))
    .unwrap();
    let records = convert_with(IntradayStepsConverter, "intraday_steps", &body);
    assert_eq!(records.len(), 1);
    assert_eq!(field_i64(&records[0], "steps"), 7);
}

// ============================================================================
// Intraday heart rate
// ============================================================================

#[test]
fn heart_rate_batches_are_audited_and_carry_the_dataset_cadence() {
    let records = convert_with(
        IntradayHeartRateConverter,
        "intraday_heart_rate",
        &heart_rate_payload(),
    );

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].topic, topics::INTRADAY_HEART_RATE);
    assert_eq!(records[2].topic, topics::DATA_LOG);

    assert_eq!(field_i64(&records[0], "interval"), 300);
    assert_eq!(field_i64(&records[0], "heartRate"), 61);
    assert_eq!(field_i64(&records[1], "heartRate"), 74);
    assert_eq!(field_f64(&records[1], "time"), 1_641_024_300.0);
}

// ============================================================================
// Sleep
// ============================================================================

#[test]
fn sleep_levels_route_by_vocabulary() {
    let records = convert_with(SleepConverter, "sleep", &sleep_payload());

    // Six level entries plus the audit record.
    assert_eq!(records.len(), 7);

    let stages: Vec<_> = records
        .iter()
        .filter(|r| r.topic == topics::SLEEP_STAGES)
        .collect();
    let classic: Vec<_> = records
        .iter()
        .filter(|r| r.topic == topics::SLEEP_CLASSIC)
        .collect();
    assert_eq!(stages.len(), 3);
    assert_eq!(classic.len(), 3);

    assert_eq!(field_str(stages[0], "level"), "LIGHT");
    assert_eq!(field_i64(stages[1], "duration"), 2700);
    assert_eq!(field_str(classic[0], "level"), "ASLEEP");

    // Unrecognized labels keep flowing, routed by the session's declared type.
    assert_eq!(field_str(classic[2], "level"), "UNKNOWN");
    assert_eq!(records[0].value_schema, "FitbitSleepStage");
}

#[test]
fn sleep_entry_times_parse_as_utc() {
    let records = convert_with(SleepConverter, "sleep", &sleep_payload());
    let ten_pm = Utc.with_ymd_and_hms(2022, 1, 1, 22, 0, 0).unwrap();
    assert_eq!(records[0].source_offset, ten_pm.timestamp_millis());
    assert_eq!(field_f64(&records[0], "time"), 1_641_074_400.0);
}

// ============================================================================
// Time zone
// ============================================================================

#[test]
fn time_zone_emits_one_receipt_stamped_record_without_audit() {
    let records = convert_with(TimeZoneConverter, "time_zone", &time_zone_payload());

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].topic, topics::TIME_ZONE);
    assert_eq!(records[0].source_offset, receipt_time().timestamp_millis());
    assert_eq!(field_f64(&records[0], "time"), RECEIPT_SECS);
    assert_eq!(field_str(&records[0], "timezone"), "Europe/Amsterdam");
    assert_eq!(field_i64(&records[0], "offsetFromUTCMillis"), 3_600_000);
}

#[test]
fn time_zone_records_respect_the_validity_window() {
    // The record is receipt-stamped, so a window before the receipt instant
    // drops it like any other record.
    let end = Utc.with_ymd_and_hms(2021, 12, 1, 0, 0, 0).unwrap();
    let request = request_for(windowed_user(end), "time_zone");
    let records = RecordConverter::new(TimeZoneConverter)
        .convert_at(
            &request,
            &HeaderMap::new(),
            Some(&time_zone_payload()),
            receipt_time(),
        )
        .unwrap();
    assert!(records.is_empty());
}

// ============================================================================
// Activity log
// ============================================================================

#[test]
fn activity_entries_map_summary_fields() {
    let records = convert_with(ActivityLogConverter, "activity_log", &activity_log_payload());

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].topic, topics::ACTIVITY_LOG);
    assert_eq!(records[2].topic, topics::DATA_LOG);

    let run = &records[0];
    assert_eq!(field_i64(run, "logId"), 5001);
    assert_eq!(field_str(run, "name"), "Run");
    assert_eq!(field_i64(run, "duration"), 1800);
    assert_eq!(field_i64(run, "calories"), 320);
    assert_eq!(field_i64(run, "steps"), 4200);
    assert_eq!(field_i64(run, "meanHeartRate"), 148);

    // Offset-stamped start time normalizes to UTC.
    let start = Utc.with_ymd_and_hms(2022, 1, 1, 15, 0, 0).unwrap();
    assert_eq!(run.source_offset, start.timestamp_millis());
}

#[test]
fn activity_entries_accept_local_start_times_and_omit_absent_fields() {
    let records = convert_with(ActivityLogConverter, "activity_log", &activity_log_payload());

    let walk = &records[1];
    assert_eq!(field_i64(walk, "logId"), 5002);
    let start = Utc.with_ymd_and_hms(2022, 1, 1, 18, 30, 0).unwrap();
    assert_eq!(walk.source_offset, start.timestamp_millis());
    assert_eq!(field_i64(walk, "duration"), 600);
    assert!(walk.value.get("calories").is_none());
    assert!(walk.value.get("meanHeartRate").is_none());
}
