// ABOUTME: Shared test fixtures for fitsource integration tests
// ABOUTME: Provides canned users, requests, and Fitbit payload bodies
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fitsource`
//!
//! Common users, requests, and payload builders used by the pipeline and
//! endpoint integration tests.

use chrono::{DateTime, TimeZone, Utc};
use fitsource::{FetchRequest, User};
use serde_json::json;

/// Fixed receipt instant used for reproducible conversions.
pub fn receipt_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 1, 2, 12, 0, 0).unwrap()
}

/// A subject with no validity window.
pub fn unwindowed_user() -> User {
    User {
        id: "reg-1".into(),
        version: Some("1".into()),
        external_user_id: "FB1234".into(),
        project_id: Some("study-a".into()),
        user_id: "subject-1".into(),
        source_id: "wearable-1".into(),
        end_date: None,
    }
}

/// The same subject with a validity window ending at `end`.
pub fn windowed_user(end: DateTime<Utc>) -> User {
    User {
        end_date: Some(end),
        ..unwindowed_user()
    }
}

pub fn request_for(user: User, route: &str) -> FetchRequest {
    FetchRequest::new(user, route)
}

/// Intraday steps response: two one-minute samples on 2022-01-01.
pub fn steps_payload() -> Vec<u8> {
    serde_json::to_vec(&json!({
        "activities-steps": [
            {"dateTime": "2022-01-01", "value": "2407"}
        ],
        "activities-steps-intraday": {
            "datasetType": "minute",
            "datasetInterval": 1,
            "dataset": [
                {"time": "08:00:00", "value": 12},
                {"time": "08:01:00", "value": 104}
            ]
        }
    }))
    .unwrap()
}

/// Intraday heart-rate response: two samples, five-minute cadence.
pub fn heart_rate_payload() -> Vec<u8> {
    serde_json::to_vec(&json!({
        "activities-heart": [
            {"dateTime": "2022-01-01", "value": {"restingHeartRate": 58}}
        ],
        "activities-heart-intraday": {
            "datasetType": "minute",
            "datasetInterval": 5,
            "dataset": [
                {"time": "08:00:00", "value": 61},
                {"time": "08:05:00", "value": 74}
            ]
        }
    }))
    .unwrap()
}

/// Sleep response with one staged session and one classic session.
pub fn sleep_payload() -> Vec<u8> {
    serde_json::to_vec(&json!({
        "sleep": [
            {
                "logId": 101,
                "type": "stages",
                "levels": {
                    "data": [
                        {"dateTime": "2022-01-01T22:00:00.000", "level": "light", "seconds": 1800},
                        {"dateTime": "2022-01-01T22:30:00.000", "level": "deep", "seconds": 2700},
                        {"dateTime": "2022-01-01T23:15:00.000", "level": "rem", "seconds": 900}
                    ]
                }
            },
            {
                "logId": 102,
                "type": "classic",
                "levels": {
                    "data": [
                        {"dateTime": "2022-01-02T01:00:00.000", "level": "asleep", "seconds": 3600},
                        {"dateTime": "2022-01-02T02:00:00.000", "level": "restless", "seconds": 300},
                        {"dateTime": "2022-01-02T02:05:00.000", "level": "mystery", "seconds": 60}
                    ]
                }
            }
        ]
    }))
    .unwrap()
}

/// Profile response carrying a time zone.
pub fn time_zone_payload() -> Vec<u8> {
    serde_json::to_vec(&json!({
        "user": {
            "timezone": "Europe/Amsterdam",
            "offsetFromUTCMillis": 3_600_000,
            "fullName": "Subject One"
        }
    }))
    .unwrap()
}

/// Activity log list with one offset-stamped and one local-time entry.
pub fn activity_log_payload() -> Vec<u8> {
    serde_json::to_vec(&json!({
        "activities": [
            {
                "logId": 5001,
                "activityName": "Run",
                "startTime": "2022-01-01T07:00:00.000-08:00",
                "duration": 1_800_000,
                "calories": 320,
                "steps": 4200,
                "averageHeartRate": 148
            },
            {
                "logId": 5002,
                "activityName": "Walk",
                "startTime": "2022-01-01T18:30:00.000",
                "duration": 600_000
            }
        ]
    }))
    .unwrap()
}
