// ABOUTME: Profile time-zone payload reported once per profile fetch
// ABOUTME: Receipt-stamped because the profile document carries no sample time of its own
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::StreamValue;
use serde::{Deserialize, Serialize};

/// Time-zone snapshot from a user's profile.
///
/// The profile document has no timestamp, so `time` is the batch receipt
/// instant. That makes the record subject to the validity window like any
/// other, which is intended: a windowed subject should stop producing
/// time-zone updates too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeZone {
    /// Batch receipt time in epoch seconds.
    pub time: f64,
    /// Offset from UTC in milliseconds, when reported.
    #[serde(
        rename = "offsetFromUTCMillis",
        skip_serializing_if = "Option::is_none"
    )]
    pub offset_from_utc_millis: Option<i64>,
    /// IANA time-zone name, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl StreamValue for TimeZone {
    fn schema_name(&self) -> &'static str {
        "FitbitTimeZone"
    }

    fn time(&self) -> Option<f64> {
        Some(self.time)
    }

    fn wire_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
