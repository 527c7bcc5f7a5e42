// ABOUTME: Logged exercise summary payload from the Fitbit activity log endpoint
// ABOUTME: One record per logged activity with duration, energy, and heart-rate summary fields
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::StreamValue;
use serde::{Deserialize, Serialize};

/// Summary of one logged exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    /// Activity start time in epoch seconds.
    pub time: f64,
    /// Batch receipt time in epoch seconds.
    pub time_received: f64,
    /// Fitbit log identifier for this activity.
    pub log_id: i64,
    /// Activity name as reported (e.g. "Run"), when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Activity duration in seconds.
    pub duration: i64,
    /// Energy expenditure in kilocalories, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<i64>,
    /// Steps taken during the activity, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<i64>,
    /// Mean heart rate during the activity in beats per minute, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_heart_rate: Option<i64>,
}

impl StreamValue for ActivityLog {
    fn schema_name(&self) -> &'static str {
        "FitbitActivityLog"
    }

    fn time(&self) -> Option<f64> {
        Some(self.time)
    }

    fn wire_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
