// ABOUTME: Intraday time-series payloads for per-sample step counts and heart rate
// ABOUTME: Each sample carries its own epoch time plus the sampling cadence in seconds
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::StreamValue;
use serde::{Deserialize, Serialize};

/// One intraday step-count sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntradaySteps {
    /// Sample time in epoch seconds.
    pub time: f64,
    /// Batch receipt time in epoch seconds.
    pub time_received: f64,
    /// Sampling cadence in seconds, from the dataset interval metadata.
    pub interval: i64,
    /// Steps counted during this sample interval.
    pub steps: i64,
}

impl StreamValue for IntradaySteps {
    fn schema_name(&self) -> &'static str {
        "FitbitIntradaySteps"
    }

    fn time(&self) -> Option<f64> {
        Some(self.time)
    }

    fn wire_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// One intraday heart-rate sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntradayHeartRate {
    /// Sample time in epoch seconds.
    pub time: f64,
    /// Batch receipt time in epoch seconds.
    pub time_received: f64,
    /// Sampling cadence in seconds, from the dataset interval metadata.
    pub interval: i64,
    /// Heart rate in beats per minute.
    pub heart_rate: i64,
}

impl StreamValue for IntradayHeartRate {
    fn schema_name(&self) -> &'static str {
        "FitbitIntradayHeartRate"
    }

    fn time(&self) -> Option<f64> {
        Some(self.time)
    }

    fn wire_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
