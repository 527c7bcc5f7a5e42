// ABOUTME: Sleep level payloads covering both classic and staged Fitbit sleep logs
// ABOUTME: Classifies level labels into the classic or stages topic family
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::StreamValue;
use serde::{Deserialize, Serialize};

/// Sleep level reported for one entry of a sleep log.
///
/// Fitbit reports two disjoint vocabularies: classic logs use
/// asleep/restless/awake, staged logs use wake/light/deep/rem. Labels outside
/// both map to `Unknown`.
#[non_exhaustive]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SleepLevel {
    /// Classic: asleep.
    Asleep,
    /// Classic: restless.
    Restless,
    /// Classic: awake.
    Awake,
    /// Stages: brief wake period.
    Wake,
    /// Stages: light sleep.
    Light,
    /// Stages: deep sleep.
    Deep,
    /// Stages: REM sleep.
    Rem,
    /// Label not recognized as either vocabulary.
    Unknown,
}

/// Which topic family a sleep level belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SleepLevelClass {
    /// Classic three-level logs.
    Classic,
    /// Granular sleep-stage logs.
    Stages,
}

impl SleepLevel {
    /// Parse a Fitbit level label. Unrecognized labels become `Unknown`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "asleep" => Self::Asleep,
            "restless" => Self::Restless,
            "awake" => Self::Awake,
            "wake" => Self::Wake,
            "light" => Self::Light,
            "deep" => Self::Deep,
            "rem" => Self::Rem,
            _ => Self::Unknown,
        }
    }

    /// Topic family for this level, or `None` for `Unknown`.
    #[must_use]
    pub const fn class(self) -> Option<SleepLevelClass> {
        match self {
            Self::Asleep | Self::Restless | Self::Awake => Some(SleepLevelClass::Classic),
            Self::Wake | Self::Light | Self::Deep | Self::Rem => Some(SleepLevelClass::Stages),
            Self::Unknown => None,
        }
    }
}

/// One level entry of a sleep log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepStage {
    /// Entry start time in epoch seconds.
    pub time: f64,
    /// Batch receipt time in epoch seconds.
    pub time_received: f64,
    /// Duration of the entry in seconds.
    pub duration: i64,
    /// Reported sleep level.
    pub level: SleepLevel,
}

impl StreamValue for SleepStage {
    fn schema_name(&self) -> &'static str {
        "FitbitSleepStage"
    }

    fn time(&self) -> Option<f64> {
        Some(self.time)
    }

    fn wire_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
