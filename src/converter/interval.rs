// ABOUTME: Normalizes Fitbit dataset interval metadata into a canonical seconds value
// ABOUTME: Fixed unit lookup table; unreadable metadata falls back to the caller's default
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Dataset interval normalization
//!
//! Intraday responses describe their sampling cadence as a unit label plus a
//! count (`datasetType: "minute"`, `datasetInterval: 1`). This module folds
//! that pair into whole seconds. It never fails the caller: unreadable
//! metadata logs a warning and yields the supplied default.

use crate::json;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::warn;

/// Time unit a dataset interval can be expressed in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum IntervalUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl IntervalUnit {
    /// Whole seconds in `count` of this unit. Sub-second units truncate
    /// toward zero.
    const fn to_seconds(self, count: i64) -> i64 {
        match self {
            Self::Nanoseconds => count / 1_000_000_000,
            Self::Microseconds => count / 1_000_000,
            Self::Milliseconds => count / 1_000,
            Self::Seconds => count,
            Self::Minutes => count * 60,
            Self::Hours => count * 3_600,
            Self::Days => count * 86_400,
        }
    }
}

static UNIT_TABLE: OnceLock<HashMap<&'static str, IntervalUnit>> = OnceLock::new();

fn unit_table() -> &'static HashMap<&'static str, IntervalUnit> {
    UNIT_TABLE.get_or_init(|| {
        HashMap::from([
            ("nanosecond", IntervalUnit::Nanoseconds),
            ("microsecond", IntervalUnit::Microseconds),
            ("millisecond", IntervalUnit::Milliseconds),
            ("second", IntervalUnit::Seconds),
            ("minute", IntervalUnit::Minutes),
            ("hour", IntervalUnit::Hours),
            ("day", IntervalUnit::Days),
        ])
    })
}

/// Read the dataset interval from `root` and normalize it to whole seconds.
///
/// Unrecognized unit labels get second semantics; an absent label or count
/// logs a warning and returns `default_secs` unchanged.
#[must_use]
pub fn dataset_interval_secs(root: &Value, default_secs: i64) -> i64 {
    let label = json::opt_str(root, "datasetType");
    let count = json::opt_i64(root, "datasetInterval");
    let (Some(label), Some(count)) = (label, count) else {
        warn!(default_secs, "failed to read dataset interval, using default");
        return default_secs;
    };
    unit_table()
        .get(label)
        .copied()
        .unwrap_or(IntervalUnit::Seconds)
        .to_seconds(count)
}
