// ABOUTME: Parses activity log list responses into per-exercise candidates
// ABOUTME: Start times arrive with or without a UTC offset; both forms are accepted
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::EndpointConverter;
use crate::constants::topics;
use crate::converter::records::{epoch_secs, TopicData};
use crate::json;
use crate::models::ActivityLog;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;
use std::iter;
use tracing::debug;

/// Converter for the activity log list endpoint (`activities/list.json`).
#[derive(Debug, Default, Clone, Copy)]
pub struct ActivityLogConverter;

/// Activity start times are RFC 3339 when the device knows its offset and a
/// bare local timestamp otherwise.
fn start_instant(entry: &Value) -> Option<DateTime<Utc>> {
    let raw = json::opt_str(entry, "startTime")?;
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|t| t.and_utc())
                .ok()
        })
}

impl EndpointConverter for ActivityLogConverter {
    fn records<'a>(
        &self,
        root: &'a Value,
        received_at: DateTime<Utc>,
    ) -> Box<dyn Iterator<Item = TopicData> + 'a> {
        let Some(entries) = json::opt_array(root, "activities") else {
            return Box::new(iter::empty());
        };

        let time_received = epoch_secs(received_at);
        Box::new(entries.iter().filter_map(move |entry| {
            let log_id = json::opt_i64(entry, "logId")?;
            let Some(start) = start_instant(entry) else {
                debug!(log_id, "activity entry has no parseable start time, skipped");
                return None;
            };
            let duration_millis = json::opt_i64(entry, "duration")?;
            Some(TopicData {
                source_offset: start,
                topic: topics::ACTIVITY_LOG.to_owned(),
                value: Box::new(ActivityLog {
                    time: epoch_secs(start),
                    time_received,
                    log_id,
                    name: json::opt_str(entry, "activityName").map(ToOwned::to_owned),
                    duration: duration_millis / 1000,
                    calories: json::opt_i64(entry, "calories"),
                    steps: json::opt_i64(entry, "steps"),
                    mean_heart_rate: json::opt_i64(entry, "averageHeartRate"),
                }),
            })
        }))
    }
}
