// ABOUTME: Parses the user profile response into a single time-zone candidate
// ABOUTME: The record is receipt-stamped because the profile carries no timestamp
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::EndpointConverter;
use crate::constants::topics;
use crate::converter::records::{epoch_secs, TopicData};
use crate::json;
use crate::models::TimeZone;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::iter;

/// Converter for the user profile endpoint (`profile.json`), emitting one
/// time-zone record per fetch.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeZoneConverter;

impl EndpointConverter for TimeZoneConverter {
    fn records<'a>(
        &self,
        root: &'a Value,
        received_at: DateTime<Utc>,
    ) -> Box<dyn Iterator<Item = TopicData> + 'a> {
        let Some(user) = json::opt_object(root, "user") else {
            return Box::new(iter::empty());
        };

        let payload = TimeZone {
            time: epoch_secs(received_at),
            offset_from_utc_millis: json::opt_i64(user, "offsetFromUTCMillis"),
            timezone: json::opt_str(user, "timezone").map(ToOwned::to_owned),
        };
        Box::new(iter::once(TopicData {
            source_offset: received_at,
            topic: topics::TIME_ZONE.to_owned(),
            value: Box::new(payload),
        }))
    }
}
