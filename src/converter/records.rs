// ABOUTME: Candidate and output record types flowing through the conversion pipeline
// ABOUTME: TopicData is transient per invocation; SourceRecord is the unit handed to the stream client
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::constants::TIMESTAMP_OFFSET_KEY;
use crate::models::{ObservationKey, StreamValue};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Epoch seconds (fractional) for an instant, the time representation used
/// inside record payloads.
#[must_use]
pub fn epoch_secs(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / 1000.0
}

/// One candidate value for a topic, produced by an endpoint parser.
///
/// Lives only for the duration of one `convert` invocation; the pipeline
/// either drops it or turns it into a [`SourceRecord`].
#[derive(Debug)]
pub struct TopicData {
    /// Position of this candidate in the source stream.
    pub source_offset: DateTime<Utc>,
    /// Destination topic the candidate is routed to.
    pub topic: String,
    /// Typed payload behind the schema seam.
    pub value: Box<dyn StreamValue>,
}

/// One record ready for publication to the destination stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceRecord {
    /// Partition the record's offset is stored under (user + route).
    pub source_partition: BTreeMap<String, String>,
    /// Resumption offset in epoch milliseconds.
    pub source_offset: i64,
    /// Destination topic.
    pub topic: String,
    /// Subject key; identical for every record in a batch.
    pub key: ObservationKey,
    /// Wire representation of the payload.
    pub value: serde_json::Value,
    /// Name of the payload's shape descriptor.
    pub value_schema: &'static str,
}

impl SourceRecord {
    /// Offset map consumed by upstream resumption logic to know where to
    /// continue fetching after a restart.
    #[must_use]
    pub fn offset_map(&self) -> BTreeMap<&'static str, i64> {
        BTreeMap::from([(TIMESTAMP_OFFSET_KEY, self.source_offset)])
    }
}
