// ABOUTME: The conversion pipeline: decode, parse, filter, wrap, and audit one payload
// ABOUTME: Pure synchronous computation; the audit step is the only recoverable failure boundary
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Conversion pipeline
//!
//! One [`RecordConverter::convert`] call handles exactly one response body
//! for exactly one subject. Decode failures abort the call with no partial
//! batch; a failure while building the audit record is logged and the batch
//! is returned without it.

use crate::constants::{topics, AUDIT_EXCLUDED_TOPICS};
use crate::converter::records::{epoch_secs, SourceRecord, TopicData};
use crate::endpoints::EndpointConverter;
use crate::errors::{ConvertError, ConvertResult};
use crate::models::{DataGrouping, DataLog, ObservationKey, StreamValue};
use crate::request::FetchRequest;
use chrono::{DateTime, Utc};
use http::HeaderMap;
use serde_json::Value;
use tracing::{debug, warn};

/// Converts raw API payloads into publishable record batches through one
/// endpoint parser.
#[derive(Debug, Clone)]
pub struct RecordConverter<E> {
    endpoint: E,
}

impl<E: EndpointConverter> RecordConverter<E> {
    /// Build a converter around the parser for one API resource type.
    #[must_use]
    pub const fn new(endpoint: E) -> Self {
        Self { endpoint }
    }

    /// Convert one fetched payload into an ordered record batch, stamping it
    /// with the current wall clock as receipt time.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::EmptyBody`] when `body` is `None`,
    /// [`ConvertError::MalformedBody`] when it is not valid JSON, and
    /// [`ConvertError::UnserializableValue`] when a data record's payload
    /// cannot be converted for the wire.
    pub fn convert(
        &self,
        request: &FetchRequest,
        headers: &HeaderMap,
        body: Option<&[u8]>,
    ) -> ConvertResult<Vec<SourceRecord>> {
        self.convert_at(request, headers, body, Utc::now())
    }

    /// [`convert`](Self::convert) with an explicit receipt instant.
    ///
    /// The receipt instant is the only non-deterministic input of a
    /// conversion; injecting it makes the call fully reproducible.
    ///
    /// # Errors
    ///
    /// Same as [`convert`](Self::convert).
    pub fn convert_at(
        &self,
        request: &FetchRequest,
        _headers: &HeaderMap,
        body: Option<&[u8]>,
        received_at: DateTime<Utc>,
    ) -> ConvertResult<Vec<SourceRecord>> {
        let body = body.ok_or(ConvertError::EmptyBody)?;
        let root: Value = serde_json::from_slice(body).map_err(ConvertError::MalformedBody)?;

        let user = request.user();
        let key = user.observation_key();
        let end_date = user.end_date;

        // Audit template for the whole batch; whether it ships is decided
        // after the data records are known.
        let audit_log = DataLog {
            time: epoch_secs(received_at),
            data_grouping_type: DataGrouping::PassiveFitbit,
        };

        let mut records = Vec::new();
        for candidate in self.endpoint.records(&root, received_at) {
            if !in_validity_window(&candidate, end_date) {
                debug!(topic = %candidate.topic, "candidate past validity window, dropped");
                continue;
            }
            let wire = candidate
                .value
                .wire_value()
                .map_err(ConvertError::UnserializableValue)?;
            let TopicData {
                source_offset,
                topic,
                value,
            } = candidate;
            records.push(SourceRecord {
                source_partition: request.source_partition(),
                source_offset: source_offset.timestamp_millis(),
                topic,
                key: key.clone(),
                value: wire,
                value_schema: value.schema_name(),
            });
        }

        if should_audit(records.iter().map(|record| record.topic.as_str())) {
            // A failed audit record must never discard the computed batch.
            match audit_record(&audit_log, request, &key, received_at) {
                Ok(record) => records.push(record),
                Err(err) => warn!(error = %err, "failed to append ingestion log record"),
            }
        }

        Ok(records)
    }
}

/// Keep a candidate unless the subject has a validity window and the
/// candidate's embedded sample time is at or past its upper bound.
/// Candidates without a sample time are never filtered.
fn in_validity_window(candidate: &TopicData, end_date: Option<DateTime<Utc>>) -> bool {
    let Some(end) = end_date else {
        return true;
    };
    candidate
        .value
        .time()
        .is_none_or(|secs| ((secs * 1000.0) as i64) < end.timestamp_millis())
}

/// Audit a batch iff it produced at least one topic outside the high-volume
/// exclusion set. An empty batch is never audited.
fn should_audit<'a, I>(produced_topics: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    produced_topics
        .into_iter()
        .any(|topic| !AUDIT_EXCLUDED_TOPICS.contains(&topic))
}

/// Wrap the batch's audit template into a record. Its offset is the receipt
/// instant, independent of candidate offsets.
fn audit_record(
    log: &DataLog,
    request: &FetchRequest,
    key: &ObservationKey,
    received_at: DateTime<Utc>,
) -> ConvertResult<SourceRecord> {
    let wire = log
        .wire_value()
        .map_err(ConvertError::UnserializableValue)?;
    Ok(SourceRecord {
        source_partition: request.source_partition(),
        source_offset: received_at.timestamp_millis(),
        topic: topics::DATA_LOG.to_owned(),
        key: key.clone(),
        value: wire,
        value_schema: log.schema_name(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::TimeZone as _;

    fn candidate(topic: &str, time: f64) -> TopicData {
        TopicData {
            source_offset: Utc.timestamp_opt(time as i64, 0).unwrap(),
            topic: topic.to_owned(),
            value: Box::new(DataLog {
                time,
                data_grouping_type: DataGrouping::PassiveFitbit,
            }),
        }
    }

    #[test]
    fn no_window_keeps_everything() {
        let c = candidate(topics::INTRADAY_STEPS, 1e12);
        assert!(in_validity_window(&c, None));
    }

    #[test]
    fn window_bound_is_exclusive() {
        let end = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        let before = candidate(topics::INTRADAY_STEPS, epoch_secs(end) - 0.001);
        let at_bound = candidate(topics::INTRADAY_STEPS, epoch_secs(end));
        assert!(in_validity_window(&before, Some(end)));
        assert!(!in_validity_window(&at_bound, Some(end)));
    }

    #[test]
    fn audit_requires_a_non_excluded_topic() {
        assert!(!should_audit(std::iter::empty::<&str>()));
        assert!(!should_audit([topics::INTRADAY_STEPS, topics::TIME_ZONE]));
        assert!(should_audit([
            topics::INTRADAY_STEPS,
            topics::INTRADAY_HEART_RATE
        ]));
    }
}
