// ABOUTME: Per-endpoint parser trait and the shipped Fitbit resource converters
// ABOUTME: One implementation per API resource; the caller selects one statically per fetch
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Endpoint converters
//!
//! Each Fitbit resource family gets one [`EndpointConverter`]: it knows the
//! shape of that endpoint's JSON and turns a decoded document into a lazy
//! sequence of topic-tagged candidates. The scheduler already knows which
//! resource it fetched, so converters are selected statically; there is no
//! dispatch registry.

/// Exercise summary parsing.
pub mod activity_log;
/// Intraday heart-rate parsing.
pub mod heart_rate;
/// Sleep level parsing.
pub mod sleep;
/// Intraday step-count parsing.
pub mod steps;
/// Profile time-zone parsing.
pub mod time_zone;

pub use activity_log::ActivityLogConverter;
pub use heart_rate::IntradayHeartRateConverter;
pub use sleep::SleepConverter;
pub use steps::IntradayStepsConverter;
pub use time_zone::TimeZoneConverter;

use crate::converter::records::TopicData;
use crate::json;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

/// Parser for one API resource type.
///
/// Implementations walk the decoded document and yield candidates lazily;
/// malformed entries are skipped, never errors. An empty document yields an
/// empty sequence.
pub trait EndpointConverter {
    /// Parse `root` into topic-tagged candidates, stamping each payload with
    /// the batch receipt instant.
    fn records<'a>(
        &self,
        root: &'a Value,
        received_at: DateTime<Utc>,
    ) -> Box<dyn Iterator<Item = TopicData> + 'a>;
}

/// Date carried by an intraday response's daily summary section, e.g. the
/// `dateTime` of the first `activities-steps` entry. Intraday sample times
/// are clock times anchored against this date.
pub(crate) fn summary_date(root: &Value, summary_field: &str) -> Option<NaiveDate> {
    let summary = json::opt_array(root, summary_field)?;
    let date = json::opt_str(summary.first()?, "dateTime")?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
