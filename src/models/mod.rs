// ABOUTME: Typed payload models published to destination topics, plus the schema seam
// ABOUTME: Defines ObservationKey, the StreamValue trait, and re-exports the record payloads
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Record payload models
//!
//! Every value published to a destination topic is one of the typed structs
//! in this module tree. They serialize with the field names the downstream
//! schema registry expects (`camelCase`), and each one implements
//! [`StreamValue`] so the pipeline can treat them uniformly: read the
//! embedded sample time for validity filtering, and convert to the wire
//! representation for publication.

/// Ingestion audit log payload.
pub mod audit;
/// Logged exercise summary payload.
pub mod activity;
/// Intraday sample payloads (steps, heart rate).
pub mod intraday;
/// Sleep level payloads.
pub mod sleep;
/// Profile time-zone payload.
pub mod time_zone;

pub use activity::ActivityLog;
pub use audit::{DataGrouping, DataLog};
pub use intraday::{IntradayHeartRate, IntradaySteps};
pub use sleep::{SleepLevel, SleepLevelClass, SleepStage};
pub use time_zone::TimeZone;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of the subject a record belongs to, attached to every record in
/// a batch. Constant for the whole `convert` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationKey {
    /// Project the subject is enrolled in, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Platform-issued subject identifier.
    pub user_id: String,
    /// Identifier of the device/source the data came from.
    pub source_id: String,
}

/// Seam between typed payloads and the structured-value subsystem that
/// publishes them.
///
/// `time` exposes the payload's embedded sample time in epoch seconds
/// (possibly fractional) for the validity filter; payloads without a sample
/// time return `None` and are never filtered. `wire_value` produces the
/// representation actually handed to the stream client.
pub trait StreamValue: fmt::Debug + Send + Sync {
    /// Name of the shape descriptor registered for this payload.
    fn schema_name(&self) -> &'static str;

    /// Embedded sample time in epoch seconds, if the payload carries one.
    fn time(&self) -> Option<f64>;

    /// Convert the payload to its wire representation.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` when the payload cannot be represented
    /// as a JSON value.
    fn wire_value(&self) -> Result<serde_json::Value, serde_json::Error>;
}
