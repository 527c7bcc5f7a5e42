// ABOUTME: Main library entry point for the fitsource conversion core
// ABOUTME: Converts raw Fitbit API payloads into topic-addressed records for stream publication
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # fitsource
//!
//! Converts raw JSON payloads fetched from the Fitbit web API into typed,
//! topic-addressed records suitable for publication into a durable event
//! stream. The core is the conversion pipeline: decode one response body,
//! fan it out through a per-endpoint parser, filter records against the
//! subject's validity window, attach the subject key and a resumable offset
//! to each survivor, and conditionally append one audit record.
//!
//! Transport, scheduling, credential handling, and the stream client itself
//! are external collaborators; each `convert` call is a pure synchronous
//! computation over inputs that were already fetched.
//!
//! ## Quick start
//!
//! ```
//! use fitsource::{
//!     FetchRequest, IntradayStepsConverter, RecordConverter, User,
//! };
//! use http::HeaderMap;
//!
//! let user = User {
//!     id: "registration-1".into(),
//!     version: None,
//!     external_user_id: "FB123".into(),
//!     project_id: Some("study".into()),
//!     user_id: "subject-1".into(),
//!     source_id: "wearable-1".into(),
//!     end_date: None,
//! };
//! let request = FetchRequest::new(user, "intraday_steps");
//! let converter = RecordConverter::new(IntradayStepsConverter);
//!
//! let body = br#"{
//!     "activities-steps": [{"dateTime": "2022-01-01", "value": "100"}],
//!     "activities-steps-intraday": {
//!         "datasetType": "minute",
//!         "datasetInterval": 1,
//!         "dataset": [{"time": "08:00:00", "value": 100}]
//!     }
//! }"#;
//! let records = converter
//!     .convert(&request, &HeaderMap::new(), Some(body))
//!     .unwrap();
//! assert_eq!(records.len(), 1);
//! ```

/// Topic names, the audit exclusion set, and offset constants.
pub mod constants;
/// The conversion pipeline and its record types.
pub mod converter;
/// Per-endpoint parsers for the shipped Fitbit resources.
pub mod endpoints;
/// Conversion error taxonomy.
pub mod errors;
/// Safe field extractors over semi-structured documents.
pub mod json;
/// Structured logging setup for embedding services and the CLI.
pub mod logging;
/// Typed record payloads and the schema seam.
pub mod models;
/// Fetch request context.
pub mod request;
/// Subject identity and per-subject policy.
pub mod user;

pub use converter::{RecordConverter, SourceRecord, TopicData};
pub use endpoints::{
    ActivityLogConverter, EndpointConverter, IntradayHeartRateConverter, IntradayStepsConverter,
    SleepConverter, TimeZoneConverter,
};
pub use errors::{ConvertError, ConvertResult};
pub use models::{ObservationKey, StreamValue};
pub use request::FetchRequest;
pub use user::User;
