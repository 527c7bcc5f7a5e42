// ABOUTME: Payload-to-record conversion core: record types, interval metadata, pipeline
// ABOUTME: Everything between a decoded API response and the batch handed to the stream client
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Conversion core
//!
//! [`RecordConverter`] is the sole public entry point: it decodes one raw
//! response body, fans it out through an endpoint parser, filters by the
//! subject's validity window, wraps the survivors with the subject key and a
//! resumable offset, and conditionally appends one audit record.

/// Dataset interval normalization.
pub mod interval;
/// The conversion pipeline itself.
pub mod pipeline;
/// Candidate and output record types.
pub mod records;

pub use interval::dataset_interval_secs;
pub use pipeline::RecordConverter;
pub use records::{epoch_secs, SourceRecord, TopicData};
