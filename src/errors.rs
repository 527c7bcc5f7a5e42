// ABOUTME: Error taxonomy for the payload-to-record conversion pipeline
// ABOUTME: Distinguishes fatal decode failures from recoverable serialization failures
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Conversion error types
//!
//! The taxonomy is deliberately small. A `convert` call either fails fast
//! while decoding its input, or it succeeds; everything below field level
//! degrades to absence instead of erroring (see the `json` module).

use thiserror::Error;

/// Errors raised by [`RecordConverter::convert`](crate::converter::RecordConverter::convert).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The fetch produced no response body at all.
    #[error("request returned no response body")]
    EmptyBody,

    /// The response body is not a well-formed JSON document.
    #[error("failed to decode response body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    /// A typed payload could not be converted to its wire representation.
    ///
    /// Fatal when raised for a data record; recovered (batch returned without
    /// the audit record, warning logged) when raised on the audit path.
    #[error("failed to serialize record value: {0}")]
    UnserializableValue(#[source] serde_json::Error),
}

/// Result alias used throughout the conversion pipeline.
pub type ConvertResult<T> = Result<T, ConvertError>;
