// ABOUTME: Subject identity and per-subject conversion policy owned by the caller
// ABOUTME: Supplies the observation key and the optional validity-window upper bound
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Subject (user) model
//!
//! The scheduler that decides which user and window to fetch owns these
//! records; the pipeline only reads them.

use crate::models::ObservationKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The end user a batch of records belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable service identifier for this user registration.
    pub id: String,
    /// Version tag of the registration; bumped when credentials are replaced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Identifier of the user on the Fitbit side.
    pub external_user_id: String,
    /// Project the user is enrolled in, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Platform subject identifier, published in every record key.
    pub user_id: String,
    /// Device/source identifier, published in every record key.
    pub source_id: String,
    /// Upper bound of the validity window. Records with a sample time at or
    /// past this instant are dropped; `None` disables filtering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl User {
    /// Registration id qualified with its version, used as the resumption
    /// partition so a re-registered user restarts from scratch.
    #[must_use]
    pub fn versioned_id(&self) -> String {
        self.version
            .as_ref()
            .map_or_else(|| self.id.clone(), |v| format!("{id}#{v}", id = self.id))
    }

    /// Key attached to every record produced for this user.
    #[must_use]
    pub fn observation_key(&self) -> ObservationKey {
        ObservationKey {
            project_id: self.project_id.clone(),
            user_id: self.user_id.clone(),
            source_id: self.source_id.clone(),
        }
    }
}
