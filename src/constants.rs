// ABOUTME: Destination topic names and stream-offset constants for Fitbit record conversion
// ABOUTME: Groups the fixed topic set, the audit exclusion list, and the resumption offset key
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Topic and offset constants
//!
//! Topic names follow the `connect_fitbit_*` naming used by the ingestion
//! platform; records are routed to exactly one of these per candidate.

/// Destination topic names, one per record family.
pub mod topics {
    /// Per-sample intraday step counts.
    pub const INTRADAY_STEPS: &str = "connect_fitbit_intraday_steps";
    /// Per-sample intraday heart rate.
    pub const INTRADAY_HEART_RATE: &str = "connect_fitbit_intraday_heart_rate";
    /// Classic (asleep/restless/awake) sleep level entries.
    pub const SLEEP_CLASSIC: &str = "connect_fitbit_sleep_classic";
    /// Staged (wake/light/deep/rem) sleep level entries.
    pub const SLEEP_STAGES: &str = "connect_fitbit_sleep_stages";
    /// Profile time-zone snapshots.
    pub const TIME_ZONE: &str = "connect_fitbit_time_zone";
    /// Logged exercise summaries.
    pub const ACTIVITY_LOG: &str = "connect_fitbit_activity_log";
    /// Ingestion audit log records.
    pub const DATA_LOG: &str = "connect_data_log";
}

/// Key under which a record's resumption offset is published in its offset map.
pub const TIMESTAMP_OFFSET_KEY: &str = "timestamp";

/// Topics that never trigger an audit log record on their own.
///
/// Both are high-volume, low-information streams; auditing every batch that
/// contains only these would flood the audit topic.
pub const AUDIT_EXCLUDED_TOPICS: [&str; 2] = [topics::INTRADAY_STEPS, topics::TIME_ZONE];
