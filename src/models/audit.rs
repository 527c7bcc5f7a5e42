// ABOUTME: Ingestion audit log payload emitted once per substantive batch
// ABOUTME: Carries the batch receipt time and a fixed passive-collection grouping tag
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::StreamValue;
use serde::{Deserialize, Serialize};

/// Classification of how a batch of data was collected.
#[non_exhaustive]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataGrouping {
    /// Passively collected Fitbit data, the only grouping this connector emits.
    #[serde(rename = "PASSIVE_FITBIT")]
    PassiveFitbit,
}

/// Summary record marking that an ingestion batch occurred.
///
/// Synthesized once per `convert` invocation and appended to the batch when
/// the audit decision signals inclusion. Its `time` is the batch receipt
/// instant, not a sample time, and its offset is never compared against
/// candidate offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLog {
    /// Batch receipt time in epoch seconds.
    pub time: f64,
    /// How the batch was collected.
    pub data_grouping_type: DataGrouping,
}

impl StreamValue for DataLog {
    fn schema_name(&self) -> &'static str {
        "ConnectDataLog"
    }

    fn time(&self) -> Option<f64> {
        Some(self.time)
    }

    fn wire_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
