// ABOUTME: Parses intraday step-count responses into per-sample candidates
// ABOUTME: Anchors clock-time samples on the daily summary date; cadence from the dataset interval
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{summary_date, EndpointConverter};
use crate::constants::topics;
use crate::converter::dataset_interval_secs;
use crate::converter::records::{epoch_secs, TopicData};
use crate::json;
use crate::models::IntradaySteps;
use chrono::{DateTime, NaiveTime, Utc};
use serde_json::Value;
use std::iter;

const DEFAULT_INTERVAL_SECS: i64 = 60;

/// Converter for the intraday steps endpoint
/// (`activities/steps/date/.../1d/1min.json`).
#[derive(Debug, Default, Clone, Copy)]
pub struct IntradayStepsConverter;

impl EndpointConverter for IntradayStepsConverter {
    fn records<'a>(
        &self,
        root: &'a Value,
        received_at: DateTime<Utc>,
    ) -> Box<dyn Iterator<Item = TopicData> + 'a> {
        let parsed = json::opt_object(root, "activities-steps-intraday").and_then(|intraday| {
            let dataset = json::opt_array(intraday, "dataset")?;
            let date = summary_date(root, "activities-steps")?;
            let interval = dataset_interval_secs(intraday, DEFAULT_INTERVAL_SECS);
            Some((dataset, date, interval))
        });
        let Some((dataset, date, interval)) = parsed else {
            return Box::new(iter::empty());
        };

        let time_received = epoch_secs(received_at);
        Box::new(dataset.iter().filter_map(move |sample| {
            let clock = NaiveTime::parse_from_str(json::opt_str(sample, "time")?, "%H:%M:%S").ok()?;
            let steps = json::opt_i64(sample, "value")?;
            let stamp = date.and_time(clock).and_utc();
            Some(TopicData {
                source_offset: stamp,
                topic: topics::INTRADAY_STEPS.to_owned(),
                value: Box::new(IntradaySteps {
                    time: epoch_secs(stamp),
                    time_received,
                    interval,
                    steps,
                }),
            })
        }))
    }
}
