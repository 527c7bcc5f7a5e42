// ABOUTME: Parses intraday heart-rate responses into per-sample candidates
// ABOUTME: Same dataset shape as intraday steps with beats-per-minute sample values
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{summary_date, EndpointConverter};
use crate::constants::topics;
use crate::converter::dataset_interval_secs;
use crate::converter::records::{epoch_secs, TopicData};
use crate::json;
use crate::models::IntradayHeartRate;
use chrono::{DateTime, NaiveTime, Utc};
use serde_json::Value;
use std::iter;

const DEFAULT_INTERVAL_SECS: i64 = 60;

/// Converter for the intraday heart-rate endpoint
/// (`activities/heart/date/.../1d/1min.json`).
#[derive(Debug, Default, Clone, Copy)]
pub struct IntradayHeartRateConverter;

impl EndpointConverter for IntradayHeartRateConverter {
    fn records<'a>(
        &self,
        root: &'a Value,
        received_at: DateTime<Utc>,
    ) -> Box<dyn Iterator<Item = TopicData> + 'a> {
        let parsed = json::opt_object(root, "activities-heart-intraday").and_then(|intraday| {
            let dataset = json::opt_array(intraday, "dataset")?;
            let date = summary_date(root, "activities-heart")?;
            let interval = dataset_interval_secs(intraday, DEFAULT_INTERVAL_SECS);
            Some((dataset, date, interval))
        });
        let Some((dataset, date, interval)) = parsed else {
            return Box::new(iter::empty());
        };

        let time_received = epoch_secs(received_at);
        Box::new(dataset.iter().filter_map(move |sample| {
            let clock = NaiveTime::parse_from_str(json::opt_str(sample, "time")?, "%H:%M:%S").ok()?;
            let heart_rate = json::opt_i64(sample, "value")?;
            let stamp = date.and_time(clock).and_utc();
            Some(TopicData {
                source_offset: stamp,
                topic: topics::INTRADAY_HEART_RATE.to_owned(),
                value: Box::new(IntradayHeartRate {
                    time: epoch_secs(stamp),
                    time_received,
                    interval,
                    heart_rate,
                }),
            })
        }))
    }
}
