// ABOUTME: Parses sleep log responses into per-level-entry candidates
// ABOUTME: Routes classic levels and sleep stages to separate topics based on the level vocabulary
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::EndpointConverter;
use crate::constants::topics;
use crate::converter::records::{epoch_secs, TopicData};
use crate::json;
use crate::models::{SleepLevel, SleepLevelClass, SleepStage};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;
use std::iter;

/// Converter for the sleep log endpoint (`sleep/date/....json`).
///
/// Each sleep session carries a `levels.data` array of level entries; classic
/// sessions use a three-level vocabulary, staged sessions a four-level one.
/// Unrecognized level labels keep flowing as `Unknown`, routed by the
/// session's declared type.
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepConverter;

impl EndpointConverter for SleepConverter {
    fn records<'a>(
        &self,
        root: &'a Value,
        received_at: DateTime<Utc>,
    ) -> Box<dyn Iterator<Item = TopicData> + 'a> {
        let Some(sessions) = json::opt_array(root, "sleep") else {
            return Box::new(iter::empty());
        };

        let time_received = epoch_secs(received_at);
        Box::new(sessions.iter().flat_map(move |session| {
            let declared_classic = json::opt_str(session, "type") == Some("classic");
            let entries = json::opt_object(session, "levels")
                .and_then(|levels| json::opt_array(levels, "data"))
                .unwrap_or_default();
            entries.iter().filter_map(move |entry| {
                let start = NaiveDateTime::parse_from_str(
                    json::opt_str(entry, "dateTime")?,
                    "%Y-%m-%dT%H:%M:%S%.f",
                )
                .ok()?;
                let level = SleepLevel::from_label(json::opt_str(entry, "level")?);
                let duration = json::opt_i64(entry, "seconds")?;

                let classic = match level.class() {
                    Some(SleepLevelClass::Classic) => true,
                    Some(SleepLevelClass::Stages) => false,
                    None => declared_classic,
                };
                let topic = if classic {
                    topics::SLEEP_CLASSIC
                } else {
                    topics::SLEEP_STAGES
                };

                let stamp = start.and_utc();
                Some(TopicData {
                    source_offset: stamp,
                    topic: topic.to_owned(),
                    value: Box::new(SleepStage {
                        time: epoch_secs(stamp),
                        time_received,
                        duration,
                        level,
                    }),
                })
            })
        }))
    }
}
