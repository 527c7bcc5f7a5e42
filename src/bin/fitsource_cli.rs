// ABOUTME: fitsource CLI - converts a saved Fitbit API response file into stream records
// ABOUTME: Prints the resulting batch as NDJSON for inspection and pipeline debugging
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Convert a saved intraday steps response
//! fitsource-cli --endpoint steps --user-id subject-1 --source-id wearable-1 steps.json
//!
//! # Apply a validity window while converting a sleep response
//! fitsource-cli --endpoint sleep --user-id subject-1 --source-id wearable-1 \
//!     --end-date 2022-06-01T00:00:00Z sleep.json
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use fitsource::{
    logging::LoggingConfig, ActivityLogConverter, EndpointConverter, FetchRequest,
    IntradayHeartRateConverter, IntradayStepsConverter, RecordConverter, SleepConverter,
    SourceRecord, TimeZoneConverter, User,
};
use http::HeaderMap;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fitsource-cli",
    about = "Convert a saved Fitbit API response into stream records",
    long_about = "Runs one payload file through the fitsource conversion pipeline and prints \
                  the resulting records as NDJSON, one record per line."
)]
struct Cli {
    /// Endpoint the payload was fetched from
    #[arg(long, value_enum)]
    endpoint: Endpoint,

    /// Platform subject identifier for the record key
    #[arg(long)]
    user_id: String,

    /// Device/source identifier for the record key
    #[arg(long)]
    source_id: String,

    /// Project identifier for the record key
    #[arg(long)]
    project_id: Option<String>,

    /// Validity window upper bound (RFC 3339); records at or past it are dropped
    #[arg(long)]
    end_date: Option<DateTime<Utc>>,

    /// Route name recorded in the source partition
    #[arg(long)]
    route: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Path to the saved response body
    payload: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Endpoint {
    /// Intraday step counts
    Steps,
    /// Intraday heart rate
    HeartRate,
    /// Sleep logs
    Sleep,
    /// Profile time zone
    TimeZone,
    /// Activity log list
    ActivityLog,
}

impl Endpoint {
    const fn route(self) -> &'static str {
        match self {
            Self::Steps => "intraday_steps",
            Self::HeartRate => "intraday_heart_rate",
            Self::Sleep => "sleep",
            Self::TimeZone => "time_zone",
            Self::ActivityLog => "activity_log",
        }
    }
}

fn convert_with<E: EndpointConverter>(
    endpoint: E,
    request: &FetchRequest,
    body: &[u8],
) -> Result<Vec<SourceRecord>> {
    let converter = RecordConverter::new(endpoint);
    converter
        .convert(request, &HeaderMap::new(), Some(body))
        .context("conversion failed")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let body = fs::read(&cli.payload)
        .with_context(|| format!("failed to read payload file {}", cli.payload.display()))?;

    let user = User {
        id: cli.user_id.clone(),
        version: None,
        external_user_id: cli.user_id.clone(),
        project_id: cli.project_id,
        user_id: cli.user_id,
        source_id: cli.source_id,
        end_date: cli.end_date,
    };
    let route = cli
        .route
        .unwrap_or_else(|| cli.endpoint.route().to_owned());
    let request = FetchRequest::new(user, route);

    let records = match cli.endpoint {
        Endpoint::Steps => convert_with(IntradayStepsConverter, &request, &body)?,
        Endpoint::HeartRate => convert_with(IntradayHeartRateConverter, &request, &body)?,
        Endpoint::Sleep => convert_with(SleepConverter, &request, &body)?,
        Endpoint::TimeZone => convert_with(TimeZoneConverter, &request, &body)?,
        Endpoint::ActivityLog => convert_with(ActivityLogConverter, &request, &body)?,
    };

    let mut stdout = String::new();
    for record in &records {
        let line = serde_json::to_string(record).context("failed to render record")?;
        stdout.push_str(&line);
        stdout.push('\n');
    }
    print!("{stdout}");
    tracing::info!(records = records.len(), "conversion complete");
    Ok(())
}
