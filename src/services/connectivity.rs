// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Connectivity check: query an external API and report whether the function
//! reached it. Probe failures become a 500 response, not a handler error.

use crate::models::connectivity::{
    ConnectivityFailed, ConnectivityPassed, EnvironmentInfo, ExternalApi, ProbeResult, TEST_NAME,
};
use crate::models::function_env::FunctionEnv;
use crate::models::response::LambdaResponse;
use crate::services::probe::{ProbeClient, ProbeError};
use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{error, info};

const PASSED_MESSAGE: &str =
    "VPC Connectivity Test: Lambda successfully accessed external API from VPC";
const FAILED_MESSAGE: &str = "VPC Connectivity Test: Failed to access external API";

/// Run the probe and build the response for it.
pub async fn run_connectivity_check(
    client: &ProbeClient,
    env: &FunctionEnv,
    event: &Value,
) -> Result<LambdaResponse> {
    info!("VPC Connectivity Test - Lambda version: {}", env.version);
    info!("Event: {}", serde_json::to_string_pretty(event)?);

    let started = Instant::now();
    let outcome = client.probe().await;

    let response = match outcome {
        Ok(result) => passed_response(env, result, started.elapsed(), Utc::now())?,
        Err(e) => {
            error!("Error: {}", e);
            failed_response(env, &e, Utc::now())?
        }
    };

    info!("Response: {}", serde_json::to_string_pretty(&response)?);
    Ok(response)
}

pub fn passed_response(
    env: &FunctionEnv,
    result: ProbeResult,
    elapsed: Duration,
    now: DateTime<Utc>,
) -> Result<LambdaResponse> {
    let execution_time = format!("{}ms", elapsed.as_millis());

    let body = ConnectivityPassed {
        message: PASSED_MESSAGE.to_string(),
        test: TEST_NAME.to_string(),
        status: "PASSED".to_string(),
        lambda_version: env.version.clone(),
        execution_time: execution_time.clone(),
        external_api: ExternalApi {
            status: "success".to_string(),
            data: result,
        },
        timestamp: format_timestamp(now),
        environment: EnvironmentInfo::from(env),
    };

    Ok(LambdaResponse::json(200, &body)?
        .with_header("Content-Type", "application/json")
        .with_header("X-Lambda-Version", env.version.as_str())
        .with_header("X-Execution-Time", execution_time))
}

pub fn failed_response(
    env: &FunctionEnv,
    err: &ProbeError,
    now: DateTime<Utc>,
) -> Result<LambdaResponse> {
    let body = ConnectivityFailed {
        message: FAILED_MESSAGE.to_string(),
        test: TEST_NAME.to_string(),
        status: "FAILED".to_string(),
        lambda_version: env.version.clone(),
        error: err.to_string(),
        timestamp: format_timestamp(now),
    };

    Ok(LambdaResponse::json(500, &body)?
        .with_header("Content-Type", "application/json")
        .with_header("X-Lambda-Version", env.version.as_str()))
}

/// ISO 8601 in UTC with millisecond precision, e.g. `2026-10-16T08:30:00.125Z`
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
