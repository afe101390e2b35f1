// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::function_env::FunctionEnv;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const TEST_NAME: &str = "VPC Internet Connectivity";

/// What the probe observed from the external API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeResult {
    pub url: String,
    pub status_code: u16,
    /// Parsed JSON payload, or the raw text when it was not JSON
    pub response: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalApi {
    pub status: String,
    pub data: ProbeResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_size: Option<String>,
}

impl From<&FunctionEnv> for EnvironmentInfo {
    fn from(env: &FunctionEnv) -> Self {
        Self {
            region: env.region.clone(),
            function_name: env.function_name.clone(),
            memory_size: env.memory_size.clone(),
        }
    }
}

/// Body of the 200 response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivityPassed {
    pub message: String,
    pub test: String,
    pub status: String,
    pub lambda_version: String,
    pub execution_time: String,
    #[serde(rename = "externalAPI")]
    pub external_api: ExternalApi,
    pub timestamp: String,
    pub environment: EnvironmentInfo,
}

/// Body of the 500 response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivityFailed {
    pub message: String,
    pub test: String,
    pub status: String,
    pub lambda_version: String,
    pub error: String,
    pub timestamp: String,
}
