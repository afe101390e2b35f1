// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};
use std::env;

/// Version reported when `AWS_LAMBDA_FUNCTION_VERSION` is not set, matching
/// the qualifier Lambda uses for unpublished code.
pub const DEFAULT_VERSION: &str = "$LATEST";

/// Function metadata the Lambda service exposes through the process environment.
///
/// Read per invocation rather than cached at cold start, so a test or a local
/// `--event` run sees whatever the environment holds at call time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEnv {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_size: Option<String>,
}

impl FunctionEnv {
    /// Load from the process environment. A variable that is set keeps its
    /// value even when it is not valid UTF-8; invalid bytes become U+FFFD.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key).map(|v| v.to_string_lossy().into_owned()))
    }

    /// Load through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            version: lookup("AWS_LAMBDA_FUNCTION_VERSION")
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            function_name: lookup("AWS_LAMBDA_FUNCTION_NAME"),
            region: lookup("AWS_REGION"),
            memory_size: lookup("AWS_LAMBDA_FUNCTION_MEMORY_SIZE"),
        }
    }
}
