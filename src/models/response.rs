// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// HTTP-style result returned to the Lambda service (API Gateway proxy shape).
///
/// `headers` is left out of the JSON entirely when empty, so the plain version
/// response serializes as `{"statusCode":200,"body":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaResponse {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl LambdaResponse {
    /// Build a response whose body is `payload` encoded as JSON text.
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> Result<Self> {
        Ok(Self {
            status_code,
            headers: BTreeMap::new(),
            body: serde_json::to_string(payload)?,
        })
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_string(), value.into());
        self
    }
}
