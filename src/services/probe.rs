// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Outbound request used to prove the function can reach the internet.

use crate::models::connectivity::ProbeResult;
use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::env::{self, VarError};
use std::time::Duration;
use url::Url;

pub const DEFAULT_PROBE_URL: &str = "https://httpbin.org/json";
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 5000;

/// Where and how long to probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub url: Url,
    pub timeout: Duration,
}

impl ProbeConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut vars = HashMap::new();
        for key in ["PROBE_URL", "PROBE_TIMEOUT_MS"] {
            match env::var(key) {
                Ok(value) => {
                    vars.insert(key, value);
                }
                Err(VarError::NotPresent) => {}
                Err(VarError::NotUnicode(raw)) => {
                    return Err(anyhow!("{} is not valid UTF-8: {:?}", key, raw));
                }
            }
        }
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("PROBE_URL").unwrap_or_else(|| DEFAULT_PROBE_URL.to_string());
        let url = Url::parse(&raw_url)
            .with_context(|| format!("PROBE_URL is not a valid URL: {}", raw_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(anyhow!(
                "PROBE_URL must use http or https, got: {}",
                url.scheme()
            ));
        }

        let timeout_ms = match lookup("PROBE_TIMEOUT_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("PROBE_TIMEOUT_MS must be a number, got: {}", raw))?,
            None => DEFAULT_PROBE_TIMEOUT_MS,
        };
        if timeout_ms == 0 {
            return Err(anyhow!("PROBE_TIMEOUT_MS must be greater than zero"));
        }

        Ok(Self {
            url,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

/// Why the probe could not produce a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    Timeout,
    Request(String),
}

impl std::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeError::Timeout => write!(f, "External API request timed out"),
            ProbeError::Request(cause) => write!(f, "External API request failed: {}", cause),
        }
    }
}

impl std::error::Error for ProbeError {}

impl From<reqwest::Error> for ProbeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProbeError::Timeout
        } else {
            ProbeError::Request(e.to_string())
        }
    }
}

/// Client for the external API. Built once per cold start and reused across
/// invocations so warm calls keep their connection pool.
#[derive(Debug, Clone)]
pub struct ProbeClient {
    http: reqwest::Client,
    config: ProbeConfig,
}

impl ProbeClient {
    pub fn new(config: ProbeConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http, config })
    }

    /// GET the configured URL. Any HTTP status counts as reachable; only
    /// transport failures and timeouts are errors.
    pub async fn probe(&self) -> Result<ProbeResult, ProbeError> {
        let url = self.config.url.to_string();
        let response = self.http.get(&url).send().await?;
        let status_code = response.status().as_u16();
        let text = response.text().await?;

        Ok(interpret_payload(url, status_code, text))
    }
}

/// Keep the payload as JSON when it parses, otherwise keep the raw text and
/// record the parse error alongside it.
pub fn interpret_payload(url: String, status_code: u16, text: String) -> ProbeResult {
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => ProbeResult {
            url,
            status_code,
            response: json,
            parse_error: None,
        },
        Err(e) => ProbeResult {
            url,
            status_code,
            response: Value::String(text),
            parse_error: Some(e.to_string()),
        },
    }
}
