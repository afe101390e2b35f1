// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Handler state and dispatch from a Lambda event to the selected function.
//!
//! This module is `pub` so that integration tests can drive a handler directly
//! without starting the Lambda runtime loop.

use crate::models::function_env::FunctionEnv;
use crate::models::mode::FunctionMode;
use crate::models::response::LambdaResponse;
use crate::services::connectivity::run_connectivity_check;
use crate::services::probe::{ProbeClient, ProbeConfig};
use crate::services::version::version_response;
use anyhow::Result;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Build version extracted from `Cargo.toml` at compile time.
/// The patch segment can be overridden via `VERSION_LAMBDA_PATCH_VERSION` (see `build.rs`).
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// State built once per cold start and shared by every invocation.
#[derive(Clone)]
pub struct AppState {
    pub mode: FunctionMode,
    /// Present only when `mode` makes outbound requests
    pub probe_client: Option<Arc<ProbeClient>>,
}

impl AppState {
    pub fn new(mode: FunctionMode) -> Result<Self> {
        let probe_client = if mode.needs_probe() {
            Some(Arc::new(ProbeClient::new(ProbeConfig::from_env()?)?))
        } else {
            None
        };
        Ok(Self { mode, probe_client })
    }

    pub fn with_probe(probe_client: ProbeClient) -> Self {
        Self {
            mode: FunctionMode::Connectivity,
            probe_client: Some(Arc::new(probe_client)),
        }
    }

    /// Handle one event. The environment is read here, per invocation.
    pub async fn handle(&self, event: &Value) -> Result<LambdaResponse> {
        let env = FunctionEnv::from_env();
        self.handle_with_env(&env, event).await
    }

    pub async fn handle_with_env(
        &self,
        env: &FunctionEnv,
        event: &Value,
    ) -> Result<LambdaResponse> {
        match (self.mode, &self.probe_client) {
            (FunctionMode::Version, _) => version_response(env),
            (FunctionMode::Connectivity, Some(client)) => {
                run_connectivity_check(client, env, event).await
            }
            (FunctionMode::Connectivity, None) => Err(anyhow::anyhow!(
                "connectivity mode requires a probe client"
            )),
        }
    }
}

/// Entry point registered with `lambda_runtime::service_fn`.
pub async fn function_handler(
    state: &AppState,
    event: LambdaEvent<Value>,
) -> Result<LambdaResponse, Error> {
    let (payload, context) = event.into_parts();
    debug!(request_id = %context.request_id, mode = %state.mode, "invocation received");

    Ok(state.handle(&payload).await?)
}
