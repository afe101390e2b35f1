// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::function_env::FunctionEnv;
use crate::models::response::LambdaResponse;
use crate::models::version::VersionBody;
use anyhow::Result;
use tracing::info;

/// Log the resolved version and answer `200 {"version": ...}`.
pub fn version_response(env: &FunctionEnv) -> Result<LambdaResponse> {
    info!("Lambda version: {}", env.version);

    LambdaResponse::json(
        200,
        &VersionBody {
            version: env.version.clone(),
        },
    )
}
