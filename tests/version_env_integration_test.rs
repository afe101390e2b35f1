// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde_json::{json, Value};
use std::env;
use version_lambda::app::AppState;
use version_lambda::models::mode::FunctionMode;

// Mutates the process environment, so every case lives in one test to keep
// them from racing each other.
#[tokio::test]
async fn test_version_follows_process_environment() {
    let state = AppState::new(FunctionMode::Version).unwrap();

    env::remove_var("AWS_LAMBDA_FUNCTION_VERSION");
    let response = state.handle(&json!({})).await.unwrap();
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, r#"{"version":"$LATEST"}"#);

    for version in ["1", "17", "$LATEST", "blue-green"] {
        env::set_var("AWS_LAMBDA_FUNCTION_VERSION", version);
        let response = state.handle(&json!({})).await.unwrap();
        assert_eq!(response.status_code, 200);

        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body, json!({ "version": version }));
    }

    // Set but not UTF-8: still reported, never replaced by the default
    #[cfg(unix)]
    {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        env::set_var("AWS_LAMBDA_FUNCTION_VERSION", OsStr::from_bytes(b"v\xff1"));
        let response = state.handle(&json!({})).await.unwrap();
        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body, json!({ "version": "v\u{FFFD}1" }));
    }

    env::remove_var("AWS_LAMBDA_FUNCTION_VERSION");
    let response = state.handle(&json!(null)).await.unwrap();
    assert_eq!(response.body, r#"{"version":"$LATEST"}"#);
}
