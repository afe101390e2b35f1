// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::Context;
use clap::Parser;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;
use version_lambda::app::{function_handler, AppState, BUILD_VERSION};
use version_lambda::models::mode::FunctionMode;
use version_lambda::models::response::LambdaResponse;
use version_lambda::services::logging::init_logging;

/// Lambda function reporting its deployed version, or probing outbound connectivity.
#[derive(Parser, Debug)]
#[command(name = "version-lambda", version = BUILD_VERSION)]
struct Cli {
    /// Handler to serve
    #[arg(long, env = "FUNCTION_MODE", default_value_t = FunctionMode::Version)]
    mode: FunctionMode,

    /// Invoke once with the JSON event in FILE and print the response,
    /// instead of polling the Lambda Runtime API
    #[arg(long, value_name = "FILE")]
    event: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    let cli = Cli::parse();
    let state = AppState::new(cli.mode)?;

    info!("version-lambda v{} starting in {} mode", BUILD_VERSION, state.mode);

    match cli.event {
        Some(path) => {
            let response = invoke_local(&state, &path).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        None => {
            let state = &state;
            lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
                function_handler(state, event).await
            }))
            .await
        }
    }
}

/// Run the handler once on the event stored in `path`.
async fn invoke_local(state: &AppState, path: &Path) -> anyhow::Result<LambdaResponse> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read event file {}", path.display()))?;
    let event: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Event file {} is not valid JSON", path.display()))?;

    state.handle(&event).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn event_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    // FUNCTION_MODE is process-global, so all parsing cases share one test
    #[test]
    fn test_cli_mode_selection() {
        env::remove_var("FUNCTION_MODE");

        let cli = Cli::try_parse_from(["version-lambda"]).unwrap();
        assert_eq!(cli.mode, FunctionMode::Version);
        assert!(cli.event.is_none());

        let cli = Cli::try_parse_from(["version-lambda", "--mode", "connectivity"]).unwrap();
        assert_eq!(cli.mode, FunctionMode::Connectivity);

        let err = Cli::try_parse_from(["version-lambda", "--mode", "bogus"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        env::set_var("FUNCTION_MODE", "connectivity");
        let cli = Cli::try_parse_from(["version-lambda"]).unwrap();
        assert_eq!(cli.mode, FunctionMode::Connectivity);

        // An explicit flag wins over the environment
        let cli = Cli::try_parse_from(["version-lambda", "--mode", "version"]).unwrap();
        assert_eq!(cli.mode, FunctionMode::Version);

        env::remove_var("FUNCTION_MODE");
    }

    #[test]
    fn test_cli_event_path() {
        let cli = Cli::try_parse_from(["version-lambda", "--event", "event.json"]).unwrap();
        assert_eq!(cli.event, Some(PathBuf::from("event.json")));
    }

    #[tokio::test]
    async fn test_invoke_local_returns_version_response() {
        let state = AppState::new(FunctionMode::Version).unwrap();
        let file = event_file(r#"{ "source": "local" }"#);

        let response = invoke_local(&state, file.path()).await.unwrap();
        assert_eq!(response.status_code, 200);

        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert!(body["version"].is_string());
    }

    #[tokio::test]
    async fn test_invoke_local_rejects_non_json_event() {
        let state = AppState::new(FunctionMode::Version).unwrap();
        let file = event_file("this is not json");

        let err = invoke_local(&state, file.path()).await.unwrap_err();
        assert!(err.to_string().contains("is not valid JSON"), "got {}", err);
    }

    #[tokio::test]
    async fn test_invoke_local_reports_missing_file() {
        let state = AppState::new(FunctionMode::Version).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = invoke_local(&state, &path).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read event file"), "got {}", err);
    }
}
