// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Which handler this binary serves.
///
/// One package ships both functions; the deployment picks one with
/// `FUNCTION_MODE` (or `--mode` when invoked locally).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FunctionMode {
    /// Report the deployed function version
    #[default]
    Version,
    /// Query an external API to prove outbound internet access
    Connectivity,
}

impl FunctionMode {
    pub fn parse(mode: &str) -> Result<Self> {
        match mode {
            "version" => Ok(FunctionMode::Version),
            "connectivity" => Ok(FunctionMode::Connectivity),
            _ => Err(anyhow!(
                "FUNCTION_MODE must be 'version' or 'connectivity', got: {}",
                mode
            )),
        }
    }

    /// Check if this mode makes outbound requests
    pub fn needs_probe(&self) -> bool {
        matches!(self, FunctionMode::Connectivity)
    }
}

impl FromStr for FunctionMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for FunctionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FunctionMode::Version => write!(f, "version"),
            FunctionMode::Connectivity => write!(f, "connectivity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        assert_eq!(FunctionMode::parse("version").unwrap(), FunctionMode::Version);
    }

    #[test]
    fn test_parse_connectivity() {
        assert_eq!(
            FunctionMode::parse("connectivity").unwrap(),
            FunctionMode::Connectivity
        );
    }

    #[test]
    fn test_parse_invalid_is_error() {
        let err = FunctionMode::parse("hello").unwrap_err();
        assert!(err
            .to_string()
            .contains("FUNCTION_MODE must be 'version' or 'connectivity'"));
    }

    #[test]
    fn test_default_is_version() {
        assert_eq!(FunctionMode::default(), FunctionMode::Version);
    }

    #[test]
    fn test_only_connectivity_needs_probe() {
        assert!(!FunctionMode::Version.needs_probe());
        assert!(FunctionMode::Connectivity.needs_probe());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for mode in [FunctionMode::Version, FunctionMode::Connectivity] {
            assert_eq!(mode.to_string().parse::<FunctionMode>().unwrap(), mode);
        }
    }
}
