// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};

/// JSON carried in the version response body. Exactly one key.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionBody {
    pub version: String,
}
