// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod connectivity;
pub mod logging;
pub mod probe;
pub mod version;
