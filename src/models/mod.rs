// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod connectivity;
pub mod function_env;
pub mod mode;
pub mod response;
pub mod version;
