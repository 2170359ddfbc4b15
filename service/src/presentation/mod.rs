// Copyright (c) 2026 DMS Team
// SPDX-License-Identifier: AGPL-3.0
//! Presentation layer: the HTTP API.

pub mod api;

pub use api::{app, AppState};
