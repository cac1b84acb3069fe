// Copyright 2025 RISC Zero, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The Maz CLI: compute StakingMinter sale windows and manage exchange rates.

pub mod commands;
pub mod config;
pub mod state;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Current time in milliseconds since the Unix epoch.
pub fn now_ms() -> Result<u64> {
    u64::try_from(Utc::now().timestamp_millis()).context("system clock is before the Unix epoch")
}

/// Render a millisecond timestamp as a UTC date, for display.
pub fn format_ms(timestamp: u64) -> String {
    i64::try_from(timestamp)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map(|datetime| datetime.format("%Y-%m-%d %H:%M:%S%.3f UTC").to_string())
        .unwrap_or_else(|| "out of range".to_string())
}
