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

//! Pre-stake and public-stake sale windows.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{error::SaleWindowError, MS_PER_DAY};

/// Timestamps, in milliseconds, bounding the two staking sale phases.
///
/// The pre-stake window always precedes the public-stake window:
/// `pre_stake_start < pre_stake_end <= public_stake_start < public_stake_end`.
/// Both windows are half-open, i.e. `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleWindow {
    pub pre_stake_start: u64,
    pub pre_stake_end: u64,
    pub public_stake_start: u64,
    pub public_stake_end: u64,
}

/// Sale phase active at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalePhase {
    NotStarted,
    PreStake,
    PublicStake,
    Ended,
}

impl fmt::Display for SalePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotStarted => "not started",
            Self::PreStake => "pre-stake",
            Self::PublicStake => "public stake",
            Self::Ended => "ended",
        };
        f.write_str(name)
    }
}

/// Compute contiguous sale windows starting at `base_time`.
///
/// The pre-stake window opens at `base_time` and lasts `pre_stake_days`; the public-stake window
/// opens the moment the pre-stake window closes and lasts `public_stake_days`.
pub fn compute_windows(
    base_time: u64,
    pre_stake_days: u32,
    public_stake_days: u32,
) -> Result<SaleWindow, SaleWindowError> {
    let pre_stake_len = window_length(pre_stake_days, "pre-stake")?;
    let public_stake_len = window_length(public_stake_days, "public stake")?;

    let pre_stake_end = base_time.checked_add(pre_stake_len).ok_or_else(|| {
        SaleWindowError::InvalidDuration(format!(
            "pre-stake window of {pre_stake_days} days overflows from base time {base_time}"
        ))
    })?;
    let public_stake_end = pre_stake_end.checked_add(public_stake_len).ok_or_else(|| {
        SaleWindowError::InvalidDuration(format!(
            "public stake window of {public_stake_days} days overflows from {pre_stake_end}"
        ))
    })?;

    let window = SaleWindow {
        pre_stake_start: base_time,
        pre_stake_end,
        public_stake_start: pre_stake_end,
        public_stake_end,
    };
    tracing::debug!(?window, pre_stake_days, public_stake_days, "Computed sale windows");
    Ok(window)
}

fn window_length(days: u32, label: &str) -> Result<u64, SaleWindowError> {
    if days == 0 {
        return Err(SaleWindowError::InvalidDuration(format!(
            "{label} duration must be at least one day"
        )));
    }
    // u32::MAX days in milliseconds fits comfortably in a u64.
    Ok(u64::from(days) * MS_PER_DAY)
}

impl SaleWindow {
    /// Build a window from explicit timestamps, checking their ordering.
    pub fn new(
        pre_stake_start: u64,
        pre_stake_end: u64,
        public_stake_start: u64,
        public_stake_end: u64,
    ) -> Result<Self, SaleWindowError> {
        let window = Self { pre_stake_start, pre_stake_end, public_stake_start, public_stake_end };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> Result<(), SaleWindowError> {
        if self.pre_stake_start >= self.pre_stake_end {
            return Err(SaleWindowError::InvalidOrdering(format!(
                "pre-stake start {} is not before its end {}",
                self.pre_stake_start, self.pre_stake_end
            )));
        }
        if self.pre_stake_end > self.public_stake_start {
            return Err(SaleWindowError::InvalidOrdering(format!(
                "pre-stake end {} is after public stake start {}",
                self.pre_stake_end, self.public_stake_start
            )));
        }
        if self.public_stake_start >= self.public_stake_end {
            return Err(SaleWindowError::InvalidOrdering(format!(
                "public stake start {} is not before its end {}",
                self.public_stake_start, self.public_stake_end
            )));
        }
        Ok(())
    }

    /// Phase active at `timestamp` (milliseconds).
    ///
    /// A gap between the two windows, which [compute_windows] never produces, reports
    /// [SalePhase::NotStarted] for the public phase that has yet to open.
    pub fn phase_at(&self, timestamp: u64) -> SalePhase {
        if timestamp < self.pre_stake_start {
            SalePhase::NotStarted
        } else if timestamp < self.pre_stake_end {
            SalePhase::PreStake
        } else if timestamp < self.public_stake_start {
            SalePhase::NotStarted
        } else if timestamp < self.public_stake_end {
            SalePhase::PublicStake
        } else {
            SalePhase::Ended
        }
    }
}
