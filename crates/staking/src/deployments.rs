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

use clap::Args;
use derive_builder::Builder;

use crate::{
    error::SaleWindowError,
    sale_window::{compute_windows, SaleWindow},
    DEFAULT_PRE_STAKE_DAYS, DEFAULT_PUBLIC_STAKE_DAYS,
};

/// Parameters used to derive the sale windows of a StakingMinter deployment.
#[non_exhaustive]
#[derive(Clone, Debug, Builder, Args)]
pub struct Deployment {
    /// Start of the pre-stake window, in milliseconds since the Unix epoch.
    ///
    /// Defaults to the current time.
    #[clap(long, env)]
    #[builder(setter(into, strip_option), default)]
    pub base_time: Option<u64>,

    /// Length of the pre-stake window, in days.
    #[clap(long, env, default_value_t = DEFAULT_PRE_STAKE_DAYS)]
    #[builder(default = "DEFAULT_PRE_STAKE_DAYS")]
    pub pre_stake_days: u32,

    /// Length of the public-stake window, in days.
    #[clap(long, env, default_value_t = DEFAULT_PUBLIC_STAKE_DAYS)]
    #[builder(default = "DEFAULT_PUBLIC_STAKE_DAYS")]
    pub public_stake_days: u32,
}

impl Deployment {
    /// Create a new [DeploymentBuilder].
    pub fn builder() -> DeploymentBuilder {
        Default::default()
    }

    /// Compute the sale windows, starting at [Self::base_time] or `now_ms` if it is unset.
    pub fn sale_window(&self, now_ms: u64) -> Result<SaleWindow, SaleWindowError> {
        compute_windows(
            self.base_time.unwrap_or(now_ms),
            self.pre_stake_days,
            self.public_stake_days,
        )
    }
}

impl Default for Deployment {
    fn default() -> Self {
        Self {
            base_time: None,
            pre_stake_days: DEFAULT_PRE_STAKE_DAYS,
            public_stake_days: DEFAULT_PUBLIC_STAKE_DAYS,
        }
    }
}
