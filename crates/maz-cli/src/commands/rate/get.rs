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

use alloy_primitives::Address;
use clap::Args;

use crate::{config::GlobalConfig, state};

/// Command to get an exchange rate.
#[non_exhaustive]
#[derive(Args, Clone, Debug)]
pub struct RateGet {
    /// Address of the payment token.
    pub token: Address,
}

impl RateGet {
    /// Run the [RateGet] command.
    pub fn run(&self, global_config: &GlobalConfig) -> anyhow::Result<()> {
        let minter = state::load(&global_config.state_file)?;
        let rate = minter.exchange_rate(&self.token)?;
        tracing::info!("Exchange rate: {rate} for token {}", self.token);
        Ok(())
    }
}
