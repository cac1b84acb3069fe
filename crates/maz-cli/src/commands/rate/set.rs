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

use alloy_primitives::{Address, U256};
use clap::Args;

use super::report_event;
use crate::{config::GlobalConfig, state};

/// Command to register a new exchange rate.
#[non_exhaustive]
#[derive(Args, Clone, Debug)]
pub struct RateSet {
    /// Address of the payment token.
    pub token: Address,
    /// Exchange rate into the internal accounting unit. Must be positive.
    pub rate: U256,
    /// Address performing the operation. Must be an administrator.
    #[clap(long, env = "MAZ_CALLER")]
    pub caller: Address,
}

impl RateSet {
    /// Run the [RateSet] command.
    pub fn run(&self, global_config: &GlobalConfig) -> anyhow::Result<()> {
        let event = state::update(&global_config.state_file, |minter| {
            minter.set_new_exchange_rate(&self.caller, self.token, self.rate)
        })?;
        report_event(&event);
        Ok(())
    }
}
