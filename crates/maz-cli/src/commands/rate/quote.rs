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

use crate::{config::GlobalConfig, state};

/// Command to convert a payment-token amount into the internal accounting unit.
#[non_exhaustive]
#[derive(Args, Clone, Debug)]
pub struct RateQuote {
    /// Address of the payment token.
    pub token: Address,
    /// Amount of the payment token, in its smallest unit.
    pub amount: U256,
}

impl RateQuote {
    /// Run the [RateQuote] command.
    pub fn run(&self, global_config: &GlobalConfig) -> anyhow::Result<()> {
        let minter = state::load(&global_config.state_file)?;
        let value = minter.quote(&self.token, self.amount)?;
        tracing::info!("Quote: {value} for {} of token {}", self.amount, self.token);
        Ok(())
    }
}
