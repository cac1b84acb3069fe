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

//! Commands of the Maz CLI for exchange-rate operations.

mod get;
mod quote;
mod set;
mod update;

pub use get::RateGet;
pub use quote::RateQuote;
pub use set::RateSet;
pub use update::RateUpdate;

use clap::Subcommand;
use maz_staking::RateEvent;

use crate::config::GlobalConfig;

/// Commands for exchange-rate operations.
#[derive(Subcommand, Clone, Debug)]
pub enum RateCommands {
    /// Register the exchange rate of a payment token for the first time.
    Set(RateSet),
    /// Update the exchange rate of an already registered payment token.
    Update(RateUpdate),
    /// Get the exchange rate of a payment token.
    Get(RateGet),
    /// Convert an amount of a payment token into the internal accounting unit.
    Quote(RateQuote),
}

impl RateCommands {
    /// Run the command.
    pub fn run(&self, global_config: &GlobalConfig) -> anyhow::Result<()> {
        match self {
            Self::Set(cmd) => cmd.run(global_config),
            Self::Update(cmd) => cmd.run(global_config),
            Self::Get(cmd) => cmd.run(global_config),
            Self::Quote(cmd) => cmd.run(global_config),
        }
    }
}

/// Print the emitted event, and at debug level the log the contract would emit for it.
fn report_event(event: &RateEvent) {
    match event {
        RateEvent::Created { token, rate } => {
            tracing::info!("ExchangeRateCreated: token = {token}, rate = {rate}")
        }
        RateEvent::Updated { token, old_rate, new_rate } => tracing::info!(
            "ExchangeRateUpdated: token = {token}, old rate = {old_rate}, new rate = {new_rate}"
        ),
    }

    let log = event.to_log_data();
    for (i, topic) in log.topics().iter().enumerate() {
        tracing::debug!("topic[{i}]: {topic}");
    }
    tracing::debug!("data: {}", log.data);
}
