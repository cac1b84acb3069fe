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
use anyhow::Context;
use clap::Args;
use maz_staking::{Admins, Deployment, StakingMinter};

use crate::{commands::sale_window::print_window, config::GlobalConfig, now_ms, state};

/// Command to create a StakingMinter state file.
#[non_exhaustive]
#[derive(Args, Clone, Debug)]
pub struct Init {
    /// Address allowed to set and update exchange rates. May be repeated.
    #[clap(long = "admin", required = true, value_delimiter = ',')]
    pub admins: Vec<Address>,
    /// Replace an existing state file.
    #[clap(long)]
    pub force: bool,
    /// Sale window parameters.
    #[clap(flatten, next_help_heading = "Sale Windows")]
    pub deployment: Deployment,
}

impl Init {
    /// Run the [Init] command.
    pub fn run(&self, global_config: &GlobalConfig) -> anyhow::Result<()> {
        let admins = Admins::new(self.admins.iter().copied());
        let window = self
            .deployment
            .sale_window(now_ms()?)
            .context("failed to compute sale windows")?;
        let minter = StakingMinter::new(window, admins)?;

        let _lock = state::lock(&global_config.state_file)?;
        state::save(&minter, &global_config.state_file, self.force)?;
        tracing::info!("Initialized StakingMinter state at {}", global_config.state_file.display());
        print_window(minter.sales_config());
        Ok(())
    }
}
