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

//! Commands of the Maz CLI.

mod init;
mod phase;
pub mod rate;
mod sale_window;

pub use init::Init;
pub use phase::Phase;
pub use rate::RateCommands;
pub use sale_window::SaleWindowCmd;

use clap::Subcommand;

use crate::config::GlobalConfig;

/// Top-level commands.
#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Compute the pre-stake and public-stake windows for a deployment.
    SaleWindow(SaleWindowCmd),
    /// Create a new StakingMinter state file.
    Init(Init),
    /// Report the sale phase active at a given time.
    Phase(Phase),
    /// Manage payment-token exchange rates.
    #[command(subcommand)]
    Rate(RateCommands),
}

impl Command {
    /// Run the command.
    pub fn run(&self, global_config: &GlobalConfig) -> anyhow::Result<()> {
        match self {
            Self::SaleWindow(cmd) => cmd.run(),
            Self::Init(cmd) => cmd.run(global_config),
            Self::Phase(cmd) => cmd.run(global_config),
            Self::Rate(cmd) => cmd.run(global_config),
        }
    }
}
