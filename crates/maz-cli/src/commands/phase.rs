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

use crate::{config::GlobalConfig, format_ms, now_ms, state};

/// Command to report the active sale phase.
#[non_exhaustive]
#[derive(Args, Clone, Debug)]
pub struct Phase {
    /// Time to check, in milliseconds since the Unix epoch. Defaults to now.
    #[clap(long)]
    pub at: Option<u64>,
}

impl Phase {
    /// Run the [Phase] command.
    pub fn run(&self, global_config: &GlobalConfig) -> anyhow::Result<()> {
        let minter = state::load(&global_config.state_file)?;
        let at = match self.at {
            Some(at) => at,
            None => now_ms()?,
        };

        let phase = minter.phase_at(at);
        tracing::info!("Sale phase at {} ({}): {phase}", at, format_ms(at));
        if !minter.is_staking_open(at) {
            tracing::info!("Staking is closed");
        }
        Ok(())
    }
}
