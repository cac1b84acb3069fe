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

use anyhow::Context;
use clap::Args;
use maz_staking::{contracts::encode_sales_config, Deployment, SaleWindow};

use crate::{format_ms, now_ms};

/// Command to compute the sale windows of a deployment.
#[non_exhaustive]
#[derive(Args, Clone, Debug)]
pub struct SaleWindowCmd {
    /// Sale window parameters.
    #[clap(flatten, next_help_heading = "Sale Windows")]
    pub deployment: Deployment,
    /// Only print the ABI-encoded `SalesConfig` constructor argument.
    #[clap(long)]
    pub calldata: bool,
}

impl SaleWindowCmd {
    /// Run the [SaleWindowCmd] command.
    pub fn run(&self) -> anyhow::Result<()> {
        let window = self
            .deployment
            .sale_window(now_ms()?)
            .context("failed to compute sale windows")?;

        if self.calldata {
            println!("========= SalesConfig =========");
            println!("calldata: 0x{}", hex::encode(encode_sales_config(window)));
            return Ok(());
        }

        print_window(&window);
        Ok(())
    }
}

pub(crate) fn print_window(window: &SaleWindow) {
    tracing::info!(
        "Pre-stake start: {} ({})",
        window.pre_stake_start,
        format_ms(window.pre_stake_start)
    );
    tracing::info!("Pre-stake end: {} ({})", window.pre_stake_end, format_ms(window.pre_stake_end));
    tracing::info!(
        "Public stake start: {} ({})",
        window.public_stake_start,
        format_ms(window.public_stake_start)
    );
    tracing::info!(
        "Public stake end: {} ({})",
        window.public_stake_end,
        format_ms(window.public_stake_end)
    );
}
