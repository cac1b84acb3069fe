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

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use maz_cli::{commands::Command, config::GlobalConfig};
use tracing_subscriber::EnvFilter;

/// Compute StakingMinter sale windows and manage its exchange rates.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct MainArgs {
    #[clap(flatten)]
    config: GlobalConfig,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let args = MainArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.config.log_level.into())
                .from_env_lossy(),
        )
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .init();

    args.command.run(&args.config)
}
