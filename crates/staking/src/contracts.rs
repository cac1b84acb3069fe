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

//! Solidity-facing types of the StakingMinter contract.

use alloy_primitives::{Address, LogData, U256};
use alloy_sol_types::{sol, SolEvent, SolValue};
use anyhow::{Context, Result};

use crate::{rates::RateEvent, sale_window::SaleWindow};

sol! {
    #![sol(all_derives)]

    /// Constructor configuration of the StakingMinter contract.
    struct SalesConfig {
        uint256 publicStakeStart;
        uint256 publicStakeEnd;
        uint256 preStakeStart;
        uint256 preStakeEnd;
    }

    event ExchangeRateCreated(address indexed token, uint256 rate);

    event ExchangeRateUpdated(address indexed token, uint256 oldRate, uint256 newRate);
}

impl From<SaleWindow> for SalesConfig {
    fn from(window: SaleWindow) -> Self {
        Self {
            publicStakeStart: U256::from(window.public_stake_start),
            publicStakeEnd: U256::from(window.public_stake_end),
            preStakeStart: U256::from(window.pre_stake_start),
            preStakeEnd: U256::from(window.pre_stake_end),
        }
    }
}

impl TryFrom<SalesConfig> for SaleWindow {
    type Error = anyhow::Error;

    fn try_from(config: SalesConfig) -> Result<Self> {
        let window = SaleWindow::new(
            u64::try_from(config.preStakeStart).context("preStakeStart exceeds u64")?,
            u64::try_from(config.preStakeEnd).context("preStakeEnd exceeds u64")?,
            u64::try_from(config.publicStakeStart).context("publicStakeStart exceeds u64")?,
            u64::try_from(config.publicStakeEnd).context("publicStakeEnd exceeds u64")?,
        )?;
        Ok(window)
    }
}

/// ABI-encode the sale window as the `SalesConfig` constructor argument.
pub fn encode_sales_config(window: SaleWindow) -> Vec<u8> {
    SalesConfig::from(window).abi_encode()
}

impl RateEvent<Address> {
    /// Encode as the log the contract would emit for this event.
    pub fn to_log_data(&self) -> LogData {
        match *self {
            Self::Created { token, rate } => ExchangeRateCreated { token, rate }.encode_log_data(),
            Self::Updated { token, old_rate, new_rate } => {
                ExchangeRateUpdated { token, oldRate: old_rate, newRate: new_rate }.encode_log_data()
            }
        }
    }
}

/// Decode a contract log into a [RateEvent].
///
/// Returns `Ok(None)` when the log carries some other event.
pub fn decode_rate_event(log: &LogData) -> Result<Option<RateEvent>> {
    let Some(topic) = log.topics().first() else {
        return Ok(None);
    };

    if *topic == ExchangeRateCreated::SIGNATURE_HASH {
        let event = ExchangeRateCreated::decode_log_data(log)
            .with_context(|| format!("failed to decode event {}", ExchangeRateCreated::SIGNATURE))?;
        Ok(Some(RateEvent::Created { token: event.token, rate: event.rate }))
    } else if *topic == ExchangeRateUpdated::SIGNATURE_HASH {
        let event = ExchangeRateUpdated::decode_log_data(log)
            .with_context(|| format!("failed to decode event {}", ExchangeRateUpdated::SIGNATURE))?;
        Ok(Some(RateEvent::Updated {
            token: event.token,
            old_rate: event.oldRate,
            new_rate: event.newRate,
        }))
    } else {
        tracing::debug!("skipping log; not a rate event: {log:?}");
        Ok(None)
    }
}
