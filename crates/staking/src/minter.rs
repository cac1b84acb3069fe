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

//! Off-chain counterpart of the StakingMinter contract.

use std::collections::BTreeMap;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{Admins, Authorizer},
    error::{MinterError, RateError},
    rates::{ExchangeRateRegistry, RateEvent},
    sale_window::{SalePhase, SaleWindow},
};

/// Sales configuration fixed at construction, plus the exchange-rate registry.
#[derive(Debug, Clone)]
pub struct StakingMinter<A> {
    sales_config: SaleWindow,
    registry: ExchangeRateRegistry<A>,
}

/// Persisted form of a [StakingMinter] authorized by [Admins].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinterSnapshot {
    pub sales_config: SaleWindow,
    pub admins: Admins,
    #[serde(default)]
    pub rates: BTreeMap<Address, U256>,
}

impl<A: Authorizer> StakingMinter<A> {
    pub fn new(sales_config: SaleWindow, authorizer: A) -> Result<Self, MinterError> {
        sales_config.validate()?;
        Ok(Self { sales_config, registry: ExchangeRateRegistry::new(authorizer) })
    }

    pub fn sales_config(&self) -> &SaleWindow {
        &self.sales_config
    }

    pub fn phase_at(&self, timestamp: u64) -> SalePhase {
        self.sales_config.phase_at(timestamp)
    }

    /// Whether either staking window is open at `timestamp`.
    pub fn is_staking_open(&self, timestamp: u64) -> bool {
        matches!(self.phase_at(timestamp), SalePhase::PreStake | SalePhase::PublicStake)
    }

    pub fn set_new_exchange_rate(
        &mut self,
        caller: &Address,
        token: Address,
        rate: U256,
    ) -> Result<RateEvent, MinterError> {
        Ok(self.registry.set_new_rate(caller, token, rate)?)
    }

    pub fn update_exchange_rate(
        &mut self,
        caller: &Address,
        token: Address,
        new_rate: U256,
    ) -> Result<RateEvent, MinterError> {
        Ok(self.registry.update_rate(caller, token, new_rate)?)
    }

    pub fn exchange_rate(&self, token: &Address) -> Result<U256, MinterError> {
        Ok(self.registry.get_rate(token)?)
    }

    /// Convert `amount` of the payment `token` into the internal accounting unit.
    pub fn quote(&self, token: &Address, amount: U256) -> Result<U256, MinterError> {
        let rate = self.registry.get_rate(token)?;
        let value = amount
            .checked_mul(rate)
            .ok_or_else(|| RateError::Overflow(format!("{token:?}")))?;
        tracing::debug!("Quoted {amount} of {token} at rate {rate}: {value}");
        Ok(value)
    }

    pub fn registry(&self) -> &ExchangeRateRegistry<A> {
        &self.registry
    }

    pub fn take_events(&mut self) -> Vec<RateEvent> {
        self.registry.take_events()
    }
}

impl StakingMinter<Admins> {
    pub fn from_snapshot(snapshot: MinterSnapshot) -> Result<Self, MinterError> {
        snapshot.sales_config.validate()?;
        if let Some((token, _)) = snapshot.rates.iter().find(|(_, rate)| rate.is_zero()) {
            tracing::warn!("Snapshot holds a zero exchange rate for {token}");
            return Err(RateError::InvalidRate.into());
        }
        Ok(Self {
            sales_config: snapshot.sales_config,
            registry: ExchangeRateRegistry::from_rates(snapshot.admins, snapshot.rates),
        })
    }

    pub fn snapshot(&self) -> MinterSnapshot {
        MinterSnapshot {
            sales_config: self.sales_config,
            admins: self.registry.authorizer().clone(),
            rates: self.registry.rates().map(|(token, rate)| (*token, *rate)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;
    use crate::compute_windows;

    const ADMIN: Address = address!("0x00000000000000000000000000000000000000aa");
    const USDT_ADDRESS: Address = address!("0x7169D38820dfd117C3FA1f22a697dBA58d90BA06");
    const BASE_TIME: u64 = 1_700_000_000_000;

    fn minter() -> StakingMinter<Admins> {
        let window = compute_windows(BASE_TIME, 20, 365).unwrap();
        StakingMinter::new(window, Admins::new([ADMIN])).unwrap()
    }

    #[test]
    fn rejects_misordered_sales_config() {
        let swapped = SaleWindow {
            pre_stake_start: 1_701_728_000_000,
            pre_stake_end: 1_733_264_000_000,
            public_stake_start: 1_700_000_000_000,
            public_stake_end: 1_701_728_000_000,
        };
        assert!(matches!(
            StakingMinter::new(swapped, Admins::default()),
            Err(MinterError::SaleWindow(_))
        ));
    }

    #[test]
    fn staking_open_only_inside_windows() {
        let minter = minter();
        assert!(!minter.is_staking_open(BASE_TIME - 1));
        assert!(minter.is_staking_open(BASE_TIME));
        assert!(minter.is_staking_open(minter.sales_config().public_stake_start));
        assert!(!minter.is_staking_open(minter.sales_config().public_stake_end));
    }

    #[test]
    fn exchange_rates_and_quotes() {
        let mut minter = minter();
        minter.set_new_exchange_rate(&ADMIN, USDT_ADDRESS, U256::from(1)).unwrap();
        assert_eq!(minter.exchange_rate(&USDT_ADDRESS).unwrap(), U256::from(1));

        minter.update_exchange_rate(&ADMIN, USDT_ADDRESS, U256::from(2)).unwrap();
        assert_eq!(minter.exchange_rate(&USDT_ADDRESS).unwrap(), U256::from(2));
        assert_eq!(minter.quote(&USDT_ADDRESS, U256::from(50)).unwrap(), U256::from(100));
        assert_eq!(minter.take_events().len(), 2);
    }

    #[test]
    fn quote_errors() {
        let mut minter = minter();
        assert!(matches!(
            minter.quote(&USDT_ADDRESS, U256::from(1)),
            Err(MinterError::Rate(RateError::NotFound(_)))
        ));

        minter.set_new_exchange_rate(&ADMIN, USDT_ADDRESS, U256::from(2)).unwrap();
        assert!(matches!(
            minter.quote(&USDT_ADDRESS, U256::MAX),
            Err(MinterError::Rate(RateError::Overflow(_)))
        ));
    }

    #[test]
    fn snapshot_restores_state_without_events() {
        let mut minter = minter();
        minter.set_new_exchange_rate(&ADMIN, USDT_ADDRESS, U256::from(3)).unwrap();

        let json = serde_json::to_string(&minter.snapshot()).unwrap();
        let restored = StakingMinter::from_snapshot(serde_json::from_str(&json).unwrap()).unwrap();
        assert_eq!(restored.exchange_rate(&USDT_ADDRESS).unwrap(), U256::from(3));
        assert_eq!(restored.sales_config(), minter.sales_config());
        assert!(restored.registry().events().is_empty());
        assert_eq!(restored.snapshot(), minter.snapshot());
    }

    #[test]
    fn snapshot_with_zero_rate_is_rejected() {
        let mut snapshot = minter().snapshot();
        snapshot.rates.insert(USDT_ADDRESS, U256::ZERO);
        assert!(matches!(
            StakingMinter::from_snapshot(snapshot),
            Err(MinterError::Rate(RateError::InvalidRate))
        ));
    }
}
