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

//! Exchange rates from payment tokens to the internal accounting unit.

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use alloy_primitives::{Address, U256};

use crate::{
    auth::{Action, Authorizer},
    error::RateError,
};

/// Observable outcome of a successful registry mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateEvent<K = Address> {
    Created { token: K, rate: U256 },
    Updated { token: K, old_rate: U256, new_rate: U256 },
}

impl<K> RateEvent<K> {
    pub fn token(&self) -> &K {
        match self {
            Self::Created { token, .. } | Self::Updated { token, .. } => token,
        }
    }
}

/// One positive rate per payment token, guarded by an injected [Authorizer].
///
/// A token moves from unregistered to registered through [Self::set_new_rate] and never
/// returns; [Self::update_rate] only overwrites existing entries. Every failed call leaves both
/// the rates and the event log untouched.
#[derive(Debug, Clone)]
pub struct ExchangeRateRegistry<A, K = Address> {
    authorizer: A,
    rates: HashMap<K, U256>,
    events: Vec<RateEvent<K>>,
}

impl<A, K> ExchangeRateRegistry<A, K>
where
    A: Authorizer,
    K: Clone + Eq + Hash + Debug,
{
    pub fn new(authorizer: A) -> Self {
        Self { authorizer, rates: HashMap::new(), events: Vec::new() }
    }

    /// Rebuild a registry from previously persisted rates. No events are emitted.
    pub fn from_rates(authorizer: A, rates: impl IntoIterator<Item = (K, U256)>) -> Self {
        Self { authorizer, rates: rates.into_iter().collect(), events: Vec::new() }
    }

    /// Register the first rate for `token`.
    pub fn set_new_rate(
        &mut self,
        caller: &Address,
        token: K,
        rate: U256,
    ) -> Result<RateEvent<K>, RateError> {
        self.authorize(caller, Action::SetExchangeRate)?;
        if rate.is_zero() {
            return Err(RateError::InvalidRate);
        }
        if self.rates.contains_key(&token) {
            return Err(RateError::AlreadyRegistered(format!("{token:?}")));
        }

        self.rates.insert(token.clone(), rate);
        tracing::info!("Exchange rate created: token = {token:?}, rate = {rate}");
        Ok(self.emit(RateEvent::Created { token, rate }))
    }

    /// Overwrite the rate of an already registered `token`.
    pub fn update_rate(
        &mut self,
        caller: &Address,
        token: K,
        new_rate: U256,
    ) -> Result<RateEvent<K>, RateError> {
        self.authorize(caller, Action::UpdateExchangeRate)?;
        if new_rate.is_zero() {
            return Err(RateError::InvalidRate);
        }
        let Some(current) = self.rates.get_mut(&token) else {
            return Err(RateError::NotRegistered(format!("{token:?}")));
        };

        let old_rate = std::mem::replace(current, new_rate);
        tracing::info!(
            "Exchange rate updated: token = {token:?}, old rate = {old_rate}, new rate = {new_rate}"
        );
        Ok(self.emit(RateEvent::Updated { token, old_rate, new_rate }))
    }

    pub fn get_rate(&self, token: &K) -> Result<U256, RateError> {
        self.rates.get(token).copied().ok_or_else(|| RateError::NotFound(format!("{token:?}")))
    }

    pub fn is_registered(&self, token: &K) -> bool {
        self.rates.contains_key(token)
    }

    pub fn rates(&self) -> impl Iterator<Item = (&K, &U256)> {
        self.rates.iter()
    }

    /// Events emitted since construction or the last [Self::take_events], oldest first.
    pub fn events(&self) -> &[RateEvent<K>] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<RateEvent<K>> {
        std::mem::take(&mut self.events)
    }

    pub fn authorizer(&self) -> &A {
        &self.authorizer
    }

    fn authorize(&self, caller: &Address, action: Action) -> Result<(), RateError> {
        if !self.authorizer.has_capability(caller, action) {
            tracing::warn!("Rejected {action} from unauthorized caller {caller}");
            return Err(RateError::Unauthorized { caller: *caller, action });
        }
        Ok(())
    }

    fn emit(&mut self, event: RateEvent<K>) -> RateEvent<K> {
        self.events.push(event.clone());
        event
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;
    use tracing_test::traced_test;

    use super::*;
    use crate::auth::Admins;

    const ADMIN: Address = address!("0x00000000000000000000000000000000000000aa");
    const STRANGER: Address = address!("0x00000000000000000000000000000000000000bb");
    const USDT_ADDRESS: Address = address!("0x7169D38820dfd117C3FA1f22a697dBA58d90BA06");

    fn ticker_registry() -> ExchangeRateRegistry<Admins, &'static str> {
        ExchangeRateRegistry::new(Admins::new([ADMIN]))
    }

    #[test]
    #[traced_test]
    fn set_then_update_usdt() {
        let mut registry = ticker_registry();

        let created = registry.set_new_rate(&ADMIN, "USDT", U256::from(1)).unwrap();
        assert_eq!(created, RateEvent::Created { token: "USDT", rate: U256::from(1) });
        assert_eq!(registry.get_rate(&"USDT").unwrap(), U256::from(1));

        let updated = registry.update_rate(&ADMIN, "USDT", U256::from(2)).unwrap();
        assert_eq!(
            updated,
            RateEvent::Updated { token: "USDT", old_rate: U256::from(1), new_rate: U256::from(2) }
        );
        assert_eq!(registry.get_rate(&"USDT").unwrap(), U256::from(2));
        assert_eq!(registry.events(), &[created, updated]);
        assert!(logs_contain("Exchange rate updated"));
    }

    #[test]
    fn address_keyed_registry() {
        let mut registry = ExchangeRateRegistry::new(Admins::new([ADMIN]));
        registry.set_new_rate(&ADMIN, USDT_ADDRESS, U256::from(1)).unwrap();
        assert!(registry.is_registered(&USDT_ADDRESS));
        assert_eq!(registry.events()[0].token(), &USDT_ADDRESS);
    }

    #[test]
    fn second_set_is_rejected_and_keeps_first_rate() {
        let mut registry = ticker_registry();
        registry.set_new_rate(&ADMIN, "USDT", U256::from(5)).unwrap();

        let err = registry.set_new_rate(&ADMIN, "USDT", U256::from(7)).unwrap_err();
        assert!(matches!(err, RateError::AlreadyRegistered(_)));
        assert_eq!(registry.get_rate(&"USDT").unwrap(), U256::from(5));
        assert_eq!(registry.events().len(), 1);
    }

    #[test]
    fn update_of_unregistered_token_emits_nothing() {
        let mut registry = ticker_registry();
        let err = registry.update_rate(&ADMIN, "DAI", U256::from(3)).unwrap_err();
        assert!(matches!(err, RateError::NotRegistered(_)));
        assert!(registry.events().is_empty());
        assert!(!registry.is_registered(&"DAI"));
    }

    #[test]
    fn zero_rates_are_invalid() {
        let mut registry = ticker_registry();
        assert_eq!(registry.set_new_rate(&ADMIN, "USDT", U256::ZERO), Err(RateError::InvalidRate));
        assert!(matches!(registry.get_rate(&"USDT"), Err(RateError::NotFound(_))));

        registry.set_new_rate(&ADMIN, "USDT", U256::from(1)).unwrap();
        assert_eq!(registry.update_rate(&ADMIN, "USDT", U256::ZERO), Err(RateError::InvalidRate));
        assert_eq!(registry.get_rate(&"USDT").unwrap(), U256::from(1));
        assert_eq!(registry.events().len(), 1);
    }

    #[test]
    #[traced_test]
    fn unauthorized_callers_change_nothing() {
        let mut registry = ticker_registry();
        assert_eq!(
            registry.set_new_rate(&STRANGER, "USDT", U256::from(1)),
            Err(RateError::Unauthorized { caller: STRANGER, action: Action::SetExchangeRate })
        );
        assert!(!registry.is_registered(&"USDT"));

        registry.set_new_rate(&ADMIN, "USDT", U256::from(1)).unwrap();
        assert_eq!(
            registry.update_rate(&STRANGER, "USDT", U256::from(9)),
            Err(RateError::Unauthorized { caller: STRANGER, action: Action::UpdateExchangeRate })
        );
        assert_eq!(registry.get_rate(&"USDT").unwrap(), U256::from(1));
        assert_eq!(registry.events().len(), 1);
        assert!(logs_contain("unauthorized caller"));
    }

    #[test]
    fn authorization_is_checked_per_action() {
        let updates_only = |_: &Address, action: Action| action == Action::UpdateExchangeRate;
        let mut registry = ExchangeRateRegistry::from_rates(updates_only, [("USDT", U256::from(1))]);

        assert!(matches!(
            registry.set_new_rate(&STRANGER, "DAI", U256::from(1)),
            Err(RateError::Unauthorized { .. })
        ));
        registry.update_rate(&STRANGER, "USDT", U256::from(4)).unwrap();
        assert_eq!(registry.get_rate(&"USDT").unwrap(), U256::from(4));
    }

    #[test]
    fn take_events_drains_log() {
        let mut registry = ticker_registry();
        registry.set_new_rate(&ADMIN, "USDT", U256::from(1)).unwrap();
        registry.set_new_rate(&ADMIN, "DAI", U256::from(1)).unwrap();

        let drained = registry.take_events();
        assert_eq!(drained.len(), 2);
        assert!(registry.events().is_empty());
        assert_eq!(registry.rates().count(), 2);
    }
}
