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

//! Capability checks consulted before privileged registry mutations.

use std::{collections::BTreeSet, fmt};

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Privileged operations guarded by an [Authorizer].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    SetExchangeRate,
    UpdateExchangeRate,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetExchangeRate => write!(f, "set a new exchange rate"),
            Self::UpdateExchangeRate => write!(f, "update an exchange rate"),
        }
    }
}

/// Predicate deciding whether `caller` may perform `action`.
///
/// The registry never stores roles itself; the access-control subsystem is injected through
/// this trait. Closures of the form `Fn(&Address, Action) -> bool` implement it directly.
pub trait Authorizer {
    fn has_capability(&self, caller: &Address, action: Action) -> bool;
}

impl<F> Authorizer for F
where
    F: Fn(&Address, Action) -> bool,
{
    fn has_capability(&self, caller: &Address, action: Action) -> bool {
        self(caller, action)
    }
}

/// Set of administrator addresses, each granted every [Action].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Admins(BTreeSet<Address>);

impl Admins {
    pub fn new(admins: impl IntoIterator<Item = Address>) -> Self {
        Self(admins.into_iter().collect())
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.0.contains(address)
    }

    /// Returns `false` if the address was already an administrator.
    pub fn grant(&mut self, address: Address) -> bool {
        self.0.insert(address)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Authorizer for Admins {
    fn has_capability(&self, caller: &Address, _action: Action) -> bool {
        self.contains(caller)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    const ADMIN: Address = address!("0x00000000000000000000000000000000000000aa");
    const OTHER: Address = address!("0x00000000000000000000000000000000000000bb");

    #[test]
    fn admins_grant_every_action() {
        let admins = Admins::new([ADMIN]);
        assert!(admins.has_capability(&ADMIN, Action::SetExchangeRate));
        assert!(admins.has_capability(&ADMIN, Action::UpdateExchangeRate));
        assert!(!admins.has_capability(&OTHER, Action::SetExchangeRate));
    }

    #[test]
    fn closure_authorizer_sees_action() {
        let only_updates = |_: &Address, action: Action| action == Action::UpdateExchangeRate;
        assert!(only_updates.has_capability(&OTHER, Action::UpdateExchangeRate));
        assert!(!only_updates.has_capability(&OTHER, Action::SetExchangeRate));
    }

    #[test]
    fn admins_serialize_as_address_list() {
        let mut admins = Admins::default();
        assert!(admins.grant(ADMIN));
        assert!(!admins.grant(ADMIN));

        let json = serde_json::to_string(&admins).unwrap();
        let parsed: Admins = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, admins);
        assert!(json.starts_with('['));
    }
}
