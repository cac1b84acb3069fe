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

//! Off-chain model of the Maz StakingMinter: staking sale windows, the multi-currency
//! exchange-rate registry, and the EVM ABI view of both.

pub mod auth;
pub mod contracts;
pub mod deployments;
pub mod error;
pub mod minter;
pub mod rates;
pub mod sale_window;

pub use auth::{Action, Admins, Authorizer};
pub use deployments::Deployment;
pub use error::{MinterError, RateError, SaleWindowError};
pub use minter::{MinterSnapshot, StakingMinter};
pub use rates::{ExchangeRateRegistry, RateEvent};
pub use sale_window::{compute_windows, SalePhase, SaleWindow};

/// Milliseconds in one day. Sale window timestamps are expressed in milliseconds.
pub const MS_PER_DAY: u64 = 24 * 60 * 60 * 1000;
/// Length of the pre-stake window used by the reference deployment.
pub const DEFAULT_PRE_STAKE_DAYS: u32 = 20;
/// Length of the public-stake window used by the reference deployment.
pub const DEFAULT_PUBLIC_STAKE_DAYS: u32 = 365;
