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
use thiserror::Error;

use crate::auth::Action;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaleWindowError {
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Sale windows out of order: {0}")]
    InvalidOrdering(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    #[error("{caller} is not authorized to {action}")]
    Unauthorized { caller: Address, action: Action },

    #[error("Exchange rate must be positive")]
    InvalidRate,

    #[error("Exchange rate already registered for {0}")]
    AlreadyRegistered(String),

    #[error("No exchange rate registered for {0}")]
    NotRegistered(String),

    #[error("Exchange rate not found for {0}")]
    NotFound(String),

    #[error("Quote for {0} overflows 256 bits")]
    Overflow(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MinterError {
    #[error(transparent)]
    SaleWindow(#[from] SaleWindowError),

    #[error(transparent)]
    Rate(#[from] RateError),
}
