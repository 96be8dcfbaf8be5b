// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! # Bank Portfolio
//!
//! This library keeps client account portfolios: clients own chequing and
//! savings accounts, each account computes interest under its own rules, and
//! clients render formatted statements.
//!
//! ## Core Components
//!
//! - [`Date`]: Self-validating calendar date with day arithmetic
//! - [`Account`]: Generic, [`Chequing`] or [`Savings`] account
//! - [`Client`]: Owner of a portfolio of uniquely numbered accounts
//! - [`Branch`]: Registry of clients ordered by folio
//! - [`ContractViolation`]: Broken precondition, postcondition or invariant
//! - [`PortfolioError`]: Business-rule failures (duplicate or missing account)
//!
//! ## Example
//!
//! ```
//! use bank_portfolio::{AccountNumber, Chequing, Client, Date, FolioNumber};
//! use rust_decimal_macros::dec;
//!
//! let birth_date = Date::new(20, 1, 1983).unwrap();
//! let mut client = Client::new(FolioNumber(2000), "Carlo", "Ancelotti", "590 234-0342", birth_date).unwrap();
//!
//! // Overdrawn chequing account with 15 transactions: minimum rate plus 40%
//! let chequing = Chequing::new(AccountNumber(1280), 15, dec!(-1000), dec!(15), "Loyer", dec!(5)).unwrap();
//! client.add_account(chequing.into()).unwrap();
//!
//! let account = client.account(AccountNumber(1280)).unwrap();
//! assert_eq!(account.calculate_interest(), dec!(70));
//! assert!(client.statement().starts_with("Client no de folio : 2000\n"));
//! ```
//!
//! ## Contracts
//!
//! Constructors and mutators check their contracts on every call and return a
//! [`ContractViolation`] instead of leaving a value in a broken state.

pub mod account;
mod base;
mod branch;
pub mod chequing;
mod client;
pub mod contract;
mod date;
pub mod error;
pub mod savings;
pub mod validation;

pub use account::{Account, AccountData, AccountKind};
pub use base::{AccountNumber, FolioNumber};
pub use branch::Branch;
pub use chequing::Chequing;
pub use client::Client;
pub use contract::{ContractKind, ContractViolation};
pub use date::Date;
pub use error::{ParseDateError, PortfolioError};
pub use savings::Savings;
