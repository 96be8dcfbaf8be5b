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

//! Account management.
//!
//! An [`Account`] is one of a small, closed set of variants sharing the same
//! base record ([`AccountData`]): a generic account that earns nothing, a
//! [`Chequing`] account and a [`Savings`] account. Each variant owns its
//! interest rule and statement layout; [`Account`] dispatches to them.
//!
//! Accounts are plain values. Cloning one yields an independent deep copy of
//! the same variant, which is what a [`Client`](crate::Client) stores.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use bank_portfolio::{Account, AccountKind, AccountNumber, Savings};
//!
//! let account = Account::from(Savings::new(AccountNumber(7), dec!(2.5), dec!(10000), "").unwrap());
//! assert_eq!(account.kind(), AccountKind::Savings);
//! assert_eq!(account.description(), "Epargne");
//! assert_eq!(account.calculate_interest(), dec!(250));
//! ```

use crate::base::AccountNumber;
use crate::chequing::Chequing;
use crate::contract::{ContractViolation, invariant, postcondition, precondition};
use crate::date::Date;
use crate::savings::Savings;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;

/// Upper bound of any account's interest rate, in percent.
pub(crate) const MAX_RATE: Decimal = dec!(100);

/// Fields and rules shared by every account variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountData {
    number: AccountNumber,
    /// Percent, within `0..=100`.
    interest_rate: Decimal,
    balance: Decimal,
    description: String,
    open_date: Date,
}

impl AccountData {
    /// Builds the shared part of an account.
    ///
    /// # Errors
    ///
    /// Precondition violation when the number is zero, the rate falls
    /// outside `0..=100`, the description is empty, or `open_date` is not
    /// today. Accounts cannot be backdated.
    pub fn open(
        number: AccountNumber,
        interest_rate: Decimal,
        balance: Decimal,
        description: impl Into<String>,
        open_date: Date,
    ) -> Result<Self, ContractViolation> {
        let description = description.into();
        precondition!(number.0 > 0);
        precondition!(interest_rate >= Decimal::ZERO && interest_rate <= MAX_RATE);
        precondition!(!description.is_empty());
        precondition!(open_date == Date::today());

        let data = Self {
            number,
            interest_rate,
            balance,
            description,
            open_date,
        };

        postcondition!(data.number == number);
        postcondition!(data.interest_rate == interest_rate);
        postcondition!(data.balance == balance);
        postcondition!(data.open_date == open_date);
        data.check_invariants()?;
        Ok(data)
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn open_date(&self) -> &Date {
        &self.open_date
    }

    /// # Errors
    ///
    /// Precondition violation when the rate falls outside `0..=100`.
    pub fn set_interest_rate(&mut self, interest_rate: Decimal) -> Result<(), ContractViolation> {
        precondition!(interest_rate >= Decimal::ZERO && interest_rate <= MAX_RATE);

        self.interest_rate = interest_rate;

        postcondition!(self.interest_rate == interest_rate);
        self.check_invariants()
    }

    /// Unconstrained at this level; variants narrow it.
    pub fn set_balance(&mut self, balance: Decimal) -> Result<(), ContractViolation> {
        self.balance = balance;

        postcondition!(self.balance == balance);
        self.check_invariants()
    }

    /// # Errors
    ///
    /// Precondition violation when the description is empty.
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), ContractViolation> {
        let description = description.into();
        precondition!(!description.is_empty());

        self.description = description;

        self.check_invariants()
    }

    /// A generic account earns nothing.
    pub fn calculate_interest(&self) -> Decimal {
        Decimal::ZERO
    }

    /// The block every statement starts with.
    pub fn formatted_statement(&self) -> String {
        format!(
            "numero : {}\nDescription : {}\nDate d'ouverture : {}\nTaux d'interet : {}\nSolde : {} $\n",
            self.number,
            self.description,
            self.open_date.formatted(),
            Account::statement_amount(self.interest_rate),
            Account::statement_amount(self.balance),
        )
    }

    pub(crate) fn check_invariants(&self) -> Result<(), ContractViolation> {
        invariant!(self.number.0 > 0);
        invariant!(self.interest_rate >= Decimal::ZERO && self.interest_rate <= MAX_RATE);
        invariant!(!self.description.is_empty());
        Ok(())
    }
}

/// Variant tag of an [`Account`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    Generic,
    Chequing,
    Savings,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Generic => "generic",
            Self::Chequing => "chequing",
            Self::Savings => "savings",
        };
        f.write_str(label)
    }
}

/// A bank account of any variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Account {
    Generic(AccountData),
    Chequing(Chequing),
    Savings(Savings),
}

impl Account {
    /// Decimal places shown for rates and amounts on statements.
    pub const DECIMAL_PRECISION: u32 = 4;

    /// Renders an amount the way statements show it: at most
    /// [`Account::DECIMAL_PRECISION`] places, trailing zeros removed.
    pub fn statement_amount(value: Decimal) -> Decimal {
        value.round_dp(Self::DECIMAL_PRECISION).normalize()
    }

    /// Opens a generic, interest-free account dated today.
    ///
    /// # Errors
    ///
    /// See [`AccountData::open`].
    pub fn generic(
        number: AccountNumber,
        interest_rate: Decimal,
        balance: Decimal,
        description: impl Into<String>,
    ) -> Result<Self, ContractViolation> {
        AccountData::open(number, interest_rate, balance, description, Date::today())
            .map(Account::Generic)
    }

    pub fn kind(&self) -> AccountKind {
        match self {
            Self::Generic(_) => AccountKind::Generic,
            Self::Chequing(_) => AccountKind::Chequing,
            Self::Savings(_) => AccountKind::Savings,
        }
    }

    /// The shared base record.
    pub fn base(&self) -> &AccountData {
        match self {
            Self::Generic(data) => data,
            Self::Chequing(chequing) => chequing.base(),
            Self::Savings(savings) => savings.base(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.base().number()
    }

    pub fn interest_rate(&self) -> Decimal {
        self.base().interest_rate()
    }

    pub fn balance(&self) -> Decimal {
        self.base().balance()
    }

    pub fn description(&self) -> &str {
        self.base().description()
    }

    pub fn open_date(&self) -> &Date {
        self.base().open_date()
    }

    /// Sets the rate under the variant's own range rules.
    pub fn set_interest_rate(&mut self, interest_rate: Decimal) -> Result<(), ContractViolation> {
        match self {
            Self::Generic(data) => data.set_interest_rate(interest_rate),
            Self::Chequing(chequing) => chequing.set_interest_rate(interest_rate),
            Self::Savings(savings) => savings.set_interest_rate(interest_rate),
        }
    }

    /// Sets the balance under the variant's own rules.
    pub fn set_balance(&mut self, balance: Decimal) -> Result<(), ContractViolation> {
        match self {
            Self::Generic(data) => data.set_balance(balance),
            Self::Chequing(chequing) => chequing.set_balance(balance),
            Self::Savings(savings) => savings.set_balance(balance),
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), ContractViolation> {
        match self {
            Self::Generic(data) => data.set_description(description),
            Self::Chequing(chequing) => chequing.set_description(description),
            Self::Savings(savings) => savings.set_description(description),
        }
    }

    pub fn calculate_interest(&self) -> Decimal {
        match self {
            Self::Generic(data) => data.calculate_interest(),
            Self::Chequing(chequing) => chequing.calculate_interest(),
            Self::Savings(savings) => savings.calculate_interest(),
        }
    }

    pub fn formatted_statement(&self) -> String {
        match self {
            Self::Generic(data) => data.formatted_statement(),
            Self::Chequing(chequing) => chequing.formatted_statement(),
            Self::Savings(savings) => savings.formatted_statement(),
        }
    }

    pub fn as_chequing(&self) -> Option<&Chequing> {
        match self {
            Self::Chequing(chequing) => Some(chequing),
            _ => None,
        }
    }

    pub fn as_chequing_mut(&mut self) -> Option<&mut Chequing> {
        match self {
            Self::Chequing(chequing) => Some(chequing),
            _ => None,
        }
    }

    pub fn as_savings(&self) -> Option<&Savings> {
        match self {
            Self::Savings(savings) => Some(savings),
            _ => None,
        }
    }

    pub fn as_savings_mut(&mut self) -> Option<&mut Savings> {
        match self {
            Self::Savings(savings) => Some(savings),
            _ => None,
        }
    }
}

impl From<Chequing> for Account {
    fn from(chequing: Chequing) -> Self {
        Self::Chequing(chequing)
    }
}

impl From<Savings> for Account {
    fn from(savings: Savings) -> Self {
        Self::Savings(savings)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted_statement())
    }
}
