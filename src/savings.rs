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

//! Savings accounts: simple interest on a balance that never goes negative,
//! at a rate kept within `0.1..=3.5` percent.

use crate::account::{Account, AccountData};
use crate::base::AccountNumber;
use crate::contract::{ContractViolation, invariant, postcondition, precondition};
use crate::date::Date;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Savings {
    base: AccountData,
}

impl Savings {
    pub const DEFAULT_DESCRIPTION: &'static str = "Epargne";
    pub const MIN_RATE: Decimal = dec!(0.1);
    pub const MAX_RATE: Decimal = dec!(3.5);

    /// Opens a savings account dated today.
    ///
    /// An empty description becomes [`Savings::DEFAULT_DESCRIPTION`].
    ///
    /// # Errors
    ///
    /// Everything [`AccountData::open`] rejects, plus a rate outside
    /// `0.1..=3.5` and a negative balance.
    pub fn new(
        number: AccountNumber,
        interest_rate: Decimal,
        balance: Decimal,
        description: &str,
    ) -> Result<Self, ContractViolation> {
        Self::open(number, interest_rate, balance, description, Date::today())
    }

    /// Same as [`Savings::new`] with an explicit opening date, which must
    /// still be today.
    pub fn open(
        number: AccountNumber,
        interest_rate: Decimal,
        balance: Decimal,
        description: &str,
        open_date: Date,
    ) -> Result<Self, ContractViolation> {
        let description = if description.is_empty() {
            Self::DEFAULT_DESCRIPTION
        } else {
            description
        };
        let base = AccountData::open(number, interest_rate, balance, description, open_date)?;

        precondition!(Self::rate_in_range(interest_rate));
        precondition!(balance >= Decimal::ZERO);

        let savings = Self { base };

        postcondition!(savings.base.interest_rate() == interest_rate);
        postcondition!(savings.base.balance() == balance);
        savings.check_invariants()?;
        Ok(savings)
    }

    fn rate_in_range(interest_rate: Decimal) -> bool {
        (Self::MIN_RATE..=Self::MAX_RATE).contains(&interest_rate)
    }

    pub fn base(&self) -> &AccountData {
        &self.base
    }

    /// # Errors
    ///
    /// Precondition violation for a rate outside `0.1..=3.5`.
    pub fn set_interest_rate(&mut self, interest_rate: Decimal) -> Result<(), ContractViolation> {
        precondition!(Self::rate_in_range(interest_rate));

        self.base.set_interest_rate(interest_rate)?;
        self.check_invariants()
    }

    /// # Errors
    ///
    /// Precondition violation for a negative balance.
    pub fn set_balance(&mut self, balance: Decimal) -> Result<(), ContractViolation> {
        precondition!(balance >= Decimal::ZERO);

        self.base.set_balance(balance)?;
        self.check_invariants()
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), ContractViolation> {
        self.base.set_description(description)
    }

    pub fn calculate_interest(&self) -> Decimal {
        self.base.balance() * (self.base.interest_rate() / dec!(100))
    }

    pub fn formatted_statement(&self) -> String {
        format!(
            "Compte Epargne\n{}Interet : {} $\n",
            self.base.formatted_statement(),
            Account::statement_amount(self.calculate_interest()),
        )
    }

    fn check_invariants(&self) -> Result<(), ContractViolation> {
        self.base.check_invariants()?;
        invariant!(self.base.balance() >= Decimal::ZERO);
        invariant!(Self::rate_in_range(self.base.interest_rate()));
        Ok(())
    }
}
