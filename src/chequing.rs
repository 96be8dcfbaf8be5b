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

//! Chequing accounts.
//!
//! A chequing account charges interest only while overdrawn. The charge is
//! taken at the minimum rate, with a surcharge that grows with the number of
//! transactions in the period; busy accounts pay the full rate instead.
//!
//! | Transactions | Interest on an overdraft of `o` |
//! |--------------|---------------------------------|
//! | 0 ..= 10     | `o * min_rate`                  |
//! | 11 ..= 25    | `o * min_rate * 1.4`            |
//! | 26 ..= 35    | `o * min_rate * 1.8`            |
//! | 36 ..= 40    | `o * interest_rate`             |

use crate::account::{Account, AccountData, MAX_RATE};
use crate::base::AccountNumber;
use crate::contract::{ContractViolation, invariant, postcondition, precondition};
use crate::date::Date;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chequing {
    base: AccountData,
    transaction_count: u32,
    /// Percent; never above the account's interest rate.
    min_rate: Decimal,
}

impl Chequing {
    pub const DEFAULT_DESCRIPTION: &'static str = "Cheque";
    pub const DEFAULT_MIN_RATE: Decimal = dec!(0.1);
    pub const MAX_TRANSACTIONS: u32 = 40;

    /// Opens a chequing account dated today.
    ///
    /// An empty description becomes [`Chequing::DEFAULT_DESCRIPTION`].
    ///
    /// # Errors
    ///
    /// Everything [`AccountData::open`] rejects, plus a transaction count
    /// above [`Chequing::MAX_TRANSACTIONS`] and a minimum rate that is
    /// negative or above `interest_rate`.
    pub fn new(
        number: AccountNumber,
        transaction_count: u32,
        balance: Decimal,
        interest_rate: Decimal,
        description: &str,
        min_rate: Decimal,
    ) -> Result<Self, ContractViolation> {
        Self::open(
            number,
            transaction_count,
            balance,
            interest_rate,
            description,
            min_rate,
            Date::today(),
        )
    }

    /// Same as [`Chequing::new`] with an explicit opening date, which must
    /// still be today.
    pub fn open(
        number: AccountNumber,
        transaction_count: u32,
        balance: Decimal,
        interest_rate: Decimal,
        description: &str,
        min_rate: Decimal,
        open_date: Date,
    ) -> Result<Self, ContractViolation> {
        let description = if description.is_empty() {
            Self::DEFAULT_DESCRIPTION
        } else {
            description
        };
        let base = AccountData::open(number, interest_rate, balance, description, open_date)?;

        precondition!(transaction_count <= Self::MAX_TRANSACTIONS);
        precondition!(min_rate >= Decimal::ZERO && min_rate <= interest_rate);

        let chequing = Self {
            base,
            transaction_count,
            min_rate,
        };

        postcondition!(chequing.transaction_count == transaction_count);
        postcondition!(chequing.min_rate == min_rate);
        chequing.check_invariants()?;
        Ok(chequing)
    }

    pub fn base(&self) -> &AccountData {
        &self.base
    }

    pub fn transaction_count(&self) -> u32 {
        self.transaction_count
    }

    pub fn min_rate(&self) -> Decimal {
        self.min_rate
    }

    /// # Errors
    ///
    /// Precondition violation when the rate falls outside `0..=100` or
    /// below the minimum rate.
    pub fn set_interest_rate(&mut self, interest_rate: Decimal) -> Result<(), ContractViolation> {
        precondition!(interest_rate >= self.min_rate && interest_rate <= MAX_RATE);

        self.base.set_interest_rate(interest_rate)?;
        self.check_invariants()
    }

    /// Overdrafts are allowed; that is what the interest rule charges for.
    pub fn set_balance(&mut self, balance: Decimal) -> Result<(), ContractViolation> {
        self.base.set_balance(balance)?;
        self.check_invariants()
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), ContractViolation> {
        self.base.set_description(description)
    }

    /// # Errors
    ///
    /// Precondition violation above [`Chequing::MAX_TRANSACTIONS`].
    pub fn set_transaction_count(&mut self, transaction_count: u32) -> Result<(), ContractViolation> {
        precondition!(transaction_count <= Self::MAX_TRANSACTIONS);

        self.transaction_count = transaction_count;

        postcondition!(self.transaction_count == transaction_count);
        self.check_invariants()
    }

    /// Overdraft interest; zero while the balance is not negative.
    ///
    /// Saturates at [`Decimal::MAX`] for overdrafts too large for the
    /// surcharge to be represented.
    pub fn calculate_interest(&self) -> Decimal {
        let balance = self.base.balance();
        if balance >= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let overdraft = -balance;
        let charge = |rate: Decimal, factor: Decimal| {
            overdraft
                .checked_mul(rate / dec!(100))
                .and_then(|at_rate| at_rate.checked_mul(factor))
                .unwrap_or(Decimal::MAX)
        };
        match self.transaction_count {
            0..=10 => charge(self.min_rate, Decimal::ONE),
            11..=25 => charge(self.min_rate, dec!(1.4)),
            26..=35 => charge(self.min_rate, dec!(1.8)),
            _ => charge(self.base.interest_rate(), Decimal::ONE),
        }
    }

    pub fn formatted_statement(&self) -> String {
        format!(
            "Compte Cheque\n{}nombre de transactions : {}\nTaux d'interet minimum : {}\nInteret : {} $\n",
            self.base.formatted_statement(),
            self.transaction_count,
            Account::statement_amount(self.min_rate),
            Account::statement_amount(self.calculate_interest()),
        )
    }

    fn check_invariants(&self) -> Result<(), ContractViolation> {
        self.base.check_invariants()?;
        invariant!(self.transaction_count <= Self::MAX_TRANSACTIONS);
        invariant!(self.min_rate <= self.base.interest_rate());
        Ok(())
    }
}
