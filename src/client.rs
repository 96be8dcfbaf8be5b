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

//! Clients and their account portfolios.
//!
//! A [`Client`] owns its accounts outright and keeps at most one account per
//! number. Cloning a client deep-copies every account, so the copy and the
//! original never share state.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use bank_portfolio::{AccountNumber, Client, Date, FolioNumber, PortfolioError, Savings};
//!
//! let birth_date = Date::new(19, 3, 1975).unwrap();
//! let mut client = Client::new(FolioNumber(1000), "Florentino", "Perez", "418 656-0235", birth_date).unwrap();
//!
//! let savings = Savings::new(AccountNumber(1), dec!(2.5), dec!(10000), "").unwrap();
//! client.add_account(savings.clone().into()).unwrap();
//! assert_eq!(
//!     client.add_account(savings.into()),
//!     Err(PortfolioError::DuplicateAccount(AccountNumber(1)))
//! );
//! assert_eq!(client.account_count(), 1);
//! ```

use crate::account::Account;
use crate::base::{AccountNumber, FolioNumber};
use crate::contract::{ContractViolation, invariant, postcondition, precondition};
use crate::date::Date;
use crate::error::PortfolioError;
use crate::validation::is_valid_name;
use std::cmp::Ordering;
use std::ops::Range;

#[derive(Debug, Clone)]
pub struct Client {
    folio: FolioNumber,
    first_name: String,
    last_name: String,
    phone: String,
    birth_date: Date,
    /// Insertion order; numbers are unique.
    accounts: Vec<Account>,
}

impl Client {
    pub const FOLIO_RANGE: Range<u16> = 1000..10000;

    /// Builds a client with no accounts.
    ///
    /// # Errors
    ///
    /// Precondition violation when the folio lies outside
    /// [`Client::FOLIO_RANGE`], either name fails
    /// [`is_valid_name`], or the phone is empty.
    pub fn new(
        folio: FolioNumber,
        first_name: &str,
        last_name: &str,
        phone: &str,
        birth_date: Date,
    ) -> Result<Self, ContractViolation> {
        precondition!(Self::FOLIO_RANGE.contains(&folio.0));
        precondition!(is_valid_name(first_name));
        precondition!(is_valid_name(last_name));
        precondition!(!phone.is_empty());
        precondition!(Date::is_valid_date(
            birth_date.day(),
            birth_date.month(),
            birth_date.year()
        ));

        let client = Self {
            folio,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone: phone.to_string(),
            birth_date,
            accounts: Vec::new(),
        };

        postcondition!(client.folio == folio);
        postcondition!(client.first_name == first_name && client.last_name == last_name);
        postcondition!(client.phone == phone);
        postcondition!(client.birth_date == birth_date);
        client.check_invariants()?;
        Ok(client)
    }

    pub fn folio(&self) -> FolioNumber {
        self.folio
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn birth_date(&self) -> &Date {
        &self.birth_date
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Accounts in the order they were added.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number() == number)
    }

    /// Mutable access for rate, balance and description changes. The number
    /// itself cannot change, so uniqueness is unaffected.
    pub fn account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.number() == number)
    }

    pub fn contains_account(&self, number: AccountNumber) -> bool {
        self.account(number).is_some()
    }

    /// Takes ownership of `account` and appends it to the portfolio.
    ///
    /// # Errors
    ///
    /// [`PortfolioError::DuplicateAccount`] if an account with the same
    /// number is already held; the portfolio is left untouched.
    pub fn add_account(&mut self, account: Account) -> Result<(), PortfolioError> {
        let number = account.number();
        if self.contains_account(number) {
            tracing::info!(folio = %self.folio, account = %number, "duplicate account rejected");
            return Err(PortfolioError::DuplicateAccount(number));
        }

        let kind = account.kind();
        self.accounts.push(account);

        if let Err(violation) = self.check_added(number) {
            self.accounts.pop();
            return Err(violation.into());
        }
        tracing::debug!(folio = %self.folio, account = %number, %kind, "account added");
        Ok(())
    }

    fn check_added(&self, number: AccountNumber) -> Result<(), ContractViolation> {
        postcondition!(self.count_of(number) == 1);
        self.check_invariants()
    }

    /// Removes and returns the account with this number.
    ///
    /// # Errors
    ///
    /// [`PortfolioError::AccountNotFound`] if no such account is held.
    pub fn remove_account(&mut self, number: AccountNumber) -> Result<Account, PortfolioError> {
        let Some(index) = self.accounts.iter().position(|account| account.number() == number) else {
            tracing::info!(folio = %self.folio, account = %number, "no such account to remove");
            return Err(PortfolioError::AccountNotFound(number));
        };

        let removed = self.accounts.remove(index);
        if let Err(violation) = self.check_removed(number) {
            self.accounts.insert(index, removed);
            return Err(violation.into());
        }
        tracing::debug!(folio = %self.folio, account = %number, "account removed");
        Ok(removed)
    }

    fn check_removed(&self, number: AccountNumber) -> Result<(), ContractViolation> {
        postcondition!(!self.contains_account(number));
        self.check_invariants()
    }

    fn count_of(&self, number: AccountNumber) -> usize {
        self.accounts
            .iter()
            .filter(|account| account.number() == number)
            .count()
    }

    /// The identity block at the head of a statement.
    pub fn personal_info_formatted(&self) -> String {
        format!(
            "Client no de folio : {}\n{} {}\nDate de naissance : {}\n{}\n",
            self.folio,
            self.first_name,
            self.last_name,
            self.birth_date.formatted(),
            self.phone
        )
    }

    /// Personal information followed by every account's statement, in
    /// insertion order.
    pub fn statement(&self) -> String {
        let mut statement = self.personal_info_formatted();
        for account in &self.accounts {
            statement.push_str(&account.formatted_statement());
        }
        statement
    }

    fn check_invariants(&self) -> Result<(), ContractViolation> {
        invariant!(Self::FOLIO_RANGE.contains(&self.folio.0));
        invariant!(is_valid_name(&self.first_name) && is_valid_name(&self.last_name));
        invariant!(!self.phone.is_empty());
        invariant!(self
            .accounts
            .iter()
            .all(|account| self.count_of(account.number()) == 1));
        Ok(())
    }
}

/// Clients are identified, and ordered, by folio number.
impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.folio == other.folio
    }
}

impl Eq for Client {}

impl PartialOrd for Client {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Client {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folio.cmp(&other.folio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn client() -> Client {
        Client::new(
            FolioNumber(2000),
            "Carlo",
            "Ancelotti",
            "590 234-0342",
            Date::new(20, 1, 1983).unwrap(),
        )
        .unwrap()
    }

    fn generic(number: u32) -> Account {
        Account::generic(AccountNumber(number), dec!(1), dec!(10), "Courant").unwrap()
    }

    #[test]
    fn count_of_tracks_each_number() {
        let mut client = client();
        client.add_account(generic(1)).unwrap();
        client.add_account(generic(2)).unwrap();
        assert_eq!(client.count_of(AccountNumber(1)), 1);
        assert_eq!(client.count_of(AccountNumber(3)), 0);
    }

    #[test]
    fn invariants_hold_through_add_and_remove() {
        let mut client = client();
        client.add_account(generic(1)).unwrap();
        assert!(client.check_invariants().is_ok());
        client.remove_account(AccountNumber(1)).unwrap();
        assert!(client.check_invariants().is_ok());
    }

    #[test]
    fn postcondition_helpers_pass_after_success() {
        let mut client = client();
        client.add_account(generic(5)).unwrap();
        assert!(client.check_added(AccountNumber(5)).is_ok());
        client.remove_account(AccountNumber(5)).unwrap();
        assert!(client.check_removed(AccountNumber(5)).is_ok());
    }
}
