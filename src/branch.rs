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

//! Client registry.
//!
//! A [`Branch`] holds every enrolled [`Client`], kept sorted by folio number,
//! and routes account operations to the right client.
//!
//! # Example
//!
//! ```
//! use bank_portfolio::{Branch, Client, Date, FolioNumber};
//!
//! let mut branch = Branch::new();
//! let birth_date = Date::new(2, 3, 2000).unwrap();
//! branch.enroll(Client::new(FolioNumber(2300), "Isaac", "Newton", "581 232-0456", birth_date).unwrap()).unwrap();
//! branch.enroll(Client::new(FolioNumber(1500), "Michel", "Leandro", "418 656-0345", birth_date).unwrap()).unwrap();
//!
//! let folios: Vec<_> = branch.clients().map(|client| client.folio()).collect();
//! assert_eq!(folios, [FolioNumber(1500), FolioNumber(2300)]);
//! ```

use crate::account::Account;
use crate::base::{AccountNumber, FolioNumber};
use crate::client::Client;
use crate::error::PortfolioError;

#[derive(Debug, Clone, Default)]
pub struct Branch {
    /// Sorted by folio; folios are unique.
    clients: Vec<Client>,
}

impl Branch {
    /// Creates a branch with no clients.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a client, keeping folio order.
    ///
    /// # Errors
    ///
    /// [`PortfolioError::DuplicateClient`] if the folio is already enrolled.
    pub fn enroll(&mut self, client: Client) -> Result<(), PortfolioError> {
        let index = self.clients.partition_point(|existing| existing < &client);
        if self.clients.get(index).is_some_and(|existing| existing == &client) {
            tracing::info!(folio = %client.folio(), "duplicate client rejected");
            return Err(PortfolioError::DuplicateClient(client.folio()));
        }

        tracing::debug!(folio = %client.folio(), "client enrolled");
        self.clients.insert(index, client);
        Ok(())
    }

    /// Adds an account to an enrolled client's portfolio.
    ///
    /// # Errors
    ///
    /// - [`PortfolioError::ClientNotFound`] - No client holds this folio.
    /// - [`PortfolioError::DuplicateAccount`] - The client already holds the number.
    pub fn open_account(&mut self, folio: FolioNumber, account: Account) -> Result<(), PortfolioError> {
        self.client_mut(folio)
            .ok_or(PortfolioError::ClientNotFound(folio))?
            .add_account(account)
    }

    /// Removes an account from an enrolled client's portfolio.
    ///
    /// # Errors
    ///
    /// - [`PortfolioError::ClientNotFound`] - No client holds this folio.
    /// - [`PortfolioError::AccountNotFound`] - The client holds no such account.
    pub fn close_account(
        &mut self,
        folio: FolioNumber,
        number: AccountNumber,
    ) -> Result<Account, PortfolioError> {
        self.client_mut(folio)
            .ok_or(PortfolioError::ClientNotFound(folio))?
            .remove_account(number)
    }

    pub fn client(&self, folio: FolioNumber) -> Option<&Client> {
        let index = self.position(folio)?;
        self.clients.get(index)
    }

    pub fn client_mut(&mut self, folio: FolioNumber) -> Option<&mut Client> {
        let index = self.position(folio)?;
        self.clients.get_mut(index)
    }

    fn position(&self, folio: FolioNumber) -> Option<usize> {
        self.clients.binary_search_by_key(&folio, Client::folio).ok()
    }

    /// Enrolled clients in folio order.
    pub fn clients(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Every client's statement, in folio order.
    pub fn statements(&self) -> String {
        self.clients.iter().map(Client::statement).collect()
    }
}
