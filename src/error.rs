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

//! Error types for portfolio operations.

use crate::base::{AccountNumber, FolioNumber};
use crate::contract::ContractViolation;
use thiserror::Error;

/// Business-rule failures a caller is expected to handle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// The client already holds an account with this number
    #[error("an account numbered {0} already exists")]
    DuplicateAccount(AccountNumber),

    /// The client holds no account with this number
    #[error("no account numbered {0}")]
    AccountNotFound(AccountNumber),

    /// A client with this folio is already enrolled
    #[error("a client with folio {0} already exists")]
    DuplicateClient(FolioNumber),

    /// No client with this folio is enrolled
    #[error("no client with folio {0}")]
    ClientNotFound(FolioNumber),

    /// A contract broke inside a compound operation
    #[error(transparent)]
    Contract(#[from] ContractViolation),
}

/// Failure to read a [`Date`](crate::Date) from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDateError {
    /// Text is not shaped like `dd/mm/yyyy`
    #[error("malformed date {0:?} (expected dd/mm/yyyy)")]
    Format(String),

    /// Well-formed text that names no calendar date
    #[error("{day:02}/{month:02}/{year} is not a calendar date")]
    OutOfRange { day: u32, month: u32, year: i32 },
}
